use crate::errors::Result;
use crate::graph::CostMatrix;
use super::{label, EdgeWeight, Labeling};

use std::fmt::Debug;
use num_traits::PrimInt;


/// Edge of a spanning tree or forest
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TreeEdge<C> {
    pub from: usize,
    pub to: usize,
    pub weight: C,
}

/// Minimum spanning tree, or a spanning forest when the graph is disconnected
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpanningTree<C> {
    vertices: usize,
    edges: Vec<TreeEdge<C>>, // ascending by child vertex for Prim, by weight for Kruskal
    labeling: Option<Labeling<C>>, // Prim only, Kruskal has no source
}

impl<C> SpanningTree<C>
where
    C: PrimInt + Debug,
{

    pub(crate) fn new(vertices: usize, edges: Vec<TreeEdge<C>>) -> Self {
        Self { vertices, edges, labeling: None }
    }

    /// Collect (parent[v], v, label[v]) for every vertex with a parent
    /// The labeling is kept for reachability queries
    pub fn from_parents(labeling: Labeling<C>) -> Self {
        // a vertex with a parent always carries the weight of that edge
        let edges = (0..labeling.len())
            .filter_map(|v| {
                labeling.parent(v).map(|from| TreeEdge { from, to: v, weight: labeling.labels()[v] })
            })
            .collect();

        Self { vertices: labeling.len(), edges, labeling: Some(labeling) }
    }

    /// Label and parent tables the tree was read from, None for Kruskal
    pub fn labeling(&self) -> Option<&Labeling<C>> {
        self.labeling.as_ref()
    }

    /// False for vertices whose connection cost stayed at infinity
    /// Without a labeling every vertex counts as reached
    pub fn is_reachable(&self, v: usize) -> bool {
        match &self.labeling {
            Some(labeling) => labeling.is_reachable(v),
            None => v < self.vertices,
        }
    }

    /// Vertices never offered an edge before being selected, ascending
    /// For Prim these are the roots of every component not holding the source
    pub fn unreachable(&self) -> Vec<usize> {
        self.labeling
            .as_ref()
            .map(Labeling::unreachable)
            .unwrap_or_default()
    }

    pub fn edges(&self) -> &[TreeEdge<C>] {
        &self.edges
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Sum of edge weights, None on overflow
    pub fn total_weight(&self) -> Option<C> {
        self.edges
            .iter()
            .try_fold(C::zero(), |acc, edge| acc.checked_add(&edge.weight))
    }

    /// True when the edges connect every vertex (n - 1 edges)
    pub fn is_spanning(&self) -> bool {
        self.missing() == 0
    }

    /// Edges short of a full spanning tree, one per extra component
    pub fn missing(&self) -> usize {
        self.vertices.saturating_sub(1).saturating_sub(self.edges.len())
    }

    pub fn vertices(&self) -> usize {
        self.vertices
    }
}


/// Minimum spanning tree using Prim's Algorithm
/// https://en.wikipedia.org/wiki/Prim%27s_algorithm
/// The matrix is read as undirected: only u -> v is consulted when growing from u.
/// A disconnected graph yields a forest; check `is_spanning()`, `missing()` or `unreachable()`.
pub fn prim<C>(graph: &CostMatrix<C>, source: usize) -> Result<SpanningTree<C>>
where
    C: PrimInt + Debug,
{
    let labeling = label(graph, source, &EdgeWeight)?;
    Ok(SpanningTree::from_parents(labeling))
}
