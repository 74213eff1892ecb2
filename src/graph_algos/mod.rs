
pub mod dijkstra;
pub mod prim;
pub mod kruskal;
mod shortest_path;

use shortest_path::shortest_path;

use crate::errors::{LabelingError, Result};
use crate::graph::CostMatrix;

use std::fmt::Debug;
use num_traits::PrimInt;
use log::{debug, trace, warn};


/// Decides which value is offered to an unvisited neighbour during relaxation
/// This is the only thing that differs between Dijkstra and Prim
pub trait Relaxation<C> {

    /// Short name used in log output
    const NAME: &'static str;

    /// Candidate label for v when reached from u over an edge of `weight`
    /// `label_u` is None while u has not been reached
    fn candidate(&self, label_u: Option<C>, weight: C) -> Option<C>;
}

/// Cumulative path cost from the source (Dijkstra)
#[derive(Clone, Copy, Debug, Default)]
pub struct PathCost;

impl<C: PrimInt> Relaxation<C> for PathCost {
    const NAME: &'static str = "dijkstra";

    fn candidate(&self, label_u: Option<C>, weight: C) -> Option<C> {
        // an unreached u offers nothing, overflow offers nothing
        label_u?.checked_add(&weight)
    }
}

/// Raw weight of the connecting edge (Prim)
#[derive(Clone, Copy, Debug, Default)]
pub struct EdgeWeight;

impl<C: PrimInt> Relaxation<C> for EdgeWeight {
    const NAME: &'static str = "prim";

    fn candidate(&self, _label_u: Option<C>, weight: C) -> Option<C> {
        Some(weight)
    }
}


/// Final label and parent tables of one engine run
/// Read-only once produced
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Labeling<C> {
    source: usize,
    labels: Vec<C>, // infinity() for vertices never reached
    parents: Vec<Option<usize>>,
}

impl<C> Labeling<C>
where
    C: PrimInt + Debug,
{

    /// Label held by vertices that were never reached
    pub fn infinity() -> C {
        C::max_value()
    }

    pub fn source(&self) -> usize {
        self.source
    }

    /// Number of vertices
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Raw label table, unreached vertices hold `infinity()`
    pub fn labels(&self) -> &[C] {
        &self.labels
    }

    pub fn parents(&self) -> &[Option<usize>] {
        &self.parents
    }

    /// Final label of v, None when v was never reached
    pub fn label(&self, v: usize) -> Option<C> {
        self.labels.get(v).copied().filter(|&l| l != Self::infinity())
    }

    pub fn parent(&self, v: usize) -> Option<usize> {
        self.parents.get(v).copied().flatten()
    }

    pub fn is_reachable(&self, v: usize) -> bool {
        self.label(v).is_some()
    }

    /// Vertices whose label stayed at infinity, ascending
    pub fn unreachable(&self) -> Vec<usize> {
        (0..self.len()).filter(|&v| !self.is_reachable(v)).collect()
    }

    pub(crate) fn check_vertex(&self, vertex: usize) -> Result<()> {
        if vertex < self.len() {
            Ok(())
        } else {
            Err(LabelingError::VertexOutOfRange { vertex, len: self.len() })
        }
    }
}


/// Dense O(n^2) best-first labeling from `source`
/// Runs exactly n rounds: select the unvisited vertex with the smallest label
/// (lowest index on ties, lowest unvisited index when all remaining are at
/// infinity), mark it visited, then relax every unvisited neighbour with the
/// value offered by `rule`.
/// Disconnected graphs are not an error, unreached vertices keep infinity and no parent.
pub fn label<C, R>(graph: &CostMatrix<C>, source: usize, rule: &R) -> Result<Labeling<C>>
where
    C: PrimInt + Debug,
    R: Relaxation<C>,
{
    let n = graph.len();
    if source >= n {
        return Err(LabelingError::SourceOutOfRange { vertex: source, len: n });
    }
    debug!("{}: labeling {} vertices from source {}", R::NAME, n, source);

    let infinity = Labeling::<C>::infinity();
    let mut labels = vec![infinity; n];
    let mut parents: Vec<Option<usize>> = vec![None; n];
    let mut visited = vec![false; n];
    labels[source] = C::zero();

    for _ in 0..n {
        let u = select(&labels, &visited);
        visited[u] = true;

        let label_u = (labels[u] != infinity).then_some(labels[u]);
        trace!("{}: selected {} with label {:?}", R::NAME, u, label_u);

        for v in 0..n {
            if visited[v] {
                continue;
            }
            let Some(weight) = graph.weight(u, v) else {
                continue;
            };
            if let Some(candidate) = rule.candidate(label_u, weight) {
                if candidate < labels[v] {
                    trace!("{}: relax {} -> {} to {:?}", R::NAME, u, v, candidate);
                    labels[v] = candidate;
                    parents[v] = Some(u);
                }
            }
        }
    }

    let labeling = Labeling { source, labels, parents };

    let unreachable = labeling.unreachable();
    if !unreachable.is_empty() {
        warn!("{}: {} vertices unreachable from {}: {:?}", R::NAME, unreachable.len(), source, unreachable);
    }
    debug!("{}: labeling finished", R::NAME);

    Ok(labeling)
}


/// Unvisited vertex with the smallest label, lowest index wins ties
/// Only called while at least one vertex is unvisited
fn select<C: Ord>(labels: &[C], visited: &[bool]) -> usize {
    let mut best: Option<usize> = None;
    for (j, label) in labels.iter().enumerate() {
        if visited[j] {
            continue;
        }
        match best {
            Some(b) if labels[b] <= *label => {}
            _ => best = Some(j),
        }
    }
    // n rounds over n vertices, one is always left
    best.unwrap_or_default()
}
