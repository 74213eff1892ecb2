use crate::errors::Result;
use crate::collections::FxIndexMap;
use crate::graph::CostMatrix;
use super::{label, shortest_path, Labeling, PathCost};

use std::fmt::Debug;
use num_traits::PrimInt;


/// Shortest distances and parent pointers from one source
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShortestPaths<C> {
    labeling: Labeling<C>,
}

/// Identify shortest distances using Dijkstra's Algorithm
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
/// Dense-matrix form: n rounds of minimum selection, no priority queue
pub fn dijkstra<C>(graph: &CostMatrix<C>, source: usize) -> Result<ShortestPaths<C>>
where
    C: PrimInt + Debug,
{
    let labeling = label(graph, source, &PathCost)?;
    Ok(ShortestPaths { labeling })
}

impl<C> ShortestPaths<C>
where
    C: PrimInt + Debug,
{

    pub fn source(&self) -> usize {
        self.labeling.source()
    }

    pub fn labeling(&self) -> &Labeling<C> {
        &self.labeling
    }

    /// Shortest distance from the source, None when unreachable
    pub fn distance(&self, v: usize) -> Option<C> {
        self.labeling.label(v)
    }

    pub fn is_reachable(&self, v: usize) -> bool {
        self.labeling.is_reachable(v)
    }

    pub fn unreachable(&self) -> Vec<usize> {
        self.labeling.unreachable()
    }

    /// Vertices from the source to v, inclusive
    /// Errors with `Unreachable(v)` when no path exists
    pub fn path_to(&self, v: usize) -> Result<Vec<usize>> {
        shortest_path(&self.labeling, v)
    }

    /// Path and distance for every reachable vertex except the source, by vertex id
    pub fn routes(&self) -> FxIndexMap<usize, (Vec<usize>, C)> {
        let mut routes = FxIndexMap::default();
        for v in 0..self.labeling.len() {
            if v == self.source() {
                continue;
            }
            if let (Some(distance), Ok(path)) = (self.distance(v), self.path_to(v)) {
                routes.insert(v, (path, distance));
            }
        }
        routes
    }
}
