use crate::graph::CostMatrix;
use super::prim::{SpanningTree, TreeEdge};

use std::fmt::Debug;
use num_traits::PrimInt;
use log::debug;


/// Disjoint sets over vertex ids
/// Path compression + union by rank
struct DisjointSets {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl DisjointSets {

    fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            rank: vec![0; len],
        }
    }

    fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        // compress the walked chain
        let mut current = x;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }
        root
    }

    /// Join the sets of a and b, false if already joined
    fn union(&mut self, a: usize, b: usize) -> bool {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra == rb {
            return false;
        }
        match self.rank[ra].cmp(&self.rank[rb]) {
            std::cmp::Ordering::Less => self.parent[ra] = rb,
            std::cmp::Ordering::Greater => self.parent[rb] = ra,
            std::cmp::Ordering::Equal => {
                self.parent[rb] = ra;
                self.rank[ra] += 1;
            }
        }
        true
    }
}


/// Minimum spanning tree using Kruskal's Algorithm
/// https://en.wikipedia.org/wiki/Kruskal%27s_algorithm
/// The matrix is read as undirected, each pair {u, v} is an edge if either
/// direction exists, weighted by the cheaper direction.
/// Ties are taken in (u, v) order so results are reproducible.
pub fn kruskal<C>(graph: &CostMatrix<C>) -> SpanningTree<C>
where
    C: PrimInt + Debug,
{
    let n = graph.len();

    let mut candidates: Vec<TreeEdge<C>> = Vec::new();
    for u in 0..n {
        for v in (u + 1)..n {
            let weight = match (graph.weight(u, v), graph.weight(v, u)) {
                (Some(a), Some(b)) => a.min(b),
                (Some(w), None) | (None, Some(w)) => w,
                (None, None) => continue,
            };
            candidates.push(TreeEdge { from: u, to: v, weight });
        }
    }
    // stable sort keeps (u, v) order among equal weights
    candidates.sort_by_key(|edge| edge.weight);

    let mut sets = DisjointSets::new(n);
    let mut edges = Vec::with_capacity(n.saturating_sub(1));
    for edge in candidates {
        if edges.len() + 1 >= n {
            break;
        }
        if sets.union(edge.from, edge.to) {
            edges.push(edge);
        }
    }

    debug!("kruskal: {} of {} tree edges over {} vertices", edges.len(), n.saturating_sub(1), n);
    SpanningTree::new(n, edges)
}
