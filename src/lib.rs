//! Single-source labeling over dense cost matrices.
//!
//! Dijkstra's shortest paths and Prim's minimum spanning tree run on one
//! O(n^2) selection-and-relaxation loop ([`graph_algos::label`]); they differ
//! only in the [`graph_algos::Relaxation`] rule passed in. Kruskal is included
//! as an independent spanning-tree reference.

pub mod errors;
mod collections;
pub mod graph;
pub mod graph_algos;
pub mod input;
pub mod render;

pub use errors::{LabelingError, Result};
pub use graph::{CostMatrix, DEFAULT_NO_EDGE};
pub use graph_algos::{label, EdgeWeight, Labeling, PathCost, Relaxation};
pub use graph_algos::dijkstra::{dijkstra, ShortestPaths};
pub use graph_algos::prim::{prim, SpanningTree, TreeEdge};
pub use graph_algos::kruskal::kruskal;
