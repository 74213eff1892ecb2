use crate::graph_algos::dijkstra::ShortestPaths;
use crate::graph_algos::prim::SpanningTree;

use std::fmt::{Debug, Display, Write};
use num_traits::PrimInt;


/// One line per vertex other than the source
/// `0 -> 1 -> 3 = 7`, or `0 -> 2 unreachable`
pub fn shortest_paths<C>(paths: &ShortestPaths<C>) -> String
where
    C: PrimInt + Debug + Display,
{
    let source = paths.source();
    let mut out = String::new();

    for v in 0..paths.labeling().len() {
        if v == source {
            continue;
        }
        match (paths.path_to(v), paths.distance(v)) {
            (Ok(path), Some(distance)) => {
                let hops: Vec<String> = path.iter().map(|p| p.to_string()).collect();
                let _ = writeln!(out, "{} = {}", hops.join(" -> "), distance);
            }
            _ => {
                let _ = writeln!(out, "{source} -> {v} unreachable");
            }
        }
    }
    out
}

/// Prim's edge table: `Edge\tWeight` header, one `p - v\tw` line per edge
pub fn prim_tree<C>(tree: &SpanningTree<C>) -> String
where
    C: PrimInt + Debug + Display,
{
    let mut out = String::from("Edge\tWeight\n");
    for edge in tree.edges() {
        let _ = writeln!(out, "{} - {}\t{}", edge.from, edge.to, edge.weight);
    }
    push_summary(&mut out, tree, "Total weight");
    out
}

/// Kruskal's edge list: `(u,v) = w` per edge
pub fn kruskal_tree<C>(tree: &SpanningTree<C>) -> String
where
    C: PrimInt + Debug + Display,
{
    let mut out = String::new();
    for edge in tree.edges() {
        let _ = writeln!(out, "({},{}) = {}", edge.from, edge.to, edge.weight);
    }
    push_summary(&mut out, tree, "The cost of minimum spanning tree");
    out
}

fn push_summary<C>(out: &mut String, tree: &SpanningTree<C>, label: &str)
where
    C: PrimInt + Debug + Display,
{
    match tree.total_weight() {
        Some(total) => {
            let _ = writeln!(out, "{label} = {total}");
        }
        None => {
            let _ = writeln!(out, "{label} overflows");
        }
    }
    if !tree.is_spanning() {
        let _ = write!(
            out,
            "Graph is disconnected: {} of {} edges found, {} missing",
            tree.edge_count(),
            tree.vertices().saturating_sub(1),
            tree.missing(),
        );
        let unreachable = tree.unreachable();
        if !unreachable.is_empty() {
            let roots: Vec<String> = unreachable.iter().map(|v| v.to_string()).collect();
            let _ = write!(out, ", unreachable: {}", roots.join(", "));
        }
        out.push('\n');
    }
}
