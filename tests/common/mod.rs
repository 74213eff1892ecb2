use std::sync::{LazyLock, Mutex};

use flexi_logger::{Logger, LoggerHandle};
use rand::prelude::*;
use relaxation::CostMatrix;

pub const NO_EDGE: u32 = 99;

#[allow(dead_code)]
pub static LOGGER: LazyLock<Mutex<LoggerHandle>> = LazyLock::new(|| {
    Mutex::new(
        Logger::try_with_env_or_str("warn")
            .unwrap()
            .write_mode(flexi_logger::WriteMode::SupportCapture)
            .log_to_stdout()
            .start()
            .unwrap(),
    )
});

#[allow(dead_code)]
pub fn init_logger() {
    let _ = &*LOGGER;
}

/// Random matrix with roughly `density` of the off-diagonal pairs connected
/// Symmetric when `undirected`
#[allow(dead_code)]
pub fn random_graph(rng: &mut StdRng, n: usize, density: f64, undirected: bool) -> CostMatrix<u32> {
    let mut rows = vec![vec![NO_EDGE; n]; n];
    for u in 0..n {
        rows[u][u] = 0;
        for v in 0..n {
            if u == v || (undirected && v < u) {
                continue;
            }
            if rng.random_bool(density) {
                let w = rng.random_range(1..20);
                rows[u][v] = w;
                if undirected {
                    rows[v][u] = w;
                }
            }
        }
    }
    CostMatrix::new(rows, NO_EDGE).unwrap()
}

/// Cheapest simple path from source to target by exhaustive search
/// Only meant for n <= 6
#[allow(dead_code)]
pub fn brute_force_distance(graph: &CostMatrix<u32>, source: usize, target: usize) -> Option<u32> {
    fn walk(graph: &CostMatrix<u32>, at: usize, target: usize, cost: u32, seen: &mut Vec<bool>, best: &mut Option<u32>) {
        if at == target {
            if best.is_none_or(|b| cost < b) {
                *best = Some(cost);
            }
            return;
        }
        for next in 0..graph.len() {
            if seen[next] {
                continue;
            }
            if let Some(w) = graph.weight(at, next) {
                seen[next] = true;
                walk(graph, next, target, cost + w, seen, best);
                seen[next] = false;
            }
        }
    }

    let mut seen = vec![false; graph.len()];
    seen[source] = true;
    let mut best = None;
    walk(graph, source, target, 0, &mut seen, &mut best);
    best
}

/// Minimum spanning tree weight by trying every (n-1)-subset of undirected edges
/// None when no spanning tree exists. Only meant for small graphs.
#[allow(dead_code)]
pub fn brute_force_mst_weight(graph: &CostMatrix<u32>) -> Option<u32> {
    let n = graph.len();
    let edges: Vec<(usize, usize, u32)> = graph.edges().filter(|&(u, v, _)| u < v).collect();
    if n == 1 {
        return Some(0);
    }

    let mut best: Option<u32> = None;
    let mut chosen = Vec::new();
    subsets(&edges, 0, n - 1, &mut chosen, &mut |picked| {
        if connects_all(n, picked) {
            let total = picked.iter().map(|e| e.2).sum();
            if best.is_none_or(|b| total < b) {
                best = Some(total);
            }
        }
    });
    best
}

#[allow(dead_code)]
fn subsets<F>(edges: &[(usize, usize, u32)], start: usize, k: usize, chosen: &mut Vec<(usize, usize, u32)>, f: &mut F)
where
    F: FnMut(&[(usize, usize, u32)]),
{
    if chosen.len() == k {
        f(chosen);
        return;
    }
    for i in start..edges.len() {
        chosen.push(edges[i]);
        subsets(edges, i + 1, k, chosen, f);
        chosen.pop();
    }
}

/// True when the edges join all n vertices into one component
#[allow(dead_code)]
pub fn connects_all(n: usize, edges: &[(usize, usize, u32)]) -> bool {
    let mut component: Vec<usize> = (0..n).collect();
    for &(u, v, _) in edges {
        let (cu, cv) = (component[u], component[v]);
        if cu != cv {
            for c in component.iter_mut() {
                if *c == cv {
                    *c = cu;
                }
            }
        }
    }
    component.iter().all(|&c| c == component[0])
}
