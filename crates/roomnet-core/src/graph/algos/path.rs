//! Path reconstruction utilities for graph traversal

use crate::graph::Adjacency;

/// Walk predecessors back from `target` to `start` and return the route
/// in travel order. Returns an empty path if the chain is broken.
pub fn reconstruct_path(predecessors: &[Option<usize>], start: usize, target: usize) -> Vec<usize> {
    let mut path = vec![target];
    let mut current = target;

    while current != start {
        match predecessors.get(current).copied().flatten() {
            // a chain longer than the vertex count means a cycle
            Some(pred) if path.len() <= predecessors.len() => {
                path.push(pred);
                current = pred;
            }
            _ => return Vec::new(),
        }
    }

    path.reverse();
    path
}

/// Sum of edge weights along `path`, `+∞` if the path has no edges or
/// crosses a missing edge
pub fn path_weight<A: Adjacency + ?Sized>(adjacency: &A, path: &[usize]) -> f64 {
    if path.len() < 2 {
        return f64::INFINITY;
    }
    path.windows(2)
        .map(|hop| adjacency.edge_weight(hop[0], hop[1]).unwrap_or(f64::INFINITY))
        .sum()
}
