use crate::graph::algos::path::reconstruct_path;
use crate::graph::Adjacency;
use crate::trace_time;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::time::Instant;

/// Wrapper for BinaryHeap to use as min-heap (ordered by tentative path weight)
#[derive(Debug, Clone, Copy)]
pub struct HeapEntry {
    pub index: usize,
    pub path_weight: f64,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.path_weight
            .total_cmp(&other.path_weight)
            .then_with(|| self.index.cmp(&other.index))
    }
}

/// State tracked during label-setting search
struct DijkstraState {
    path_weight: Vec<f64>,
    predecessors: Vec<Option<usize>>,
    visited: Vec<bool>,
    heap: BinaryHeap<Reverse<HeapEntry>>,
}

impl DijkstraState {
    fn new(order: usize) -> Self {
        Self {
            path_weight: vec![f64::INFINITY; order],
            predecessors: vec![None; order],
            visited: vec![false; order],
            heap: BinaryHeap::with_capacity(order),
        }
    }

    /// Pop the unvisited vertex with the smallest tentative weight,
    /// skipping entries superseded by a later relaxation
    fn pop_closest(&mut self) -> Option<HeapEntry> {
        while let Some(Reverse(entry)) = self.heap.pop() {
            if self.visited[entry.index] || entry.path_weight > self.path_weight[entry.index] {
                continue;
            }
            return Some(entry);
        }
        None
    }
}

/// Minimum-weight path from `start` to `target`, both ends included.
///
/// Identical endpoints, invalid endpoints and unreachable targets all yield
/// an empty path. Weights are assumed non-negative.
pub fn weighted_path<A: Adjacency + ?Sized>(
    adjacency: &A,
    start: usize,
    target: usize,
) -> Vec<usize> {
    if !adjacency.is_valid_index(start) || !adjacency.is_valid_index(target) || start == target {
        return Vec::new();
    }

    let started = Instant::now();
    let order = adjacency.order();
    let mut state = DijkstraState::new(order);
    state.path_weight[start] = 0.0;
    state.visited[start] = true;

    // Seed with one-hop weights; vertices without a direct edge enter at +inf
    for index in (0..order).filter(|&i| i != start) {
        let weight = adjacency.edge_weight(start, index).unwrap_or(f64::INFINITY);
        if weight.is_finite() {
            state.path_weight[index] = weight;
            state.predecessors[index] = Some(start);
        }
        state.heap.push(Reverse(HeapEntry {
            index,
            path_weight: weight,
        }));
    }

    while let Some(HeapEntry {
        index: current,
        path_weight,
    }) = state.pop_closest()
    {
        if path_weight.is_infinite() {
            break;
        }
        state.visited[current] = true;
        if current == target {
            break;
        }

        for (neighbor, weight) in adjacency.neighbors(current) {
            if state.visited[neighbor] {
                continue;
            }
            let candidate = path_weight + weight;
            if candidate < state.path_weight[neighbor] {
                state.path_weight[neighbor] = candidate;
                state.predecessors[neighbor] = Some(current);
                state.heap.push(Reverse(HeapEntry {
                    index: neighbor,
                    path_weight: candidate,
                }));
            }
        }
    }

    let visited_count = state.visited.iter().filter(|v| **v).count();
    trace_time!(started, "dijkstra", order = order, visited = visited_count);

    if !state.visited[target] {
        return Vec::new();
    }
    reconstruct_path(&state.predecessors, start, target)
}

#[cfg(test)]
mod tests;
