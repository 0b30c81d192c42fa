use crate::graph::algos::bfs::is_connected;
use crate::graph::Adjacency;
use crate::trace_time;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::time::Instant;

/// An edge selected for the spanning tree. `from` was already in the tree
/// when the edge was taken, `to` is the vertex it brought in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpanningEdge {
    pub from: usize,
    pub to: usize,
    pub weight: f64,
}

/// Candidate edge on the frontier, ordered by weight then endpoints
#[derive(Debug, Clone, Copy)]
struct Candidate(SpanningEdge);

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .weight
            .total_cmp(&other.0.weight)
            .then_with(|| self.0.from.cmp(&other.0.from))
            .then_with(|| self.0.to.cmp(&other.0.to))
    }
}

fn push_frontier<A: Adjacency + ?Sized>(
    adjacency: &A,
    from: usize,
    visited: &[bool],
    heap: &mut BinaryHeap<Reverse<Candidate>>,
) {
    for (to, weight) in adjacency.neighbors(from) {
        if !visited[to] {
            heap.push(Reverse(Candidate(SpanningEdge { from, to, weight })));
        }
    }
}

/// Prim's algorithm grown from index 0.
///
/// Returns the `order - 1` tree edges in the order they were selected, or
/// nothing if the graph is empty or disconnected.
pub fn minimum_spanning_edges<A: Adjacency + ?Sized>(adjacency: &A) -> Vec<SpanningEdge> {
    if !is_connected(adjacency) {
        return Vec::new();
    }

    let started = Instant::now();
    let order = adjacency.order();
    let mut visited = vec![false; order];
    let mut heap = BinaryHeap::new();
    let mut edges = Vec::with_capacity(order - 1);

    visited[0] = true;
    push_frontier(adjacency, 0, &visited, &mut heap);

    while edges.len() < order - 1 {
        let Some(Reverse(Candidate(edge))) = heap.pop() else {
            // unreachable for a connected graph
            tracing::warn!(
                selected = edges.len(),
                order,
                "spanning tree frontier exhausted early"
            );
            return Vec::new();
        };

        // exactly one endpoint must already be in the tree
        let fresh = match (visited[edge.from], visited[edge.to]) {
            (true, false) => edge.to,
            (false, true) => edge.from,
            _ => continue,
        };
        let from = if fresh == edge.to { edge.from } else { edge.to };

        visited[fresh] = true;
        edges.push(SpanningEdge {
            from,
            to: fresh,
            weight: edge.weight,
        });
        push_frontier(adjacency, fresh, &visited, &mut heap);
    }

    trace_time!(started, "prim", order = order);
    edges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::traversal::fixtures::EdgeList;

    fn total(edges: &[SpanningEdge]) -> f64 {
        edges.iter().map(|e| e.weight).sum()
    }

    #[test]
    fn test_scenario_tree() {
        // A-B(1), B-C(2), A-C(4), C-D(1)
        let adj = EdgeList::new(4, &[(0, 1, 1.0), (1, 2, 2.0), (0, 2, 4.0), (2, 3, 1.0)]);
        let edges = minimum_spanning_edges(&adj);

        assert_eq!(
            edges,
            vec![
                SpanningEdge {
                    from: 0,
                    to: 1,
                    weight: 1.0
                },
                SpanningEdge {
                    from: 1,
                    to: 2,
                    weight: 2.0
                },
                SpanningEdge {
                    from: 2,
                    to: 3,
                    weight: 1.0
                },
            ]
        );
        assert_eq!(total(&edges), 4.0);
    }

    #[test]
    fn test_single_vertex_has_no_edges() {
        let adj = EdgeList::new(1, &[]);
        assert!(minimum_spanning_edges(&adj).is_empty());
    }

    #[test]
    fn test_empty_and_disconnected() {
        assert!(minimum_spanning_edges(&EdgeList::new(0, &[])).is_empty());
        let adj = EdgeList::new(3, &[(0, 1, 1.0)]);
        assert!(minimum_spanning_edges(&adj).is_empty());
    }

    #[test]
    fn test_cycle_drops_heaviest_edge() {
        let adj = EdgeList::new(
            4,
            &[(0, 1, 3.0), (1, 2, 1.0), (2, 3, 2.0), (3, 0, 5.0), (0, 2, 4.0)],
        );
        let edges = minimum_spanning_edges(&adj);
        assert_eq!(edges.len(), 3);
        assert_eq!(total(&edges), 6.0);
        assert!(edges.iter().all(|e| e.weight < 4.0));
    }
}
