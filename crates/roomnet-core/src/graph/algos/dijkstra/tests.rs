use super::*;
use crate::graph::algos::path::path_weight;
use crate::graph::traversal::fixtures::EdgeList;

/// A-B(1), B-C(2), A-C(4), C-D(1)
fn scenario() -> EdgeList {
    EdgeList::new(4, &[(0, 1, 1.0), (1, 2, 2.0), (0, 2, 4.0), (2, 3, 1.0)])
}

/// Test HeapEntry comparison ordering
#[test]
fn test_heap_entry_ordering() {
    let entry1 = HeapEntry {
        index: 0,
        path_weight: 1.0,
    };
    let entry2 = HeapEntry {
        index: 1,
        path_weight: 2.0,
    };
    let entry3 = HeapEntry {
        index: 2,
        path_weight: 1.0,
    };
    let unreachable = HeapEntry {
        index: 3,
        path_weight: f64::INFINITY,
    };

    assert_eq!(entry1.cmp(&entry2), Ordering::Less);
    assert_eq!(entry2.cmp(&entry1), Ordering::Greater);

    // Equal weights fall back to index order
    assert_eq!(entry1.cmp(&entry3), Ordering::Less);
    assert_eq!(entry2.cmp(&unreachable), Ordering::Less);

    assert_eq!(entry1, entry1);
    assert_ne!(entry1, entry3);
}

#[test]
fn test_min_heap_pops_lowest_weight_first() {
    let mut heap = BinaryHeap::new();
    for (index, path_weight) in [(0, 3.0), (1, f64::INFINITY), (2, 0.5), (3, 0.5)] {
        heap.push(Reverse(HeapEntry { index, path_weight }));
    }
    let popped: Vec<usize> = std::iter::from_fn(|| heap.pop().map(|Reverse(e)| e.index)).collect();
    assert_eq!(popped, vec![2, 3, 0, 1]);
}

#[test]
fn test_weighted_path_prefers_lighter_route() {
    let adj = scenario();
    let path = weighted_path(&adj, 0, 3);
    assert_eq!(path, vec![0, 1, 2, 3]);
    assert_eq!(path_weight(&adj, &path), 4.0);
}

#[test]
fn test_weighted_path_direct_edge_when_cheapest() {
    let adj = EdgeList::new(3, &[(0, 1, 5.0), (1, 2, 5.0), (0, 2, 3.0)]);
    assert_eq!(weighted_path(&adj, 0, 2), vec![0, 2]);
}

#[test]
fn test_weighted_path_is_symmetric_in_weight() {
    let adj = scenario();
    let forward = weighted_path(&adj, 0, 3);
    let backward = weighted_path(&adj, 3, 0);
    assert_eq!(path_weight(&adj, &forward), path_weight(&adj, &backward));
    assert_eq!(backward, vec![3, 2, 1, 0]);
}

#[test]
fn test_weighted_path_same_endpoints_is_empty() {
    let adj = scenario();
    assert!(weighted_path(&adj, 2, 2).is_empty());
}

#[test]
fn test_weighted_path_unreachable() {
    let adj = EdgeList::new(4, &[(0, 1, 1.0), (2, 3, 1.0)]);
    assert!(weighted_path(&adj, 0, 3).is_empty());
    assert!(weighted_path(&adj, 1, 2).is_empty());
}

#[test]
fn test_weighted_path_invalid_endpoints() {
    let adj = scenario();
    assert!(weighted_path(&adj, 0, 4).is_empty());
    assert!(weighted_path(&adj, 8, 1).is_empty());
}

#[test]
fn test_weighted_path_zero_weight_edges() {
    let adj = EdgeList::new(3, &[(0, 1, 0.0), (1, 2, 0.0), (0, 2, 1.0)]);
    let path = weighted_path(&adj, 0, 2);
    assert_eq!(path, vec![0, 1, 2]);
    assert_eq!(path_weight(&adj, &path), 0.0);
}

#[test]
fn test_weighted_path_relaxes_through_later_vertices() {
    // long direct edge, cheap detour through 3 and 4
    let adj = EdgeList::new(
        5,
        &[(0, 1, 10.0), (0, 3, 1.0), (3, 4, 1.0), (4, 1, 1.0), (1, 2, 1.0)],
    );
    assert_eq!(weighted_path(&adj, 0, 2), vec![0, 3, 4, 1, 2]);
}
