use crate::graph::Adjacency;

/// Lazy depth-first traversal over vertex indices.
///
/// A vertex is emitted when it is pushed, not when it is popped: the top of
/// the stack advances to its lowest-index unvisited neighbour, and only
/// backtracks once none is left.
pub struct Dfs<'a, A: Adjacency + ?Sized> {
    adjacency: &'a A,
    stack: Vec<usize>,
    visited: Vec<bool>,
    pending: Option<usize>,
}

impl<'a, A: Adjacency + ?Sized> Dfs<'a, A> {
    pub fn new(adjacency: &'a A, start: Option<usize>) -> Self {
        let mut visited = vec![false; adjacency.order()];
        let mut stack = Vec::new();
        let start = start.filter(|&s| adjacency.is_valid_index(s));
        if let Some(start) = start {
            visited[start] = true;
            stack.push(start);
        }
        Self {
            adjacency,
            stack,
            visited,
            pending: start,
        }
    }
}

impl<A: Adjacency + ?Sized> Iterator for Dfs<'_, A> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if let Some(start) = self.pending.take() {
            return Some(start);
        }

        while let Some(&top) = self.stack.last() {
            let unvisited = self
                .adjacency
                .neighbors(top)
                .map(|(neighbor, _)| neighbor)
                .find(|&neighbor| !self.visited[neighbor]);

            match unvisited {
                Some(neighbor) => {
                    self.visited[neighbor] = true;
                    self.stack.push(neighbor);
                    return Some(neighbor);
                }
                None => {
                    self.stack.pop();
                }
            }
        }

        None
    }
}
