//! Graph algorithm implementations
//!
//! Contains index-level algorithms written against [`Adjacency`](crate::graph::Adjacency):
//! - `bfs`: Breadth-first traversal, hop-count paths and connectivity
//! - `dfs`: Depth-first traversal
//! - `dijkstra`: Weighted shortest path finding
//! - `prim`: Minimum spanning tree
//! - `path`: Path reconstruction and weighing

pub mod bfs;
pub mod dfs;
pub mod dijkstra;
pub mod path;
pub mod prim;

pub use bfs::{hop_path, is_connected, Bfs};
pub use dfs::Dfs;
pub use dijkstra::weighted_path;
pub use path::{path_weight, reconstruct_path};
pub use prim::{minimum_spanning_edges, SpanningEdge};
