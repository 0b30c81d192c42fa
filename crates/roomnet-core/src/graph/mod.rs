//! Graph containers and the algorithms that run over them
//!
//! - [`Graph`]: unweighted, adjacency-matrix backed
//! - [`Network`]: weighted, layered over `Graph`
//! - [`Adjacency`]: index-level view the algorithms are written against

pub mod algos;
pub mod matrix;
pub mod network;
pub mod traversal;
pub mod unweighted;

pub use network::Network;
pub use traversal::{Adjacency, Neighbors};
pub use unweighted::Graph;
