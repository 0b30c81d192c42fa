//! Roomnet Core Library
//!
//! Adjacency-matrix graph and weighted network used as the room map of a
//! turn-based game: rooms are vertices, passages are weighted edges.

pub mod config;
pub mod error;
pub mod graph;
pub mod logging;
pub mod map;

pub use error::{GraphError, Result};
pub use graph::{Graph, Network};
pub use map::RoomMap;
