//! Room map facade
//!
//! The surface the game's mission layer talks to: rooms go in, passages
//! connect them, and routing queries come back as room sequences. A map is
//! an owned value; each loaded mission builds its own and drops it when the
//! next mission loads.

use crate::config::NetworkConfig;
use crate::error::Result;
use crate::graph::Network;
use std::fmt;

/// Weight given to passages inserted without an explicit cost
pub const DEFAULT_PASSAGE_WEIGHT: f64 = 1.0;

/// Map of rooms connected by passages
#[derive(Debug, Clone)]
pub struct RoomMap<R> {
    network: Network<R>,
}

impl<R> Default for RoomMap<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> RoomMap<R> {
    pub fn new() -> Self {
        Self {
            network: Network::new(),
        }
    }

    pub fn with_config(config: NetworkConfig) -> Result<Self> {
        Ok(Self {
            network: Network::with_config(config)?,
        })
    }

    /// Number of rooms
    pub fn size(&self) -> usize {
        self.network.len()
    }

    pub fn rooms(&self) -> &[R] {
        self.network.vertices()
    }

    /// True iff every room can be reached from every other
    pub fn is_connected(&self) -> bool {
        self.network.is_connected()
    }

    /// The underlying network, for queries the map does not wrap
    pub fn network(&self) -> &Network<R> {
        &self.network
    }
}

impl<R: PartialEq> RoomMap<R> {
    pub fn insert_room(&mut self, room: R) -> usize {
        self.network.add_vertex(room)
    }

    /// Connect two rooms with a unit-weight passage
    pub fn insert_connection(&mut self, a: &R, b: &R) -> Result<bool> {
        self.network.add_edge(a, b, DEFAULT_PASSAGE_WEIGHT)
    }

    pub fn insert_weighted_connection(&mut self, a: &R, b: &R, weight: f64) -> Result<bool> {
        self.network.add_edge(a, b, weight)
    }

    pub fn remove_connection(&mut self, a: &R, b: &R) -> bool {
        self.network.remove_edge(a, b)
    }

    /// Rooms one passage away, by index order
    pub fn neighbours(&self, room: &R) -> Vec<&R> {
        self.network.neighbours(room)
    }

    /// Route through the fewest passages, both rooms included.
    ///
    /// A room is its own one-room route; an unreachable room gives an
    /// empty route.
    pub fn shortest_path(&self, start: &R, end: &R) -> Vec<&R> {
        self.network.hop_path(start, end)
    }

    /// Route with the lowest total passage weight; empty if there is none
    /// or the rooms are the same
    pub fn cheapest_path(&self, start: &R, end: &R) -> Vec<&R> {
        self.network.shortest_path(start, end)
    }

    pub fn bfs<'a>(&'a self, start: &R) -> impl Iterator<Item = &'a R> + 'a {
        self.network.iter_bfs(start)
    }

    pub fn dfs<'a>(&'a self, start: &R) -> impl Iterator<Item = &'a R> + 'a {
        self.network.iter_dfs(start)
    }
}

impl<R: PartialEq + fmt::Debug> RoomMap<R> {
    pub fn remove_room(&mut self, room: &R) -> Result<R> {
        self.network.remove_vertex(room)
    }
}
