//! Configuration type definitions

use serde::{Deserialize, Serialize};

/// Current config format version
pub const CONFIG_FORMAT_VERSION: u32 = 1;

/// Vertex slots allocated by a fresh graph
pub const DEFAULT_CAPACITY: usize = 10;

/// Multiplier applied to the capacity when the vertex store is full
pub const DEFAULT_GROWTH_FACTOR: usize = 2;

/// Storage configuration for graphs and networks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Config format version for compatibility checking
    #[serde(default = "default_version")]
    pub version: u32,

    /// Initial number of vertex slots (matrix side length)
    #[serde(default = "default_initial_capacity")]
    pub initial_capacity: usize,

    /// Capacity multiplier used on growth
    #[serde(default = "default_growth_factor")]
    pub growth_factor: usize,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_FORMAT_VERSION,
            initial_capacity: DEFAULT_CAPACITY,
            growth_factor: DEFAULT_GROWTH_FACTOR,
        }
    }
}

fn default_version() -> u32 {
    CONFIG_FORMAT_VERSION
}

fn default_initial_capacity() -> usize {
    DEFAULT_CAPACITY
}

fn default_growth_factor() -> usize {
    DEFAULT_GROWTH_FACTOR
}
