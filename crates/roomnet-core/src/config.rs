//! Graph storage configuration
//!
//! Configuration is stored as TOML, e.g.:
//!
//! ```toml
//! version = 1
//! initial_capacity = 16
//! growth_factor = 2
//! ```

pub mod types;

use std::fs;
use std::path::Path;

use crate::bail_invalid;
use crate::error::Result;

pub use types::{
    NetworkConfig, CONFIG_FORMAT_VERSION, DEFAULT_CAPACITY, DEFAULT_GROWTH_FACTOR,
};

impl NetworkConfig {
    /// Create a config with a specific initial capacity and the default growth factor
    pub fn with_capacity(initial_capacity: usize) -> Self {
        Self {
            initial_capacity,
            ..Default::default()
        }
    }

    /// Check that the values describe a usable storage layout
    pub fn validate(&self) -> Result<()> {
        if self.version != CONFIG_FORMAT_VERSION {
            bail_invalid!("config version", self.version);
        }
        if self.initial_capacity == 0 {
            bail_invalid!("initial capacity", self.initial_capacity);
        }
        if self.growth_factor < 2 {
            bail_invalid!("growth factor", self.growth_factor);
        }
        Ok(())
    }

    /// Capacity to grow to from `current`
    pub fn next_capacity(&self, current: usize) -> usize {
        current.max(1).saturating_mul(self.growth_factor)
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: NetworkConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
