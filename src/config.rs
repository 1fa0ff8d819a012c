//! Configuration for the mobile registry
//!
//! Centralized configuration with sensible defaults.

/// Configuration for an in-memory storage instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Label attached to every log event emitted by the store
    pub name: String,

    /// Number of records to pre-allocate room for
    pub initial_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            name: "mobiles".to_string(),
            initial_capacity: 0,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the store name used in log events
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.config.name = name.into();
        self
    }

    /// Set the pre-allocation hint (in records)
    pub fn initial_capacity(mut self, capacity: usize) -> Self {
        self.config.initial_capacity = capacity;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
