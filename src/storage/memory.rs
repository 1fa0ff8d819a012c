//! In-memory storage
//!
//! HashMap keyed by IMEI. The key gives uniqueness and lookup; membership
//! compares the stored record against the argument.

use std::collections::{HashMap, HashSet};

use tracing::{debug, trace};

use crate::config::Config;
use crate::error::{RegistryError, Result};
use crate::mobile::Mobile;

use super::MobileStorage;

/// Mobile storage living entirely in memory
///
/// Starts empty and is discarded with the instance. Mutations take
/// `&mut self`; there is no internal locking.
#[derive(Debug)]
pub struct InMemoryStorage {
    /// Storage configuration
    config: Config,

    /// IMEI -> stored mobile
    mobiles: HashMap<String, Mobile>,
}

impl InMemoryStorage {
    /// Create an empty storage with the default config
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Create an empty storage with the given config
    pub fn with_config(config: Config) -> Self {
        trace!(
            store = %config.name,
            capacity = config.initial_capacity,
            "Creating in-memory storage"
        );

        Self {
            mobiles: HashMap::with_capacity(config.initial_capacity),
            config,
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl MobileStorage for InMemoryStorage {
    fn get_all(&self) -> HashSet<Mobile> {
        self.mobiles.values().cloned().collect()
    }

    fn find_by_imei(&self, imei: &str) -> Option<Mobile> {
        self.mobiles.get(imei).cloned()
    }

    fn save(&mut self, mobile: Mobile) -> Result<Mobile> {
        if self.mobiles.contains_key(mobile.imei()) {
            debug!(
                store = %self.config.name,
                imei = mobile.imei(),
                model = mobile.model(),
                "Rejected save: IMEI already stored"
            );
            return Err(RegistryError::ImeiNotUnique {
                imei: mobile.imei().to_string(),
            });
        }

        self.mobiles.insert(mobile.imei().to_string(), mobile.clone());

        debug!(
            store = %self.config.name,
            imei = mobile.imei(),
            model = mobile.model(),
            len = self.mobiles.len(),
            "Saved mobile"
        );

        Ok(mobile)
    }

    fn delete(&mut self, mobile: &Mobile) -> Result<()> {
        if !self.exists(mobile) {
            debug!(
                store = %self.config.name,
                imei = mobile.imei(),
                model = mobile.model(),
                "Rejected delete: mobile not stored"
            );
            return Err(RegistryError::MobileNotFound {
                imei: mobile.imei().to_string(),
                model: mobile.model().to_string(),
            });
        }

        self.mobiles.remove(mobile.imei());

        debug!(
            store = %self.config.name,
            imei = mobile.imei(),
            model = mobile.model(),
            len = self.mobiles.len(),
            "Deleted mobile"
        );

        Ok(())
    }

    fn exists(&self, mobile: &Mobile) -> bool {
        self.mobiles.get(mobile.imei()) == Some(mobile)
    }

    fn len(&self) -> usize {
        self.mobiles.len()
    }
}
