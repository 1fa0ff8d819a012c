//! Mobile record
//!
//! The value stored in the registry: an IMEI (unique key) and a model name.

use std::fmt;

/// A mobile device record
///
/// Equality and hashing cover both fields. Only the IMEI is required to be
/// unique within a storage.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Mobile {
    imei: String,
    model: String,
}

impl Mobile {
    /// Create a new mobile record
    pub fn new(imei: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            imei: imei.into(),
            model: model.into(),
        }
    }

    /// The IMEI (unique key)
    pub fn imei(&self) -> &str {
        &self.imei
    }

    /// The model name
    pub fn model(&self) -> &str {
        &self.model
    }
}

impl fmt::Display for Mobile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "imei {} and model {}", self.imei, self.model)
    }
}
