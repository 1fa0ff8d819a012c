//! Error types for the mobile registry
//!
//! Provides a unified error type for all storage operations.

use thiserror::Error;

/// Result type alias using RegistryError
pub type Result<T> = std::result::Result<T, RegistryError>;

/// Unified error type for registry operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    // -------------------------------------------------------------------------
    // Save Errors
    // -------------------------------------------------------------------------
    /// A mobile with this IMEI is already stored
    #[error("IMEI is not unique: {imei}")]
    ImeiNotUnique { imei: String },

    // -------------------------------------------------------------------------
    // Delete Errors
    // -------------------------------------------------------------------------
    /// No stored mobile equals the given one (both IMEI and model)
    #[error("Mobile not found: imei {imei} and model {model}")]
    MobileNotFound { imei: String, model: String },
}
