//! # Mobile Registry
//!
//! An in-memory registry of mobile devices keyed by IMEI:
//! - IMEI uniqueness enforced on save
//! - Lookup by IMEI
//! - Delete and existence checks by full value (IMEI and model)
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         Caller                               │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                 MobileStorage (trait)                        │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!                       ▼
//!               ┌───────────────┐
//!               │InMemoryStorage│
//!               │ HashMap<IMEI, │
//!               │    Mobile>    │
//!               └───────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use mobile_registry::{InMemoryStorage, Mobile, MobileStorage, RegistryError};
//!
//! let mut storage = InMemoryStorage::new();
//! storage.save(Mobile::new("111", "m1")).unwrap();
//!
//! let duplicate = storage.save(Mobile::new("111", "m3"));
//! assert!(matches!(duplicate, Err(RegistryError::ImeiNotUnique { .. })));
//!
//! assert_eq!(storage.find_by_imei("111"), Some(Mobile::new("111", "m1")));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod mobile;
pub mod storage;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{RegistryError, Result};
pub use config::{Config, ConfigBuilder};
pub use mobile::Mobile;
pub use storage::{InMemoryStorage, MobileStorage};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of the mobile registry
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
