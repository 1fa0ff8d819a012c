//! Storage Module
//!
//! Keeps the set of registered mobiles and enforces IMEI uniqueness.
//!
//! ## Responsibilities
//! - Reject a save whose IMEI is already taken
//! - Look up a mobile by IMEI
//! - Delete and existence checks by full value (IMEI and model)
//!
//! ## Lookup vs. membership
//! ```text
//!   save / find_by_imei      ──► compare IMEI only
//!   delete / exists          ──► compare IMEI and model
//! ```
//! A mobile stored as `{imei: "123", model: "A"}` is not deleted by
//! `delete({imei: "123", model: "B"})`; that call fails with
//! `MobileNotFound` and the stored record stays.

mod memory;

pub use memory::InMemoryStorage;

use std::collections::HashSet;

use crate::error::Result;
use crate::mobile::Mobile;

/// Contract for mobile storages
pub trait MobileStorage {
    /// Snapshot of every stored mobile (unordered)
    fn get_all(&self) -> HashSet<Mobile>;

    /// Find the mobile with the given IMEI
    fn find_by_imei(&self, imei: &str) -> Option<Mobile>;

    /// Store a mobile
    ///
    /// Fails with `ImeiNotUnique` if any stored mobile has the same IMEI,
    /// whatever its model. The storage is unchanged on failure.
    fn save(&mut self, mobile: Mobile) -> Result<Mobile>;

    /// Remove a mobile
    ///
    /// Fails with `MobileNotFound` unless an equal mobile (same IMEI and
    /// model) is stored. The storage is unchanged on failure.
    fn delete(&mut self, mobile: &Mobile) -> Result<()>;

    /// Whether an equal mobile (same IMEI and model) is stored
    fn exists(&self, mobile: &Mobile) -> bool;

    /// Number of stored mobiles
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
