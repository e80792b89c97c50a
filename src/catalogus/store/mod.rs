//! # Storage Layer
//!
//! The [`DataStore`] trait is the record-store contract: a collection is read
//! in full and written back in full. Everything above this layer is written
//! against the trait.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, one JSON array per collection
//! - [`memory::InMemoryStore`]: no persistence, used by the command tests
//!
//! ## Collections
//!
//! Every operation takes a [`Collection`]:
//! - `Collection::Base`: every record (`base.json` in the storage folder)
//! - `Collection::Top`: copies of pinned records (`top.json`, next to base)
//! - `Collection::Online`: curated copies (`online.json` in the app data dir)
//!
//! The three are independent files. Nothing here keeps them consistent with
//! each other; the commands do that by writing each one explicitly.

use crate::error::Result;
use crate::model::{Collection, Record};

pub mod fs;
pub mod memory;

/// Whole-collection persistence.
pub trait DataStore {
    /// Read every record of a collection. A collection that was never written
    /// is empty, not an error.
    fn load(&self, collection: Collection) -> Result<Vec<Record>>;

    /// Replace the stored collection with `records`.
    fn save(&mut self, collection: Collection, records: &[Record]) -> Result<()>;
}
