use super::DataStore;
use crate::error::{CatalogError, Result};
use crate::model::{Collection, Record};
use std::collections::{HashMap, HashSet};

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    collections: HashMap<Collection, Vec<Record>>,
    failing_writes: HashSet<Collection>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every save of `collection` fail, as a read-only file would.
    pub fn fail_writes_to(&mut self, collection: Collection) {
        self.failing_writes.insert(collection);
    }
}

impl DataStore for InMemoryStore {
    fn load(&self, collection: Collection) -> Result<Vec<Record>> {
        Ok(self
            .collections
            .get(&collection)
            .cloned()
            .unwrap_or_default())
    }

    fn save(&mut self, collection: Collection, records: &[Record]) -> Result<()> {
        if self.failing_writes.contains(&collection) {
            return Err(CatalogError::Store(format!(
                "{} collection is read-only",
                collection
            )));
        }
        self.collections.insert(collection, records.to_vec());
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::RecordDraft;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Append a record straight into a collection, bypassing the commands.
        pub fn with_record(mut self, collection: Collection, id: u64, name: &str, date: &str) -> Self {
            let mut records = self.store.load(collection).unwrap();
            let draft = RecordDraft {
                name: name.to_string(),
                date: date.to_string(),
                pinned: collection == Collection::Top,
                ..RecordDraft::default()
            };
            records.push(Record::from_draft(id, draft));
            self.store.save(collection, &records).unwrap();
            self
        }

        pub fn with_records(mut self, count: u64) -> Self {
            for id in 1..=count {
                self = self.with_record(Collection::Base, id, &format!("Item {}", id), "");
            }
            self
        }
    }
}
