use crate::commands::{CmdMessage, CmdResult};
use crate::error::{CatalogError, Result};
use crate::model::{Collection, Record};
use crate::store::DataStore;

use super::helpers::save_or_report;

/// Remove `id` from base, top and online.
///
/// Each collection is rewritten on its own. A collection that cannot be read
/// or written is reported and skipped; the others are still processed.
pub fn run<S: DataStore>(store: &mut S, id: u64) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let mut removed: Option<Record> = None;
    let mut found = false;

    for collection in Collection::all() {
        let mut records = match store.load(collection) {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(%collection, error = %e, "skipping unreadable collection on delete");
                result.add_message(CmdMessage::error(format!(
                    "Could not load the {} list, record {} was not removed from it: {}",
                    collection, id, e
                )));
                continue;
            }
        };

        let before = records.len();
        if removed.is_none() {
            removed = records.iter().find(|r| r.id == id).cloned();
        }
        records.retain(|r| r.id != id);
        found |= records.len() != before;

        save_or_report(store, collection, &records, &mut result);
    }

    if !found && !result.has_errors() {
        return Err(CatalogError::RecordNotFound(id));
    }

    let name = removed.as_ref().map(|r| r.name.as_str()).unwrap_or("");
    if result.has_errors() {
        result.add_message(CmdMessage::warning(format!(
            "Record {} was only partly deleted: {}",
            id, name
        )));
    } else {
        result.add_message(CmdMessage::success(format!(
            "Record deleted from all lists ({}): {}",
            id, name
        )));
    }

    Ok(result.with_affected_records(removed.into_iter().collect()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{create, online, MessageLevel};
    use crate::model::RecordDraft;
    use crate::store::memory::InMemoryStore;

    fn ids(store: &InMemoryStore, collection: Collection) -> Vec<u64> {
        store
            .load(collection)
            .unwrap()
            .iter()
            .map(|r| r.id)
            .collect()
    }

    fn seeded() -> InMemoryStore {
        let mut store = InMemoryStore::new();
        let mut lamp = RecordDraft::new("Lamp");
        lamp.pinned = true;
        create::run(&mut store, lamp).unwrap();
        create::run(&mut store, RecordDraft::new("Chair")).unwrap();
        online::add(&mut store, 1).unwrap();
        online::add(&mut store, 2).unwrap();
        store
    }

    #[test]
    fn removes_from_every_collection() {
        let mut store = seeded();
        let result = run(&mut store, 1).unwrap();

        assert_eq!(result.affected_records[0].name, "Lamp");
        assert_eq!(ids(&store, Collection::Base), vec![2]);
        assert!(ids(&store, Collection::Top).is_empty());
        assert_eq!(ids(&store, Collection::Online), vec![2]);
    }

    #[test]
    fn unknown_id_is_an_error() {
        let mut store = seeded();
        assert!(matches!(
            run(&mut store, 77),
            Err(CatalogError::RecordNotFound(77))
        ));
    }

    #[test]
    fn failed_write_is_reported_and_others_continue() {
        let mut store = seeded();
        store.fail_writes_to(Collection::Top);

        let result = run(&mut store, 1).unwrap();
        assert!(result.has_errors());
        assert!(result
            .messages
            .iter()
            .any(|m| m.level == MessageLevel::Warning));
        assert_eq!(ids(&store, Collection::Base), vec![2]);
        assert_eq!(ids(&store, Collection::Online), vec![2]);
        assert_eq!(ids(&store, Collection::Top), vec![1]);
    }
}
