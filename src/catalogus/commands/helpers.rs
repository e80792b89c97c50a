use crate::commands::{CmdMessage, CmdResult};
use crate::error::{CatalogError, Result};
use crate::model::{Collection, Record};
use crate::store::DataStore;

/// Load a collection for display. A failure is reported on `result` and the
/// collection is shown as empty; the file itself is left alone.
pub fn load_or_report<S: DataStore>(
    store: &S,
    collection: Collection,
    result: &mut CmdResult,
) -> Vec<Record> {
    match store.load(collection) {
        Ok(records) => records,
        Err(e) => {
            tracing::warn!(%collection, error = %e, "could not load collection");
            result.add_message(CmdMessage::error(format!(
                "Could not load the {} list: {}",
                collection, e
            )));
            Vec::new()
        }
    }
}

/// Save a collection, reporting a failure on `result` instead of aborting.
/// Returns whether the write went through.
pub fn save_or_report<S: DataStore>(
    store: &mut S,
    collection: Collection,
    records: &[Record],
    result: &mut CmdResult,
) -> bool {
    match store.save(collection, records) {
        Ok(()) => true,
        Err(e) => {
            tracing::error!(%collection, error = %e, "could not save collection");
            result.add_message(CmdMessage::error(format!(
                "Could not save the {} list: {}",
                collection, e
            )));
            false
        }
    }
}

pub fn find_record<S: DataStore>(store: &S, collection: Collection, id: u64) -> Result<Record> {
    store
        .load(collection)?
        .into_iter()
        .find(|r| r.id == id)
        .ok_or(CatalogError::RecordNotFound(id))
}

pub fn contains_id(records: &[Record], id: u64) -> bool {
    records.iter().any(|r| r.id == id)
}
