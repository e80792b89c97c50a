use crate::commands::{CmdMessage, CmdResult};
use crate::error::{CatalogError, Result};
use crate::model::{next_id, Collection, Record, RecordDraft};
use crate::store::DataStore;

use super::pinning::set_pinned;

pub fn run<S: DataStore>(store: &mut S, draft: RecordDraft) -> Result<CmdResult> {
    let draft = draft.validate()?;

    let mut base = store.load(Collection::Base)?;
    let id = next_id(&base)
        .ok_or_else(|| CatalogError::Store("No record ids left in the base list".into()))?;
    let record = Record::from_draft(id, draft);
    base.push(record.clone());
    store.save(Collection::Base, &base)?;

    set_pinned(store, &record, record.pinned)?;
    tracing::debug!(id = record.id, pinned = record.pinned, "record created");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Record created ({}): {}",
        record.id, record.name
    )));
    Ok(result.with_affected_records(vec![record]))
}
