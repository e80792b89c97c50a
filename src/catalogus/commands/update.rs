use crate::commands::{CmdMessage, CmdResult};
use crate::error::{CatalogError, Result};
use crate::model::{Collection, RecordDraft};
use crate::store::DataStore;

use super::pinning::set_pinned;

/// Replace a record's fields with `draft`. The id never changes and the top
/// list is re-synchronized from the new pinned state.
pub fn run<S: DataStore>(store: &mut S, id: u64, draft: RecordDraft) -> Result<CmdResult> {
    let draft = draft.validate()?;

    let mut base = store.load(Collection::Base)?;
    let record = base
        .iter_mut()
        .find(|r| r.id == id)
        .ok_or(CatalogError::RecordNotFound(id))?;
    record.apply(draft);
    let record = record.clone();

    store.save(Collection::Base, &base)?;
    set_pinned(store, &record, record.pinned)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Record updated ({}): {}",
        record.id, record.name
    )));
    Ok(result.with_affected_records(vec![record]))
}
