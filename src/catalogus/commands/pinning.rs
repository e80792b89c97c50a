use crate::commands::{CmdMessage, CmdResult};
use crate::error::{CatalogError, Result};
use crate::model::{Collection, Record};
use crate::store::DataStore;

/// Bring the top list in line with `record`'s pinned state.
///
/// Pinning appends a copy when the id is absent and replaces the existing
/// copy (keeping its position) when present, so edits to a pinned record reach
/// the top list. Unpinning drops every entry with the id. The top list is
/// written back either way.
pub fn set_pinned<S: DataStore>(store: &mut S, record: &Record, is_pinned: bool) -> Result<()> {
    let mut top = store.load(Collection::Top)?;

    if is_pinned {
        match top.iter().position(|r| r.id == record.id) {
            Some(pos) => {
                top.retain(|r| r.id != record.id);
                top.insert(pos, record.clone());
            }
            None => top.push(record.clone()),
        }
    } else {
        top.retain(|r| r.id != record.id);
    }

    store.save(Collection::Top, &top)
}

pub fn pin<S: DataStore>(store: &mut S, id: u64) -> Result<CmdResult> {
    pin_state(store, id, true)
}

pub fn unpin<S: DataStore>(store: &mut S, id: u64) -> Result<CmdResult> {
    pin_state(store, id, false)
}

fn pin_state<S: DataStore>(store: &mut S, id: u64, is_pinned: bool) -> Result<CmdResult> {
    let mut base = store.load(Collection::Base)?;
    let record = base
        .iter_mut()
        .find(|r| r.id == id)
        .ok_or(CatalogError::RecordNotFound(id))?;
    record.pinned = is_pinned;
    let record = record.clone();

    store.save(Collection::Base, &base)?;
    set_pinned(store, &record, is_pinned)?;

    let verb = if is_pinned { "pinned" } else { "unpinned" };
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Record {} ({}): {}",
        verb, record.id, record.name
    )));
    Ok(result.with_affected_records(vec![record]))
}
