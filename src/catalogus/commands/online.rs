use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Collection, Record};
use crate::store::DataStore;

use super::helpers::{contains_id, find_record};

/// Copy base record `id` into the online list, unless it is already there.
pub fn add<S: DataStore>(store: &mut S, id: u64) -> Result<CmdResult> {
    let record = find_record(store, Collection::Base, id)?;
    add_record(store, &record)
}

/// Copy `record` into the online list. Re-adding an id is a no-op.
pub fn add_record<S: DataStore>(store: &mut S, record: &Record) -> Result<CmdResult> {
    let mut online = store.load(Collection::Online)?;
    let mut result = CmdResult::default();

    if contains_id(&online, record.id) {
        result.add_message(CmdMessage::info(format!(
            "Record is already in the online list ({}): {}",
            record.id, record.name
        )));
        return Ok(result);
    }

    online.push(record.clone());
    store.save(Collection::Online, &online)?;
    result.add_message(CmdMessage::success(format!(
        "Record added to the online list ({}): {}",
        record.id, record.name
    )));
    Ok(result.with_affected_records(vec![record.clone()]))
}

/// Drop every online entry with `id`. Always rewrites the list.
pub fn remove_by_id<S: DataStore>(store: &mut S, id: u64) -> Result<()> {
    let mut online = store.load(Collection::Online)?;
    online.retain(|r| r.id != id);
    store.save(Collection::Online, &online)
}
