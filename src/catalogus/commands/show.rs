use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Collection;
use crate::store::DataStore;

use super::helpers::find_record;

pub fn run<S: DataStore>(store: &S, id: u64) -> Result<CmdResult> {
    let record = find_record(store, Collection::Base, id)?;
    Ok(CmdResult::default().with_listed_records(vec![record]))
}
