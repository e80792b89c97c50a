use crate::commands::{CmdResult, View};
use crate::error::Result;
use crate::query::{filter, sort_by_column, sort_by_date_desc, Column};
use crate::store::DataStore;

use super::helpers::load_or_report;

/// What a listing should show.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub view: View,
    pub search: Option<String>,
    /// Column to sort by and whether the order is reversed.
    pub sort: Option<(Column, bool)>,
}

impl ListQuery {
    pub fn view(view: View) -> Self {
        Self {
            view,
            ..Self::default()
        }
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn with_sort(mut self, column: Column, reverse: bool) -> Self {
        self.sort = Some((column, reverse));
        self
    }
}

/// Load the view's collection, newest first, then apply search and sort.
///
/// An unreadable collection lists as empty with an error message.
pub fn run<S: DataStore>(store: &S, query: &ListQuery) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let records = load_or_report(store, query.view.collection(), &mut result);
    let mut records = sort_by_date_desc(records);

    if let Some(term) = &query.search {
        records = filter(records, term.trim());
    }
    if let Some((column, reverse)) = query.sort {
        records = sort_by_column(records, column, reverse);
    }

    Ok(result.with_listed_records(records))
}
