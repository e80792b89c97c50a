//! # Query Engine
//!
//! Pure functions that turn a collection of records into what a view displays:
//! the default date ordering, text search, and single-column sorting.
//!
//! Nothing here touches storage. Commands load a collection, then hand it to
//! these functions.

use crate::error::{CatalogError, Result};
use crate::model::Record;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Columns a listing can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Name,
    Label,
    Description,
    Location,
    Date,
    Pinned,
}

impl Column {
    pub fn all() -> [Column; 6] {
        [
            Column::Name,
            Column::Label,
            Column::Description,
            Column::Location,
            Column::Date,
            Column::Pinned,
        ]
    }

    /// The key this column is stored under in catalog files.
    pub fn stored_key(&self) -> &'static str {
        match self {
            Column::Name => "Название",
            Column::Label => "Ярлык",
            Column::Description => "Описание",
            Column::Location => "Расположение",
            Column::Date => "Дата",
            Column::Pinned => "В Топ",
        }
    }

    fn text<'a>(&self, record: &'a Record) -> &'a str {
        match self {
            Column::Name => &record.name,
            Column::Label => &record.label,
            Column::Description => &record.description,
            Column::Location => &record.location,
            Column::Date => &record.date,
            Column::Pinned => "",
        }
    }

    fn compare(&self, a: &Record, b: &Record) -> Ordering {
        match self {
            Column::Date => a.parsed_date().cmp(&b.parsed_date()),
            Column::Pinned => a.pinned.cmp(&b.pinned),
            _ => self
                .text(a)
                .to_lowercase()
                .cmp(&self.text(b).to_lowercase()),
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Column::Name => "name",
            Column::Label => "label",
            Column::Description => "description",
            Column::Location => "location",
            Column::Date => "date",
            Column::Pinned => "pinned",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Column {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Column::all()
            .into_iter()
            .find(|c| c.to_string().eq_ignore_ascii_case(wanted) || c.stored_key() == wanted)
            .ok_or_else(|| CatalogError::Api(format!("Unknown column: {}", s)))
    }
}

/// Tracks which column a view is sorted by, toggling direction on repeat.
///
/// Owned by the presentation layer; reset it whenever the view changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortState {
    column: Option<Column>,
    reverse: bool,
}

impl SortState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a sort request and returns whether it should be descending.
    ///
    /// The same column twice in a row flips the direction; any other column
    /// starts ascending.
    pub fn request(&mut self, column: Column) -> bool {
        if self.column == Some(column) {
            self.reverse = !self.reverse;
        } else {
            self.column = Some(column);
            self.reverse = false;
        }
        self.reverse
    }

    pub fn column(&self) -> Option<Column> {
        self.column
    }

    pub fn is_reversed(&self) -> bool {
        self.reverse
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Case-insensitive substring match over name, label and description.
pub fn matches(record: &Record, query: &str) -> bool {
    let needle = query.to_lowercase();
    [&record.name, &record.label, &record.description]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Keeps the records matching `query`, in their current order.
pub fn filter(records: Vec<Record>, query: &str) -> Vec<Record> {
    if query.is_empty() {
        return records;
    }
    records
        .into_iter()
        .filter(|r| matches(r, query))
        .collect()
}

/// Newest first. Empty or malformed dates go last; ties keep their order.
pub fn sort_by_date_desc(mut records: Vec<Record>) -> Vec<Record> {
    records.sort_by(|a, b| b.parsed_date().cmp(&a.parsed_date()));
    records
}

/// Stable sort on one column. With `reverse`, equal elements still keep their
/// relative order.
pub fn sort_by_column(mut records: Vec<Record>, column: Column, reverse: bool) -> Vec<Record> {
    if reverse {
        records.sort_by(|a, b| column.compare(b, a));
    } else {
        records.sort_by(|a, b| column.compare(a, b));
    }
    records
}
