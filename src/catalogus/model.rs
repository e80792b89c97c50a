use crate::error::ValidationError;
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Date format used for the record date field, e.g. `15.06.2021`.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// One of the three independently persisted record collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    /// Every record; the source of truth for identifiers.
    Base,
    /// Copies of pinned records.
    Top,
    /// Manually curated copies.
    Online,
}

impl Collection {
    pub fn all() -> [Collection; 3] {
        [Collection::Base, Collection::Top, Collection::Online]
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Collection::Base => "base",
            Collection::Top => "top",
            Collection::Online => "online",
        };
        write!(f, "{}", name)
    }
}

/// A catalog entry.
///
/// Serialized field names are the ones found in existing catalog files and must
/// not change. Keys this struct does not know about are kept in `extra` so a
/// load/save cycle never drops them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "Название", default)]
    pub name: String,

    #[serde(rename = "Ярлык", default)]
    pub label: String,

    #[serde(rename = "Описание", default)]
    pub description: String,

    #[serde(rename = "Расположение", default)]
    pub location: String,

    #[serde(rename = "Дата", default)]
    pub date: String,

    #[serde(rename = "В Топ", default)]
    pub pinned: bool,

    #[serde(default)]
    pub id: u64,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Record {
    /// Builds a record from a validated draft.
    pub fn from_draft(id: u64, draft: RecordDraft) -> Self {
        Self {
            name: draft.name,
            label: draft.label,
            description: draft.description,
            location: draft.location,
            date: draft.date,
            pinned: draft.pinned,
            id,
            extra: Map::new(),
        }
    }

    /// Overwrites the form fields from a draft, keeping the id and unknown keys.
    pub fn apply(&mut self, draft: RecordDraft) {
        self.name = draft.name;
        self.label = draft.label;
        self.description = draft.description;
        self.location = draft.location;
        self.date = draft.date;
        self.pinned = draft.pinned;
    }

    /// The parsed date, or `None` when the field is empty or malformed.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        parse_date(&self.date)
    }
}

/// User input for creating or editing a record, before an id is assigned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordDraft {
    pub name: String,
    pub label: String,
    pub description: String,
    pub location: String,
    pub date: String,
    pub pinned: bool,
}

impl RecordDraft {
    /// A draft with the given name and today's date.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            date: today(),
            ..Self::default()
        }
    }

    /// Pre-fills a draft from an existing record, for editing.
    pub fn from_record(record: &Record) -> Self {
        Self {
            name: record.name.clone(),
            label: record.label.clone(),
            description: record.description.clone(),
            location: record.location.clone(),
            date: record.date.clone(),
            pinned: record.pinned,
        }
    }

    /// Trims every text field and checks the name and date.
    pub fn validate(mut self) -> Result<Self, ValidationError> {
        for field in [
            &mut self.name,
            &mut self.label,
            &mut self.description,
            &mut self.location,
            &mut self.date,
        ] {
            *field = field.trim().to_string();
        }

        if self.name.is_empty() {
            return Err(ValidationError::MissingName);
        }
        if !self.date.is_empty() && parse_date(&self.date).is_none() {
            return Err(ValidationError::InvalidDate(self.date));
        }
        Ok(self)
    }
}

/// Parses a `DD.MM.YYYY` date. Surrounding whitespace is ignored and the
/// year must have exactly four digits.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    let year = value.rsplit('.').next()?;
    if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

/// Today's local date in `DD.MM.YYYY` form.
pub fn today() -> String {
    Local::now().format(DATE_FORMAT).to_string()
}

/// One plus the highest id in `records`, or 1 for an empty collection.
/// `None` once the highest id is `u64::MAX`.
pub fn next_id(records: &[Record]) -> Option<u64> {
    match records.iter().map(|r| r.id).max() {
        Some(max) => max.checked_add(1),
        None => Some(1),
    }
}
