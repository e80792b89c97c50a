use thiserror::Error;

/// A form field failed validation; the save is blocked.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("The name field is required")]
    MissingName,

    #[error("Date '{0}' must be in DD.MM.YYYY format")]
    InvalidDate(String),
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Record not found: {0}")]
    RecordNotFound(u64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
