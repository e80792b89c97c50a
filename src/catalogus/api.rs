//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for every
//! catalog operation, whatever client sits on top.
//!
//! The facade dispatches to `commands/*.rs` and returns `Result<CmdResult>`.
//! It holds no business logic and does no presentation: no stdout, no
//! formatting, no prompts.
//!
//! `CatalogApi<S: DataStore>` is generic over the storage backend:
//! `CatalogApi<FileStore>` in production, `CatalogApi<InMemoryStore>` in tests.

use crate::commands;
use crate::error::Result;
use crate::location::CatalogPaths;
use crate::model::RecordDraft;
use crate::store::DataStore;
use std::path::PathBuf;

/// The main API facade for catalog operations.
pub struct CatalogApi<S: DataStore> {
    store: S,
    paths: CatalogPaths,
    settings_file: PathBuf,
}

impl<S: DataStore> CatalogApi<S> {
    pub fn new(store: S, paths: CatalogPaths, settings_file: PathBuf) -> Self {
        Self {
            store,
            paths,
            settings_file,
        }
    }

    pub fn create_record(&mut self, draft: RecordDraft) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.store, draft)
    }

    pub fn update_record(&mut self, id: u64, draft: RecordDraft) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, id, draft)
    }

    pub fn delete_record(&mut self, id: u64) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, id)
    }

    pub fn show_record(&self, id: u64) -> Result<commands::CmdResult> {
        commands::show::run(&self.store, id)
    }

    pub fn list_records(&self, query: &ListQuery) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, query)
    }

    pub fn search_records(&self, view: View, term: &str) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, &ListQuery::view(view).with_search(term))
    }

    pub fn pin_record(&mut self, id: u64) -> Result<commands::CmdResult> {
        commands::pinning::pin(&mut self.store, id)
    }

    pub fn unpin_record(&mut self, id: u64) -> Result<commands::CmdResult> {
        commands::pinning::unpin(&mut self.store, id)
    }

    pub fn add_to_online(&mut self, id: u64) -> Result<commands::CmdResult> {
        commands::online::add(&mut self.store, id)
    }

    pub fn backup(&self) -> Result<commands::CmdResult> {
        commands::backup::run(&self.paths)
    }

    pub fn location(&self) -> Result<commands::CmdResult> {
        commands::location::show(&self.paths)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.settings_file, action)
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::list::ListQuery;
pub use commands::{CmdMessage, CmdResult, MessageLevel, View};
