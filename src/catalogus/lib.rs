//! # Catalogus Architecture
//!
//! Catalogus keeps a catalog of named items (label, description, location,
//! date) in plain JSON files. The library knows nothing about terminals; the
//! `catalogus` binary is one client of it, and a GUI could be another.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prompts, prints, picks exit codes      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Record lifecycle, top/online mirrors, listings, backup   │
//! │  - Returns CmdResult: records plus user-facing messages     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait over the base/top/online collections     │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The three collections
//!
//! `base.json` holds every record. `top.json` holds copies of pinned records
//! and is re-synchronized whenever a record is saved. `online.json` holds
//! copies the user added by hand; only deletion touches it afterwards. Each is
//! read and written whole, and nothing ties the three writes together.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `Record`, `RecordDraft`, dates and id assignment
//! - [`query`]: Search, date ordering and column sorting
//! - [`location`]: Where the files live, first-run initialization
//! - [`settings`]: The persisted settings file
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod error;
pub mod location;
pub mod model;
pub mod query;
pub mod settings;
pub mod store;
