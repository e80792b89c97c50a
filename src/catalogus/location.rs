//! # Storage Location
//!
//! Works out where the catalog files live.
//!
//! The settings file records the path of `base.json`. `top.json` always sits
//! next to it. `online.json` does not follow the storage folder at all; it
//! lives in the application data directory the caller passes in.
//!
//! On startup [`locate_or_prompt`] reuses the recorded location when the base
//! file still exists, and otherwise asks a [`FolderPrompt`] for a folder,
//! initializes it, and records it. Choosing a new folder later goes through
//! [`initialize`] again; records in the old folder are left where they are.

use crate::error::{CatalogError, Result};
use crate::model::Collection;
use crate::settings::Settings;
use crate::store::fs::create_empty;
use std::fs;
use std::path::{Path, PathBuf};

pub const BASE_FILENAME: &str = "base.json";
pub const TOP_FILENAME: &str = "top.json";
pub const ONLINE_FILENAME: &str = "online.json";

/// Resolved file locations for the three collections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogPaths {
    pub base: PathBuf,
    pub top: PathBuf,
    pub online: PathBuf,
}

impl CatalogPaths {
    /// Paths for a recorded base file; top is its sibling.
    pub fn from_base(base: PathBuf, online: PathBuf) -> Self {
        let folder = base.parent().map(Path::to_path_buf).unwrap_or_default();
        Self {
            top: folder.join(TOP_FILENAME),
            base,
            online,
        }
    }

    pub fn in_folder(folder: &Path, online: PathBuf) -> Self {
        Self::from_base(folder.join(BASE_FILENAME), online)
    }

    pub fn file(&self, collection: Collection) -> &PathBuf {
        match collection {
            Collection::Base => &self.base,
            Collection::Top => &self.top,
            Collection::Online => &self.online,
        }
    }

    /// The storage folder holding base and top.
    pub fn folder(&self) -> &Path {
        self.base.parent().unwrap_or_else(|| Path::new("."))
    }
}

/// Asks the user for a storage folder. `None` means the user declined.
pub trait FolderPrompt {
    fn choose_folder(&mut self) -> Option<PathBuf>;
}

/// The recorded location, if the settings name a base file that still exists.
pub fn resolve(settings_file: &Path, online: &Path) -> Result<Option<CatalogPaths>> {
    let settings = Settings::load(settings_file)?;
    Ok(settings
        .base_path
        .filter(|base| base.exists())
        .map(|base| CatalogPaths::from_base(base, online.to_path_buf())))
}

/// Make `folder` the storage folder: create empty base and top files there
/// (existing files are kept) and record the base path in the settings file.
pub fn initialize(settings_file: &Path, folder: &Path, online: &Path) -> Result<CatalogPaths> {
    fs::create_dir_all(folder)?;
    let folder = fs::canonicalize(folder)?;
    let paths = CatalogPaths::in_folder(&folder, online.to_path_buf());

    let mut settings = Settings::load(settings_file).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "replacing unreadable settings file");
        Settings::default()
    });
    settings.base_path = Some(paths.base.clone());
    settings.save(settings_file)?;

    for path in [&paths.base, &paths.top] {
        if create_empty(path)? {
            tracing::debug!(path = %path.display(), "created empty collection file");
        }
    }

    tracing::info!(folder = %folder.display(), "catalog location initialized");
    Ok(paths)
}

/// Startup resolution: reuse the recorded location or prompt for a new one.
///
/// Returns `Ok(None)` when the prompt is dismissed; the caller should exit.
pub fn locate_or_prompt(
    settings_file: &Path,
    online: &Path,
    prompt: &mut dyn FolderPrompt,
) -> Result<Option<CatalogPaths>> {
    match resolve(settings_file, online) {
        Ok(Some(paths)) => return Ok(Some(paths)),
        Ok(None) => {}
        Err(CatalogError::Settings(msg)) => {
            tracing::warn!(error = %msg, "settings unreadable, asking for a folder");
        }
        Err(e) => return Err(e),
    }

    match prompt.choose_folder() {
        Some(folder) => initialize(settings_file, &folder, online).map(Some),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    struct Answer(Option<PathBuf>, usize);

    impl FolderPrompt for Answer {
        fn choose_folder(&mut self) -> Option<PathBuf> {
            self.1 += 1;
            self.0.clone()
        }
    }

    #[test]
    fn top_is_sibling_of_base() {
        let paths = CatalogPaths::from_base(
            PathBuf::from("/data/cat/base.json"),
            PathBuf::from("/app/online.json"),
        );
        assert_eq!(paths.top, PathBuf::from("/data/cat/top.json"));
        assert_eq!(paths.folder(), Path::new("/data/cat"));
        assert_eq!(paths.file(Collection::Online), &PathBuf::from("/app/online.json"));
    }

    #[test]
    fn first_run_prompts_and_initializes() {
        let dir = tempdir().unwrap();
        let settings_file = dir.path().join("settings.json");
        let online = dir.path().join("online.json");
        let folder = dir.path().join("catalog");
        let mut prompt = Answer(Some(folder.clone()), 0);

        let paths = locate_or_prompt(&settings_file, &online, &mut prompt)
            .unwrap()
            .unwrap();
        assert_eq!(prompt.1, 1);
        assert!(paths.base.exists());
        assert!(paths.top.exists());
        assert_eq!(fs::read_to_string(&paths.base).unwrap(), "[]");

        let settings = Settings::load(&settings_file).unwrap();
        assert_eq!(settings.base_path, Some(paths.base.clone()));
    }

    #[test]
    fn later_runs_reuse_recorded_location_without_prompting() {
        let dir = tempdir().unwrap();
        let settings_file = dir.path().join("settings.json");
        let online = dir.path().join("online.json");
        let first = initialize(&settings_file, &dir.path().join("catalog"), &online).unwrap();

        let mut prompt = Answer(None, 0);
        let again = locate_or_prompt(&settings_file, &online, &mut prompt)
            .unwrap()
            .unwrap();
        assert_eq!(prompt.1, 0);
        assert_eq!(again, first);
    }

    #[test]
    fn declined_prompt_returns_none() {
        let dir = tempdir().unwrap();
        let settings_file = dir.path().join("settings.json");
        let mut prompt = Answer(None, 0);

        let located =
            locate_or_prompt(&settings_file, &dir.path().join("online.json"), &mut prompt).unwrap();
        assert!(located.is_none());
        assert!(!settings_file.exists());
    }

    #[test]
    fn vanished_base_file_prompts_again() {
        let dir = tempdir().unwrap();
        let settings_file = dir.path().join("settings.json");
        let online = dir.path().join("online.json");
        let first = initialize(&settings_file, &dir.path().join("old"), &online).unwrap();
        fs::remove_file(&first.base).unwrap();

        let mut prompt = Answer(Some(dir.path().join("new")), 0);
        let paths = locate_or_prompt(&settings_file, &online, &mut prompt)
            .unwrap()
            .unwrap();
        assert_eq!(prompt.1, 1);
        assert!(paths.base.ends_with("new/base.json"));
    }

    #[test]
    fn initialize_keeps_existing_records() {
        let dir = tempdir().unwrap();
        let folder = dir.path().join("catalog");
        fs::create_dir_all(&folder).unwrap();
        fs::write(folder.join(BASE_FILENAME), "[{\"id\": 3}]").unwrap();

        let paths = initialize(
            &dir.path().join("settings.json"),
            &folder,
            &dir.path().join("online.json"),
        )
        .unwrap();
        assert_eq!(fs::read_to_string(paths.base).unwrap(), "[{\"id\": 3}]");
        assert_eq!(fs::read_to_string(paths.top).unwrap(), "[]");
    }

    #[test]
    fn initialize_preserves_write_mode() {
        let dir = tempdir().unwrap();
        let settings_file = dir.path().join("settings.json");
        let mut settings = Settings::default();
        settings.set("write-mode", "atomic").unwrap();
        settings.save(&settings_file).unwrap();

        initialize(&settings_file, &dir.path().join("c"), &dir.path().join("o.json")).unwrap();
        let reloaded = Settings::load(&settings_file).unwrap();
        assert_eq!(reloaded.write_mode, crate::settings::WriteMode::Atomic);
        assert!(reloaded.base_path.is_some());
    }
}
