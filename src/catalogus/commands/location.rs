use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::location::{initialize, CatalogPaths};
use std::path::Path;

/// Report the current storage location.
pub fn show(paths: &CatalogPaths) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!(
        "Catalog: {}",
        paths.base.display()
    )));
    result.add_message(CmdMessage::info(format!("Top: {}", paths.top.display())));
    result.add_message(CmdMessage::info(format!(
        "Online: {}",
        paths.online.display()
    )));
    Ok(result.with_location(paths.clone()))
}

/// Switch to a new storage folder. Records in the previous folder stay there.
pub fn change(settings_file: &Path, folder: &Path, online: &Path) -> Result<CmdResult> {
    let paths = initialize(settings_file, folder, online)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Catalog location updated: {}",
        paths.base.display()
    )));
    result.add_message(CmdMessage::info(
        "Records in the previous location were not moved.",
    ));
    Ok(result.with_location(paths))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::create;
    use crate::model::{Collection, RecordDraft};
    use crate::settings::Settings;
    use crate::store::fs::FileStore;
    use crate::store::DataStore;
    use tempfile::tempdir;

    #[test]
    fn change_does_not_migrate_records() {
        let dir = tempdir().unwrap();
        let settings_file = dir.path().join("settings.json");
        let online = dir.path().join("online.json");

        let old = change(&settings_file, &dir.path().join("old"), &online)
            .unwrap()
            .location
            .unwrap();
        let mut store = FileStore::new(old.clone());
        create::run(&mut store, RecordDraft::new("Lamp")).unwrap();

        let new = change(&settings_file, &dir.path().join("new"), &online)
            .unwrap()
            .location
            .unwrap();
        assert_ne!(old.base, new.base);
        assert!(FileStore::new(new.clone())
            .load(Collection::Base)
            .unwrap()
            .is_empty());
        assert_eq!(store.load(Collection::Base).unwrap().len(), 1);
        assert_eq!(
            Settings::load(&settings_file).unwrap().base_path,
            Some(new.base)
        );
    }

    #[test]
    fn show_lists_all_three_files() {
        let paths = CatalogPaths::in_folder(Path::new("/data"), "/app/online.json".into());
        let result = show(&paths).unwrap();
        assert_eq!(result.messages.len(), 3);
        assert_eq!(result.location, Some(paths));
    }
}
