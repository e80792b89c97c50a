use super::DataStore;
use crate::error::{CatalogError, Result};
use crate::location::CatalogPaths;
use crate::model::{Collection, Record};
use crate::settings::WriteMode;
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

pub struct FileStore {
    paths: CatalogPaths,
    write_mode: WriteMode,
}

impl FileStore {
    pub fn new(paths: CatalogPaths) -> Self {
        Self {
            paths,
            write_mode: WriteMode::default(),
        }
    }

    pub fn with_write_mode(mut self, mode: WriteMode) -> Self {
        self.write_mode = mode;
        self
    }

    fn write_file(&self, path: &Path, bytes: &[u8]) -> Result<()> {
        match self.write_mode {
            WriteMode::Overwrite => fs::write(path, bytes)?,
            WriteMode::Atomic => {
                let dir = path.parent().unwrap_or_else(|| Path::new("."));
                let mut tmp = NamedTempFile::new_in(dir)?;
                tmp.write_all(bytes)?;
                tmp.as_file().sync_all()?;
                tmp.persist(path).map_err(|e| CatalogError::Io(e.error))?;
            }
        }
        Ok(())
    }
}

/// Pretty JSON with four-space indentation, non-ASCII left as-is.
pub fn to_json_bytes<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    Ok(buf)
}

/// Create `path` holding an empty array, unless it already exists.
pub fn create_empty(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, to_json_bytes::<[Record]>(&[])?)?;
    Ok(true)
}

impl DataStore for FileStore {
    fn load(&self, collection: Collection) -> Result<Vec<Record>> {
        let path = self.paths.file(collection);
        if !path.exists() {
            tracing::debug!(%collection, path = %path.display(), "collection file missing, treating as empty");
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(path)?;
        let records: Vec<Record> = serde_json::from_str(&content)?;
        tracing::debug!(%collection, count = records.len(), "loaded collection");
        Ok(records)
    }

    fn save(&mut self, collection: Collection, records: &[Record]) -> Result<()> {
        let path = self.paths.file(collection);
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let bytes = to_json_bytes(records)?;
        self.write_file(path, &bytes)?;
        tracing::debug!(%collection, count = records.len(), mode = %self.write_mode, "saved collection");
        Ok(())
    }
}
