use crate::error::{CatalogError, Result};
use crate::store::fs::to_json_bytes;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Default name of the settings file, looked up in the working directory.
pub const SETTINGS_FILENAME: &str = "settings.json";

/// How collection files are written back to disk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteMode {
    /// Truncate and rewrite the file in place.
    #[default]
    Overwrite,
    /// Write a temporary sibling file, then rename it over the target.
    Atomic,
}

impl WriteMode {
    fn is_default(&self) -> bool {
        *self == WriteMode::default()
    }
}

impl fmt::Display for WriteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WriteMode::Overwrite => write!(f, "overwrite"),
            WriteMode::Atomic => write!(f, "atomic"),
        }
    }
}

impl FromStr for WriteMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "overwrite" => Ok(WriteMode::Overwrite),
            "atomic" => Ok(WriteMode::Atomic),
            other => Err(format!(
                "Invalid write-mode '{}': expected overwrite or atomic",
                other
            )),
        }
    }
}

/// Persisted application settings.
///
/// On disk this is `{"base_path": "..."}`; `write_mode` only appears once it
/// differs from the default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub base_path: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "WriteMode::is_default")]
    pub write_mode: WriteMode,
}

impl Settings {
    /// Load settings from `path`, or defaults if the file does not exist.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| CatalogError::Settings(format!("{}: {}", path.display(), e)))
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, to_json_bytes(self)?)?;
        Ok(())
    }

    pub fn keys() -> &'static [&'static str] {
        &["base-path", "write-mode"]
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "base-path" => Some(
                self.base_path
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "(not set)".to_string()),
            ),
            "write-mode" => Some(self.write_mode.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "write-mode" => {
                self.write_mode = value.parse()?;
                Ok(())
            }
            "base-path" => Err("base-path is changed with the `location` command".to_string()),
            other => Err(format!("Unknown config key: {}", other)),
        }
    }
}
