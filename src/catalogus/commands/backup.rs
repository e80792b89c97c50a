use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::location::CatalogPaths;
use chrono::{Local, NaiveDateTime};
use std::fs;
use std::path::{Path, PathBuf};

const TIMESTAMP_FORMAT: &str = "%d%m%Y_%H%M%S";

/// Snapshot base and top next to the originals, stamped with the current time.
pub fn run(paths: &CatalogPaths) -> Result<CmdResult> {
    run_at(paths, Local::now().naive_local())
}

/// Snapshots are never rotated; each call adds two files.
pub fn run_at(paths: &CatalogPaths, now: NaiveDateTime) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if !paths.base.exists() {
        result.add_message(CmdMessage::warning(
            "The catalog is not initialized, nothing to back up.",
        ));
        return Ok(result);
    }

    let stamp = now.format(TIMESTAMP_FORMAT).to_string();
    let dir = paths.folder();
    let targets = [
        (&paths.base, snapshot_path(dir, "base", &stamp)),
        (&paths.top, snapshot_path(dir, "top", &stamp)),
    ];

    let mut written = Vec::new();
    for (source, target) in targets {
        if let Err(e) = fs::copy(source, &target) {
            tracing::error!(source = %source.display(), error = %e, "backup copy failed");
            result.add_message(CmdMessage::error(format!(
                "Could not back up {}: {}",
                source.display(),
                e
            )));
            return Ok(result.with_paths(written));
        }
        written.push(target);
    }

    tracing::info!(stamp = %stamp, "backup created");
    result.add_message(CmdMessage::success("Backup created:"));
    for path in &written {
        result.add_message(CmdMessage::info(path.display().to_string()));
    }
    Ok(result.with_paths(written))
}

fn snapshot_path(dir: &Path, stem: &str, stamp: &str) -> PathBuf {
    dir.join(format!("{}_backup_{}.json", stem, stamp))
}
