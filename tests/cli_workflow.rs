#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    /// A sandbox whose storage folder is already chosen.
    fn initialized() -> Self {
        let sb = Self::new();
        sb.cmd()
            .args(["location", sb.folder().to_str().unwrap()])
            .assert()
            .success()
            .stdout(predicate::str::contains("Catalog location updated"));
        sb
    }

    fn root(&self) -> &Path {
        self.dir.path()
    }

    fn folder(&self) -> PathBuf {
        self.root().join("catalog")
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("catalogus").unwrap();
        cmd.current_dir(self.root())
            .env("CATALOGUS_DATA_DIR", self.root().join("app"))
            .env_remove("CATALOGUS_SETTINGS")
            .env("NO_COLOR", "1");
        cmd
    }

    fn ids_in(&self, path: PathBuf) -> Vec<u64> {
        let text = fs::read_to_string(path).unwrap_or_else(|_| "[]".into());
        let value: Value = serde_json::from_str(&text).unwrap();
        value
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["id"].as_u64().unwrap())
            .collect()
    }

    fn base_ids(&self) -> Vec<u64> {
        self.ids_in(self.folder().join("base.json"))
    }

    fn top_ids(&self) -> Vec<u64> {
        self.ids_in(self.folder().join("top.json"))
    }

    fn online_ids(&self) -> Vec<u64> {
        self.ids_in(self.root().join("app").join("online.json"))
    }

    fn add(&self, args: &[&str]) {
        self.cmd().arg("add").args(args).assert().success();
    }
}

#[test]
fn first_run_prompts_for_folder() {
    let sb = Sandbox::new();
    let answer = format!("{}\n", sb.folder().display());

    sb.cmd()
        .arg("list")
        .write_stdin(answer)
        .assert()
        .success()
        .stdout(predicate::str::contains("No records found."));

    assert!(sb.folder().join("base.json").exists());
    assert!(sb.folder().join("top.json").exists());
    let settings = fs::read_to_string(sb.root().join("settings.json")).unwrap();
    assert!(settings.contains("base_path"));

    // The recorded location is reused without asking again.
    sb.cmd().arg("list").write_stdin("").assert().success();
}

#[test]
fn dismissed_prompt_exits_quietly() {
    let sb = Sandbox::new();
    sb.cmd()
        .arg("list")
        .write_stdin("\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("No storage folder chosen"));
    assert!(!sb.root().join("settings.json").exists());
}

#[test]
fn add_list_and_search() {
    let sb = Sandbox::initialized();
    sb.add(&["Alpha", "Tool", "--label", "garage", "--date", "01.01.2020"]);
    sb.add(&["Beta Gadget", "--description", "small", "--no-date"]);

    sb.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Alpha Tool"))
        .stdout(predicate::str::contains("Beta Gadget"));

    sb.cmd()
        .args(["search", "TOOL"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Alpha Tool"))
        .stdout(predicate::str::contains("Beta Gadget").not());

    assert_eq!(sb.base_ids(), vec![1, 2]);
    let base = fs::read_to_string(sb.folder().join("base.json")).unwrap();
    assert!(base.contains("\"Название\": \"Alpha Tool\""));
    assert!(base.contains("\"Ярлык\": \"garage\""));
}

#[test]
fn sort_by_name_reverses() {
    let sb = Sandbox::initialized();
    sb.add(&["beta"]);
    sb.add(&["alpha"]);

    let out = sb
        .cmd()
        .args(["list", "--sort", "name"])
        .output()
        .unwrap();
    let text = String::from_utf8(out.stdout).unwrap();
    assert!(text.find("alpha").unwrap() < text.find("beta").unwrap());

    let out = sb
        .cmd()
        .args(["list", "--sort", "name", "--reverse"])
        .output()
        .unwrap();
    let text = String::from_utf8(out.stdout).unwrap();
    assert!(text.find("beta").unwrap() < text.find("alpha").unwrap());
}

#[test]
fn validation_errors_block_the_save() {
    let sb = Sandbox::initialized();
    sb.cmd()
        .args(["add", "Lamp", "--date", "2020-01-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("DD.MM.YYYY"));

    sb.cmd()
        .args(["add", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("name field is required"));

    assert!(sb.base_ids().is_empty());
}

#[test]
fn pin_edit_and_unpin_keep_top_in_sync() {
    let sb = Sandbox::initialized();
    sb.add(&["Lamp", "--pin"]);
    sb.add(&["Chair"]);
    assert_eq!(sb.top_ids(), vec![1]);

    sb.cmd().args(["pin", "2"]).assert().success();
    assert_eq!(sb.top_ids(), vec![1, 2]);

    sb.cmd()
        .args(["edit", "1", "--name", "Brass lamp"])
        .assert()
        .success();
    let top = fs::read_to_string(sb.folder().join("top.json")).unwrap();
    assert!(top.contains("Brass lamp"));

    sb.cmd().args(["edit", "1", "--unpin"]).assert().success();
    sb.cmd().args(["unpin", "2"]).assert().success();
    assert!(sb.top_ids().is_empty());

    sb.cmd()
        .args(["list", "--view", "top"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No records found."));
}

#[test]
fn online_add_is_idempotent() {
    let sb = Sandbox::initialized();
    sb.add(&["Lamp"]);

    sb.cmd()
        .args(["online", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("added to the online list"));
    sb.cmd()
        .args(["online", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already in the online list"));

    assert_eq!(sb.online_ids(), vec![1]);
}

#[test]
fn delete_removes_from_every_list() {
    let sb = Sandbox::initialized();
    sb.add(&["Lamp", "--pin"]);
    sb.add(&["Chair"]);
    sb.cmd().args(["online", "1"]).assert().success();

    sb.cmd()
        .args(["delete", "1"])
        .write_stdin("n\n")
        .assert()
        .success();
    assert_eq!(sb.base_ids(), vec![1, 2]);

    sb.cmd()
        .args(["delete", "1"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("deleted from all lists"));

    assert_eq!(sb.base_ids(), vec![2]);
    assert!(sb.top_ids().is_empty());
    assert!(sb.online_ids().is_empty());

    sb.add(&["Desk"]);
    assert_eq!(sb.base_ids(), vec![2, 3]);
}

#[test]
fn backup_writes_snapshots() {
    let sb = Sandbox::initialized();
    sb.add(&["Lamp"]);

    sb.cmd()
        .arg("backup")
        .assert()
        .success()
        .stdout(predicate::str::contains("Backup created"));

    let snapshots: Vec<String> = fs::read_dir(sb.folder())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|n| n.contains("_backup_"))
        .collect();
    assert_eq!(snapshots.len(), 2);
    assert!(snapshots.iter().any(|n| n.starts_with("base_backup_")));
    assert!(snapshots.iter().any(|n| n.starts_with("top_backup_")));
}

#[test]
fn malformed_store_is_reported_not_overwritten() {
    let sb = Sandbox::initialized();
    fs::write(sb.folder().join("base.json"), "[{broken").unwrap();

    sb.cmd()
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not load the base list"));

    sb.cmd().args(["add", "Lamp"]).assert().failure();
    assert_eq!(
        fs::read_to_string(sb.folder().join("base.json")).unwrap(),
        "[{broken"
    );
}

#[test]
fn config_sets_write_mode() {
    let sb = Sandbox::initialized();
    sb.cmd()
        .args(["config", "write-mode", "atomic"])
        .assert()
        .success()
        .stdout(predicate::str::contains("write-mode set to atomic"));

    sb.cmd()
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("write-mode = atomic"));

    sb.add(&["Lamp"]);
    assert_eq!(sb.base_ids(), vec![1]);
}
