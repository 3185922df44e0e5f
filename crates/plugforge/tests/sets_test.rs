//! Integration tests for `plugforge sets`

use assert_cmd::Command;
use plugforge_testkit::temp_dir_in_workspace;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;

fn shipped_templates() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("templates")
}

fn plugforge() -> Command {
    let mut cmd = Command::cargo_bin("plugforge").unwrap();
    cmd.env_remove("PLUGFORGE_TEMPLATES");
    cmd
}

#[test]
fn test_sets_lists_shipped_pepper_set() {
    plugforge()
        .arg("sets")
        .arg("--templates-root")
        .arg(shipped_templates())
        .assert()
        .success()
        .stdout(predicate::str::contains("pepper"));
}

#[test]
fn test_sets_empty_root_reports_none() {
    let temp = temp_dir_in_workspace();

    plugforge()
        .current_dir(temp.path())
        .arg("sets")
        .assert()
        .success()
        .stdout(predicate::str::contains("No template sets found"));
}

#[test]
fn test_sets_ignores_directories_without_manifest() {
    let temp = temp_dir_in_workspace();
    let root = temp.path().join("sets");

    // "beta" has a manifest, "stray" does not, "alpha" has a misnamed one.
    fs::create_dir_all(root.join("beta")).unwrap();
    fs::write(root.join("beta/beta.files"), "").unwrap();
    fs::create_dir_all(root.join("stray")).unwrap();
    fs::create_dir_all(root.join("alpha")).unwrap();
    fs::write(root.join("alpha/other.files"), "").unwrap();

    plugforge()
        .arg("sets")
        .arg("--templates-root")
        .arg(&root)
        .assert()
        .success()
        .stdout(predicate::str::contains("beta"))
        .stdout(predicate::str::contains("stray").not())
        .stdout(predicate::str::contains("alpha").not());
}

#[test]
fn test_sets_json_output() {
    let temp = temp_dir_in_workspace();
    let root = temp.path().join("sets");

    for name in ["zeta", "alpha"] {
        fs::create_dir_all(root.join(name)).unwrap();
        fs::write(root.join(name).join(format!("{name}.files")), "").unwrap();
    }

    let output = plugforge()
        .arg("sets")
        .arg("--templates-root")
        .arg(&root)
        .arg("--json")
        .assert()
        .success()
        .get_output()
        .clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["count"], 2);
    // Sorted listing
    assert_eq!(parsed["sets"][0], "alpha");
    assert_eq!(parsed["sets"][1], "zeta");
}
