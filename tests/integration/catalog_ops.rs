//! Component add/remove/list flows.

use predicates::prelude::*;
use tempfile::tempdir;

use crate::common::{modforge, read_catalog};
use modforge_cli::document::Name;

fn initialized() -> tempfile::TempDir {
    let temp = tempdir().unwrap();
    modforge().arg("init").arg("--path").arg(temp.path()).assert().success();
    temp
}

#[test]
fn test_add_component_round_trips_through_the_catalog() {
    let temp = initialized();

    modforge()
        .args(["add", "Home", "Feature"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("HomeFeature"));

    let document = read_catalog(temp.path());
    let component = document.get_component(&Name::new("Home", "Feature")).unwrap();
    assert_eq!(component.modules.len(), 3);
}

#[test]
fn test_add_duplicate_fails_with_hint() {
    let temp = initialized();

    modforge().args(["add", "Home", "Feature"]).current_dir(temp.path()).assert().success();
    modforge()
        .args(["add", "Home", "Feature"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already in use"))
        .stderr(predicate::str::contains("hint:"));
}

#[test]
fn test_remove_component_and_empty_family() {
    let temp = initialized();

    modforge().args(["add", "Home", "Feature"]).current_dir(temp.path()).assert().success();
    modforge()
        .args(["remove", "Home", "Feature"])
        .current_dir(temp.path())
        .assert()
        .success();

    let document = read_catalog(temp.path());
    assert!(document.families.is_empty());
}

#[test]
fn test_remove_unknown_component_suggests_closest() {
    let temp = initialized();

    modforge().args(["add", "Home", "Feature"]).current_dir(temp.path()).assert().success();
    modforge()
        .args(["remove", "Home", "Featur"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Did you mean HomeFeature?"));

    // The typo must not have removed anything
    assert_eq!(read_catalog(temp.path()).components().count(), 1);
}

#[test]
fn test_list_groups_components_by_family() {
    let temp = initialized();
    for (given, family) in [("Home", "Feature"), ("Settings", "Feature"), ("Home", "Repository")] {
        modforge().args(["add", given, family]).current_dir(temp.path()).assert().success();
    }

    modforge()
        .arg("list")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Feature"))
        .stdout(predicate::str::contains("  HomeFeature"))
        .stdout(predicate::str::contains("  SettingsFeature"))
        .stdout(predicate::str::contains("  HomeRepository"));
}

#[test]
fn test_list_json_output_parses() {
    let temp = initialized();
    modforge().args(["add", "Home", "Feature"]).current_dir(temp.path()).assert().success();

    let output = modforge()
        .args(["list", "--format", "json"])
        .current_dir(temp.path())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(parsed[0]["title"], "HomeFeature");
    assert_eq!(parsed[0]["family"], "Feature");
}

#[test]
fn test_commands_fail_without_a_catalog() {
    let temp = tempdir().unwrap();

    modforge()
        .args(["list"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}
