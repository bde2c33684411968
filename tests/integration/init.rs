//! Catalog initialization tests.

use predicates::prelude::*;
use tempfile::tempdir;

use crate::common::{modforge, read_catalog};

#[test]
fn test_init_creates_catalog_with_default_configuration() {
    let temp = tempdir().unwrap();

    modforge()
        .arg("init")
        .arg("--path")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));

    let document = read_catalog(temp.path());
    let types: Vec<&str> = document
        .project_configuration
        .target_types()
        .iter()
        .map(|t| t.name.as_str())
        .collect();
    assert_eq!(types, ["Contract", "Implementation", "Mock"]);
    assert!(document.families.is_empty());
}

#[test]
fn test_init_refuses_to_overwrite() {
    let temp = tempdir().unwrap();

    modforge().arg("init").arg("--path").arg(temp.path()).assert().success();
    modforge()
        .arg("init")
        .arg("--path")
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_init_force_overwrites() {
    let temp = tempdir().unwrap();

    modforge().arg("init").arg("--path").arg(temp.path()).assert().success();
    modforge()
        .arg("add")
        .args(["Home", "Feature"])
        .current_dir(temp.path())
        .assert()
        .success();

    modforge().arg("init").arg("--path").arg(temp.path()).arg("--force").assert().success();
    assert!(read_catalog(temp.path()).families.is_empty());
}

#[test]
fn test_init_creates_missing_directory() {
    let temp = tempdir().unwrap();
    let nested = temp.path().join("workspace/catalog");

    modforge().arg("init").arg("--path").arg(&nested).assert().success();
    assert!(nested.join("modforge.json").is_file());
}
