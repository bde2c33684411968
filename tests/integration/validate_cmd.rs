//! Validation command behavior.

use predicates::prelude::*;
use tempfile::tempdir;

use crate::common::{modforge, write_catalog};
use modforge_cli::document::{Document, Name};

#[test]
fn test_valid_catalog_passes() {
    let temp = tempdir().unwrap();
    let mut document = Document::default();
    document.add_component(Name::new("Home", "Feature"), None).unwrap();
    document.add_component(Name::new("Home", "Repository"), None).unwrap();
    document.add_local_dependency(&Name::new("Home", "Feature"), &Name::new("Home", "Repository"));
    write_catalog(temp.path(), &document);

    modforge()
        .args(["validate", "--cycles"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("2 component(s) valid"));
}

#[test]
fn test_dangling_dependency_fails_validation() {
    let temp = tempdir().unwrap();
    let mut document = Document::default();
    document.add_component(Name::new("Home", "Feature"), None).unwrap();
    document.add_component(Name::new("Home", "Repository"), None).unwrap();
    document.add_local_dependency(&Name::new("Home", "Feature"), &Name::new("Home", "Repository"));
    document.remove_component(&Name::new("Home", "Repository"));
    write_catalog(temp.path(), &document);

    modforge()
        .arg("validate")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"))
        .stderr(predicate::str::contains("validation failed"));
}

#[test]
fn test_cycles_only_fail_when_requested() {
    let temp = tempdir().unwrap();
    let mut document = Document::default();
    document.add_component(Name::new("A", "Kit"), None).unwrap();
    document.add_component(Name::new("B", "Kit"), None).unwrap();
    document.add_local_dependency(&Name::new("A", "Kit"), &Name::new("B", "Kit"));
    document.add_local_dependency(&Name::new("B", "Kit"), &Name::new("A", "Kit"));
    write_catalog(temp.path(), &document);

    modforge().arg("validate").current_dir(temp.path()).assert().success();

    modforge()
        .args(["validate", "--cycles"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("cycle detected"));
}

#[test]
fn test_exclusion_crossing_is_only_a_warning() {
    let temp = tempdir().unwrap();
    let mut document = Document::default();
    document.add_component(Name::new("Home", "Feature"), None).unwrap();
    document.add_component(Name::new("Home", "Mock"), None).unwrap();
    document.add_local_dependency(&Name::new("Home", "Feature"), &Name::new("Home", "Mock"));
    document.update_family_rule("Feature", "Mock", false);
    write_catalog(temp.path(), &document);

    modforge()
        .arg("validate")
        .current_dir(temp.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("exclusion"))
        .stdout(predicate::str::contains("1 warning(s)"));
}
