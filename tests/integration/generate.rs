//! Manifest generation flows.

use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

use crate::common::{modforge, write_catalog};
use modforge_cli::document::{Document, Name, TargetSlot};

/// Catalog with identity project defaults and a Feature → Repository edge.
fn sample_catalog() -> Document {
    let mut document = Document::default();
    for type_name in ["Contract", "Implementation", "Mock"] {
        document
            .project_configuration
            .default_dependencies
            .insert(TargetSlot::new(type_name), type_name.to_string());
    }
    document.add_component(Name::new("Home", "Feature"), None).unwrap();
    document.add_component(Name::new("Home", "Repository"), None).unwrap();
    document.add_local_dependency(&Name::new("Home", "Feature"), &Name::new("Home", "Repository"));
    document
}

#[test]
fn test_generate_writes_expected_manifests() {
    let temp = tempdir().unwrap();
    write_catalog(temp.path(), &sample_catalog());

    modforge()
        .arg("generate")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated 2 package(s)"));

    let manifest =
        fs::read_to_string(temp.path().join("Feature/HomeFeature/Package.swift")).unwrap();
    assert!(manifest.contains("name: \"HomeFeature\""));
    assert!(manifest.contains(".package(path: \"../../Repository/HomeRepository\"),"));
    assert!(manifest.contains("\"HomeRepositoryImplementation\","));
    assert!(manifest.contains(".testTarget(\n            name: \"HomeFeatureImplementationTests\""));

    let manifest =
        fs::read_to_string(temp.path().join("Repository/HomeRepository/Package.swift")).unwrap();
    assert!(manifest.contains("name: \"HomeRepository\""));
    assert!(!manifest.contains(".package(path:"));
}

#[test]
fn test_generate_twice_is_byte_identical() {
    let temp = tempdir().unwrap();
    write_catalog(temp.path(), &sample_catalog());

    modforge().arg("generate").current_dir(temp.path()).assert().success();
    let paths =
        ["Feature/HomeFeature/Package.swift", "Repository/HomeRepository/Package.swift"];
    let first: Vec<Vec<u8>> =
        paths.iter().map(|p| fs::read(temp.path().join(p)).unwrap()).collect();

    modforge().arg("generate").current_dir(temp.path()).assert().success();
    let second: Vec<Vec<u8>> =
        paths.iter().map(|p| fs::read(temp.path().join(p)).unwrap()).collect();

    assert_eq!(first, second);
}

#[test]
fn test_generate_into_explicit_output_root() {
    let temp = tempdir().unwrap();
    let catalog_dir = temp.path().join("catalog");
    let workspace = temp.path().join("workspace");
    fs::create_dir_all(&catalog_dir).unwrap();
    let document_path = write_catalog(&catalog_dir, &sample_catalog());

    modforge()
        .arg("generate")
        .arg("--document")
        .arg(&document_path)
        .arg("--output")
        .arg(&workspace)
        .assert()
        .success();

    assert!(workspace.join("Feature/HomeFeature/Package.swift").is_file());
    assert!(!catalog_dir.join("Feature").exists());
}

#[test]
fn test_script_hook_runs_after_generation() {
    let temp = tempdir().unwrap();
    let mut document = sample_catalog();
    document.project_configuration.custom_script_path = Some("post.sh".to_string());
    write_catalog(temp.path(), &document);
    fs::write(temp.path().join("post.sh"), "ls Feature > generated.txt\n").unwrap();

    modforge()
        .arg("generate")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Ran post-generation script"));

    // The script observed the already-written packages
    let listing = fs::read_to_string(temp.path().join("generated.txt")).unwrap();
    assert!(listing.contains("HomeFeature"));
}

#[test]
fn test_no_script_flag_skips_the_hook() {
    let temp = tempdir().unwrap();
    let mut document = sample_catalog();
    document.project_configuration.custom_script_path = Some("post.sh".to_string());
    write_catalog(temp.path(), &document);
    fs::write(temp.path().join("post.sh"), "touch marker.txt\n").unwrap();

    modforge()
        .arg("generate")
        .arg("--no-script")
        .current_dir(temp.path())
        .assert()
        .success();

    assert!(!temp.path().join("marker.txt").exists());
}

#[test]
fn test_failing_script_keeps_manifests() {
    let temp = tempdir().unwrap();
    let mut document = sample_catalog();
    document.project_configuration.custom_script_path = Some("post.sh".to_string());
    write_catalog(temp.path(), &document);
    fs::write(temp.path().join("post.sh"), "exit 1\n").unwrap();

    modforge()
        .arg("generate")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed with status 1"));

    assert!(temp.path().join("Feature/HomeFeature/Package.swift").is_file());
}
