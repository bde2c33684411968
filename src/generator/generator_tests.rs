use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tempfile::tempdir;

use crate::core::ModforgeError;
use crate::document::{Document, Name};
use crate::generator::{
    FsWriter, GenerateSummary, ManifestWriter, ProjectGenerator, ScriptRunner, ShellRunner,
};
use crate::manifest::PackageDescriptor;

fn two_component_document() -> Document {
    let mut document = Document::default();
    document.add_component(Name::new("Home", "Feature"), None).unwrap();
    document.add_component(Name::new("Home", "Repository"), None).unwrap();
    document
}

/// Writer that fails for selected packages and records the rest.
struct FlakyWriter {
    fail_for: Vec<String>,
    written: Mutex<Vec<PathBuf>>,
}

impl ManifestWriter for FlakyWriter {
    fn write_package(
        &self,
        _manifest: &str,
        dir: &Path,
        package: &PackageDescriptor,
    ) -> anyhow::Result<()> {
        if self.fail_for.contains(&package.name) {
            anyhow::bail!("disk full");
        }
        self.written.lock().unwrap().push(dir.to_path_buf());
        Ok(())
    }
}

/// Runner that records invocations instead of spawning a shell.
struct RecordingRunner {
    calls: Mutex<Vec<PathBuf>>,
}

impl ScriptRunner for RecordingRunner {
    async fn run(&self, script: &Path, _workspace: &Path) -> Result<(), ModforgeError> {
        self.calls.lock().unwrap().push(script.to_path_buf());
        Ok(())
    }
}

#[tokio::test]
async fn test_generate_writes_every_package() {
    let temp = tempdir().unwrap();
    let document = two_component_document();

    let summary = ProjectGenerator::new()
        .generate(&document, temp.path(), false, None)
        .await
        .unwrap();
    assert_eq!(
        summary,
        GenerateSummary {
            packages_written: 2,
            script_ran: false
        }
    );

    for path in ["Feature/HomeFeature", "Repository/HomeRepository"] {
        let manifest = temp.path().join(path).join("Package.swift");
        assert!(manifest.is_file(), "missing {}", manifest.display());
    }
}

#[tokio::test]
async fn test_generate_twice_is_byte_identical() {
    let temp = tempdir().unwrap();
    let document = two_component_document();
    let generator = ProjectGenerator::new();

    generator.generate(&document, temp.path(), false, None).await.unwrap();
    let manifest_path = temp.path().join("Feature/HomeFeature/Package.swift");
    let first = std::fs::read(&manifest_path).unwrap();

    generator.generate(&document, temp.path(), false, None).await.unwrap();
    let second = std::fs::read(&manifest_path).unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_fs_writer_lays_out_source_stubs() {
    let temp = tempdir().unwrap();
    let document = two_component_document();

    ProjectGenerator::new().generate(&document, temp.path(), false, None).await.unwrap();

    let package_dir = temp.path().join("Feature/HomeFeature");
    let stub = package_dir.join("Sources/HomeFeatureContract/HomeFeatureContract.swift");
    assert!(stub.is_file());
    let test_stub = package_dir
        .join("Tests/HomeFeatureImplementationTests/HomeFeatureImplementationTests.swift");
    assert!(test_stub.is_file());

    // Regeneration never touches existing sources
    std::fs::write(&stub, "struct Real {}\n").unwrap();
    ProjectGenerator::new().generate(&document, temp.path(), false, None).await.unwrap();
    assert_eq!(std::fs::read_to_string(&stub).unwrap(), "struct Real {}\n");
}

#[tokio::test]
async fn test_failures_aggregate_and_keep_successes() {
    let temp = tempdir().unwrap();
    let document = two_component_document();

    let writer = FlakyWriter {
        fail_for: vec!["HomeFeature".to_string()],
        written: Mutex::new(Vec::new()),
    };
    let runner = RecordingRunner {
        calls: Mutex::new(Vec::new()),
    };
    let generator = ProjectGenerator::with_collaborators(writer, runner);

    let err = generator.generate(&document, temp.path(), true, None).await.unwrap_err();
    match err {
        ModforgeError::GenerationFailed {
            failures,
        } => {
            assert_eq!(failures.len(), 1);
            assert!(failures[0].starts_with("Feature/HomeFeature"));
        }
        other => panic!("unexpected error: {other}"),
    }

    // The other package was still written, and the script never ran
    let written = generator.writer.written.lock().unwrap();
    assert_eq!(written.as_slice(), [temp.path().join("Repository/HomeRepository")]);
    assert!(generator.runner.calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_script_runs_once_after_clean_pass() {
    let temp = tempdir().unwrap();
    let mut document = two_component_document();
    document.project_configuration.custom_script_path = Some("hooks/post.sh".to_string());

    let runner = RecordingRunner {
        calls: Mutex::new(Vec::new()),
    };
    let generator = ProjectGenerator::with_collaborators(FsWriter, runner);
    let summary = generator.generate(&document, temp.path(), true, None).await.unwrap();
    assert!(summary.script_ran);

    let calls = generator.runner.calls.lock().unwrap();
    assert_eq!(calls.as_slice(), [temp.path().join("hooks/post.sh")]);
}

#[tokio::test]
async fn test_script_skipped_when_disabled_or_unconfigured() {
    let temp = tempdir().unwrap();

    // Configured but disabled
    let mut document = two_component_document();
    document.project_configuration.custom_script_path = Some("hooks/post.sh".to_string());
    let runner = RecordingRunner {
        calls: Mutex::new(Vec::new()),
    };
    let generator = ProjectGenerator::with_collaborators(FsWriter, runner);
    let summary = generator.generate(&document, temp.path(), false, None).await.unwrap();
    assert!(!summary.script_ran);
    assert!(generator.runner.calls.lock().unwrap().is_empty());

    // Enabled but unconfigured
    let document = two_component_document();
    let summary = generator.generate(&document, temp.path(), true, None).await.unwrap();
    assert!(!summary.script_ran);
}

#[tokio::test]
async fn test_shell_runner_reports_failure_status() {
    let temp = tempdir().unwrap();
    let script = temp.path().join("fail.sh");
    std::fs::write(&script, "echo boom >&2\nexit 3\n").unwrap();

    let err = ShellRunner.run(&script, temp.path()).await.unwrap_err();
    match err {
        ModforgeError::ScriptFailed {
            status,
            stderr,
            ..
        } => {
            assert_eq!(status, "3");
            assert!(stderr.contains("boom"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_shell_runner_runs_in_workspace() {
    let temp = tempdir().unwrap();
    let script = temp.path().join("touch.sh");
    std::fs::write(&script, "echo generated > marker.txt\n").unwrap();

    ShellRunner.run(&script, temp.path()).await.unwrap();
    assert!(temp.path().join("marker.txt").is_file());
}
