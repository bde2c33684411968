//! Generation pipeline: write every package manifest, then run the
//! configured post-generation script.
//!
//! The pipeline talks to its collaborators through two narrow traits so the
//! core stays free of I/O policy: [`ManifestWriter`] places one package on
//! disk, [`ScriptRunner`] executes the custom script hook. Production uses
//! [`FsWriter`] and [`ShellRunner`].
//!
//! Writes are best-effort and independent: a failing package does not stop
//! the pass, and nothing rolls back manifests already written. All failures
//! are collected into a single [`ModforgeError::GenerationFailed`]. The
//! script hook runs once, after the pass, and only when every package was
//! written.

use indicatif::ProgressBar;
use std::path::Path;
use tracing::{debug, info};

use crate::core::ModforgeError;
use crate::document::Document;
use crate::extractor::extract_document;
use crate::manifest::{PackageDescriptor, package_manifest};
use crate::utils::fs::{ensure_dir, safe_write};

/// Places one generated package on disk.
pub trait ManifestWriter {
    /// Writes `manifest` into `dir` and lays out whatever source stubs the
    /// package needs. `dir` is created if absent.
    fn write_package(
        &self,
        manifest: &str,
        dir: &Path,
        package: &PackageDescriptor,
    ) -> anyhow::Result<()>;
}

/// Runs the post-generation script hook.
pub trait ScriptRunner {
    /// Executes the script at `script` with `workspace` as working
    /// directory.
    fn run(
        &self,
        script: &Path,
        workspace: &Path,
    ) -> impl Future<Output = Result<(), ModforgeError>> + Send;
}

/// Production writer: atomic `Package.swift` plus source-stub directories.
///
/// Every non-test target gets `Sources/{name}/{name}.swift`, test targets
/// get `Tests/{name}/{name}.swift`. Stubs are only created when the target
/// directory does not exist yet — regeneration never touches sources.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsWriter;

impl ManifestWriter for FsWriter {
    fn write_package(
        &self,
        manifest: &str,
        dir: &Path,
        package: &PackageDescriptor,
    ) -> anyhow::Result<()> {
        ensure_dir(dir)?;
        safe_write(&dir.join("Package.swift"), manifest)?;

        for target in &package.targets {
            let parent = if target.is_test { "Tests" } else { "Sources" };
            let target_dir = dir.join(parent).join(&target.name);
            if target_dir.exists() {
                continue;
            }
            ensure_dir(&target_dir)?;
            safe_write(
                &target_dir.join(format!("{}.swift", target.name)),
                "import Foundation\n",
            )?;
        }
        debug!(path = %dir.display(), "wrote package");
        Ok(())
    }
}

/// Production script runner: executes the hook through `sh` with captured
/// output.
#[derive(Debug, Default, Clone, Copy)]
pub struct ShellRunner;

impl ScriptRunner for ShellRunner {
    async fn run(&self, script: &Path, workspace: &Path) -> Result<(), ModforgeError> {
        info!(script = %script.display(), "running post-generation script");
        let output = tokio::process::Command::new("sh")
            .arg(script)
            .current_dir(workspace)
            .output()
            .await?;

        if !output.status.success() {
            return Err(ModforgeError::ScriptFailed {
                path: script.display().to_string(),
                status: output
                    .status
                    .code()
                    .map_or_else(|| "signal".to_string(), |code| code.to_string()),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }
        Ok(())
    }
}

/// Outcome of a generation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateSummary {
    /// Number of packages written
    pub packages_written: usize,
    /// Whether the custom script hook ran
    pub script_ran: bool,
}

/// Drives a full generation pass over a document snapshot.
pub struct ProjectGenerator<W = FsWriter, R = ShellRunner> {
    writer: W,
    runner: R,
}

impl ProjectGenerator {
    /// Generator with the production collaborators.
    #[must_use]
    pub fn new() -> Self {
        Self {
            writer: FsWriter,
            runner: ShellRunner,
        }
    }
}

impl Default for ProjectGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: ManifestWriter, R: ScriptRunner> ProjectGenerator<W, R> {
    /// Generator with injected collaborators.
    pub fn with_collaborators(writer: W, runner: R) -> Self {
        Self {
            writer,
            runner,
        }
    }

    /// Extracts, renders, and writes every package under `root`, then runs
    /// the custom script when one is configured and `run_script` is set.
    ///
    /// # Errors
    ///
    /// [`ModforgeError::GenerationFailed`] aggregating every failed package,
    /// or [`ModforgeError::ScriptFailed`] from the hook. Manifests written
    /// before a failure stay on disk.
    pub async fn generate(
        &self,
        document: &Document,
        root: &Path,
        run_script: bool,
        progress: Option<&ProgressBar>,
    ) -> Result<GenerateSummary, ModforgeError> {
        let packages = extract_document(document);
        if let Some(bar) = progress {
            bar.set_length(packages.len() as u64);
        }

        let mut failures = Vec::new();
        let mut written = 0usize;
        for package_with_path in &packages {
            let manifest = package_manifest(&package_with_path.package);
            let dir = root.join(&package_with_path.path);
            match self.writer.write_package(&manifest, &dir, &package_with_path.package) {
                Ok(()) => written += 1,
                Err(error) => {
                    failures.push(format!("{}: {error:#}", package_with_path.path));
                }
            }
            if let Some(bar) = progress {
                bar.inc(1);
            }
        }

        if !failures.is_empty() {
            return Err(ModforgeError::GenerationFailed {
                failures,
            });
        }

        let mut script_ran = false;
        if run_script
            && let Some(script_path) = &document.project_configuration.custom_script_path
        {
            self.runner.run(&root.join(script_path), root).await?;
            script_ran = true;
        }

        info!(packages = written, script_ran, "generation pass complete");
        Ok(GenerateSummary {
            packages_written: written,
            script_ran,
        })
    }
}

#[cfg(test)]
mod generator_tests;
