//! Generate package manifests for every component.
//!
//! Loads the catalog, writes one package per component under the output
//! root, then runs the configured post-generation script. The output root
//! defaults to the directory containing the catalog document, so generated
//! packages sit next to the catalog that describes them.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

use super::common::resolve_document_path;
use crate::document::Document;
use crate::generator::ProjectGenerator;

/// Arguments for `modforge generate`.
#[derive(Args)]
pub struct GenerateCommand {
    /// Catalog document to generate from (discovered upwards when omitted)
    #[arg(short, long)]
    document: Option<PathBuf>,

    /// Workspace root to generate into (defaults to the catalog's directory)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Skip the configured post-generation script
    #[arg(long)]
    no_script: bool,
}

impl GenerateCommand {
    /// Runs a full generation pass.
    pub async fn execute(self, quiet: bool) -> Result<()> {
        let path = resolve_document_path(self.document)?;
        let document = Document::load(&path)?;

        let root = match self.output {
            Some(output) => output,
            None => path
                .parent()
                .context("catalog document has no parent directory")?
                .to_path_buf(),
        };

        let progress = if quiet {
            None
        } else {
            let bar = ProgressBar::new(0);
            bar.set_style(
                ProgressStyle::default_bar()
                    .template("{msg} [{bar:40.cyan/blue}] {pos}/{len}")
                    .unwrap()
                    .progress_chars("━╸━"),
            );
            bar.set_message("Generating packages");
            Some(bar)
        };

        let summary = ProjectGenerator::new()
            .generate(&document, &root, !self.no_script, progress.as_ref())
            .await?;
        if let Some(bar) = progress {
            bar.finish_and_clear();
        }

        println!(
            "{} Generated {} package(s) under {}",
            "✓".green(),
            summary.packages_written,
            root.display()
        );
        if summary.script_ran {
            println!("{} Ran post-generation script", "✓".green());
        }
        Ok(())
    }
}
