//! Validate the catalog document.
//!
//! Prints every diagnostic and fails with a non-zero exit when any finding
//! is an error. Warnings alone do not fail the command — they describe
//! catalogs that still generate, just suspiciously.

use anyhow::{Result, anyhow};
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

use super::common::resolve_document_path;
use crate::document::Document;
use crate::validate::{Severity, validate_document};

/// Arguments for `modforge validate`.
#[derive(Args)]
pub struct ValidateCommand {
    /// Also check for dependency cycles between components
    #[arg(long)]
    cycles: bool,

    /// Catalog document to check (discovered upwards when omitted)
    #[arg(short, long)]
    document: Option<PathBuf>,
}

impl ValidateCommand {
    /// Runs the validation pass and reports findings.
    pub fn execute(self) -> Result<()> {
        let path = resolve_document_path(self.document)?;
        let document = Document::load(&path)?;

        let report = validate_document(&document, self.cycles);
        for diagnostic in &report.diagnostics {
            match diagnostic.severity {
                Severity::Error => eprintln!("{} {}", "error:".red().bold(), diagnostic.message),
                Severity::Warning => {
                    eprintln!("{} {}", "warning:".yellow().bold(), diagnostic.message);
                }
            }
        }

        if report.has_errors() {
            return Err(anyhow!(
                "validation failed with {} error(s) and {} warning(s)",
                report.error_count(),
                report.warning_count()
            ));
        }

        println!(
            "{} {} component(s) valid, {} warning(s)",
            "✓".green(),
            document.components().count(),
            report.warning_count()
        );
        Ok(())
    }
}
