//! Initialize a new catalog document.
//!
//! Creates `modforge.json` with the default project configuration: a
//! `Contract` type, an `Implementation` type with paired tests, and a `Mock`
//! type. The command refuses to overwrite an existing catalog unless
//! `--force` is given.

use anyhow::{Result, anyhow};
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

use crate::document::Document;
use crate::document::io::DOCUMENT_FILE_NAME;
use crate::utils::fs::ensure_dir;

/// Arguments for `modforge init`.
#[derive(Args)]
pub struct InitCommand {
    /// Directory to create the catalog in (defaults to the current directory)
    #[arg(short, long)]
    path: Option<PathBuf>,

    /// Overwrite an existing catalog
    #[arg(short, long)]
    force: bool,
}

impl InitCommand {
    /// Creates the catalog document.
    pub fn execute(self) -> Result<()> {
        let dir = match self.path {
            Some(path) => path,
            None => std::env::current_dir()?,
        };
        ensure_dir(&dir)?;
        let document_path = dir.join(DOCUMENT_FILE_NAME);

        if document_path.exists() && !self.force {
            return Err(anyhow!(
                "{} already exists (use --force to overwrite)",
                document_path.display()
            ));
        }

        Document::default().save(&document_path)?;

        println!("{} Created {}", "✓".green(), document_path.display());
        println!("\nNext steps:");
        println!("  modforge add <Given> <Family>   # add your first component");
        println!("  modforge generate               # write package manifests");
        Ok(())
    }
}
