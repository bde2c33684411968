//! Add a component to the catalog.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

use super::common::resolve_document_path;
use crate::document::{Document, Name};

/// Arguments for `modforge add`.
#[derive(Args)]
pub struct AddCommand {
    /// Given name of the component, e.g. `Home`
    given: String,

    /// Family of the component, e.g. `Feature`
    family: String,

    /// Catalog document to edit (discovered upwards when omitted)
    #[arg(short, long)]
    document: Option<PathBuf>,
}

impl AddCommand {
    /// Adds the component and saves the catalog.
    pub fn execute(self) -> Result<()> {
        let path = resolve_document_path(self.document)?;
        let mut document = Document::load(&path)?;

        let name = Name::new(self.given, self.family);
        document.add_component(name.clone(), None)?;
        document.save(&path)?;

        println!("{} Added {}", "✓".green(), document.title_for(&name).bold());
        Ok(())
    }
}
