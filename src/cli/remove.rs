//! Remove a component from the catalog.
//!
//! The document model treats removal of an unknown name as a silent no-op;
//! at the CLI boundary that would hide typos, so the command checks
//! existence first and suggests the closest match.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

use super::common::{closest_component, resolve_document_path};
use crate::core::ModforgeError;
use crate::document::{Document, Name};

/// Arguments for `modforge remove`.
#[derive(Args)]
pub struct RemoveCommand {
    /// Given name of the component
    given: String,

    /// Family of the component
    family: String,

    /// Catalog document to edit (discovered upwards when omitted)
    #[arg(short, long)]
    document: Option<PathBuf>,
}

impl RemoveCommand {
    /// Removes the component and saves the catalog.
    pub fn execute(self) -> Result<()> {
        let path = resolve_document_path(self.document)?;
        let mut document = Document::load(&path)?;

        let name = Name::new(self.given, self.family);
        if !document.name_exists(&name) {
            if let Some(suggestion) = closest_component(&document, &name) {
                eprintln!("Did you mean {}?", suggestion.bold());
            }
            return Err(ModforgeError::ComponentNotFound {
                name: name.full(),
            }
            .into());
        }

        let title = document.title_for(&name);
        document.remove_component(&name);
        document.save(&path)?;

        println!("{} Removed {}", "✓".green(), title.bold());
        Ok(())
    }
}
