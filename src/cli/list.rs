//! List the catalog's components or families.

use anyhow::Result;
use clap::{Args, ValueEnum};
use colored::Colorize;
use std::path::PathBuf;

use super::common::resolve_document_path;
use crate::document::Document;

/// Output format for `modforge list`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    Text,
    Json,
}

/// Arguments for `modforge list`.
#[derive(Args)]
pub struct ListCommand {
    /// List families instead of components
    #[arg(long)]
    families: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: ListFormat,

    /// Catalog document to read (discovered upwards when omitted)
    #[arg(short, long)]
    document: Option<PathBuf>,
}

impl ListCommand {
    /// Prints the listing to stdout.
    pub fn execute(self) -> Result<()> {
        let path = resolve_document_path(self.document)?;
        let document = Document::load(&path)?;

        match (self.families, self.format) {
            (true, ListFormat::Text) => {
                for group in &document.families {
                    println!(
                        "{} ({} component{})",
                        group.family.name.bold(),
                        group.components.len(),
                        if group.components.len() == 1 { "" } else { "s" }
                    );
                }
            }
            (true, ListFormat::Json) => {
                let families: Vec<_> = document
                    .families
                    .iter()
                    .map(|group| {
                        serde_json::json!({
                            "name": group.family.name,
                            "folder": group.family.output_folder(),
                            "components": group.components.len(),
                        })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&families)?);
            }
            (false, ListFormat::Text) => {
                for group in &document.families {
                    println!("{}", group.family.name.bold());
                    for component in &group.components {
                        println!("  {}", document.title_for(&component.name));
                    }
                }
            }
            (false, ListFormat::Json) => {
                let components: Vec<_> = document
                    .components()
                    .map(|component| {
                        serde_json::json!({
                            "given": component.name.given,
                            "family": component.name.family,
                            "title": document.title_for(&component.name),
                            "dependencies": component.dependencies.len(),
                        })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&components)?);
            }
        }
        Ok(())
    }
}
