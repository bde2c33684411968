//! Shared helpers for CLI commands.

use anyhow::Result;
use std::path::PathBuf;

use crate::document::io::find_document;
use crate::document::{Document, Name};

/// Resolves the catalog path: an explicit `--document` value wins, otherwise
/// the document is discovered from the working directory upwards.
pub fn resolve_document_path(explicit: Option<PathBuf>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path),
        None => find_document(&std::env::current_dir()?),
    }
}

/// The closest existing component name to `name`, for "did you mean" hints.
///
/// Compares against full names with a similarity floor so wildly different
/// names don't produce nonsense suggestions.
#[must_use]
pub fn closest_component(document: &Document, name: &Name) -> Option<String> {
    let wanted = name.full();
    document
        .components()
        .map(|component| {
            let candidate = component.name.full();
            (strsim::jaro_winkler(&wanted, &candidate), candidate)
        })
        .filter(|(score, _)| *score > 0.8)
        .max_by(|(a, _), (b, _)| a.total_cmp(b))
        .map(|(_, candidate)| candidate)
}
