//! Catalog document persistence.
//!
//! The in-memory graph is the persisted content: documents are serialized
//! as a whole to pretty-printed JSON (`modforge.json`), never incrementally.
//! Loading re-establishes the sort invariants so hand-edited or
//! out-of-order documents normalize on first read, and saving is atomic so
//! an interrupted write cannot corrupt the catalog.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::core::ModforgeError;
use crate::utils::fs::{find_file_upwards, read_text_file, write_json_file};

use super::Document;

/// Default file name for catalog documents.
pub const DOCUMENT_FILE_NAME: &str = "modforge.json";

impl Document {
    /// Loads a catalog document from a JSON file.
    ///
    /// Sort invariants are re-established after parsing; the file itself is
    /// left untouched until the next [`Document::save`].
    pub fn load(path: &Path) -> Result<Self> {
        let content = read_text_file(path)?;
        let mut document: Self = serde_json::from_str(&content)
            .map_err(|e| ModforgeError::DocumentParseError {
                file: path.display().to_string(),
                reason: e.to_string(),
            })
            .with_context(|| format!("Invalid catalog document: {}", path.display()))?;
        document.sort_all();
        Ok(document)
    }

    /// Saves the document as pretty-printed JSON, atomically.
    pub fn save(&self, path: &Path) -> Result<()> {
        write_json_file(path, self)
            .with_context(|| format!("Failed to save catalog document: {}", path.display()))
    }
}

/// Finds `modforge.json` starting from `start` and walking up parent
/// directories.
///
/// # Errors
///
/// [`ModforgeError::DocumentNotFound`] when no document exists anywhere up
/// the tree.
pub fn find_document(start: &Path) -> Result<PathBuf> {
    find_file_upwards(start, DOCUMENT_FILE_NAME)
        .ok_or_else(|| ModforgeError::DocumentNotFound.into())
}
