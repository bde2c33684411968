//! Shared helpers for integration tests.

use assert_cmd::Command;
use std::path::Path;

use modforge_cli::document::Document;
use modforge_cli::document::io::DOCUMENT_FILE_NAME;

/// A `modforge` command ready to run against the built binary.
pub fn modforge() -> Command {
    Command::cargo_bin("modforge").expect("modforge binary builds")
}

/// Saves `document` as `modforge.json` inside `dir` and returns its path.
pub fn write_catalog(dir: &Path, document: &Document) -> std::path::PathBuf {
    let path = dir.join(DOCUMENT_FILE_NAME);
    document.save(&path).expect("catalog saves");
    path
}

/// Loads the catalog back from `dir`.
pub fn read_catalog(dir: &Path) -> Document {
    Document::load(&dir.join(DOCUMENT_FILE_NAME)).expect("catalog loads")
}
