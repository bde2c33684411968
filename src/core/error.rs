//! Error handling for modforge.
//!
//! The error system is built around two types:
//! - [`ModforgeError`] — strongly-typed failure cases for precise handling in code
//! - [`ErrorContext`] — a presentation wrapper that adds a user-facing
//!   suggestion and details for CLI display
//!
//! Library code returns [`ModforgeError`] (or `anyhow::Result` at I/O seams);
//! the CLI entry point funnels everything through [`user_friendly_error`] so
//! the terminal output always carries an actionable hint.
//!
//! # Taxonomy
//!
//! - *Validation errors* on component creation ([`ModforgeError::EmptyGivenName`],
//!   [`ModforgeError::EmptyFamilyName`], [`ModforgeError::DuplicateName`]) are
//!   surfaced synchronously and leave the document untouched.
//! - Update and remove operations addressing an unknown name are silent no-ops
//!   by design and never construct an error.
//! - *Generation-time errors* are aggregated into a single
//!   [`ModforgeError::GenerationFailed`]; manifests already written stay
//!   written — there is no rollback across packages.

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for modforge operations.
#[derive(Error, Debug)]
pub enum ModforgeError {
    /// A component was created with an empty given name.
    #[error("Given name cannot be empty")]
    EmptyGivenName,

    /// A component was created with an empty family name.
    #[error("Component must be part of a family")]
    EmptyFamilyName,

    /// A component with the same given/family pair already exists.
    #[error("Name '{name}' already in use")]
    DuplicateName {
        /// Full display form of the conflicting name
        name: String,
    },

    /// A named component does not exist in the document.
    #[error("Component '{name}' not found")]
    ComponentNotFound {
        /// Full display form of the missing name
        name: String,
    },

    /// Catalog document file not found.
    #[error("Catalog document modforge.json not found in current directory or any parent directory")]
    DocumentNotFound,

    /// Catalog document failed to parse.
    #[error("Invalid catalog document syntax in {file}")]
    DocumentParseError {
        /// Path to the document that failed to parse
        file: String,
        /// Specific reason for the parsing failure
        reason: String,
    },

    /// The custom post-generation script exited with a failure status.
    #[error("Custom script '{path}' failed with status {status}")]
    ScriptFailed {
        /// Path of the script that was run
        path: String,
        /// Exit status (or "signal" when terminated without one)
        status: String,
        /// Captured standard error output
        stderr: String,
    },

    /// One or more package manifests could not be generated.
    ///
    /// Generation is best-effort per package; this error carries every
    /// individual failure encountered during the pass.
    #[error("Generation failed for {} package(s)", failures.len())]
    GenerationFailed {
        /// One human-readable line per failed package
        failures: Vec<String>,
    },

    /// A dependency cycle was detected between components.
    #[error("Dependency cycle detected: {path}")]
    CycleDetected {
        /// The cycle rendered as `A → B → A`
        path: String,
    },

    /// A remote dependency carries a version string that is not valid semver.
    #[error("Invalid version '{value}' for remote dependency {url}")]
    InvalidVersion {
        /// Repository URL of the remote dependency
        url: String,
        /// The offending version string
        value: String,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization/deserialization error wrapper.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Any other failure, carried as its rendered error chain.
    #[error("{message}")]
    Other {
        /// The rendered error chain
        message: String,
    },
}

/// User-facing wrapper around a [`ModforgeError`].
///
/// Carries an optional suggestion ("what to do about it") and optional
/// details ("why this happens"), rendered with terminal colors by
/// [`ErrorContext::display`].
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying typed error
    pub error: ModforgeError,
    /// Actionable hint shown to the user
    pub suggestion: Option<String>,
    /// Additional background shown to the user
    pub details: Option<String>,
}

impl ErrorContext {
    /// Wraps an error with no suggestion or details.
    pub const fn new(error: ModforgeError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Attaches an actionable suggestion.
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Attaches background details.
    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Prints the error to stderr with terminal colors.
    pub fn display(&self) {
        eprintln!("{} {}", "error:".red().bold(), self.error);
        if let ModforgeError::GenerationFailed { failures } = &self.error {
            for failure in failures {
                eprintln!("  {} {failure}", "-".red());
            }
        }
        if let Some(details) = &self.details {
            eprintln!("\n{details}");
        }
        if let Some(suggestion) = &self.suggestion {
            eprintln!("\n{} {suggestion}", "hint:".yellow().bold());
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;
        if let Some(details) = &self.details {
            write!(f, "\n{details}")?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nhint: {suggestion}")?;
        }
        Ok(())
    }
}

/// Converts any error into an [`ErrorContext`] with a tailored suggestion.
///
/// Typed [`ModforgeError`]s get specific hints; everything else falls back to
/// a generic context that still prints the full error chain.
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    match error.downcast::<ModforgeError>() {
        Ok(err) => {
            let (suggestion, details) = match &err {
                ModforgeError::EmptyGivenName | ModforgeError::EmptyFamilyName => (
                    Some("Component names take the form '<Given> <Family>', e.g. 'Home Repository'"),
                    None,
                ),
                ModforgeError::DuplicateName { .. } => (
                    Some("Pick a different given name, or a different family"),
                    Some("The given/family pair must be unique across the whole catalog"),
                ),
                ModforgeError::ComponentNotFound { .. } => {
                    (Some("Run 'modforge list' to see the components in this catalog"), None)
                }
                ModforgeError::DocumentNotFound => (
                    Some("Run 'modforge init' to create a catalog, or pass --document"),
                    Some("modforge searches for modforge.json in the current and parent directories"),
                ),
                ModforgeError::DocumentParseError { .. } => (
                    Some("Check the JSON syntax, or restore the document from version control"),
                    None,
                ),
                ModforgeError::ScriptFailed { .. } => (
                    Some("Run the script by hand from the workspace root to reproduce the failure"),
                    Some("Generated manifests are kept; only the post-generation hook failed"),
                ),
                ModforgeError::GenerationFailed { .. } => (
                    Some("Fix the failures listed above and re-run 'modforge generate'"),
                    Some("Each package is written independently; successful manifests are kept"),
                ),
                ModforgeError::CycleDetected { .. } => (
                    Some("Break the cycle by depending on a contract target instead of an implementation"),
                    None,
                ),
                ModforgeError::InvalidVersion { .. } => {
                    (Some("Use a semantic version such as 1.2.0"), None)
                }
                _ => (None, None),
            };
            let mut ctx = ErrorContext::new(err);
            if let Some(s) = suggestion {
                ctx = ctx.with_suggestion(s);
            }
            if let Some(d) = details {
                ctx = ctx.with_details(d);
            }
            ctx
        }
        Err(other) => {
            // Preserve the chain for non-typed errors
            ErrorContext::new(ModforgeError::Other {
                message: format!("{other:#}"),
            })
        }
    }
}
