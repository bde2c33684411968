//! modforge — deterministic Swift package manifest generation for modular
//! component catalogs.
//!
//! A catalog document (`modforge.json`) describes a workspace of components
//! grouped into families, with typed dependencies between them. modforge
//! compiles that document into one Swift Package Manager manifest per
//! component, laid out under a workspace root, with byte-identical output
//! for equivalent documents.
//!
//! # Architecture Overview
//!
//! The pipeline is document → descriptors → text → disk:
//! - [`document`] holds the mutable graph and its invariant-preserving
//!   mutation operations (sorted families, components, and dependency lists;
//!   unique component names)
//! - [`resolver`] seeds new dependency edges from the cascading
//!   component → family → project default mappings
//! - [`extractor`] reads a document snapshot and produces one package
//!   descriptor (plus output path) per component
//! - [`manifest`] renders a descriptor to canonical `Package.swift` text,
//!   sorted on every axis so list order never leaks into output
//! - [`generator`] writes the rendered manifests best-effort and runs the
//!   configured post-generation script
//! - [`validate`] reports what forgiving generation skips: dangling names,
//!   mappings onto undeclared module types, invalid versions, exclusion
//!   crossings, and (opt-in) dependency cycles
//!
//! # Determinism
//!
//! Generation is a pure read pass over a document snapshot. The same
//! document always renders to the same bytes: mutation operations
//! re-establish sort invariants, the serializer re-sorts defensively before
//! emission, and nothing in the pipeline depends on hash ordering or clocks.
//!
//! # Core Modules
//!
//! - [`cli`] - Command-line interface (`init`, `add`, `remove`, `list`,
//!   `validate`, `generate`)
//! - [`config`] - Project configuration: target types and default
//!   dependency policies
//! - [`core`] - Error types and user-facing error contexts
//! - [`document`] - The catalog document model and its persistence
//! - [`extractor`] - Document-to-descriptor extraction
//! - [`generator`] - Manifest writing and the script hook
//! - [`manifest`] - Package descriptors and their serializer
//! - [`resolver`] - Cascading default dependency resolution
//! - [`utils`] - File system helpers
//! - [`validate`] - Document diagnostics
//!
//! # Example
//!
//! ```rust
//! use modforge_cli::document::{Document, Name};
//! use modforge_cli::extractor::extract_document;
//! use modforge_cli::manifest::package_manifest;
//!
//! let mut document = Document::default();
//! document.add_component(Name::new("Home", "Feature"), None)?;
//! document.add_component(Name::new("Home", "Repository"), None)?;
//! document.add_local_dependency(
//!     &Name::new("Home", "Feature"),
//!     &Name::new("Home", "Repository"),
//! );
//!
//! for package in extract_document(&document) {
//!     let text = package_manifest(&package.package);
//!     assert!(text.starts_with("// swift-tools-version"));
//! }
//! # Ok::<(), modforge_cli::core::ModforgeError>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod document;
pub mod extractor;
pub mod generator;
pub mod manifest;
pub mod resolver;
pub mod utils;
pub mod validate;
