//! Core types and error handling for modforge.
//!
//! This module anchors the type system shared by the rest of the crate:
//! the strongly-typed error enum, the user-facing error context, and the
//! conversion helper the CLI uses to render failures with suggestions.

pub mod error;

pub use error::{ErrorContext, ModforgeError, user_friendly_error};
