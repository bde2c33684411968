//! Cross-cutting utilities.
//!
//! Currently limited to file system helpers; see [`fs`].

pub mod fs;
