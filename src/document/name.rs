//! Composite component names.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Composite key identifying a component: a given name inside a family.
///
/// Uniqueness of the pair is a document-wide invariant, enforced by
/// [`crate::document::Document::add_component`]. The *full* name is the
/// concatenation `given + family` and is the sort key for components and
/// local dependencies; the *display* name additionally honors the owning
/// family's suffix-ignoring flag (see [`crate::document::Document::title_for`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Name {
    /// Given name, e.g. `Home`
    pub given: String,
    /// Family name, e.g. `Repository`
    pub family: String,
}

impl Name {
    /// Creates a name from its two parts.
    pub fn new(given: impl Into<String>, family: impl Into<String>) -> Self {
        Self {
            given: given.into(),
            family: family.into(),
        }
    }

    /// The full name: `given + family`, independent of display settings.
    #[must_use]
    pub fn full(&self) -> String {
        format!("{}{}", self.given, self.family)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.given, self.family)
    }
}

impl Ord for Name {
    fn cmp(&self, other: &Self) -> Ordering {
        // Full-name order first so "AbC" and "A" + "bC" collate identically,
        // with the pair itself as a deterministic tie-break.
        self.full()
            .cmp(&other.full())
            .then_with(|| self.given.cmp(&other.given))
            .then_with(|| self.family.cmp(&other.family))
    }
}

impl PartialOrd for Name {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
