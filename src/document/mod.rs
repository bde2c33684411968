//! The catalog document: the mutable graph of families, components, and
//! dependency edges.
//!
//! A [`Document`] is owned exclusively by one editing session. All mutation
//! is synchronous and in-place through the operations in [`mutations`], each
//! of which re-establishes the document's sort-order and referential
//! invariants before returning. Generation is a pure read pass over a
//! snapshot — callers clone the document (value semantics) before handing it
//! to the extractor if edits may happen concurrently.
//!
//! Cross-references between components are stored as [`Name`] values and
//! resolved by lookup, never as direct aliases, so removing a component can
//! never dangle a pointer — at worst an edge refers to a name that no longer
//! exists, which generation skips and `validate` reports.
//!
//! Lookups are linear scans over families and components. Documents are
//! small (tens to low hundreds of components), so no secondary index is
//! maintained.

pub mod component;
pub mod dependency;
pub mod io;
pub mod mutations;
pub mod name;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::config::ProjectConfiguration;

pub use component::{
    Component, IosVersion, LibraryLinkage, MacosVersion, ResourceKind, ResourceRule,
};
pub use dependency::{
    ComponentDependency, ExternalProduct, ExternalVersion, LocalDependency, RemoteDependency,
    TargetSlot,
};
pub use name::Name;

/// A naming and grouping scope for components.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Family {
    /// Family name, unique document-wide
    pub name: String,
    /// When set, component display names drop the family suffix
    #[serde(default)]
    pub ignore_suffix: bool,
    /// Output folder override; the family name is used when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder: Option<String>,
    /// Families whose components are hidden from this family's dependency
    /// pickers. Directional, and not enforced during generation.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub excluded_families: Vec<String>,
    /// Family-level default dependency mapping, second stop of the
    /// component → family → project cascade
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub default_dependencies: BTreeMap<TargetSlot, String>,
}

impl Family {
    /// A fresh family with defaults: suffix kept, no folder override.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ignore_suffix: false,
            folder: None,
            excluded_families: Vec::new(),
            default_dependencies: BTreeMap::new(),
        }
    }

    /// The on-disk folder for this family's packages.
    #[must_use]
    pub fn output_folder(&self) -> &str {
        self.folder.as_deref().filter(|f| !f.is_empty()).unwrap_or(&self.name)
    }
}

/// A family together with its components, sorted by full name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyGroup {
    /// The family itself
    pub family: Family,
    /// Components in the family, sorted by `name.full()`
    pub components: Vec<Component>,
}

/// A remote package registered document-wide, offered by the editing
/// surface as a dependency candidate for any component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteComponent {
    /// Repository URL, unique within the document
    pub url: String,
    /// Default version requirement for new edges to this package
    pub version: ExternalVersion,
}

/// Root of the catalog: families with their components, the registered
/// remote packages, and the project configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Family groups, sorted by family name
    #[serde(default)]
    pub families: Vec<FamilyGroup>,
    /// Registered remote packages, sorted by URL
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub remote_components: Vec<RemoteComponent>,
    /// Project-wide configuration
    #[serde(default)]
    pub project_configuration: ProjectConfiguration,
}

impl Default for Document {
    fn default() -> Self {
        Self {
            families: Vec::new(),
            remote_components: Vec::new(),
            project_configuration: ProjectConfiguration::default(),
        }
    }
}

impl Document {
    /// Iterates all components across all families.
    pub fn components(&self) -> impl Iterator<Item = &Component> {
        self.families.iter().flat_map(|group| group.components.iter())
    }

    /// Looks up a family by name.
    #[must_use]
    pub fn get_family(&self, name: &str) -> Option<&Family> {
        self.families.iter().map(|group| &group.family).find(|family| family.name == name)
    }

    /// The family a component name belongs to.
    #[must_use]
    pub fn family_for(&self, name: &Name) -> Option<&Family> {
        self.get_family(&name.family)
    }

    /// Looks up a component by name.
    #[must_use]
    pub fn get_component(&self, name: &Name) -> Option<&Component> {
        self.components().find(|component| component.name == *name)
    }

    /// Whether any component carries this exact name.
    #[must_use]
    pub fn name_exists(&self, name: &Name) -> bool {
        self.components().any(|component| component.name == *name)
    }

    /// Display title for a name: the given name alone when the owning family
    /// ignores suffixes, `given + family` otherwise.
    #[must_use]
    pub fn title_for(&self, name: &Name) -> String {
        match self.family_for(name) {
            Some(family) if family.ignore_suffix => name.given.clone(),
            _ => name.full(),
        }
    }

    /// Whether `name` already has a local dependency on `dependency_name`.
    #[must_use]
    pub fn contains_dependency(&self, name: &Name, dependency_name: &Name) -> bool {
        self.get_component(name)
            .is_some_and(|component| {
                component.local_dependencies().any(|dep| dep.name == *dependency_name)
            })
    }

    // Mutation plumbing: find-then-mutate-in-place, silent no-op when the
    // name cannot be found.

    pub(crate) fn with_component<R>(
        &mut self,
        name: &Name,
        f: impl FnOnce(&mut Component) -> R,
    ) -> Option<R> {
        self.families
            .iter_mut()
            .flat_map(|group| group.components.iter_mut())
            .find(|component| component.name == *name)
            .map(f)
    }

    pub(crate) fn with_family<R>(
        &mut self,
        name: &str,
        f: impl FnOnce(&mut Family) -> R,
    ) -> Option<R> {
        self.families
            .iter_mut()
            .map(|group| &mut group.family)
            .find(|family| family.name == name)
            .map(f)
    }

    /// Re-establishes every sort invariant: families by name, components by
    /// full name, dependencies by their total order, remote components by
    /// URL.
    pub fn sort_all(&mut self) {
        for group in &mut self.families {
            group.components.sort_by(|a, b| a.name.cmp(&b.name));
            for component in &mut group.components {
                component.sort_dependencies();
            }
            group.family.excluded_families.sort();
        }
        self.families.sort_by(|a, b| a.family.name.cmp(&b.family.name));
        self.remote_components.sort_by(|a, b| a.url.cmp(&b.url));
    }
}
