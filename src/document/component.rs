//! Components, their modules, resources, and platform settings.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use super::dependency::{ComponentDependency, LocalDependency, RemoteDependency, TargetSlot};
use super::name::Name;

/// Minimum iOS deployment version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IosVersion {
    V13,
    V14,
    V15,
    V16,
    V17,
}

impl IosVersion {
    /// Version name as used in manifest platform declarations.
    #[must_use]
    pub const fn manifest_name(self) -> &'static str {
        match self {
            Self::V13 => "v13",
            Self::V14 => "v14",
            Self::V15 => "v15",
            Self::V16 => "v16",
            Self::V17 => "v17",
        }
    }
}

/// Minimum macOS deployment version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MacosVersion {
    V12,
    V13,
    V14,
}

impl MacosVersion {
    /// Version name as used in manifest platform declarations.
    #[must_use]
    pub const fn manifest_name(self) -> &'static str {
        match self {
            Self::V12 => "v12",
            Self::V13 => "v13",
            Self::V14 => "v14",
        }
    }
}

/// Library linkage for a module's product.
///
/// `Undefined` leaves the choice to the consumer: no explicit linkage is
/// emitted in the manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LibraryLinkage {
    Static,
    Dynamic,
    Undefined,
}

/// How a resource folder is handled by the build tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Copy,
    Process,
}

/// A resource folder declaration attached to one or more targets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRule {
    /// Stable identifier, minted as a UUID v4 at creation
    pub id: String,
    /// Folder name relative to the target's sources
    pub folder_name: String,
    /// Copy or process
    pub kind: ResourceKind,
    /// Target slots the resource attaches to
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub targets: BTreeSet<TargetSlot>,
}

impl ResourceRule {
    /// New rule for a folder, processed by default and attached to no target.
    pub fn new(folder_name: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            folder_name: folder_name.into(),
            kind: ResourceKind::Process,
            targets: BTreeSet::new(),
        }
    }
}

/// A named unit of functionality, mapped to one generated package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    /// Composite name, unique document-wide
    pub name: Name,
    /// Minimum iOS version, emitted in the manifest's platforms when set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ios_version: Option<IosVersion>,
    /// Minimum macOS version, emitted in the manifest's platforms when set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub macos_version: Option<MacosVersion>,
    /// Declared target types and their library linkage
    #[serde(default)]
    pub modules: BTreeMap<String, LibraryLinkage>,
    /// Dependency edges, kept in total order (locals before remotes)
    #[serde(default)]
    pub dependencies: Vec<ComponentDependency>,
    /// Resource folder declarations
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<ResourceRule>,
    /// Component-level default dependency mapping, first stop of the
    /// component → family → project cascade
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub default_dependencies: BTreeMap<TargetSlot, String>,
}

impl Component {
    /// Creates a component with the given module set and no dependencies.
    pub fn new(name: Name, modules: BTreeMap<String, LibraryLinkage>) -> Self {
        Self {
            name,
            ios_version: None,
            macos_version: None,
            modules,
            dependencies: Vec::new(),
            resources: Vec::new(),
            default_dependencies: BTreeMap::new(),
        }
    }

    /// Iterates the local dependency edges.
    pub fn local_dependencies(&self) -> impl Iterator<Item = &LocalDependency> {
        self.dependencies.iter().filter_map(ComponentDependency::as_local)
    }

    /// Iterates the remote dependency edges.
    pub fn remote_dependencies(&self) -> impl Iterator<Item = &RemoteDependency> {
        self.dependencies.iter().filter_map(ComponentDependency::as_remote)
    }

    /// Re-establishes the dependency sort order.
    pub fn sort_dependencies(&mut self) {
        self.dependencies.sort();
    }
}
