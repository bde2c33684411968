//! Dependency edges between components and to external packages.
//!
//! A component's dependency list is a closed sum type with two variants:
//! [`LocalDependency`] references another component in the same document by
//! name (never by direct aliasing), [`RemoteDependency`] references an
//! externally hosted package by URL and version. The list is kept in a total
//! order — locals before remotes, locals by full name, remotes by URL — and
//! the order is re-established after every mutation rather than left to
//! insertion order.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use super::name::Name;

/// Reference to a build target type, optionally its paired test variant.
///
/// Serialized as a plain string — `"Implementation"` for the regular target,
/// `"Implementation#tests"` for the paired test target — because JSON object
/// keys must be strings and slots are used as mapping keys throughout the
/// document.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TargetSlot {
    /// Target type name as declared in the project configuration
    pub name: String,
    /// Whether this refers to the paired test target
    pub tests: bool,
}

impl TargetSlot {
    /// Slot for the regular target of a type.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tests: false,
        }
    }

    /// Slot for the paired test target of a type.
    pub fn tests(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tests: true,
        }
    }
}

impl fmt::Display for TargetSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.tests {
            write!(f, "{}#tests", self.name)
        } else {
            write!(f, "{}", self.name)
        }
    }
}

impl FromStr for TargetSlot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.strip_suffix("#tests") {
            Some(name) if !name.is_empty() => Ok(Self::tests(name)),
            None if !s.is_empty() => Ok(Self::new(s)),
            _ => Err(format!("invalid target slot: '{s}'")),
        }
    }
}

impl Ord for TargetSlot {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name).then_with(|| self.tests.cmp(&other.tests))
    }
}

impl PartialOrd for TargetSlot {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Serialize for TargetSlot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for TargetSlot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}

/// Version requirement for a remote dependency.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExternalVersion {
    /// Minimum version, resolved upward within the same major
    From(String),
    /// Track a branch head
    Branch(String),
    /// Pin an exact version
    Exact(String),
}

impl ExternalVersion {
    /// The user-editable string portion of the requirement.
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::From(v) | Self::Branch(v) | Self::Exact(v) => v,
        }
    }

    /// Replaces the string portion, keeping the requirement kind.
    #[must_use]
    pub fn with_value(&self, value: impl Into<String>) -> Self {
        match self {
            Self::From(_) => Self::From(value.into()),
            Self::Branch(_) => Self::Branch(value.into()),
            Self::Exact(_) => Self::Exact(value.into()),
        }
    }
}

/// Product reference within a remote package.
///
/// Most packages expose a product with the package's own name; the `Product`
/// variant covers packages whose product name differs from the package name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExternalProduct {
    /// Product named like the package
    Name(String),
    /// Product and owning package named separately
    Product {
        /// Product name
        name: String,
        /// Package name the product belongs to
        package: String,
    },
}

impl ExternalProduct {
    /// The product name as referenced from a target's dependency list.
    #[must_use]
    pub fn product_name(&self) -> &str {
        match self {
            Self::Name(name)
            | Self::Product {
                name, ..
            } => name,
        }
    }
}

/// Dependency on another component in the same document.
///
/// `target_types` maps a target slot on the *dependent* to the target type
/// name it consumes on the dependency — e.g. an `Implementation` slot mapped
/// to `Contract` means "my implementation links only the contract of the
/// other component". The mapping is seeded by the cascading default resolver
/// and user-editable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocalDependency {
    /// Name of the component being depended on
    pub name: Name,
    /// Per-slot mapping onto the dependency's target types
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub target_types: BTreeMap<TargetSlot, String>,
}

impl LocalDependency {
    /// Edge to `name` with an empty mapping.
    pub fn new(name: Name) -> Self {
        Self {
            name,
            target_types: BTreeMap::new(),
        }
    }
}

/// Dependency on an externally hosted package.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RemoteDependency {
    /// Repository URL
    pub url: String,
    /// Product consumed from the package
    pub product: ExternalProduct,
    /// Version requirement
    pub version: ExternalVersion,
    /// Target slots on the dependent that link this product
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub target_types: BTreeSet<TargetSlot>,
}

/// A single dependency edge: local (same document) or remote (external).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentDependency {
    /// Reference to another component in the document
    Local(LocalDependency),
    /// Reference to an external package
    Remote(RemoteDependency),
}

impl ComponentDependency {
    /// The local edge, if this is one.
    #[must_use]
    pub const fn as_local(&self) -> Option<&LocalDependency> {
        match self {
            Self::Local(dep) => Some(dep),
            Self::Remote(_) => None,
        }
    }

    /// The remote edge, if this is one.
    #[must_use]
    pub const fn as_remote(&self) -> Option<&RemoteDependency> {
        match self {
            Self::Remote(dep) => Some(dep),
            Self::Local(_) => None,
        }
    }
}

impl Ord for ComponentDependency {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Local(a), Self::Local(b)) => a
                .name
                .cmp(&b.name)
                .then_with(|| a.target_types.cmp(&b.target_types)),
            (Self::Remote(a), Self::Remote(b)) => a
                .url
                .cmp(&b.url)
                .then_with(|| a.product.cmp(&b.product))
                .then_with(|| a.version.cmp(&b.version))
                .then_with(|| a.target_types.cmp(&b.target_types)),
            // Locals sort before remotes
            (Self::Local(_), Self::Remote(_)) => Ordering::Less,
            (Self::Remote(_), Self::Local(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for ComponentDependency {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_slot_round_trip() {
        let slot = TargetSlot::new("Implementation");
        assert_eq!(slot.to_string(), "Implementation");
        assert_eq!("Implementation".parse::<TargetSlot>().unwrap(), slot);

        let tests = TargetSlot::tests("Implementation");
        assert_eq!(tests.to_string(), "Implementation#tests");
        assert_eq!("Implementation#tests".parse::<TargetSlot>().unwrap(), tests);

        assert!("".parse::<TargetSlot>().is_err());
        assert!("#tests".parse::<TargetSlot>().is_err());
    }

    #[test]
    fn test_target_slot_as_json_key() {
        let mut map = BTreeMap::new();
        map.insert(TargetSlot::new("Contract"), "Contract".to_string());
        map.insert(TargetSlot::tests("Implementation"), "Mock".to_string());

        let json = serde_json::to_string(&map).unwrap();
        let back: BTreeMap<TargetSlot, String> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, map);
    }

    #[test]
    fn test_dependency_total_order() {
        let local_a = ComponentDependency::Local(LocalDependency::new(Name::new("Alpha", "Kit")));
        let local_b = ComponentDependency::Local(LocalDependency::new(Name::new("Beta", "Kit")));
        let remote = ComponentDependency::Remote(RemoteDependency {
            url: "https://github.com/a/a.git".to_string(),
            product: ExternalProduct::Name("A".to_string()),
            version: ExternalVersion::Exact("1.0.0".to_string()),
            target_types: BTreeSet::new(),
        });

        let mut deps = vec![remote.clone(), local_b.clone(), local_a.clone()];
        deps.sort();
        assert_eq!(deps, vec![local_a, local_b, remote]);
    }

    #[test]
    fn test_external_version_value_edit() {
        let version = ExternalVersion::Branch("main".to_string());
        assert_eq!(version.value(), "main");
        let edited = version.with_value("develop");
        assert_eq!(edited, ExternalVersion::Branch("develop".to_string()));
    }
}
