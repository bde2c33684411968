//! Package manifest descriptors and their textual rendering.
//!
//! A [`PackageDescriptor`] is the extractor's output for one component: a
//! build-tool-agnostic description of the generated package with its
//! products, package-level dependencies, and targets. [`serializer`] turns a
//! descriptor into Swift Package Manager manifest text; the descriptor
//! itself carries no syntax.
//!
//! Descriptors are plain data. The serializer sorts every list immediately
//! before emission, so two descriptors that differ only in list order render
//! to identical text.

pub mod serializer;


use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::document::{ExternalVersion, IosVersion, LibraryLinkage, MacosVersion, ResourceKind};

pub use serializer::package_manifest;

/// A library product exposed by the package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDescriptor {
    /// Product name
    pub name: String,
    /// Library linkage; `Undefined` emits no explicit type
    pub linkage: LibraryLinkage,
    /// Targets folded into the product
    pub targets: Vec<String>,
}

/// A package-level dependency entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PackageDependency {
    /// Another generated package, referenced by relative path
    Local {
        /// Path relative to this package's directory
        path: String,
    },
    /// An externally hosted package
    Remote {
        /// Repository URL
        url: String,
        /// Version requirement
        version: ExternalVersion,
    },
}

impl Ord for PackageDependency {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (
                Self::Local {
                    path: a,
                },
                Self::Local {
                    path: b,
                },
            ) => a.cmp(b),
            (
                Self::Remote {
                    url: a,
                    version: va,
                },
                Self::Remote {
                    url: b,
                    version: vb,
                },
            ) => a.cmp(b).then_with(|| va.cmp(vb)),
            (Self::Local { .. }, Self::Remote { .. }) => Ordering::Less,
            (Self::Remote { .. }, Self::Local { .. }) => Ordering::Greater,
        }
    }
}

impl PartialOrd for PackageDependency {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A dependency entry on a single target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetDependency {
    /// A target or product from a workspace package, referenced by name
    Name(String),
    /// A product from a remote package
    Product {
        /// Product name
        name: String,
        /// Owning package name, when it differs from the product
        package: Option<String>,
    },
}

impl Ord for TargetDependency {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Name(a), Self::Name(b)) => a.cmp(b),
            (
                Self::Product {
                    name: a,
                    package: pa,
                },
                Self::Product {
                    name: b,
                    package: pb,
                },
            ) => a.cmp(b).then_with(|| pa.cmp(pb)),
            // Workspace references sort before remote products
            (Self::Name(_), Self::Product { .. }) => Ordering::Less,
            (Self::Product { .. }, Self::Name(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for TargetDependency {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A resource folder attached to a target.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ResourceDescriptor {
    /// Folder name relative to the target's sources
    pub folder_name: String,
    /// Copy or process
    pub kind: ResourceKind,
}

/// A build target within the package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetDescriptor {
    /// Target name
    pub name: String,
    /// Whether this is a test target
    pub is_test: bool,
    /// Dependencies of this target
    pub dependencies: Vec<TargetDependency>,
    /// Resource folders of this target
    pub resources: Vec<ResourceDescriptor>,
}

/// The manifest descriptor for one generated package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageDescriptor {
    /// Package name
    pub name: String,
    /// Minimum iOS version, when declared
    pub ios_version: Option<IosVersion>,
    /// Minimum macOS version, when declared
    pub macos_version: Option<MacosVersion>,
    /// Library products
    pub products: Vec<ProductDescriptor>,
    /// Package-level dependencies
    pub dependencies: Vec<PackageDependency>,
    /// Build targets
    pub targets: Vec<TargetDescriptor>,
}

/// A descriptor paired with its output path relative to the workspace root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageWithPath {
    /// The package descriptor
    pub package: PackageDescriptor,
    /// Relative output directory, `{family folder}/{package name}`
    pub path: String,
}
