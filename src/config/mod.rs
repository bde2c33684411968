//! Project-wide configuration for a catalog document.
//!
//! [`ProjectConfiguration`] declares the target types every component can
//! carry, the project-level default dependency mapping, and the optional
//! post-generation script. During a generation pass it acts as a read-only
//! store: the extractor and resolver receive it explicitly — there is no
//! process-wide configuration singleton.
//!
//! Malformed configuration (for example duplicate target-type names) is a
//! caller responsibility; nothing here validates it.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::document::dependency::TargetSlot;

/// A declared target type, e.g. `Contract` or `Implementation`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageConfiguration {
    /// Target type name
    pub name: String,
    /// Whether components grow an implicit paired test target for this type
    #[serde(default)]
    pub has_tests: bool,
}

/// Project-wide settings, immutable for the duration of a generation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfiguration {
    /// Declared target types, in their configured order
    pub package_configurations: Vec<PackageConfiguration>,
    /// Project-level default dependency mapping, the last stop of the
    /// component → family → project cascade
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub default_dependencies: BTreeMap<TargetSlot, String>,
    /// Shell script run once after every generation pass, relative to the
    /// workspace root
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_script_path: Option<String>,
}

impl ProjectConfiguration {
    /// The declared target types.
    #[must_use]
    pub fn target_types(&self) -> &[PackageConfiguration] {
        &self.package_configurations
    }

    /// Project-level default dependency for a slot, if configured.
    #[must_use]
    pub fn default_dependency(&self, slot: &TargetSlot) -> Option<&str> {
        self.default_dependencies.get(slot).map(String::as_str)
    }

    /// Whether the named target type carries a paired test target.
    ///
    /// Types absent from the configuration answer `false`: components may
    /// still declare them (configuration changes never strip modules), they
    /// just don't get a test pairing.
    #[must_use]
    pub fn has_tests(&self, type_name: &str) -> bool {
        self.package_configurations.iter().any(|config| config.name == type_name && config.has_tests)
    }
}

impl Default for ProjectConfiguration {
    fn default() -> Self {
        Self {
            package_configurations: vec![
                PackageConfiguration {
                    name: "Contract".to_string(),
                    has_tests: false,
                },
                PackageConfiguration {
                    name: "Implementation".to_string(),
                    has_tests: true,
                },
                PackageConfiguration {
                    name: "Mock".to_string(),
                    has_tests: false,
                },
            ],
            default_dependencies: BTreeMap::new(),
            custom_script_path: None,
        }
    }
}
