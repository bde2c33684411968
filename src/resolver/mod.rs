//! Default dependency resolution for new local edges.
//!
//! When a local dependency is added, its initial per-slot target mapping is
//! not empty: it is seeded from a cascade of default mappings, then filtered
//! against the module sets on both ends of the edge. The cascade is an
//! explicit ordered strategy chain — component, then family, then project —
//! where the first non-empty mapping wins. The result is only a starting
//! point; the edge stays user-editable afterwards.

use std::collections::BTreeMap;

use crate::config::ProjectConfiguration;
use crate::document::{Component, Family, TargetSlot};

/// Computes the initial target-type mapping for a new edge from `dependent`
/// to `dependency`.
///
/// Resolution order (first non-empty wins):
/// 1. the dependency component's own `default_dependencies`
/// 2. the dependency's family `default_dependencies`
/// 3. the project `default_dependencies`
///
/// The chosen mapping is then filtered down to entries whose slot name is a
/// module type declared on the dependent AND whose mapped value is a module
/// type declared on the dependency. Filtering never fails — an entirely
/// incompatible pair simply yields an empty mapping.
#[must_use]
pub fn resolve_default_target_types(
    dependent: &Component,
    dependency: &Component,
    dependency_family: Option<&Family>,
    project: &ProjectConfiguration,
) -> BTreeMap<TargetSlot, String> {
    let chain: [&BTreeMap<TargetSlot, String>; 3] = [
        &dependency.default_dependencies,
        dependency_family
            .map_or(&EMPTY, |family| &family.default_dependencies),
        &project.default_dependencies,
    ];

    let defaults = chain.into_iter().find(|mapping| !mapping.is_empty());
    let Some(defaults) = defaults else {
        return BTreeMap::new();
    };

    defaults
        .iter()
        .filter(|(slot, mapped)| {
            dependent.modules.contains_key(&slot.name) && dependency.modules.contains_key(*mapped)
        })
        .map(|(slot, mapped)| (slot.clone(), mapped.clone()))
        .collect()
}

static EMPTY: BTreeMap<TargetSlot, String> = BTreeMap::new();

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{LibraryLinkage, Name};

    fn component(name: &str, family: &str, modules: &[&str]) -> Component {
        let modules = modules
            .iter()
            .map(|m| ((*m).to_string(), LibraryLinkage::Undefined))
            .collect();
        Component::new(Name::new(name, family), modules)
    }

    fn slot(name: &str) -> TargetSlot {
        TargetSlot::new(name)
    }

    #[test]
    fn test_component_defaults_win() {
        let dependent = component("A", "Kit", &["Contract", "Implementation"]);
        let mut dependency = component("B", "Kit", &["Contract", "Implementation"]);
        dependency
            .default_dependencies
            .insert(slot("Implementation"), "Contract".to_string());

        let mut family = Family::new("Kit");
        family.default_dependencies.insert(slot("Implementation"), "Implementation".to_string());

        let mut project = ProjectConfiguration::default();
        project.default_dependencies.insert(slot("Implementation"), "Mock".to_string());

        let mapping =
            resolve_default_target_types(&dependent, &dependency, Some(&family), &project);
        assert_eq!(mapping.get(&slot("Implementation")), Some(&"Contract".to_string()));
    }

    #[test]
    fn test_family_defaults_beat_project() {
        let dependent = component("A", "Kit", &["Contract", "Implementation"]);
        let dependency = component("B", "Kit", &["Contract", "Implementation"]);

        let mut family = Family::new("Kit");
        family.default_dependencies.insert(slot("Implementation"), "Contract".to_string());

        let mut project = ProjectConfiguration::default();
        project.default_dependencies.insert(slot("Implementation"), "Implementation".to_string());

        let mapping =
            resolve_default_target_types(&dependent, &dependency, Some(&family), &project);
        assert_eq!(mapping.get(&slot("Implementation")), Some(&"Contract".to_string()));
    }

    #[test]
    fn test_project_defaults_as_fallback() {
        let dependent = component("A", "Kit", &["Contract", "Implementation"]);
        let dependency = component("B", "Kit", &["Contract", "Implementation"]);
        let family = Family::new("Kit");

        let mut project = ProjectConfiguration::default();
        project.default_dependencies.insert(slot("Implementation"), "Implementation".to_string());

        let mapping =
            resolve_default_target_types(&dependent, &dependency, Some(&family), &project);
        assert_eq!(mapping.get(&slot("Implementation")), Some(&"Implementation".to_string()));
    }

    #[test]
    fn test_filter_against_both_module_sets() {
        // Dependent lacks Mock, dependency lacks Contract
        let dependent = component("A", "Kit", &["Implementation"]);
        let dependency = component("B", "Kit", &["Implementation", "Mock"]);

        let mut project = ProjectConfiguration::default();
        project.default_dependencies.insert(slot("Implementation"), "Implementation".to_string());
        project.default_dependencies.insert(slot("Mock"), "Mock".to_string());
        project.default_dependencies.insert(slot("Contract"), "Contract".to_string());

        let mapping = resolve_default_target_types(&dependent, &dependency, None, &project);
        assert_eq!(mapping.len(), 1);
        assert_eq!(mapping.get(&slot("Implementation")), Some(&"Implementation".to_string()));
    }

    #[test]
    fn test_no_defaults_anywhere() {
        let dependent = component("A", "Kit", &["Implementation"]);
        let dependency = component("B", "Kit", &["Implementation"]);
        let project = ProjectConfiguration::default();

        let mapping = resolve_default_target_types(&dependent, &dependency, None, &project);
        assert!(mapping.is_empty());
    }

    #[test]
    fn test_nonempty_chain_stop_is_not_skipped_when_filtered_empty() {
        // Component-level defaults exist but filter to nothing; the cascade
        // must NOT fall through to family or project defaults — the chain
        // picks the first non-empty mapping, then filters.
        let dependent = component("A", "Kit", &["Implementation"]);
        let mut dependency = component("B", "Kit", &["Implementation"]);
        dependency.default_dependencies.insert(slot("Contract"), "Contract".to_string());

        let mut family = Family::new("Kit");
        family.default_dependencies.insert(slot("Implementation"), "Implementation".to_string());

        let project = ProjectConfiguration::default();
        let mapping =
            resolve_default_target_types(&dependent, &dependency, Some(&family), &project);
        assert!(mapping.is_empty());
    }
}
