//! Mutation operations for the catalog document.
//!
//! Every operation follows the same find-then-mutate-in-place pattern and
//! re-establishes sort order before returning. Operations addressing a name
//! that does not exist are silent no-ops — the editing surface is expected
//! to only ever request valid names. The one exception is
//! [`Document::add_component`], which validates its input and reports a
//! typed error, leaving the document unchanged on failure.

use std::collections::BTreeMap;

use crate::core::ModforgeError;
use crate::resolver::resolve_default_target_types;

use super::component::{Component, IosVersion, LibraryLinkage, MacosVersion, ResourceRule};
use super::dependency::{
    ComponentDependency, ExternalVersion, LocalDependency, RemoteDependency, TargetSlot,
};
use super::name::Name;
use super::{Document, Family, FamilyGroup, RemoteComponent};

impl Document {
    /// Adds a new component, creating its family when absent.
    ///
    /// The module set is taken from `template` when provided, otherwise
    /// defaulted from the project configuration's target types with
    /// `Undefined` linkage. Platform versions, dependencies, and resources
    /// are copied from the template; the component-level default dependency
    /// mapping always starts empty.
    ///
    /// # Errors
    ///
    /// [`ModforgeError::EmptyGivenName`], [`ModforgeError::EmptyFamilyName`],
    /// or [`ModforgeError::DuplicateName`]; the document is left unchanged.
    pub fn add_component(
        &mut self,
        name: Name,
        template: Option<&Component>,
    ) -> Result<(), ModforgeError> {
        if name.given.is_empty() {
            return Err(ModforgeError::EmptyGivenName);
        }
        if name.family.is_empty() {
            return Err(ModforgeError::EmptyFamilyName);
        }
        if self.name_exists(&name) {
            return Err(ModforgeError::DuplicateName {
                name: name.full(),
            });
        }

        let modules: BTreeMap<String, LibraryLinkage> = match template {
            Some(template) => template.modules.clone(),
            None => self
                .project_configuration
                .target_types()
                .iter()
                .map(|config| (config.name.clone(), LibraryLinkage::Undefined))
                .collect(),
        };

        let mut component = Component::new(name.clone(), modules);
        if let Some(template) = template {
            component.ios_version = template.ios_version;
            component.macos_version = template.macos_version;
            component.dependencies = template.dependencies.clone();
            component.resources = template.resources.clone();
        }

        match self.families.iter_mut().find(|group| group.family.name == name.family) {
            Some(group) => group.components.push(component),
            None => self.families.push(FamilyGroup {
                family: Family::new(name.family.clone()),
                components: vec![component],
            }),
        }

        self.sort_all();
        Ok(())
    }

    /// Removes a component; removes its family too when it becomes empty.
    pub fn remove_component(&mut self, name: &Name) {
        for group in &mut self.families {
            group.components.retain(|component| component.name != *name);
        }
        self.families.retain(|group| !group.components.is_empty());
    }

    /// Adds a local dependency edge, seeding its target mapping from the
    /// component → family → project default cascade filtered against the
    /// modules on both sides. No-op when either end is missing.
    pub fn add_local_dependency(&mut self, name: &Name, dependency_name: &Name) {
        let Some(dependency) = self.get_component(dependency_name).cloned() else {
            return;
        };
        let dependency_family = self.get_family(&dependency_name.family).cloned();
        let project = self.project_configuration.clone();

        self.with_component(name, |component| {
            let target_types = resolve_default_target_types(
                component,
                &dependency,
                dependency_family.as_ref(),
                &project,
            );
            component.dependencies.push(ComponentDependency::Local(LocalDependency {
                name: dependency_name.clone(),
                target_types,
            }));
            component.sort_dependencies();
        });
    }

    /// Adds a remote dependency edge.
    pub fn add_remote_dependency(&mut self, name: &Name, dependency: RemoteDependency) {
        self.with_component(name, |component| {
            component.dependencies.push(ComponentDependency::Remote(dependency));
            component.sort_dependencies();
        });
    }

    /// Removes a local dependency edge matching `dependency` exactly.
    pub fn remove_local_dependency(&mut self, name: &Name, dependency: &LocalDependency) {
        self.with_component(name, |component| {
            component
                .dependencies
                .retain(|dep| dep.as_local() != Some(dependency));
            component.sort_dependencies();
        });
    }

    /// Removes a remote dependency edge matching `dependency` exactly.
    pub fn remove_remote_dependency(&mut self, name: &Name, dependency: &RemoteDependency) {
        self.with_component(name, |component| {
            component
                .dependencies
                .retain(|dep| dep.as_remote() != Some(dependency));
            component.sort_dependencies();
        });
    }

    /// Sets or clears one slot entry in a local edge's target mapping.
    pub fn update_target_mapping(
        &mut self,
        name: &Name,
        dependency: &LocalDependency,
        slot: &TargetSlot,
        value: Option<String>,
    ) {
        self.with_local_dependency(name, dependency, |edge| match value {
            Some(value) => {
                edge.target_types.insert(slot.clone(), value);
            }
            None => {
                edge.target_types.remove(slot);
            }
        });
    }

    /// Enables or disables one slot in a remote edge's target set.
    pub fn update_remote_target_types(
        &mut self,
        name: &Name,
        dependency: &RemoteDependency,
        slot: &TargetSlot,
        enabled: bool,
    ) {
        self.with_remote_dependency(name, dependency, |edge| {
            if enabled {
                edge.target_types.insert(slot.clone());
            } else {
                edge.target_types.remove(slot);
            }
        });
    }

    /// Replaces a remote edge's version requirement.
    pub fn update_remote_version(
        &mut self,
        name: &Name,
        dependency: &RemoteDependency,
        version: ExternalVersion,
    ) {
        self.with_remote_dependency(name, dependency, |edge| {
            edge.version = version;
        });
    }

    /// Replaces the string portion of a remote edge's version requirement,
    /// keeping its kind (from/branch/exact).
    pub fn update_remote_version_value(
        &mut self,
        name: &Name,
        dependency: &RemoteDependency,
        value: &str,
    ) {
        self.with_remote_dependency(name, dependency, |edge| {
            edge.version = edge.version.with_value(value);
        });
    }

    /// Sets or clears the component's minimum iOS version.
    pub fn set_ios_version(&mut self, name: &Name, version: Option<IosVersion>) {
        self.with_component(name, |component| component.ios_version = version);
    }

    /// Sets or clears the component's minimum macOS version.
    pub fn set_macos_version(&mut self, name: &Name, version: Option<MacosVersion>) {
        self.with_component(name, |component| component.macos_version = version);
    }

    /// Declares a module type on the component with undefined linkage.
    pub fn add_module(&mut self, name: &Name, module_type: &str) {
        self.with_component(name, |component| {
            component.modules.insert(module_type.to_string(), LibraryLinkage::Undefined);
        });
    }

    /// Removes a module type declaration from the component.
    pub fn remove_module(&mut self, name: &Name, module_type: &str) {
        self.with_component(name, |component| {
            component.modules.remove(module_type);
        });
    }

    /// Sets the linkage of an already-declared module type. No-op when the
    /// module type is not declared.
    pub fn set_linkage(&mut self, name: &Name, module_type: &str, linkage: LibraryLinkage) {
        self.with_component(name, |component| {
            if let Some(entry) = component.modules.get_mut(module_type) {
                *entry = linkage;
            }
        });
    }

    /// Toggles a family's suffix-ignoring flag.
    pub fn update_family_ignore_suffix(&mut self, family_name: &str, ignore_suffix: bool) {
        self.with_family(family_name, |family| family.ignore_suffix = ignore_suffix);
    }

    /// Sets or clears a family's output folder override. An empty string
    /// clears the override.
    pub fn update_family_folder(&mut self, family_name: &str, folder: Option<String>) {
        self.with_family(family_name, |family| {
            family.folder = folder.filter(|f| !f.is_empty());
        });
    }

    /// Allows or excludes `other_family` as a dependency candidate source
    /// for `family_name`. Exclusion is directional and only filters picker
    /// candidates; existing edges are untouched.
    pub fn update_family_rule(&mut self, family_name: &str, other_family: &str, allowed: bool) {
        self.with_family(family_name, |family| {
            if allowed {
                family.excluded_families.retain(|excluded| excluded != other_family);
            } else if !family.excluded_families.iter().any(|excluded| excluded == other_family) {
                family.excluded_families.push(other_family.to_string());
                family.excluded_families.sort();
            }
        });
    }

    /// Sets or clears one slot of a component's default dependency mapping.
    pub fn update_component_default_dependency(
        &mut self,
        name: &Name,
        slot: &TargetSlot,
        value: Option<String>,
    ) {
        self.with_component(name, |component| match value {
            Some(value) => {
                component.default_dependencies.insert(slot.clone(), value);
            }
            None => {
                component.default_dependencies.remove(slot);
            }
        });
    }

    /// Sets or clears one slot of a family's default dependency mapping.
    pub fn update_family_default_dependency(
        &mut self,
        family_name: &str,
        slot: &TargetSlot,
        value: Option<String>,
    ) {
        self.with_family(family_name, |family| match value {
            Some(value) => {
                family.default_dependencies.insert(slot.clone(), value);
            }
            None => {
                family.default_dependencies.remove(slot);
            }
        });
    }

    /// Appends a resource rule for a folder, processed by default.
    pub fn add_resource(&mut self, name: &Name, folder_name: &str) {
        self.with_component(name, |component| {
            component.resources.push(ResourceRule::new(folder_name));
        });
    }

    /// Removes the resource rule with the given id.
    pub fn remove_resource(&mut self, name: &Name, id: &str) {
        self.with_component(name, |component| {
            component.resources.retain(|rule| rule.id != id);
        });
    }

    /// Replaces the component's resource rules wholesale.
    pub fn update_resources(&mut self, name: &Name, resources: Vec<ResourceRule>) {
        self.with_component(name, |component| component.resources = resources);
    }

    /// Registers a remote package document-wide. Registering an already
    /// known URL replaces its default version.
    pub fn add_remote_component(&mut self, url: &str, version: ExternalVersion) {
        match self.remote_components.iter_mut().find(|remote| remote.url == url) {
            Some(remote) => remote.version = version,
            None => {
                self.remote_components.push(RemoteComponent {
                    url: url.to_string(),
                    version,
                });
                self.remote_components.sort_by(|a, b| a.url.cmp(&b.url));
            }
        }
    }

    /// Unregisters a remote package. Edges already created from it are
    /// untouched.
    pub fn remove_remote_component(&mut self, url: &str) {
        self.remote_components.retain(|remote| remote.url != url);
    }

    // Edge editing follows the same pattern as component editing: locate the
    // exact edge, mutate in place, re-sort the list.

    fn with_local_dependency(
        &mut self,
        name: &Name,
        dependency: &LocalDependency,
        f: impl FnOnce(&mut LocalDependency),
    ) {
        self.with_component(name, |component| {
            let found = component.dependencies.iter_mut().find_map(|dep| match dep {
                ComponentDependency::Local(edge) if edge == dependency => Some(edge),
                _ => None,
            });
            if let Some(edge) = found {
                f(edge);
                component.sort_dependencies();
            }
        });
    }

    fn with_remote_dependency(
        &mut self,
        name: &Name,
        dependency: &RemoteDependency,
        f: impl FnOnce(&mut RemoteDependency),
    ) {
        self.with_component(name, |component| {
            let found = component.dependencies.iter_mut().find_map(|dep| match dep {
                ComponentDependency::Remote(edge) if edge == dependency => Some(edge),
                _ => None,
            });
            if let Some(edge) = found {
                f(edge);
                component.sort_dependencies();
            }
        });
    }
}
