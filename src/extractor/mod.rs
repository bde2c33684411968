//! Document-to-descriptor extraction.
//!
//! The extractor is a pure read pass over a document snapshot: for every
//! component it produces one [`PackageWithPath`] — the package descriptor
//! plus its output directory relative to the workspace root. All dependency
//! edges are resolved here from stored names to concrete target-to-target
//! references; a target of type `T` on the dependent depends only on what
//! the edge maps `T` to (local edges) or on the remote product when the edge
//! enables `T` (remote edges).
//!
//! Edges naming a component that no longer exists in the document are
//! skipped — names are references, not aliases, and `validate` reports the
//! dangling ones. A module type absent from the project configuration is
//! still emitted (without a test pairing): configuration changes never strip
//! declared modules.

use tracing::debug;

use crate::document::{
    Component, ComponentDependency, Document, ExternalProduct, Family, TargetSlot,
};
use crate::manifest::{
    PackageDependency, PackageDescriptor, PackageWithPath, ProductDescriptor, ResourceDescriptor,
    TargetDependency, TargetDescriptor,
};

/// Extracts descriptors for every component in the document.
#[must_use]
pub fn extract_document(document: &Document) -> Vec<PackageWithPath> {
    let packages: Vec<PackageWithPath> = document
        .families
        .iter()
        .flat_map(|group| {
            group
                .components
                .iter()
                .map(|component| extract_component(document, &group.family, component))
        })
        .collect();
    debug!(count = packages.len(), "extracted package descriptors");
    packages
}

/// Extracts the descriptor and output path for a single component.
#[must_use]
pub fn extract_component(
    document: &Document,
    family: &Family,
    component: &Component,
) -> PackageWithPath {
    let title = document.title_for(&component.name);
    let path = format!("{}/{}", family.output_folder(), title);

    let mut products = Vec::new();
    let mut targets = Vec::new();
    let mut package_dependencies = Vec::new();

    for (module_type, linkage) in &component.modules {
        let target_name = format!("{title}{module_type}");

        products.push(ProductDescriptor {
            name: target_name.clone(),
            linkage: *linkage,
            targets: vec![target_name.clone()],
        });

        let slot = TargetSlot::new(module_type.clone());
        let (dependencies, contributed) = slot_dependencies(document, component, &slot);
        package_dependencies.extend(contributed);
        targets.push(TargetDescriptor {
            name: target_name.clone(),
            is_test: false,
            dependencies,
            resources: resources_for(component, &slot),
        });

        if document.project_configuration.has_tests(module_type) {
            let slot = TargetSlot::tests(module_type.clone());
            let (mut dependencies, contributed) = slot_dependencies(document, component, &slot);
            // A test target always exercises its non-test sibling
            dependencies.push(TargetDependency::Name(target_name.clone()));
            package_dependencies.extend(contributed);
            targets.push(TargetDescriptor {
                name: format!("{target_name}Tests"),
                is_test: true,
                dependencies,
                resources: resources_for(component, &slot),
            });
        }
    }

    PackageWithPath {
        package: PackageDescriptor {
            name: title,
            ios_version: component.ios_version,
            macos_version: component.macos_version,
            products,
            dependencies: package_dependencies,
            targets,
        },
        path,
    }
}

/// Resolves the dependency entries of one target slot, returning the
/// target-level references plus the package-level entries they require.
fn slot_dependencies(
    document: &Document,
    component: &Component,
    slot: &TargetSlot,
) -> (Vec<TargetDependency>, Vec<PackageDependency>) {
    let mut dependencies = Vec::new();
    let mut contributed = Vec::new();

    for edge in &component.dependencies {
        match edge {
            ComponentDependency::Local(local) => {
                let Some(mapped) = local.target_types.get(slot) else {
                    continue;
                };
                if document.get_component(&local.name).is_none() {
                    debug!(
                        dependent = %component.name,
                        dependency = %local.name,
                        "skipping dangling local dependency"
                    );
                    continue;
                }
                let dep_title = document.title_for(&local.name);
                let dep_folder = document
                    .family_for(&local.name)
                    .map_or_else(|| local.name.family.clone(), |f| f.output_folder().to_string());
                dependencies.push(TargetDependency::Name(format!("{dep_title}{mapped}")));
                contributed.push(PackageDependency::Local {
                    path: format!("../../{dep_folder}/{dep_title}"),
                });
            }
            ComponentDependency::Remote(remote) => {
                if !remote.target_types.contains(slot) {
                    continue;
                }
                let (name, package) = match &remote.product {
                    ExternalProduct::Name(name) => (name.clone(), None),
                    ExternalProduct::Product {
                        name,
                        package,
                    } => (name.clone(), Some(package.clone())),
                };
                dependencies.push(TargetDependency::Product {
                    name,
                    package,
                });
                contributed.push(PackageDependency::Remote {
                    url: remote.url.clone(),
                    version: remote.version.clone(),
                });
            }
        }
    }

    (dependencies, contributed)
}

fn resources_for(component: &Component, slot: &TargetSlot) -> Vec<ResourceDescriptor> {
    component
        .resources
        .iter()
        .filter(|rule| rule.targets.contains(slot))
        .map(|rule| ResourceDescriptor {
            folder_name: rule.folder_name.clone(),
            kind: rule.kind,
        })
        .collect()
}
