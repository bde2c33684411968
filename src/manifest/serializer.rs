//! Deterministic rendering of package descriptors to manifest text.
//!
//! [`package_manifest`] is a pure function from descriptor to `Package.swift`
//! source. Output is canonical: products, dependencies, targets, and each
//! target's dependency and resource lists are sorted immediately before
//! emission, regardless of the order the descriptor arrived in, and platform
//! declarations always emit iOS before macOS. Repeated rendering of
//! equivalent descriptors is byte-identical.
//!
//! No escaping is performed — names containing manifest-breaking characters
//! are an input-validation concern upstream of this module.

use std::fmt::Write as _;

use crate::document::{ExternalVersion, LibraryLinkage};

use super::{
    PackageDependency, PackageDescriptor, ProductDescriptor, ResourceDescriptor, TargetDependency,
    TargetDescriptor,
};

const TOOLS_VERSION_HEADER: &str = "// swift-tools-version:5.9\n\
     // The swift-tools-version declares the minimum version of Swift required to build this package.\n";

/// Renders a descriptor to Swift Package Manager manifest text.
#[must_use]
pub fn package_manifest(package: &PackageDescriptor) -> String {
    let mut out = String::new();

    out.push_str(TOOLS_VERSION_HEADER);
    out.push_str("\nimport PackageDescription\n\n");
    out.push_str("let package = Package(\n");
    let _ = writeln!(out, "    name: \"{}\",", package.name);

    if package.ios_version.is_some() || package.macos_version.is_some() {
        out.push_str("    platforms: [\n");
        if let Some(ios) = package.ios_version {
            let _ = writeln!(out, "        .iOS(.{}),", ios.manifest_name());
        }
        if let Some(macos) = package.macos_version {
            let _ = writeln!(out, "        .macOS(.{}),", macos.manifest_name());
        }
        out.push_str("    ],\n");
    }

    out.push_str("    products: [\n");
    let mut products = package.products.clone();
    products.sort_by(|a, b| a.name.cmp(&b.name));
    for product in &products {
        product_string(&mut out, product);
    }
    out.push_str("    ],\n");

    out.push_str("    dependencies: [\n");
    let mut dependencies = package.dependencies.clone();
    dependencies.sort();
    dependencies.dedup();
    for dependency in &dependencies {
        package_dependency_string(&mut out, dependency);
    }
    out.push_str("    ],\n");

    out.push_str("    targets: [\n");
    let mut targets = package.targets.clone();
    targets.sort_by(|a, b| a.name.cmp(&b.name));
    for target in &targets {
        target_string(&mut out, target);
    }
    out.push_str("    ]\n)\n");

    out
}

fn product_string(out: &mut String, product: &ProductDescriptor) {
    out.push_str("        .library(\n");
    let _ = writeln!(out, "            name: \"{}\",", product.name);
    match product.linkage {
        LibraryLinkage::Static => out.push_str("            type: .static,\n"),
        LibraryLinkage::Dynamic => out.push_str("            type: .dynamic,\n"),
        LibraryLinkage::Undefined => {}
    }
    let mut targets = product.targets.clone();
    targets.sort();
    let quoted: Vec<String> = targets.iter().map(|t| format!("\"{t}\"")).collect();
    let _ = writeln!(out, "            targets: [{}]),", quoted.join(", "));
}

fn package_dependency_string(out: &mut String, dependency: &PackageDependency) {
    match dependency {
        PackageDependency::Local {
            path,
        } => {
            let _ = writeln!(out, "        .package(path: \"{path}\"),");
        }
        PackageDependency::Remote {
            url,
            version,
        } => {
            let requirement = match version {
                ExternalVersion::From(v) => format!("from: \"{v}\""),
                ExternalVersion::Branch(b) => format!("branch: \"{b}\""),
                ExternalVersion::Exact(v) => format!("exact: \"{v}\""),
            };
            let _ = writeln!(out, "        .package(url: \"{url}\", {requirement}),");
        }
    }
}

fn target_dependency_string(out: &mut String, dependency: &TargetDependency) {
    match dependency {
        TargetDependency::Name(name) => {
            let _ = writeln!(out, "                \"{name}\",");
        }
        TargetDependency::Product {
            name,
            package: Some(package),
        } => {
            let _ = writeln!(
                out,
                "                .product(name: \"{name}\", package: \"{package}\"),"
            );
        }
        TargetDependency::Product {
            name,
            package: None,
        } => {
            let _ = writeln!(out, "                \"{name}\",");
        }
    }
}

fn target_string(out: &mut String, target: &TargetDescriptor) {
    if target.is_test {
        out.push_str("        .testTarget(\n");
    } else {
        out.push_str("        .target(\n");
    }
    let _ = writeln!(out, "            name: \"{}\",", target.name);
    out.push_str("            dependencies: [\n");
    let mut dependencies = target.dependencies.clone();
    dependencies.sort();
    dependencies.dedup();
    for dependency in &dependencies {
        target_dependency_string(out, dependency);
    }
    out.push_str("            ]");

    if target.resources.is_empty() {
        out.push_str("),\n");
        return;
    }

    out.push_str(",\n            resources: [\n");
    let mut resources = target.resources.clone();
    resources.sort();
    for resource in &resources {
        resource_string(out, resource);
    }
    out.push_str("            ]),\n");
}

fn resource_string(out: &mut String, resource: &ResourceDescriptor) {
    let call = match resource.kind {
        crate::document::ResourceKind::Copy => "copy",
        crate::document::ResourceKind::Process => "process",
    };
    let _ = writeln!(out, "                .{call}(\"{}\"),", resource.folder_name);
}
