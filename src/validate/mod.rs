//! Document diagnostics.
//!
//! Generation itself is forgiving: dangling names are skipped, exclusion
//! rules only filter editing candidates, and dependency cycles are left for
//! the consuming build tool to reject. This module is the strict
//! counterpart: it walks a document and reports everything a forgiving
//! generation pass would paper over, so catalogs can be kept clean before
//! the damage surfaces in generated manifests.
//!
//! Cycle detection is opt-in and uses a colored depth-first search over a
//! directed component graph; the reported path closes the loop
//! (`A → B → A`).

use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::HashMap;
use std::fmt;

use crate::core::ModforgeError;
use crate::document::{ComponentDependency, Document, ExternalVersion, Name};

/// Diagnostic severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Will produce broken or missing manifest references
    Error,
    /// Suspicious but generable
    Warning,
}

/// A single finding from a validation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Error or warning
    pub severity: Severity,
    /// Human-readable description
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.severity {
            Severity::Error => write!(f, "error: {}", self.message),
            Severity::Warning => write!(f, "warning: {}", self.message),
        }
    }
}

/// Accumulated findings from one validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// All findings, in document order
    pub diagnostics: Vec<Diagnostic>,
}

impl ValidationReport {
    /// Whether any finding is an error.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity == Severity::Error)
    }

    /// Count of error-severity findings.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.severity == Severity::Error).count()
    }

    /// Count of warning-severity findings.
    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.severity == Severity::Warning).count()
    }

    fn error(&mut self, message: String) {
        self.diagnostics.push(Diagnostic {
            severity: Severity::Error,
            message,
        });
    }

    fn warning(&mut self, message: String) {
        self.diagnostics.push(Diagnostic {
            severity: Severity::Warning,
            message,
        });
    }
}

/// Validates a document, optionally including cycle detection.
#[must_use]
pub fn validate_document(document: &Document, check_cycles: bool) -> ValidationReport {
    let mut report = ValidationReport::default();

    check_unique_names(document, &mut report);
    check_dependencies(document, &mut report);
    check_remote_registry(document, &mut report);
    if check_cycles {
        check_component_cycles(document, &mut report);
    }

    report
}

fn check_remote_registry(document: &Document, report: &mut ValidationReport) {
    for remote in &document.remote_components {
        let version = match &remote.version {
            ExternalVersion::From(v) | ExternalVersion::Exact(v) => v,
            ExternalVersion::Branch(_) => continue,
        };
        if semver::Version::parse(version).is_err() {
            report.error(
                ModforgeError::InvalidVersion {
                    url: remote.url.clone(),
                    value: version.clone(),
                }
                .to_string(),
            );
        }
    }
}

fn check_unique_names(document: &Document, report: &mut ValidationReport) {
    let mut seen: HashMap<&Name, usize> = HashMap::new();
    for component in document.components() {
        *seen.entry(&component.name).or_default() += 1;
    }
    for (name, count) in seen {
        if count > 1 {
            report.error(format!("component name '{}' is declared {count} times", name.full()));
        }
    }
}

fn check_dependencies(document: &Document, report: &mut ValidationReport) {
    for group in &document.families {
        for component in &group.components {
            let title = document.title_for(&component.name);
            for edge in &component.dependencies {
                match edge {
                    ComponentDependency::Local(local) => {
                        let Some(dependency) = document.get_component(&local.name) else {
                            report.error(format!(
                                "{title} depends on '{}', which does not exist",
                                local.name.full()
                            ));
                            continue;
                        };
                        for (slot, mapped) in &local.target_types {
                            if !component.modules.contains_key(&slot.name) {
                                report.warning(format!(
                                    "{title} maps target type '{slot}' it does not declare"
                                ));
                            }
                            if !dependency.modules.contains_key(mapped) {
                                report.warning(format!(
                                    "{title} expects target type '{mapped}' on '{}', which does not declare it",
                                    local.name.full()
                                ));
                            }
                        }
                        if group.family.excluded_families.contains(&local.name.family) {
                            report.warning(format!(
                                "{title} depends on '{}' across the exclusion of family '{}'",
                                local.name.full(),
                                local.name.family
                            ));
                        }
                    }
                    ComponentDependency::Remote(remote) => {
                        let version = match &remote.version {
                            ExternalVersion::From(v) | ExternalVersion::Exact(v) => Some(v),
                            ExternalVersion::Branch(_) => None,
                        };
                        if let Some(version) = version
                            && semver::Version::parse(version).is_err()
                        {
                            report.error(
                                ModforgeError::InvalidVersion {
                                    url: remote.url.clone(),
                                    value: version.clone(),
                                }
                                .to_string(),
                            );
                        }
                    }
                }
            }
        }
    }
}

/// Color states for the cycle-detecting depth-first search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    White,
    Gray,
    Black,
}

fn check_component_cycles(document: &Document, report: &mut ValidationReport) {
    let mut graph: DiGraph<Name, ()> = DiGraph::new();
    let mut node_map: HashMap<Name, NodeIndex> = HashMap::new();

    let mut ensure_node = |graph: &mut DiGraph<Name, ()>, name: &Name| {
        *node_map
            .entry(name.clone())
            .or_insert_with(|| graph.add_node(name.clone()))
    };

    for component in document.components() {
        let from = ensure_node(&mut graph, &component.name);
        for local in component.local_dependencies() {
            if document.get_component(&local.name).is_none() {
                continue;
            }
            let to = ensure_node(&mut graph, &local.name);
            if !graph.contains_edge(from, to) {
                graph.add_edge(from, to, ());
            }
        }
    }

    let mut colors: HashMap<NodeIndex, Color> =
        graph.node_indices().map(|node| (node, Color::White)).collect();
    let mut path: Vec<NodeIndex> = Vec::new();

    for node in graph.node_indices() {
        if colors[&node] == Color::White
            && let Some(cycle) = dfs_visit(&graph, node, &mut colors, &mut path)
        {
            let rendered =
                cycle.iter().map(|idx| graph[*idx].full()).collect::<Vec<_>>().join(" → ");
            report.error(
                ModforgeError::CycleDetected {
                    path: rendered,
                }
                .to_string(),
            );
            return;
        }
    }
}

fn dfs_visit(
    graph: &DiGraph<Name, ()>,
    node: NodeIndex,
    colors: &mut HashMap<NodeIndex, Color>,
    path: &mut Vec<NodeIndex>,
) -> Option<Vec<NodeIndex>> {
    colors.insert(node, Color::Gray);
    path.push(node);

    for neighbor in graph.neighbors(node) {
        match colors.get(&neighbor) {
            Some(Color::Gray) => {
                // Close the loop from where the cycle starts
                let start = path.iter().position(|n| *n == neighbor).unwrap();
                let mut cycle = path[start..].to_vec();
                cycle.push(neighbor);
                return Some(cycle);
            }
            Some(Color::White) => {
                if let Some(cycle) = dfs_visit(graph, neighbor, colors, path) {
                    return Some(cycle);
                }
            }
            _ => {}
        }
    }

    path.pop();
    colors.insert(node, Color::Black);
    None
}
