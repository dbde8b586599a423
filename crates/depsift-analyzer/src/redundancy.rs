//! Redundancy detection: direct dependencies whose only value is what they
//! transitively pull in.

use std::collections::HashSet;

use depsift_core::{DependencyNode, DependencyTree, NodeId, RedundancyFinding, UsageReport, VersionConflict};

use crate::conflict;

/// Result of one analysis pass.
///
/// Findings come first, conflicts are appended after; renderers present
/// them in that order.
#[derive(Debug, Default)]
pub struct Analysis {
    pub findings: Vec<RedundancyFinding>,
    pub conflicts: Vec<VersionConflict>,
}

impl Analysis {
    pub fn issue_count(&self) -> usize {
        self.findings.len() + self.conflicts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.findings.is_empty() && self.conflicts.is_empty()
    }
}

/// Analyze a dependency tree against usage evidence.
///
/// Pure function of its two inputs: no I/O, no global state. The tree's
/// index must have been built; an unindexed tree yields no findings (every
/// lookup comes back empty) rather than an error.
///
/// For each entry in `unused_declared` that resolves to a direct (depth 1)
/// node, two kinds of findings are emitted when any of its descendants
/// appears in `used_undeclared`:
///
/// 1. a narrow finding per matched descendant, and
/// 2. one aggregate finding collecting all matched descendants.
///
/// Both are kept deliberately: downstream consumers of the original tool
/// saw both emission styles for the same root cause.
pub fn analyze(tree: &DependencyTree, usage: &UsageReport) -> Analysis {
    let used: HashSet<&str> = usage.used_undeclared.iter().map(String::as_str).collect();
    let mut findings = Vec::new();

    for unused in &usage.unused_declared {
        for &id in tree.find(unused) {
            if tree.node(id).depth != 1 {
                continue;
            }
            findings.extend(narrow_findings(tree, id, &used));
        }
    }

    for unused in &usage.unused_declared {
        for &id in tree.find(unused) {
            if tree.node(id).depth != 1 {
                continue;
            }
            findings.extend(aggregate_finding(tree, id, &used));
        }
    }

    let conflicts = conflict::detect(tree);
    tracing::debug!(
        findings = findings.len(),
        conflicts = conflicts.len(),
        "analysis complete"
    );
    Analysis { findings, conflicts }
}

/// One finding per descendant of `declared` that the evidence says is used.
fn narrow_findings(
    tree: &DependencyTree,
    declared: NodeId,
    used: &HashSet<&str>,
) -> Vec<RedundancyFinding> {
    let declared_coord = tree.node(declared).simple_coordinate();
    let mut findings = Vec::new();
    for id in tree.descendants(declared) {
        let node = tree.node(id);
        if !is_used(node, used) {
            continue;
        }
        let target = node.simple_coordinate();
        let path = tree
            .path_to(declared, &target)
            .map(|p| simple_coordinates(tree, &p))
            .unwrap_or_default();
        findings.push(RedundancyFinding {
            declared_dependency: declared_coord.clone(),
            actually_used: vec![target.clone()],
            dependency_path: path,
            recommendation: format!(
                "Remove '{declared_coord}' and directly declare '{target}' instead"
            ),
        });
    }
    findings
}

/// One finding collecting every used descendant of `declared`, with the
/// de-duplicated concatenation of each individual path.
fn aggregate_finding(
    tree: &DependencyTree,
    declared: NodeId,
    used: &HashSet<&str>,
) -> Option<RedundancyFinding> {
    let mut used_transitives: Vec<String> = Vec::new();
    for id in tree.descendants(declared) {
        let node = tree.node(id);
        if is_used(node, used) {
            let coord = node.simple_coordinate();
            if !used_transitives.contains(&coord) {
                used_transitives.push(coord);
            }
        }
    }
    if used_transitives.is_empty() {
        return None;
    }

    let mut combined_path: Vec<String> = Vec::new();
    for target in &used_transitives {
        if let Some(path) = tree.path_to(declared, target) {
            for step in simple_coordinates(tree, &path) {
                if !combined_path.contains(&step) {
                    combined_path.push(step);
                }
            }
        }
    }

    let declared_coord = tree.node(declared).simple_coordinate();
    Some(RedundancyFinding {
        declared_dependency: declared_coord.clone(),
        actually_used: used_transitives,
        dependency_path: combined_path,
        recommendation: format!(
            "Consider removing '{declared_coord}' and directly declaring its used transitive dependencies"
        ),
    })
}

/// Membership check against the evidence, by either coordinate form.
fn is_used(node: &DependencyNode, used: &HashSet<&str>) -> bool {
    used.contains(node.simple_coordinate().as_str()) || used.contains(node.coordinate().as_str())
}

fn simple_coordinates(tree: &DependencyTree, path: &[NodeId]) -> Vec<String> {
    path.iter().map(|&id| tree.node(id).simple_coordinate()).collect()
}
