//! CSV report export.
//!
//! Writes one file per report section into an output directory: overview,
//! full tree, raw usage issues, redundancy findings, version conflicts.

use std::io::Write;
use std::path::Path;

use depsift_analyzer::stats;
use depsift_analyzer::Analysis;
use depsift_core::{DependencyTree, UsageReport};
use depsift_util::errors::{DepsiftError, DepsiftResult};
use depsift_util::fs;

/// Export the complete analysis report into `dir`, creating it if needed.
pub fn export_report(
    tree: &DependencyTree,
    usage: &UsageReport,
    analysis: &Analysis,
    dir: &Path,
) -> DepsiftResult<()> {
    fs::ensure_dir(dir).map_err(DepsiftError::Io)?;
    write_overview(tree, usage, analysis, &dir.join("overview.csv"))?;
    write_tree(tree, &dir.join("tree.csv"))?;
    write_issues(usage, &dir.join("issues.csv"))?;
    write_findings(analysis, &dir.join("redundancies.csv"))?;
    write_conflicts(analysis, &dir.join("conflicts.csv"))?;
    tracing::debug!(dir = %dir.display(), "report exported");
    Ok(())
}

/// Quote a field when it contains commas, quotes, or newlines.
fn escape_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn row(fields: &[&str]) -> String {
    fields.iter().map(|f| escape_field(f)).collect::<Vec<_>>().join(",")
}

fn write_rows(path: &Path, rows: Vec<String>) -> DepsiftResult<()> {
    let mut file = std::fs::File::create(path).map_err(DepsiftError::Io)?;
    for line in rows {
        writeln!(file, "{line}").map_err(DepsiftError::Io)?;
    }
    Ok(())
}

fn write_overview(
    tree: &DependencyTree,
    usage: &UsageReport,
    analysis: &Analysis,
    path: &Path,
) -> DepsiftResult<()> {
    let stats = stats::statistics(tree);
    let rows = vec![
        row(&["metric", "value"]),
        row(&["project_coordinate", &usage.project_coordinate]),
        row(&["total_dependencies", &stats.total.to_string()]),
        row(&["direct_dependencies", &stats.direct.to_string()]),
        row(&["transitive_dependencies", &stats.transitive.to_string()]),
        row(&["max_depth", &stats.max_depth.to_string()]),
        row(&["unique_artifacts", &stats.unique_artifacts.to_string()]),
        row(&["used_undeclared", &usage.used_undeclared.len().to_string()]),
        row(&["unused_declared", &usage.unused_declared.len().to_string()]),
        row(&["redundancy_findings", &analysis.findings.len().to_string()]),
        row(&["version_conflicts", &analysis.conflicts.len().to_string()]),
    ];
    write_rows(path, rows)
}

fn write_tree(tree: &DependencyTree, path: &Path) -> DepsiftResult<()> {
    let mut rows = vec![row(&[
        "group", "artifact", "version", "scope", "type", "depth", "coordinate",
    ])];
    for id in tree.preorder() {
        let node = tree.node(id);
        rows.push(row(&[
            &node.data.group,
            &node.data.artifact,
            &node.data.version,
            &node.data.scope,
            &node.data.packaging,
            &node.depth.to_string(),
            &node.coordinate(),
        ]));
    }
    write_rows(path, rows)
}

fn write_issues(usage: &UsageReport, path: &Path) -> DepsiftResult<()> {
    let mut rows = vec![row(&["coordinate", "issue_type", "project"])];
    for coord in &usage.used_undeclared {
        rows.push(row(&[coord, "used_undeclared", &usage.project_coordinate]));
    }
    for coord in &usage.unused_declared {
        rows.push(row(&[coord, "unused_declared", &usage.project_coordinate]));
    }
    write_rows(path, rows)
}

fn write_findings(analysis: &Analysis, path: &Path) -> DepsiftResult<()> {
    let mut rows = vec![row(&[
        "declared_dependency",
        "actually_used",
        "dependency_path",
        "severity",
        "recommendation",
    ])];
    for finding in &analysis.findings {
        rows.push(row(&[
            &finding.declared_dependency,
            &finding.actually_used.join("; "),
            &finding.dependency_path.join(" -> "),
            &finding.severity().to_string(),
            &finding.recommendation,
        ]));
    }
    write_rows(path, rows)
}

fn write_conflicts(analysis: &Analysis, path: &Path) -> DepsiftResult<()> {
    let mut rows = vec![row(&["artifact", "versions"])];
    for conflict in &analysis.conflicts {
        rows.push(row(&[&conflict.artifact, &conflict.versions.join("; ")]));
    }
    write_rows(path, rows)
}
