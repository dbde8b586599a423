//! Console rendering: box-drawing dependency trees and styled summaries.

use console::style;

use depsift_analyzer::stats::TreeStats;
use depsift_analyzer::Analysis;
use depsift_core::{DependencyTree, NodeId, UsageReport};

/// Options for [`render_tree`].
#[derive(Default)]
pub struct TreeRenderOptions {
    /// Maximum depth to display.
    pub max_depth: Option<usize>,
    /// Only show branches containing this scope.
    pub filter_scope: Option<String>,
    /// Coordinates (either form) to highlight.
    pub highlight: Vec<String>,
    /// Append the scope to each label.
    pub show_scope: bool,
}

/// Render the tree with box-drawing connectors, root first.
pub fn render_tree(tree: &DependencyTree, opts: &TreeRenderOptions) -> String {
    let mut output = String::new();
    let root = tree.root();
    output.push_str(&format!("{}\n", label(tree, root, opts)));

    let children: Vec<NodeId> = visible_children(tree, root, opts);
    let count = children.len();
    for (i, child) in children.into_iter().enumerate() {
        render_subtree(tree, child, "", i == count - 1, 1, opts, &mut output);
    }
    output
}

fn render_subtree(
    tree: &DependencyTree,
    id: NodeId,
    prefix: &str,
    is_last: bool,
    depth: usize,
    opts: &TreeRenderOptions,
    output: &mut String,
) {
    let connector = if is_last { "└── " } else { "├── " };
    output.push_str(&format!("{prefix}{connector}{}\n", label(tree, id, opts)));

    if let Some(max) = opts.max_depth {
        if depth >= max {
            return;
        }
    }

    let child_prefix = format!("{prefix}{}", if is_last { "    " } else { "│   " });
    let children = visible_children(tree, id, opts);
    let count = children.len();
    for (i, child) in children.into_iter().enumerate() {
        render_subtree(tree, child, &child_prefix, i == count - 1, depth + 1, opts, output);
    }
}

/// A branch is visible when any node in it carries the filtered scope;
/// without a filter every branch is visible.
fn visible_children(tree: &DependencyTree, id: NodeId, opts: &TreeRenderOptions) -> Vec<NodeId> {
    tree.node(id)
        .children
        .iter()
        .copied()
        .filter(|&child| match &opts.filter_scope {
            None => true,
            Some(scope) => {
                tree.node(child).data.scope == *scope
                    || tree
                        .descendants(child)
                        .iter()
                        .any(|&d| tree.node(d).data.scope == *scope)
            }
        })
        .collect()
}

fn label(tree: &DependencyTree, id: NodeId, opts: &TreeRenderOptions) -> String {
    let node = tree.node(id);
    let mut text = node.simple_coordinate();
    if node.data.packaging != "jar" {
        text.push_str(&format!(" ({})", node.data.packaging));
    }
    if opts.show_scope && !node.data.scope.is_empty() {
        text.push_str(&format!(" [{}]", scope_styled(&node.data.scope)));
    }
    if opts.highlight.iter().any(|c| node.matches(c)) {
        return style(text).red().bold().to_string();
    }
    text
}

fn scope_styled(scope: &str) -> String {
    let styled = match scope {
        "compile" => style(scope).green(),
        "runtime" => style(scope).blue(),
        "test" => style(scope).red(),
        "provided" => style(scope).yellow(),
        "system" => style(scope).cyan(),
        "import" => style(scope).magenta(),
        _ => style(scope),
    };
    styled.to_string()
}

/// Render tree statistics as aligned key/value lines plus distributions.
pub fn render_stats(stats: &TreeStats) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} {}\n", style("Total dependencies:").bold(), stats.total));
    out.push_str(&format!("{} {}\n", style("Direct dependencies:").bold(), stats.direct));
    out.push_str(&format!("{} {}\n", style("Transitive dependencies:").bold(), stats.transitive));
    out.push_str(&format!("{} {}\n", style("Max depth:").bold(), stats.max_depth));
    out.push_str(&format!("{} {}\n", style("Unique artifacts:").bold(), stats.unique_artifacts));

    out.push_str(&format!("\n{}\n", style("Scope distribution").bold().underlined()));
    for (scope, count) in &stats.scope_distribution {
        if !scope.is_empty() {
            out.push_str(&format!("  {scope:<12} {count}\n"));
        }
    }

    out.push_str(&format!("\n{}\n", style("Type distribution").bold().underlined()));
    for (packaging, count) in &stats.type_distribution {
        if !packaging.is_empty() {
            out.push_str(&format!("  {packaging:<12} {count}\n"));
        }
    }

    if !stats.duplicates.is_empty() {
        out.push_str(&format!("\n{}\n", style("Duplicate artifacts").bold().underlined()));
        for dup in &stats.duplicates {
            out.push_str(&format!("  {dup}\n"));
        }
    }
    out
}

const LIST_PREVIEW: usize = 10;

/// Render the two usage-evidence lists, truncated to the first ten entries.
pub fn render_usage(usage: &UsageReport) -> String {
    let mut out = String::new();
    render_list(
        &mut out,
        &format!("Used undeclared dependencies ({})", usage.used_undeclared.len()),
        &usage.used_undeclared,
    );
    render_list(
        &mut out,
        &format!("Unused declared dependencies ({})", usage.unused_declared.len()),
        &usage.unused_declared,
    );
    out
}

fn render_list(out: &mut String, title: &str, entries: &[String]) {
    if entries.is_empty() {
        return;
    }
    out.push_str(&format!("{}\n", style(title).yellow().bold()));
    for entry in entries.iter().take(LIST_PREVIEW) {
        out.push_str(&format!("  • {entry}\n"));
    }
    if entries.len() > LIST_PREVIEW {
        out.push_str(&format!("  ... and {} more\n", entries.len() - LIST_PREVIEW));
    }
    out.push('\n');
}

/// Render findings first, conflicts appended, numbered across both.
pub fn render_analysis(analysis: &Analysis) -> String {
    if analysis.is_empty() {
        return format!("{}\n", style("No redundancy issues detected.").green());
    }

    let mut out = String::new();
    let mut number = 0usize;
    for finding in &analysis.findings {
        number += 1;
        out.push_str(&format!(
            "{} {} ({})\n",
            style(format!("{number}. Redundant dependency:")).bold(),
            finding.declared_dependency,
            finding.severity()
        ));
        out.push_str(&format!(
            "   Actually used: {}\n",
            finding.actually_used.join(", ")
        ));
        if !finding.dependency_path.is_empty() {
            out.push_str(&format!(
                "   Path: {}\n",
                finding.dependency_path.join(" -> ")
            ));
        }
        out.push_str(&format!(
            "   {} {}\n\n",
            style("Recommendation:").cyan(),
            finding.recommendation
        ));
    }
    for conflict in &analysis.conflicts {
        number += 1;
        out.push_str(&format!(
            "{} {}\n",
            style(format!("{number}. Version conflict:")).bold(),
            conflict
        ));
        out.push_str("   Consider consolidating to a single version.\n\n");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use depsift_core::{NodeData, RedundancyFinding};

    fn sample_tree() -> DependencyTree {
        let mut tree = DependencyTree::new(NodeData::new("com.example", "app", "1.0"));
        let a = tree.add_child(tree.root(), NodeData::new("org.a", "a", "1.0").with_scope("compile"));
        tree.add_child(tree.root(), NodeData::new("org.b", "b", "2.0").with_scope("test"));
        tree.add_child(a, NodeData::new("org.c", "c", "3.0").with_scope("compile"));
        tree.build_index();
        tree
    }

    #[test]
    fn tree_contains_connectors_and_all_nodes() {
        let rendered = render_tree(&sample_tree(), &TreeRenderOptions::default());
        assert!(rendered.starts_with("com.example:app:1.0\n"));
        assert!(rendered.contains("├── org.a:a:1.0"));
        assert!(rendered.contains("│   └── org.c:c:3.0"));
        assert!(rendered.contains("└── org.b:b:2.0"));
    }

    #[test]
    fn max_depth_cuts_subtrees() {
        let opts = TreeRenderOptions {
            max_depth: Some(1),
            ..Default::default()
        };
        let rendered = render_tree(&sample_tree(), &opts);
        assert!(rendered.contains("org.a:a:1.0"));
        assert!(!rendered.contains("org.c:c:3.0"));
    }

    #[test]
    fn scope_filter_keeps_matching_branches() {
        let opts = TreeRenderOptions {
            filter_scope: Some("test".into()),
            ..Default::default()
        };
        let rendered = render_tree(&sample_tree(), &opts);
        assert!(rendered.contains("org.b:b:2.0"));
        assert!(!rendered.contains("org.a:a:1.0"));
    }

    #[test]
    fn analysis_rendering_numbers_findings_then_conflicts() {
        let analysis = Analysis {
            findings: vec![RedundancyFinding {
                declared_dependency: "g:a:1.0".into(),
                actually_used: vec!["g:b:1.0".into()],
                dependency_path: vec!["g:a:1.0".into(), "g:b:1.0".into()],
                recommendation: "Remove it".into(),
            }],
            conflicts: vec![depsift_core::VersionConflict {
                artifact: "g:x".into(),
                versions: vec!["1.0".into(), "2.0".into()],
            }],
        };
        let rendered = render_analysis(&analysis);
        let finding_pos = rendered.find("g:a:1.0").unwrap();
        let conflict_pos = rendered.find("g:x").unwrap();
        assert!(finding_pos < conflict_pos);
        assert!(rendered.contains("g:a:1.0 -> g:b:1.0"));
    }

    #[test]
    fn empty_analysis_renders_all_clear() {
        let rendered = render_analysis(&Analysis::default());
        assert!(rendered.contains("No redundancy issues detected."));
    }
}
