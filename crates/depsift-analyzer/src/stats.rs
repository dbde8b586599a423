//! Dependency tree statistics and insight queries.

use std::collections::{BTreeMap, HashSet};

use depsift_core::{DependencyTree, NodeId, UsageReport, VersionConflict};

use crate::conflict;

/// Aggregate statistics over one resolved tree.
#[derive(Debug)]
pub struct TreeStats {
    pub total: usize,
    pub direct: usize,
    pub transitive: usize,
    pub max_depth: usize,
    /// Distinct `group:artifact` pairs, root included.
    pub unique_artifacts: usize,
    /// Artifacts present at more than one version.
    pub duplicates: Vec<VersionConflict>,
    pub scope_distribution: BTreeMap<String, usize>,
    pub type_distribution: BTreeMap<String, usize>,
    pub depth_distribution: BTreeMap<usize, usize>,
}

/// Compute statistics in a single pass over the tree.
pub fn statistics(tree: &DependencyTree) -> TreeStats {
    let mut scope_distribution: BTreeMap<String, usize> = BTreeMap::new();
    let mut type_distribution: BTreeMap<String, usize> = BTreeMap::new();
    let mut depth_distribution: BTreeMap<usize, usize> = BTreeMap::new();
    let mut keys: HashSet<String> = HashSet::new();

    for id in tree.preorder() {
        let node = tree.node(id);
        *scope_distribution.entry(node.data.scope.clone()).or_default() += 1;
        *type_distribution.entry(node.data.packaging.clone()).or_default() += 1;
        *depth_distribution.entry(node.depth).or_default() += 1;
        keys.insert(node.key());
    }

    let total = tree.len();
    let direct = tree.direct_count();
    TreeStats {
        total,
        direct,
        transitive: total - direct - 1,
        max_depth: tree.max_depth(),
        unique_artifacts: keys.len(),
        duplicates: conflict::detect(tree),
        scope_distribution,
        type_distribution,
        depth_distribution,
    }
}

/// Direct dependencies ranked by how many transitive dependencies they pull
/// in, heaviest first; at most `n` entries.
pub fn heaviest_direct(tree: &DependencyTree, n: usize) -> Vec<(String, usize)> {
    let mut ranked: Vec<(String, usize)> = tree
        .node(tree.root())
        .children
        .iter()
        .map(|&child| {
            (
                tree.node(child).simple_coordinate(),
                tree.descendants(child).len(),
            )
        })
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(n);
    ranked
}

/// A direct dependency the usage evidence says is unused.
#[derive(Debug)]
pub struct UnusedDirect {
    pub coordinate: String,
    pub transitive_count: usize,
}

/// Direct dependencies matching the report's `unused_declared` list, by
/// either coordinate form.
pub fn unused_direct(tree: &DependencyTree, usage: &UsageReport) -> Vec<UnusedDirect> {
    let unused: HashSet<&str> = usage.unused_declared.iter().map(String::as_str).collect();
    tree.node(tree.root())
        .children
        .iter()
        .filter_map(|&child| {
            let node = tree.node(child);
            let matched = unused.contains(node.simple_coordinate().as_str())
                || unused.contains(node.coordinate().as_str());
            matched.then(|| UnusedDirect {
                coordinate: node.simple_coordinate(),
                transitive_count: tree.descendants(child).len(),
            })
        })
        .collect()
}

/// Every root-to-occurrence path for `target` (either coordinate form).
///
/// Matching nodes terminate their path; occurrences below another
/// occurrence are not reported separately.
pub fn all_paths(tree: &DependencyTree, target: &str) -> Vec<Vec<NodeId>> {
    let mut paths = Vec::new();
    let mut current = Vec::new();
    collect_paths(tree, tree.root(), target, &mut current, &mut paths);
    paths
}

fn collect_paths(
    tree: &DependencyTree,
    id: NodeId,
    target: &str,
    current: &mut Vec<NodeId>,
    paths: &mut Vec<Vec<NodeId>>,
) {
    current.push(id);
    if tree.node(id).matches(target) {
        paths.push(current.clone());
    } else {
        for &child in &tree.node(id).children {
            collect_paths(tree, child, target, current, paths);
        }
    }
    current.pop();
}

#[cfg(test)]
mod tests {
    use super::*;
    use depsift_core::NodeData;

    fn sample_tree() -> DependencyTree {
        let mut tree = DependencyTree::new(NodeData::new("com.example", "app", "1.0"));
        let a = tree.add_child(tree.root(), NodeData::new("org.a", "a", "1.0").with_scope("compile"));
        let b = tree.add_child(tree.root(), NodeData::new("org.b", "b", "1.0").with_scope("test"));
        tree.add_child(a, NodeData::new("g", "x", "1.0").with_scope("compile"));
        tree.add_child(a, NodeData::new("g", "y", "1.0").with_scope("runtime"));
        tree.add_child(b, NodeData::new("g", "x", "2.0").with_scope("test"));
        tree.build_index();
        tree
    }

    #[test]
    fn counts_and_distributions() {
        let stats = statistics(&sample_tree());
        assert_eq!(stats.total, 6);
        assert_eq!(stats.direct, 2);
        assert_eq!(stats.transitive, 3);
        assert_eq!(stats.max_depth, 2);
        assert_eq!(stats.unique_artifacts, 5);
        assert_eq!(stats.scope_distribution["compile"], 2);
        assert_eq!(stats.scope_distribution["test"], 2);
        assert_eq!(stats.depth_distribution[&1], 2);
        assert_eq!(stats.depth_distribution[&2], 3);
        assert_eq!(stats.duplicates.len(), 1);
        assert_eq!(stats.duplicates[0].artifact, "g:x");
    }

    #[test]
    fn heaviest_direct_ranks_by_transitive_weight() {
        let ranked = heaviest_direct(&sample_tree(), 5);
        assert_eq!(ranked[0], ("org.a:a:1.0".to_string(), 2));
        assert_eq!(ranked[1], ("org.b:b:1.0".to_string(), 1));

        assert_eq!(heaviest_direct(&sample_tree(), 1).len(), 1);
    }

    #[test]
    fn unused_direct_matches_by_either_form() {
        let tree = sample_tree();
        let usage = UsageReport {
            project_coordinate: "com.example:app".into(),
            used_undeclared: vec![],
            unused_declared: vec!["org.a:a:jar:1.0:compile".into()],
        };
        let unused = unused_direct(&tree, &usage);
        assert_eq!(unused.len(), 1);
        assert_eq!(unused[0].coordinate, "org.a:a:1.0");
        assert_eq!(unused[0].transitive_count, 2);
    }

    #[test]
    fn all_paths_finds_every_occurrence() {
        let tree = sample_tree();
        let paths = all_paths(&tree, "g:x:1.0");
        assert_eq!(paths.len(), 1);
        // Both positions of g:x differ in version, so search by artifact
        // occurrence instead.
        let v2 = all_paths(&tree, "g:x:2.0");
        assert_eq!(v2.len(), 1);
        assert_eq!(v2[0].len(), 3);
    }
}
