//! Version conflict detection: the same `group:artifact` appearing at more
//! than one version anywhere in a resolved tree.

use std::collections::BTreeMap;

use depsift_core::{DependencyTree, VersionConflict};

/// Group every tree node by `group:artifact` and report the artifacts with
/// more than one distinct version.
///
/// One conflict per artifact regardless of how many positions it occupies;
/// versions sorted ascending, artifacts in key order so the output is
/// deterministic.
pub fn detect(tree: &DependencyTree) -> Vec<VersionConflict> {
    let mut versions: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for id in tree.preorder() {
        let node = tree.node(id);
        let entry = versions.entry(node.key()).or_default();
        if !entry.contains(&node.data.version) {
            entry.push(node.data.version.clone());
        }
    }

    versions
        .into_iter()
        .filter(|(_, vers)| vers.len() > 1)
        .map(|(artifact, mut vers)| {
            vers.sort();
            VersionConflict { artifact, versions: vers }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use depsift_core::NodeData;

    #[test]
    fn multiple_versions_reported_sorted() {
        let mut tree = DependencyTree::new(NodeData::new("com.example", "app", "1.0"));
        let a = tree.add_child(tree.root(), NodeData::new("org.a", "a", "1.0"));
        tree.add_child(a, NodeData::new("g", "x", "2.0"));
        tree.add_child(tree.root(), NodeData::new("g", "x", "1.0"));
        tree.build_index();

        let conflicts = detect(&tree);
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].artifact, "g:x");
        assert_eq!(conflicts[0].versions, vec!["1.0", "2.0"]);
    }

    #[test]
    fn single_version_everywhere_is_clean() {
        let mut tree = DependencyTree::new(NodeData::new("com.example", "app", "1.0"));
        let a = tree.add_child(tree.root(), NodeData::new("org.a", "a", "1.0"));
        tree.add_child(a, NodeData::new("g", "x", "1.0"));
        tree.add_child(tree.root(), NodeData::new("g", "x", "1.0"));
        tree.build_index();

        assert!(detect(&tree).is_empty());
    }

    #[test]
    fn conflicts_ordered_by_artifact_key() {
        let mut tree = DependencyTree::new(NodeData::new("com.example", "app", "1.0"));
        tree.add_child(tree.root(), NodeData::new("org.z", "z", "1.0"));
        tree.add_child(tree.root(), NodeData::new("org.z", "z", "2.0"));
        tree.add_child(tree.root(), NodeData::new("org.a", "a", "1.0"));
        tree.add_child(tree.root(), NodeData::new("org.a", "a", "2.0"));
        tree.build_index();

        let conflicts = detect(&tree);
        assert_eq!(conflicts.len(), 2);
        assert_eq!(conflicts[0].artifact, "org.a:a");
        assert_eq!(conflicts[1].artifact, "org.z:z");
    }
}
