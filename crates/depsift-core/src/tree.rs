//! Dependency tree storage, coordinate indexing, and traversal.

use std::collections::HashMap;

use crate::node::{DependencyNode, NodeData, NodeId};

/// A fully resolved dependency tree.
///
/// Nodes live in an arena owned by the tree and are addressed by [`NodeId`].
/// The coordinate index maps both the full and the simple coordinate of
/// every node to the list of positions sharing it, in pre-order discovery
/// order, so diamond occurrences accumulate rather than overwrite.
#[derive(Debug)]
pub struct DependencyTree {
    nodes: Vec<DependencyNode>,
    index: HashMap<String, Vec<NodeId>>,
}

impl DependencyTree {
    /// Create a tree containing only the root node (depth 0).
    pub fn new(root: NodeData) -> Self {
        Self {
            nodes: vec![DependencyNode {
                data: root,
                depth: 0,
                parent: None,
                children: Vec::new(),
            }],
            index: HashMap::new(),
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Append a child under `parent`. Depth is assigned as parent depth + 1,
    /// so the depth invariant holds by construction.
    ///
    /// The index is not updated; call [`Self::build_index`] once the tree is
    /// complete.
    pub fn add_child(&mut self, parent: NodeId, data: NodeData) -> NodeId {
        let depth = self.nodes[parent.0].depth + 1;
        let id = NodeId(self.nodes.len());
        self.nodes.push(DependencyNode {
            data,
            depth,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    pub fn node(&self, id: NodeId) -> &DependencyNode {
        &self.nodes[id.0]
    }

    /// Total number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Rebuild the coordinate index from scratch.
    ///
    /// One pre-order traversal; every node is registered under both its full
    /// and its simple coordinate, appending to the list at each key.
    /// Idempotent: rebuilding an unchanged tree yields the same index.
    pub fn build_index(&mut self) {
        self.index.clear();
        for id in self.preorder() {
            let node = &self.nodes[id.0];
            for coord in [node.coordinate(), node.simple_coordinate()] {
                self.index.entry(coord).or_default().push(id);
            }
        }
        tracing::debug!(
            nodes = self.nodes.len(),
            keys = self.index.len(),
            "built coordinate index"
        );
    }

    /// All nodes registered under `coordinate` (either form), in pre-order
    /// discovery order. Empty if the coordinate is unknown or the index has
    /// not been built.
    pub fn find(&self, coordinate: &str) -> &[NodeId] {
        self.index.get(coordinate).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All nodes in pre-order, root first, children in declaration order.
    pub fn preorder(&self) -> Vec<NodeId> {
        let mut result = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![self.root()];
        while let Some(id) = stack.pop() {
            result.push(id);
            for &child in self.nodes[id.0].children.iter().rev() {
                stack.push(child);
            }
        }
        result
    }

    /// Every node strictly below `id`, in pre-order.
    ///
    /// Positional, not by coordinate: two sibling subtrees containing the
    /// same artifact each contribute their own node.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut result = Vec::new();
        let mut stack: Vec<NodeId> = self.nodes[id.0].children.iter().rev().copied().collect();
        while let Some(child) = stack.pop() {
            result.push(child);
            for &grandchild in self.nodes[child.0].children.iter().rev() {
                stack.push(grandchild);
            }
        }
        result
    }

    /// First path from `start` down to a node whose full or simple
    /// coordinate equals `target`, children visited in declaration order.
    ///
    /// This is a pre-order first-match search, not shortest-path: when
    /// several subtrees contain the target, the earliest-declared child
    /// wins. Returns `None` when `target` is not in `start`'s subtree.
    pub fn path_to(&self, start: NodeId, target: &str) -> Option<Vec<NodeId>> {
        let mut path = Vec::new();
        if self.dfs_path(start, target, &mut path) {
            Some(path)
        } else {
            None
        }
    }

    fn dfs_path(&self, current: NodeId, target: &str, path: &mut Vec<NodeId>) -> bool {
        path.push(current);
        if self.nodes[current.0].matches(target) {
            return true;
        }
        for &child in &self.nodes[current.0].children {
            if self.dfs_path(child, target, path) {
                return true;
            }
        }
        path.pop();
        false
    }

    /// Maximum depth over all nodes (0 for a root-only tree).
    pub fn max_depth(&self) -> usize {
        self.nodes.iter().map(|n| n.depth).max().unwrap_or(0)
    }

    /// Number of direct dependencies (depth 1).
    pub fn direct_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.depth == 1).count()
    }
}
