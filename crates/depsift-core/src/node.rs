//! Dependency tree vertices.

use std::fmt;

/// Index of a node inside a [`crate::DependencyTree`] arena.
///
/// The parent back-reference is also a `NodeId`, so the tree stays a proper
/// ownership tree: forward edges own, backward edges are plain indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

/// Attributes of a resolved dependency, independent of tree position.
///
/// This is what parsers hand to [`crate::DependencyTree::add_child`]; depth
/// and the parent/child links are assigned by the tree itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeData {
    pub group: String,
    pub artifact: String,
    pub version: String,
    /// Maven scope (`compile`, `test`, `runtime`, `provided`, `system`,
    /// `import`) or empty for the project root.
    pub scope: String,
    /// Artifact packaging (`jar`, `pom`, `war`, ...).
    pub packaging: String,
    pub classifier: String,
    pub optional: bool,
}

impl Default for NodeData {
    fn default() -> Self {
        Self {
            group: String::new(),
            artifact: String::new(),
            version: String::new(),
            scope: String::new(),
            packaging: "jar".to_string(),
            classifier: String::new(),
            optional: false,
        }
    }
}

impl NodeData {
    pub fn new(group: &str, artifact: &str, version: &str) -> Self {
        Self {
            group: group.to_string(),
            artifact: artifact.to_string(),
            version: version.to_string(),
            ..Self::default()
        }
    }

    pub fn with_scope(mut self, scope: &str) -> Self {
        self.scope = scope.to_string();
        self
    }
}

/// One vertex of a dependency tree.
///
/// Immutable once inserted. Children are kept in declaration order, which is
/// semantically relevant: path search and descendant enumeration visit them
/// in that order.
#[derive(Debug, Clone)]
pub struct DependencyNode {
    pub data: NodeData,
    /// Distance from the root; the root is 0, direct dependencies are 1.
    pub depth: usize,
    /// Non-owning back-reference; `None` only for the root.
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
}

impl DependencyNode {
    /// Full coordinate: `group:artifact:type:version:scope`.
    pub fn coordinate(&self) -> String {
        format!(
            "{}:{}:{}:{}:{}",
            self.data.group, self.data.artifact, self.data.packaging, self.data.version, self.data.scope
        )
    }

    /// Simple coordinate: `group:artifact:version`.
    pub fn simple_coordinate(&self) -> String {
        format!("{}:{}:{}", self.data.group, self.data.artifact, self.data.version)
    }

    /// `group:artifact` identifier (without version), used for grouping
    /// versions when detecting conflicts.
    pub fn key(&self) -> String {
        format!("{}:{}", self.data.group, self.data.artifact)
    }

    /// Whether either coordinate form equals `coordinate`.
    ///
    /// Every identity comparison in depsift goes through this: the full and
    /// simple forms are interchangeable alternate keys by design.
    pub fn matches(&self, coordinate: &str) -> bool {
        self.simple_coordinate() == coordinate || self.coordinate() == coordinate
    }
}

impl fmt::Display for DependencyNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.simple_coordinate())
    }
}
