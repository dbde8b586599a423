//! Parser for the JSON dependency tree emitted by
//! `mvn dependency:tree -DoutputType=json`.

use std::path::Path;

use serde::Deserialize;

use depsift_core::{DependencyTree, NodeData, NodeId};
use depsift_util::errors::{DepsiftError, DepsiftResult};
use depsift_util::fs;

#[derive(Debug, Deserialize)]
struct RawNode {
    #[serde(default, rename = "groupId")]
    group_id: String,
    #[serde(default, rename = "artifactId")]
    artifact_id: String,
    #[serde(default)]
    version: String,
    #[serde(default)]
    scope: String,
    #[serde(default = "default_packaging", rename = "type")]
    packaging: String,
    #[serde(default)]
    classifier: String,
    #[serde(default)]
    optional: OptionalFlag,
    #[serde(default)]
    children: Vec<RawNode>,
}

fn default_packaging() -> String {
    "jar".to_string()
}

/// Maven emits `optional` as the strings `"true"`/`"false"`; some tree
/// producers use real booleans. Accept both.
#[derive(Debug, Default, Deserialize)]
#[serde(untagged)]
enum OptionalFlag {
    Bool(bool),
    Text(String),
    #[default]
    Unset,
}

impl OptionalFlag {
    fn as_bool(&self) -> bool {
        match self {
            OptionalFlag::Bool(b) => *b,
            OptionalFlag::Text(s) => s == "true",
            OptionalFlag::Unset => false,
        }
    }
}

impl RawNode {
    fn data(&self) -> NodeData {
        NodeData {
            group: self.group_id.clone(),
            artifact: self.artifact_id.clone(),
            version: self.version.clone(),
            scope: self.scope.clone(),
            packaging: self.packaging.clone(),
            classifier: self.classifier.clone(),
            optional: self.optional.as_bool(),
        }
    }
}

/// Parse a dependency tree JSON file. The returned tree is indexed and
/// ready for analysis.
pub fn parse_file(path: &Path) -> DepsiftResult<DependencyTree> {
    let content = fs::read_text_lossy(path).map_err(DepsiftError::Io)?;
    parse_str(&content)
}

/// Parse a dependency tree from a JSON string.
pub fn parse_str(json: &str) -> DepsiftResult<DependencyTree> {
    let raw: RawNode = serde_json::from_str(json).map_err(|e| DepsiftError::TreeParse {
        message: e.to_string(),
    })?;

    let mut tree = DependencyTree::new(raw.data());
    let root = tree.root();
    for child in &raw.children {
        insert(&mut tree, root, child);
    }
    tree.build_index();
    tracing::debug!(nodes = tree.len(), "parsed dependency tree");
    Ok(tree)
}

fn insert(tree: &mut DependencyTree, parent: NodeId, raw: &RawNode) {
    let id = tree.add_child(parent, raw.data());
    for child in &raw.children {
        insert(tree, id, child);
    }
}
