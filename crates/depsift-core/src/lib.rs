//! Core data model for depsift.
//!
//! This crate defines the dependency tree (an arena of nodes with a
//! dual-key coordinate index), the usage report handed in by the log
//! parser, and the finding types produced by the analyzer.
//!
//! This crate performs no I/O and is intentionally free of async code.

pub mod finding;
pub mod node;
pub mod tree;
pub mod usage;

pub use finding::{RedundancyFinding, Severity, VersionConflict};
pub use node::{DependencyNode, NodeData, NodeId};
pub use tree::DependencyTree;
pub use usage::UsageReport;
