//! Output layer for depsift.
//!
//! Pure consumers of the analysis core's output: nothing in this crate
//! mutates the tree, the index, or the usage report.

pub mod console;
pub mod csv;
