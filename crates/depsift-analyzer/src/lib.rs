//! Analysis engine for depsift: redundancy detection against usage
//! evidence, version-conflict grouping, and dependency tree statistics.

pub mod conflict;
pub mod redundancy;
pub mod stats;

pub use redundancy::{analyze, Analysis};
