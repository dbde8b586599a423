//! Input parsers for depsift.
//!
//! Two collaborators feed the analysis core: the JSON emitted by
//! `mvn dependency:tree -DoutputType=json` and the free-text log of
//! `mvn dependency:analyze`. Both produce fully validated values
//! ([`depsift_core::DependencyTree`] with its index built, and
//! [`depsift_core::UsageReport`]); the core never re-validates.

pub mod analyze_log;
pub mod tree_json;

pub use analyze_log::AnalyzeLogParser;
