//! Usage-analysis evidence handed in from outside the core.

/// Outcome of a usage-analysis pass (`mvn dependency:analyze`).
///
/// The two lists hold coordinate strings in either the full or the simple
/// form; duplicates are possible and preserved in input order. No further
/// structure is enforced: this is raw evidence.
#[derive(Debug, Clone, Default)]
pub struct UsageReport {
    pub project_coordinate: String,
    /// Coordinates referenced by code but not directly declared.
    pub used_undeclared: Vec<String>,
    /// Coordinates declared directly but never referenced by code.
    pub unused_declared: Vec<String>,
}

impl UsageReport {
    pub fn is_empty(&self) -> bool {
        self.used_undeclared.is_empty() && self.unused_declared.is_empty()
    }
}
