//! Analyzer output types: redundancy findings and version conflicts.

use std::fmt;

/// A declared dependency judged unnecessary as declared: the code only
/// needs something it transitively pulls in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedundancyFinding {
    /// Simple coordinate of the direct dependency in question.
    pub declared_dependency: String,
    /// De-duplicated coordinates of its descendants that are actually used.
    pub actually_used: Vec<String>,
    /// Coordinate chain from the declared dependency down to a used
    /// descendant (first-found path).
    pub dependency_path: Vec<String>,
    /// Human-readable advice.
    pub recommendation: String,
}

impl RedundancyFinding {
    /// Derived severity: high when at least one transitive dependency is
    /// actually used. The engine never constructs a finding with an empty
    /// `actually_used`, so `Medium` is only reachable for hand-built values.
    pub fn severity(&self) -> Severity {
        if self.actually_used.is_empty() {
            Severity::Medium
        } else {
            Severity::High
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    High,
    Medium,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::High => write!(f, "high"),
            Severity::Medium => write!(f, "medium"),
        }
    }
}

/// The same `group:artifact` resolved at more than one version somewhere in
/// the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionConflict {
    /// `group:artifact` pair.
    pub artifact: String,
    /// Distinct versions, sorted ascending lexicographically.
    pub versions: Vec<String>,
}

impl fmt::Display for VersionConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.artifact, self.versions.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_is_derived() {
        let mut finding = RedundancyFinding {
            declared_dependency: "g:a:1.0".into(),
            actually_used: vec!["g:b:1.0".into()],
            dependency_path: vec!["g:a:1.0".into(), "g:b:1.0".into()],
            recommendation: String::new(),
        };
        assert_eq!(finding.severity(), Severity::High);
        finding.actually_used.clear();
        assert_eq!(finding.severity(), Severity::Medium);
        assert_eq!(finding.severity().to_string(), "medium");
    }

    #[test]
    fn conflict_display() {
        let conflict = VersionConflict {
            artifact: "org.x:x".into(),
            versions: vec!["1.0".into(), "2.0".into()],
        };
        assert_eq!(conflict.to_string(), "org.x:x: 1.0, 2.0");
    }
}
