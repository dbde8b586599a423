//! Parser for `mvn dependency:analyze` console output.
//!
//! The log is free text; the two dependency sections are located by their
//! header lines and coordinates are pulled from the `[WARNING]` lines that
//! follow, until the next `[INFO] ---` divider.

use std::path::Path;

use regex::Regex;

use depsift_core::UsageReport;
use depsift_util::errors::{DepsiftError, DepsiftResult};
use depsift_util::fs;

const USED_UNDECLARED_HEADER: &str = "Used undeclared dependencies found:";
const UNUSED_DECLARED_HEADER: &str = "Unused declared dependencies found:";

pub struct AnalyzeLogParser {
    /// `---< group:artifact >---` project banner.
    project_re: Regex,
    /// `[WARNING]`-prefixed coordinate line. Maven prints the full
    /// five-part form; the simple three-part form is accepted too since
    /// both are valid everywhere downstream.
    dependency_re: Regex,
}

impl AnalyzeLogParser {
    pub fn new() -> Self {
        Self {
            project_re: Regex::new(r"-+<\s*(.+:.+?)\s*>-+").expect("project banner regex"),
            dependency_re: Regex::new(r"\[WARNING\]\s+([^\s:]+(?::[^\s:]+){2,4})")
                .expect("dependency line regex"),
        }
    }

    /// Parse an analyze log file.
    pub fn parse_file(&self, path: &Path) -> DepsiftResult<UsageReport> {
        let content = fs::read_text_lossy(path).map_err(DepsiftError::Io)?;
        Ok(self.parse_str(&content))
    }

    /// Parse an analyze log from a string. A log with no recognizable
    /// sections yields an empty report (project `"unknown"`), not an error.
    pub fn parse_str(&self, content: &str) -> UsageReport {
        let lines: Vec<&str> = content.lines().collect();
        let report = UsageReport {
            project_coordinate: self.project_coordinate(&lines),
            used_undeclared: self.extract_section(
                &lines,
                USED_UNDECLARED_HEADER,
                Some(UNUSED_DECLARED_HEADER),
            ),
            unused_declared: self.extract_section(&lines, UNUSED_DECLARED_HEADER, None),
        };
        tracing::debug!(
            project = %report.project_coordinate,
            used_undeclared = report.used_undeclared.len(),
            unused_declared = report.unused_declared.len(),
            "parsed analyze log"
        );
        report
    }

    fn project_coordinate(&self, lines: &[&str]) -> String {
        for line in lines {
            if let Some(cap) = self.project_re.captures(line) {
                return cap[1].trim().to_string();
            }
        }
        "unknown".to_string()
    }

    /// Collect coordinates from the lines between `header` and the end of
    /// its section. A section ends at `next_header` (when given) or at an
    /// `[INFO]` divider line.
    fn extract_section(
        &self,
        lines: &[&str],
        header: &str,
        next_header: Option<&str>,
    ) -> Vec<String> {
        let mut dependencies = Vec::new();
        let mut in_section = false;

        for line in lines {
            if line.contains(header) {
                in_section = true;
                continue;
            }
            if !in_section {
                continue;
            }
            if next_header.is_some_and(|h| line.contains(h)) {
                break;
            }
            if line.trim_start().starts_with("[INFO]") && line.contains("---") {
                break;
            }
            if let Some(cap) = self.dependency_re.captures(line) {
                dependencies.push(cap[1].to_string());
            }
        }

        dependencies
    }
}

impl Default for AnalyzeLogParser {
    fn default() -> Self {
        Self::new()
    }
}
