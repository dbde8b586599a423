//! Command: redundancy check only.

use std::path::Path;

use console::style;

use depsift_analyzer::analyze;
use depsift_parser::{tree_json, AnalyzeLogParser};
use depsift_report::console as report;
use depsift_util::errors::DepsiftResult;

pub fn exec(tree_path: &Path, analysis_path: &Path) -> DepsiftResult<()> {
    let tree = tree_json::parse_file(tree_path)?;
    let usage = AnalyzeLogParser::new().parse_file(analysis_path)?;
    let analysis = analyze(&tree, &usage);

    println!(
        "{} {}",
        style("Redundancy check for:").blue().bold(),
        usage.project_coordinate
    );
    println!(
        "{}",
        style(format!("Found {} potential issues.", analysis.issue_count())).bold()
    );
    println!();

    print!("{}", report::render_analysis(&analysis));
    Ok(())
}
