//! Command: export the analysis report as CSV files.

use std::path::Path;

use console::style;

use depsift_analyzer::analyze;
use depsift_parser::{tree_json, AnalyzeLogParser};
use depsift_report::csv;
use depsift_util::errors::DepsiftResult;

pub fn exec(tree_path: &Path, analysis_path: &Path, output: &Path) -> DepsiftResult<()> {
    let tree = tree_json::parse_file(tree_path)?;
    let usage = AnalyzeLogParser::new().parse_file(analysis_path)?;
    let analysis = analyze(&tree, &usage);

    csv::export_report(&tree, &usage, &analysis, output)?;
    println!(
        "{} {}",
        style("Analysis report exported to:").green().bold(),
        output.display()
    );
    Ok(())
}
