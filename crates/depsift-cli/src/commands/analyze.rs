//! Command: full analysis with statistics, usage evidence, and findings.

use std::path::Path;

use console::style;

use depsift_analyzer::{analyze, stats};
use depsift_parser::{tree_json, AnalyzeLogParser};
use depsift_report::{console as report, csv};
use depsift_util::errors::DepsiftResult;

pub fn exec(tree_path: &Path, analysis_path: &Path, output: Option<&Path>) -> DepsiftResult<()> {
    let tree = tree_json::parse_file(tree_path)?;
    let usage = AnalyzeLogParser::new().parse_file(analysis_path)?;

    println!("{} {}", style("Project:").blue().bold(), usage.project_coordinate);
    println!();

    let tree_stats = stats::statistics(&tree);
    print!("{}", report::render_stats(&tree_stats));

    let heaviest = stats::heaviest_direct(&tree, 5);
    if !heaviest.is_empty() {
        println!("\n{}", style("Heaviest direct dependencies").bold().underlined());
        for (coordinate, count) in &heaviest {
            println!("  {coordinate} ({count} transitive)");
        }
    }

    let unused = stats::unused_direct(&tree, &usage);
    if !unused.is_empty() {
        println!("\n{}", style("Unused direct dependencies").bold().underlined());
        for entry in &unused {
            println!(
                "  {} (pulls in {} transitive)",
                entry.coordinate, entry.transitive_count
            );
        }
    }

    println!();
    print!("{}", report::render_usage(&usage));

    println!("{}", style("Redundancy analysis:").green().bold());
    let analysis = analyze(&tree, &usage);
    print!("{}", report::render_analysis(&analysis));

    if let Some(dir) = output {
        csv::export_report(&tree, &usage, &analysis, dir)?;
        println!("\n{} {}", style("Report exported to:").green().bold(), dir.display());
    }
    Ok(())
}
