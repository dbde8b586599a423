//! Command: display the dependency tree.

use std::path::Path;

use console::style;

use depsift_parser::tree_json;
use depsift_report::console::{render_tree, TreeRenderOptions};
use depsift_util::errors::DepsiftResult;

pub fn exec(tree_path: &Path, depth: Option<usize>, scope: Option<&str>) -> DepsiftResult<()> {
    let tree = tree_json::parse_file(tree_path)?;
    let root = tree.node(tree.root());

    println!("{} {}", style("Dependency tree for:").blue().bold(), root.key());
    println!("{} {}", style("Total dependencies:").bold(), tree.len());
    println!("{} {}", style("Max depth:").bold(), tree.max_depth());
    println!();

    let opts = TreeRenderOptions {
        max_depth: depth,
        filter_scope: scope.map(str::to_string),
        highlight: Vec::new(),
        show_scope: true,
    };
    print!("{}", render_tree(&tree, &opts));
    Ok(())
}
