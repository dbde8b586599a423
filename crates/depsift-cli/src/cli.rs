//! CLI argument definitions for depsift.
//!
//! Uses `clap` derive macros to define the command surface. Each command
//! corresponds to a handler in the [`super::commands`] module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "depsift",
    version,
    about = "Maven dependency redundancy analyzer",
    long_about = "depsift reconciles a resolved Maven dependency tree against a \
                  dependency:analyze usage report to surface redundant declarations \
                  and version conflicts."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Display the dependency tree
    Tree {
        /// Path to the dependency tree JSON file
        #[arg(short, long)]
        tree: PathBuf,
        /// Maximum depth to display
        #[arg(short, long)]
        depth: Option<usize>,
        /// Filter by scope (compile, test, runtime, ...)
        #[arg(short, long)]
        scope: Option<String>,
    },

    /// Analyze dependencies for issues
    Analyze {
        /// Path to the dependency tree JSON file
        #[arg(short, long)]
        tree: PathBuf,
        /// Path to the dependency:analyze log file
        #[arg(short, long)]
        analysis: PathBuf,
        /// Also export the CSV report into this directory
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check for redundant dependencies specifically
    Check {
        /// Path to the dependency tree JSON file
        #[arg(short, long)]
        tree: PathBuf,
        /// Path to the dependency:analyze log file
        #[arg(short, long)]
        analysis: PathBuf,
    },

    /// Export the full analysis report as CSV files
    Export {
        /// Path to the dependency tree JSON file
        #[arg(short, long)]
        tree: PathBuf,
        /// Path to the dependency:analyze log file
        #[arg(short, long)]
        analysis: PathBuf,
        /// Output directory for the CSV files
        #[arg(short, long)]
        output: PathBuf,
    },
}

pub fn parse() -> Cli {
    Cli::parse()
}
