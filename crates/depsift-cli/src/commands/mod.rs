//! Command dispatch and handler modules.

mod analyze;
mod check;
mod export;
mod tree;

use miette::Result;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Tree { tree, depth, scope } => tree::exec(&tree, depth, scope.as_deref()),
        Command::Analyze {
            tree,
            analysis,
            output,
        } => analyze::exec(&tree, &analysis, output.as_deref()),
        Command::Check { tree, analysis } => check::exec(&tree, &analysis),
        Command::Export {
            tree,
            analysis,
            output,
        } => export::exec(&tree, &analysis, &output),
    }
}
