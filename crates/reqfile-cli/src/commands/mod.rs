//! Command dispatch and handler modules.

mod check;
mod fmt;
mod list;
mod satisfies;

use miette::Result;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Check { file } => check::exec(&file, cli.verbose),
        Command::List { file, format } => list::exec(&file, &format),
        Command::Satisfies {
            file,
            package,
            version,
        } => satisfies::exec(&file, &package, &version),
        Command::Fmt { file, write } => fmt::exec(&file, write),
    }
}
