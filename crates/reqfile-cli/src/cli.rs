//! CLI argument definitions for reqfile.
//!
//! Uses `clap` derive macros to define the full command surface. Each command
//! corresponds to a handler in the [`super::commands`] module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "reqfile",
    version,
    about = "A reader and validator for pip-style requirements manifests",
    long_about = "reqfile parses plain-text dependency manifests (one requirement per line, \
                  `name<op><version>,...` syntax) and evaluates candidate package versions \
                  against their version constraints."
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
    /// Parse a manifest and report whether every line is well-formed
    Check {
        /// Path to the requirements manifest
        file: PathBuf,
    },

    /// Print the parsed requirements in input order
    List {
        /// Path to the requirements manifest
        file: PathBuf,
        /// Output format: text, json
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Evaluate a candidate version against one requirement's constraints
    Satisfies {
        /// Path to the requirements manifest
        file: PathBuf,
        /// Package name to look up (case- and -/_-insensitive)
        package: String,
        /// Candidate version to test
        version: String,
    },

    /// Print or rewrite the canonical form of a manifest
    Fmt {
        /// Path to the requirements manifest
        file: PathBuf,
        /// Rewrite the file in place instead of printing
        #[arg(long)]
        write: bool,
    },
}

pub fn parse() -> Cli {
    Cli::parse()
}
