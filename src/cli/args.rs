//! CLI argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Run an external checker over source text and report its diagnostics
#[derive(Debug, Clone, Parser)]
#[command(name = "leancheck", version, about)]
pub struct Args {
    /// TOML configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub mode: Mode,
}

#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum Mode {
    /// Serve `POST /check` over HTTP
    Serve {
        /// Bind address
        #[arg(long)]
        host: Option<String>,

        /// Bind port
        #[arg(long)]
        port: Option<u16>,

        /// Checker program
        #[arg(long)]
        checker: Option<String>,
    },

    /// Check one file and print `{"errors": [...]}` as JSON
    Check {
        /// Source file to check
        file: PathBuf,

        /// Checker program
        #[arg(long)]
        checker: Option<String>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
}
