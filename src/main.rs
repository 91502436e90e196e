//! leancheck CLI
//!
//! `leancheck serve` runs the HTTP service, `leancheck check <file>` runs the
//! checker once and prints the diagnostics as JSON.

use clap::Parser as _;

use leancheck::cli::{self, Args, EXIT_FAILURE};

#[tokio::main]
async fn main() {
    setup_logger();

    let args = Args::parse();

    match cli::run(args).await {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            std::process::exit(EXIT_FAILURE);
        }
    }
}

fn setup_logger() {
    use tracing_subscriber::prelude::*;

    let env = tracing_subscriber::EnvFilter::try_from_env("LEANCHECK_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(std::io::IsTerminal::is_terminal(&std::io::stderr()))
        .with_writer(std::io::stderr)
        .with_filter(env);

    tracing_subscriber::registry().with(fmt_layer).init();
}
