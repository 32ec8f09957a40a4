//! Larder CLI
//!
//! Shopping lists from weekly meal plans, plus kitchen unit helpers.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use larder_cli::{Args, commands};
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn,larder=info".into())
    };

    // Logs go to stderr; stdout carries exported lists
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut stdout = std::io::stdout().lock();
    commands::run(args.command, args.config.as_deref(), &mut stdout)
}
