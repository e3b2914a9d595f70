//! Nomen CLI
//!
//! Usage: nomen <COMMAND>
//!
//! Commands:
//!   names     Validate file names against the naming grammar
//!   meta      Validate metadata sidecar documents
//!   registry  Build the registry manifest

mod cli;
mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::{Cli, Commands};

fn init_tracing() {
    let env_filter = EnvFilter::try_from_env("NOMEN_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    // Reports own stdout; diagnostics go to stderr.
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(env_filter)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Names { files, root } => commands::names::cmd_names(
            &files,
            root.as_deref(),
            cli.json,
            cli.verbose,
            cli.color,
        ),
        Commands::Meta { files, schema } => commands::meta::cmd_meta(
            &files,
            schema.as_deref(),
            cli.json,
            cli.verbose,
            cli.color,
        ),
        Commands::Registry { root, out } => commands::registry::cmd_registry(
            &root,
            out.as_deref(),
            cli.json,
            cli.verbose,
            cli.color,
        ),
    }
}
