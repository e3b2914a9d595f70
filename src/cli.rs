use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Nomen - naming grammar validator, sidecar checker and registry builder
#[derive(Parser, Debug)]
#[command(name = "nomen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit NDJSON events instead of human-readable output
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v shows skipped files)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// When to use colors
    #[arg(long, value_enum, global = true)]
    pub color: Option<ColorWhen>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate file names against the naming grammar
    Names {
        /// Files to validate (pre-commit mode); directory exclusions are not applied
        files: Vec<PathBuf>,

        /// Recursively validate a directory (default: current directory)
        #[arg(long)]
        root: Option<PathBuf>,
    },

    /// Validate metadata sidecar documents
    Meta {
        /// Sidecar files to validate
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Schema definition (overrides config and NOMEN_SCHEMA)
        #[arg(long)]
        schema: Option<PathBuf>,
    },

    /// Build the registry manifest of sidecar/source pairs
    Registry {
        /// Directory to walk
        #[arg(long, default_value = ".")]
        root: PathBuf,

        /// Manifest output path (overrides config and NOMEN_REGISTRY_OUT)
        #[arg(long)]
        out: Option<PathBuf>,
    },
}
