//! CLI argument definitions using clap
//!
//! Commands:
//! - envtrack serve [--config <path>] [--host <host>] [--port <port>]
//! - envtrack calc <carbon|water|deforestation>
//! - envtrack print-config [--config <path>]

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// envtrack - Environmental API for tracking pollution, water wastage and deforestation
#[derive(Parser, Debug)]
#[command(name = "envtrack")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Path to JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Host to bind to, overriding the configuration file
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to, overriding the configuration file
        #[arg(long)]
        port: Option<u16>,
    },

    /// Read one record as JSON from stdin and print it with derived fields
    Calc {
        /// Record kind
        #[arg(value_enum)]
        kind: RecordKind,
    },

    /// Print the effective configuration as JSON
    PrintConfig {
        /// Path to JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

/// Record kinds accepted by `calc`
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Carbon,
    Water,
    Deforestation,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
