//! CLI module for envtrack
//!
//! Provides command-line interface for:
//! - serve: Run the HTTP API
//! - calc: One-shot derived-field calculation over stdin/stdout
//! - print-config: Show the effective server configuration

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command, RecordKind};
pub use commands::{calc, calc_with, print_config, resolve_config, run, run_command, serve};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{read_json, write_json};
