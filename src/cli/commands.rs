//! CLI command implementations

use std::io::{self, Read, Write};
use std::path::Path;

use tracing::info;

use crate::http_server::{HttpServer, ServerConfig};
use crate::logging::{init_logging, Verbosity};
use crate::records::{CarbonEmission, DeforestationImpact, EnvironmentStore, Record, WaterWastage};

use super::args::{Cli, Command, RecordKind};
use super::errors::{CliError, CliResult};
use super::io::{read_json, write_json, write_stdout};

/// Parse CLI arguments, set up logging and run the command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    init_logging(Verbosity::from_flags(cli.quiet, cli.verbose));
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, host, port } => serve(config.as_deref(), host, port),
        Command::Calc { kind } => calc(kind),
        Command::PrintConfig { config } => print_config(config.as_deref()),
    }
}

/// Resolve the effective configuration: file (or defaults), then flag overrides
pub fn resolve_config(
    config_path: Option<&Path>,
    host: Option<String>,
    port: Option<u16>,
) -> CliResult<ServerConfig> {
    let mut config = ServerConfig::load_or_default(config_path)?;

    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }
    config.validate()?;

    Ok(config)
}

/// Start the HTTP server and block until it shuts down
pub fn serve(config_path: Option<&Path>, host: Option<String>, port: Option<u16>) -> CliResult<()> {
    let config = resolve_config(config_path, host, port)?;

    let store = EnvironmentStore::new();
    let server = HttpServer::with_config(config, store);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })?;

    Ok(())
}

/// Fill in derived fields for one record read from stdin
pub fn calc(kind: RecordKind) -> CliResult<()> {
    let (stdin, stdout) = (io::stdin().lock(), io::stdout().lock());
    match kind {
        RecordKind::Carbon => calc_with::<CarbonEmission>(stdin, stdout),
        RecordKind::Water => calc_with::<WaterWastage>(stdin, stdout),
        RecordKind::Deforestation => calc_with::<DeforestationImpact>(stdin, stdout),
    }
}

/// Read one record from `input`, write it with derived fields to `output`
pub fn calc_with<R: Record>(input: impl Read, output: impl Write) -> CliResult<()> {
    let record: R = read_json(input)?;
    info!(kind = R::LABEL, id = record.id(), "calculating derived fields");
    let record = record
        .calculated()
        .map_err(|e| CliError::invalid_input(e.to_string()))?;
    write_json(output, &record)
}

/// Print the effective configuration
pub fn print_config(config_path: Option<&Path>) -> CliResult<()> {
    let config = resolve_config(config_path, None, None)?;
    write_stdout(&config)
}
