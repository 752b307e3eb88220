//! Explorer query API entry point.
//!
//! Loads the server configuration and the chain snapshots, connects the
//! ledger and price clients, and serves JSON-RPC until interrupted.
//!
//! # Flow
//! 1. Parses the command line and loads `.env`
//! 2. Initializes logging
//! 3. Loads `server.json` and the `chains/` snapshots from the config directory
//! 4. Starts the HTTP server with the RPC and metrics routes
//! 5. Handles graceful shutdown on Ctrl+C

use explorer_api::{
	bootstrap::{initialize_services, load_server_config, Result},
	services::rpc::create_rpc_server,
	utils::logging::setup_logging,
};

use clap::{Arg, Command};
use dotenvy::dotenv;
use std::path::PathBuf;
use tracing::{error, info};

const DEFAULT_CONFIG_DIR: &str = "config";
const DEFAULT_LOG_LEVEL: &str = "info";

#[tokio::main]
async fn main() -> Result<()> {
	let matches = Command::new("explorer-api")
		.version(env!("CARGO_PKG_VERSION"))
		.about("Read-only JSON-RPC query service for chain explorers.")
		.arg(
			Arg::new("config-dir")
				.long("config-dir")
				.help("Directory holding server.json and chains/ (default: config/)")
				.value_name("PATH"),
		)
		.arg(
			Arg::new("bind")
				.long("bind")
				.help("Address to serve on, overriding bind_address")
				.value_name("HOST:PORT"),
		)
		.arg(
			Arg::new("log-level")
				.long("log-level")
				.help("Set log level (trace, debug, info, warn, error)")
				.value_name("LEVEL"),
		)
		.get_matches();

	dotenv().ok();

	let log_level = matches
		.get_one::<String>("log-level")
		.map(String::as_str)
		.unwrap_or(DEFAULT_LOG_LEVEL);
	setup_logging(log_level).unwrap_or_else(|e| {
		eprintln!("Failed to setup logging: {}", e);
	});

	let config_dir = matches
		.get_one::<String>("config-dir")
		.map(PathBuf::from)
		.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_DIR));

	let mut config = load_server_config(&config_dir).map_err(|e| {
		error!("Failed to load server configuration: {}", e);
		e
	})?;
	if let Some(bind) = matches.get_one::<String>("bind") {
		config.bind_address = bind.clone();
	}

	let dispatcher = initialize_services(&config, &config_dir, None, None).map_err(|e| {
		error!("Failed to initialize services: {}", e);
		e
	})?;

	let server = create_rpc_server(config.bind_address.clone(), dispatcher)?;
	let server_handle = server.handle();

	info!("Service started. Press Ctrl+C to shutdown");

	tokio::select! {
		result = tokio::signal::ctrl_c() => {
			if let Err(e) = result {
				error!("Error waiting for Ctrl+C: {}", e);
			}
			info!("Shutdown signal received, stopping server...");
			server_handle.stop(true).await;
		}
		result = server => {
			if let Err(e) = result {
				error!("API server error: {}", e);
			}
			info!("API server stopped");
		}
	}

	info!("Shutdown complete");
	Ok(())
}
