//! Bootstrap module for loading configuration and wiring services.
//!
//! The RPC dispatcher depends on three collaborators: the chain registry
//! snapshot, the ledger query client and the price quote client. Each can be
//! injected, which is how tests substitute fixtures and mocks; anything not
//! injected is built from the server configuration.

use std::{error::Error, path::Path, sync::Arc};
use tracing::info;

use crate::{
	models::{ConfigLoader, ServerConfig},
	repositories::{ChainRegistry, ChainRepository, ChainRepositoryTrait},
	services::{
		ledger::{HttpLedgerClient, LedgerQueryClient},
		price::{HttpPriceClient, PriceQuoteClient},
		rpc::Dispatcher,
	},
	utils::metrics::update_registry_metrics,
};

/// Type alias for handling ServiceResult
pub type Result<T> = std::result::Result<T, Box<dyn Error>>;

/// File name of the server configuration inside the config directory
pub const SERVER_CONFIG_FILE: &str = "server.json";

/// Sub-directory holding one snapshot file per chain
pub const CHAINS_DIR: &str = "chains";

/// Loads and validates `server.json` from `config_dir`
pub fn load_server_config(config_dir: &Path) -> Result<ServerConfig> {
	let path = config_dir.join(SERVER_CONFIG_FILE);
	let config = ServerConfig::load_from_path(&path)?;
	info!(
		path = %path.display(),
		default_chain_id = config.default_chain_id,
		"Loaded server configuration"
	);
	Ok(config)
}

/// Builds the dispatcher for the configured chains.
///
/// # Arguments
/// * `config` - Validated server configuration
/// * `config_dir` - Directory holding the `chains/` snapshot files
/// * `ledger` - Optional ledger client; built from `config.ledger` when absent
/// * `price` - Optional price client; built from `config.price` when absent
///
/// # Errors
/// Returns an error if the chain snapshots fail to load or a client cannot
/// be constructed
pub fn initialize_services(
	config: &ServerConfig,
	config_dir: &Path,
	ledger: Option<Arc<dyn LedgerQueryClient>>,
	price: Option<Arc<dyn PriceQuoteClient>>,
) -> Result<Arc<Dispatcher<ChainRepository>>> {
	let chains_dir = config_dir.join(CHAINS_DIR);
	let registry =
		ChainRegistry::<ChainRepository>::new(Some(&chains_dir), config.default_chain_id)?;

	let ledger: Arc<dyn LedgerQueryClient> = match ledger {
		Some(client) => client,
		None => Arc::new(HttpLedgerClient::new(&config.ledger, &config.http_retry)?),
	};

	let price: Arc<dyn PriceQuoteClient> = match price {
		Some(client) => client,
		None => Arc::new(HttpPriceClient::new(&config.price, &config.http_retry)?),
	};

	Ok(create_dispatcher(registry, ledger, price))
}

/// Wraps an already loaded registry and records its size in the metrics
pub fn create_dispatcher<T: ChainRepositoryTrait>(
	registry: ChainRegistry<T>,
	ledger: Arc<dyn LedgerQueryClient>,
	price: Arc<dyn PriceQuoteClient>,
) -> Arc<Dispatcher<T>> {
	let chains = registry.get_all().len();
	let assets = registry.registered_assets().len();
	update_registry_metrics(chains, assets);
	info!(chains, assets, "Chain registry ready");

	Arc::new(Dispatcher::new(registry, ledger, price))
}
