use serde::{Deserialize, Serialize};
use std::{path::Path, time::Duration};
use url::Url;

use crate::models::{ConfigError, ConfigLoader};

/// A downstream JSON-RPC service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ServiceEndpoint {
	pub url: String,
	#[serde(default = "default_timeout_ms")]
	pub timeout_ms: u64,
}

impl ServiceEndpoint {
	pub fn timeout(&self) -> Duration {
		Duration::from_millis(self.timeout_ms)
	}
}

fn default_timeout_ms() -> u64 {
	30_000
}

/// Retry settings applied by the downstream HTTP adapters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpRetrySettings {
	pub max_retries: u32,
	pub initial_backoff_ms: u64,
	pub max_backoff_ms: u64,
}

impl Default for HttpRetrySettings {
	fn default() -> Self {
		Self {
			max_retries: 3,
			initial_backoff_ms: 250,
			max_backoff_ms: 10_000,
		}
	}
}

/// Top level service configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
	pub bind_address: String,
	/// Chain served by `getChainInfo`
	pub default_chain_id: u16,
	/// Node query service
	pub ledger: ServiceEndpoint,
	/// Price quote service
	pub price: ServiceEndpoint,
	#[serde(default)]
	pub http_retry: HttpRetrySettings,
}

impl ConfigLoader for ServerConfig {
	const DEFAULT_DIR: &'static str = "config";

	fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
		let file = std::fs::File::open(path)?;
		let config: ServerConfig =
			serde_json::from_reader(file).map_err(|e| ConfigError::parse_error(path, e))?;

		if let Err(validation_error) = config.validate() {
			return Err(ConfigError::validation_error(validation_error));
		}

		Ok(config)
	}

	fn validate(&self) -> Result<(), String> {
		if self.bind_address.split(':').nth(1).is_none() {
			return Err("bind_address must be of the form HOST:PORT".to_string());
		}

		for (name, endpoint) in [("ledger", &self.ledger), ("price", &self.price)] {
			match Url::parse(&endpoint.url) {
				Ok(url) if matches!(url.scheme(), "http" | "https") => {}
				_ => return Err(format!("{} url must start with http:// or https://", name)),
			}
			if endpoint.timeout_ms == 0 {
				return Err(format!("{} timeout_ms must be greater than 0", name));
			}
		}

		if self.http_retry.initial_backoff_ms > self.http_retry.max_backoff_ms {
			return Err("initial_backoff_ms must not exceed max_backoff_ms".to_string());
		}

		Ok(())
	}
}
