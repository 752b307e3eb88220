//! Configuration loading and validation.
//!
//! - `ServerConfig`: bind address, default chain and downstream service endpoints
//! - `ChainSnapshot`: one file per chain, written by the external sync job

use std::path::Path;

mod chain_config;
mod error;
mod server_config;

pub use chain_config::{ChainSnapshot, MAX_ASSET_DECIMALS};
pub use error::ConfigError;
pub use server_config::{HttpRetrySettings, ServerConfig, ServiceEndpoint};

/// Common interface for loading configuration files
pub trait ConfigLoader: Sized {
	/// Directory searched by [`ConfigLoader::load_all`] when no path is given
	const DEFAULT_DIR: &'static str;

	/// Load every JSON file in a directory, keyed by file stem
	fn load_all<T>(path: Option<&Path>) -> Result<T, ConfigError>
	where
		T: FromIterator<(String, Self)>,
	{
		let dir = path.unwrap_or(Path::new(Self::DEFAULT_DIR));
		if !dir.exists() {
			return Err(ConfigError::directory_not_found(dir));
		}

		let mut pairs = Vec::new();
		for entry in std::fs::read_dir(dir)? {
			let path = entry?.path();
			if !Self::is_json_file(&path) {
				continue;
			}

			let name = path
				.file_stem()
				.and_then(|s| s.to_str())
				.unwrap_or("unknown")
				.to_string();

			pairs.push((name, Self::load_from_path(&path)?));
		}

		Ok(T::from_iter(pairs))
	}

	fn load_from_path(path: &Path) -> Result<Self, ConfigError>;

	fn validate(&self) -> Result<(), String>;

	fn is_json_file(path: &Path) -> bool {
		path.extension()
			.map(|ext| ext.to_string_lossy().to_lowercase() == "json")
			.unwrap_or(false)
	}
}
