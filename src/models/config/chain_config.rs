use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

use crate::models::{AssetDescriptor, AssetSnapshot, ChainState, ConfigError, ConfigLoader};

/// Largest decimal scale representable by the fixed-point arithmetic
pub const MAX_ASSET_DECIMALS: u32 = 28;

/// Per-chain state handed over by the external sync job
///
/// Each file under `config/chains` carries one chain's cached state, the
/// registry entries it contributes, and its periodic asset statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainSnapshot {
	pub chain: ChainState,
	#[serde(default)]
	pub registered_assets: Vec<AssetDescriptor>,
	#[serde(default)]
	pub asset_snapshots: Vec<AssetSnapshot>,
}

impl ConfigLoader for ChainSnapshot {
	const DEFAULT_DIR: &'static str = "config/chains";

	fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
		let file = std::fs::File::open(path)?;
		let snapshot: ChainSnapshot =
			serde_json::from_reader(file).map_err(|e| ConfigError::parse_error(path, e))?;

		if let Err(validation_error) = snapshot.validate() {
			return Err(ConfigError::validation_error(format!(
				"{}: {}",
				path.display(),
				validation_error
			)));
		}

		Ok(snapshot)
	}

	fn validate(&self) -> Result<(), String> {
		let info = &self.chain.info;

		match regex::Regex::new(r"^[A-Za-z0-9]+$") {
			Ok(re) => {
				if !re.is_match(&info.address_prefix) {
					return Err(
						"address_prefix must be a non-empty alphanumeric string".to_string()
					);
				}
			}
			Err(e) => return Err(format!("Failed to validate address_prefix: {}", e)),
		}

		if info.default_asset.chain_id != info.chain_id {
			return Err(format!(
				"default asset {} is not issued by chain {}",
				info.default_asset.key(),
				info.chain_id
			));
		}

		for asset in std::iter::once(&info.default_asset)
			.chain(info.assets.iter())
			.chain(self.registered_assets.iter())
		{
			if asset.decimals > MAX_ASSET_DECIMALS {
				return Err(format!(
					"asset {} has {} decimals, at most {} are supported",
					asset.key(),
					asset.decimals,
					MAX_ASSET_DECIMALS
				));
			}
		}

		let coin = &self.chain.coin;
		let derived = coin
			.published(self.chain.config.initial_amount)
			.zip(coin.locked())
			.and_then(|(published, locked)| published.checked_sub(locked));
		if derived != Some(coin.circulation) {
			warn!(
				chain_id = info.chain_id,
				tracked = %coin.circulation,
				derived = ?derived,
				"Tracked circulation differs from published minus locked"
			);
		}

		Ok(())
	}
}
