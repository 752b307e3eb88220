use serde::{Deserialize, Serialize};

use crate::models::{AssetDescriptor, AssetKey, BlockHeaderInfo, CoinAggregate};

/// Public description of a ledger chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainInfo {
	pub chain_id: u16,
	pub chain_name: String,
	/// Textual address prefix used by this chain (e.g. `NULS`)
	pub address_prefix: String,
	pub default_asset: AssetDescriptor,
	/// All assets issued on this chain, including the default asset
	#[serde(default)]
	pub assets: Vec<AssetDescriptor>,
	#[serde(default)]
	pub seeds: Vec<String>,
}

/// Static per-chain settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainConfig {
	/// Chain of the asset used for staking/agent deposits
	pub agent_chain_id: u16,
	/// Asset id of the asset used for staking/agent deposits
	pub agent_asset_id: u16,
	pub magic_number: u32,
	#[serde(default)]
	pub run_cross_chain: bool,
	#[serde(default)]
	pub run_smart_contract: bool,
	/// Amount issued at genesis, in base units of the default asset
	pub initial_amount: u128,
	/// Configured ceiling on the total inflation, in base units of the default asset
	pub total_inflation_amount: u128,
}

impl ChainConfig {
	pub fn agent_asset_key(&self) -> AssetKey {
		AssetKey::new(self.agent_chain_id, self.agent_asset_id)
	}
}

/// Heights observed by the external sync process
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncHeights {
	pub network_height: u64,
	pub local_height: u64,
}

/// Everything the registry knows about one configured chain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainState {
	pub info: ChainInfo,
	pub config: ChainConfig,
	#[serde(default)]
	pub best_header: Option<BlockHeaderInfo>,
	#[serde(default)]
	pub coin: CoinAggregate,
	#[serde(default)]
	pub heights: SyncHeights,
}

impl ChainState {
	pub fn chain_id(&self) -> u16 {
		self.info.chain_id
	}

	pub fn default_asset(&self) -> &AssetDescriptor {
		&self.info.default_asset
	}

	/// Looks up one of this chain's assets by id
	pub fn asset(&self, asset_id: u16) -> Option<&AssetDescriptor> {
		if self.info.default_asset.asset_id == asset_id {
			return Some(&self.info.default_asset);
		}
		self.info.assets.iter().find(|a| a.asset_id == asset_id)
	}
}
