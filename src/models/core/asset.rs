use serde::{Deserialize, Serialize};
use std::fmt;

/// Composite (chain id, asset id) key identifying a fungible asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetKey {
	pub chain_id: u16,
	pub asset_id: u16,
}

impl AssetKey {
	pub fn new(chain_id: u16, asset_id: u16) -> Self {
		Self { chain_id, asset_id }
	}
}

impl fmt::Display for AssetKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}-{}", self.chain_id, self.asset_id)
	}
}

/// Registration status of an asset in the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetStatus {
	#[default]
	Registered,
	Disabled,
}

/// Registry metadata for one fungible asset
///
/// `decimals` governs every fixed-point conversion of amounts denominated in
/// this asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetDescriptor {
	pub chain_id: u16,
	pub asset_id: u16,
	pub symbol: String,
	pub decimals: u32,
	#[serde(default)]
	pub icon: Option<String>,
	#[serde(default)]
	pub status: AssetStatus,
}

impl AssetDescriptor {
	pub fn key(&self) -> AssetKey {
		AssetKey::new(self.chain_id, self.asset_id)
	}
}

/// The short asset summary embedded in chain info responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetSummary {
	pub chain_id: u16,
	pub asset_id: u16,
	pub symbol: String,
	pub decimals: u32,
}

impl From<&AssetDescriptor> for AssetSummary {
	fn from(asset: &AssetDescriptor) -> Self {
		Self {
			chain_id: asset.chain_id,
			asset_id: asset.asset_id,
			symbol: asset.symbol.clone(),
			decimals: asset.decimals,
		}
	}
}
