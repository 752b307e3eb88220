use serde::{Deserialize, Serialize};

use crate::models::AssetKey;

/// One periodic statistics bucket for a tracked asset
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetSnapshot {
	pub asset_chain_id: u16,
	pub asset_id: u16,
	pub symbol: String,
	/// Monotonic period index; larger is newer
	pub period: u64,
	/// Asset total at the end of the period
	pub total: u128,
	/// Amount converted into the asset during the period
	pub converter_in_total: u128,
	/// Amount converted out of the asset during the period
	pub converter_out_total: u128,
	/// Number of transfers during the period
	pub tx_total: u64,
	/// Distinct holder addresses at the end of the period
	pub address_count: u64,
}

impl AssetSnapshot {
	pub fn key(&self) -> AssetKey {
		AssetKey::new(self.asset_chain_id, self.asset_id)
	}
}
