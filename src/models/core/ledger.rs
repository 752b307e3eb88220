//! Ledger records returned by the node query service.
//!
//! These mirror the node's JSON shapes (camelCase keys) and are passed through
//! to API callers unchanged.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockHeaderInfo {
	pub hash: String,
	pub height: u64,
	#[serde(default)]
	pub pre_hash: String,
	#[serde(default)]
	pub merkle_hash: String,
	#[serde(default)]
	pub create_time: i64,
	#[serde(default)]
	pub tx_count: u32,
	#[serde(default)]
	pub packing_address: String,
	#[serde(default)]
	pub agent_hash: Option<String>,
	#[serde(default)]
	pub round_index: u64,
	#[serde(default)]
	pub reward: u128,
	#[serde(default)]
	pub total_fee: u128,
	#[serde(default)]
	pub size: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinTransfer {
	pub address: String,
	pub chain_id: u16,
	pub asset_id: u16,
	pub symbol: String,
	pub amount: u128,
	#[serde(default)]
	pub lock_time: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionInfo {
	pub hash: String,
	#[serde(rename = "type")]
	pub tx_type: u16,
	pub height: i64,
	#[serde(default)]
	pub create_time: i64,
	#[serde(default)]
	pub remark: Option<String>,
	#[serde(default)]
	pub fee: u128,
	#[serde(default)]
	pub value: u128,
	#[serde(default)]
	pub status: u8,
	#[serde(default)]
	pub coin_froms: Vec<CoinTransfer>,
	#[serde(default)]
	pub coin_tos: Vec<CoinTransfer>,
	/// Type specific payload, left opaque
	#[serde(default)]
	pub tx_data: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockInfo {
	pub header: BlockHeaderInfo,
	#[serde(default)]
	pub tx_list: Vec<TransactionInfo>,
}

/// Account state as tracked by the ledger
///
/// An address that has never appeared on chain is represented by
/// [`AccountInfo::empty`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountInfo {
	pub address: String,
	#[serde(default)]
	pub alias: Option<String>,
	#[serde(default, rename = "type")]
	pub account_type: u8,
	#[serde(default)]
	pub tx_count: u64,
	#[serde(default)]
	pub total_out: u128,
	#[serde(default)]
	pub total_in: u128,
	#[serde(default)]
	pub consensus_lock: u128,
	#[serde(default)]
	pub time_lock: u128,
	#[serde(default)]
	pub balance: u128,
	#[serde(default)]
	pub total_balance: u128,
	#[serde(default)]
	pub total_reward: u128,
	#[serde(default)]
	pub token_count: u32,
	#[serde(default)]
	pub contract_count: u32,
}

impl AccountInfo {
	/// Zero-state account carrying only its address
	pub fn empty(address: impl Into<String>) -> Self {
		Self {
			address: address.into(),
			..Default::default()
		}
	}
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractInfo {
	pub contract_address: String,
	#[serde(default)]
	pub creater: String,
	#[serde(default)]
	pub create_tx_hash: String,
	#[serde(default)]
	pub block_height: u64,
	#[serde(default)]
	pub create_time: i64,
	#[serde(default)]
	pub alias: Option<String>,
	#[serde(default)]
	pub status: i32,
	#[serde(default)]
	pub is_nrc20: bool,
	#[serde(default)]
	pub token_name: Option<String>,
	#[serde(default)]
	pub symbol: Option<String>,
	#[serde(default)]
	pub decimals: u32,
	#[serde(default)]
	pub total_supply: Option<String>,
	#[serde(default)]
	pub transfer_count: u64,
	#[serde(default)]
	pub balance: u128,
	#[serde(default)]
	pub tx_count: u64,
}

/// Block production timing for a chain
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockTimeInfo {
	pub chain_id: u16,
	pub block_height: u64,
	/// Average block production time in milliseconds
	pub avg_consume_time: f64,
	/// Production time of the last block in milliseconds
	pub last_consume_time: u64,
}

/// Byzantine-fault vote counts for a transaction, passed through as returned by the node
pub type ByzantineCount = Map<String, Value>;
