use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{
	AssetDescriptor, AssetSummary, ByzantineCount, ChainInfo, CoinAggregate, DestroyInfo,
	SearchResult,
};

/// Entry of `getOtherChainList`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainListEntry {
	pub chain_id: u16,
	pub chain_name: String,
}

/// Result of `getInfo`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InfoResponse {
	pub chain_id: u16,
	pub network_height: u64,
	pub local_height: u64,
	pub default_asset: AssetSummary,
	/// Staking asset, `null` when it is not in the registry
	pub agent_asset: Option<AssetSummary>,
	pub magic_number: u32,
	pub is_run_cross_chain: bool,
	pub is_run_smart_contract: bool,
}

/// Result of `getTotalSupply`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplyFigure {
	pub supply_coin: String,
}

/// Result of `getCirculation`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CirculationFigure {
	pub circulation: String,
}

/// Result of `getDestroy`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DestroyFigure {
	pub destroy: String,
	pub list: Vec<DestroyInfo>,
}

/// Result of `assetGet`, every amount in base units of the default asset
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetReport {
	pub nvt_inflation_amount: u128,
	pub nvt_inflation_total: u128,
	pub nvt_initial_amount: u128,
	pub nvt_publish_amount: u128,
	pub nvt_locked_amount: u128,
	pub nvt_turnover_amount: u128,
	pub nvt_total: u128,
	pub nvt_usdt_value: u128,
}

/// Result of `getNodeInfo`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeInfo {
	pub node_count: u64,
	pub bank_node_count: u64,
	pub block_height: u64,
	pub avg_block_time_consuming: f64,
	pub last_block_time_consuming: u64,
}

/// One row of `symbolReport`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolReportRow {
	pub symbol: String,
	pub total: u128,
	pub convert24: u128,
	pub redeem24: u128,
	pub transfer24: u64,
	pub address_count: u64,
	pub icon: Option<String>,
	pub asset_chain_id: u16,
	pub asset_id: u16,
}

/// Registered asset with its derived USD price
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolPriceInfo {
	#[serde(flatten)]
	pub asset: AssetDescriptor,
	pub usd_price: Decimal,
}

/// Successful result of any dispatched method
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MethodResult {
	ChainInfo(Box<ChainInfo>),
	ChainList(Vec<ChainListEntry>),
	Info(Box<InfoResponse>),
	CoinInfo(Box<CoinAggregate>),
	Search(SearchResult),
	ByzantineCount(ByzantineCount),
	AssetReport(AssetReport),
	NodeInfo(NodeInfo),
	SymbolList(Vec<SymbolPriceInfo>),
	Symbol(Box<SymbolPriceInfo>),
	Supply(SupplyFigure),
	Circulation(CirculationFigure),
	Destroy(DestroyFigure),
	SymbolReport(Vec<SymbolReportRow>),
}
