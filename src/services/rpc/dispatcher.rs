//! JSON-RPC method dispatch.
//!
//! The dispatcher checks the shape of a call (method name, arity, parameter
//! types) and then delegates to the registry, the search resolver, the
//! tokenomics aggregator or the ledger client. Chain-scoped methods verify
//! that the chain is registered before any downstream call.

use serde_json::Value;
use std::{fmt, str::FromStr, sync::Arc, time::Instant};
use tracing::{debug, instrument};

use crate::{
	models::{
		AssetSummary, ChainListEntry, ChainState, InfoResponse, MethodResult, NodeInfo,
		RpcRequest, RpcResponse, SearchResult,
	},
	repositories::{ChainRegistry, ChainRepositoryTrait},
	services::{
		ledger::LedgerQueryClient,
		price::PriceQuoteClient,
		rpc::{
			params::{chain_id_param, expect_arity, string_param, text_param, u16_param},
			RpcError,
		},
		search::SearchResolver,
		tokenomics::TokenomicsAggregator,
	},
	utils::metrics::observe_rpc_call,
};

/// Every method exposed over JSON-RPC
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RpcMethod {
	GetChainInfo,
	GetOtherChainList,
	GetInfo,
	GetCoinInfo,
	Search,
	GetByzantineCount,
	AssetGet,
	GetNodeInfo,
	GetSymbolBaseInfo,
	GetSymbolInfo,
	GetTotalSupply,
	GetCirculation,
	GetDestroy,
	SymbolReport,
}

impl RpcMethod {
	pub const ALL: [RpcMethod; 14] = [
		RpcMethod::GetChainInfo,
		RpcMethod::GetOtherChainList,
		RpcMethod::GetInfo,
		RpcMethod::GetCoinInfo,
		RpcMethod::Search,
		RpcMethod::GetByzantineCount,
		RpcMethod::AssetGet,
		RpcMethod::GetNodeInfo,
		RpcMethod::GetSymbolBaseInfo,
		RpcMethod::GetSymbolInfo,
		RpcMethod::GetTotalSupply,
		RpcMethod::GetCirculation,
		RpcMethod::GetDestroy,
		RpcMethod::SymbolReport,
	];

	pub fn name(&self) -> &'static str {
		match self {
			RpcMethod::GetChainInfo => "getChainInfo",
			RpcMethod::GetOtherChainList => "getOtherChainList",
			RpcMethod::GetInfo => "getInfo",
			RpcMethod::GetCoinInfo => "getCoinInfo",
			RpcMethod::Search => "search",
			RpcMethod::GetByzantineCount => "getByzantineCount",
			RpcMethod::AssetGet => "assetGet",
			RpcMethod::GetNodeInfo => "getNodeInfo",
			RpcMethod::GetSymbolBaseInfo => "getSymbolBaseInfo",
			RpcMethod::GetSymbolInfo => "getSymbolInfo",
			RpcMethod::GetTotalSupply => "getTotalSupply",
			RpcMethod::GetCirculation => "getCirculation",
			RpcMethod::GetDestroy => "getDestroy",
			RpcMethod::SymbolReport => "symbolReport",
		}
	}

	/// Minimum number of positional parameters
	pub fn arity(&self) -> usize {
		match self {
			RpcMethod::GetChainInfo | RpcMethod::GetSymbolBaseInfo => 0,
			RpcMethod::Search | RpcMethod::GetByzantineCount | RpcMethod::GetSymbolInfo => 2,
			_ => 1,
		}
	}
}

impl fmt::Display for RpcMethod {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for RpcMethod {
	type Err = RpcError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		RpcMethod::ALL
			.iter()
			.find(|method| method.name() == s)
			.copied()
			.ok_or_else(|| RpcError::params_error(format!("method not found: {}", s)))
	}
}

pub struct Dispatcher<T: ChainRepositoryTrait> {
	registry: ChainRegistry<T>,
	ledger: Arc<dyn LedgerQueryClient>,
	resolver: SearchResolver<T>,
	tokenomics: TokenomicsAggregator<T>,
}

impl<T: ChainRepositoryTrait> Dispatcher<T> {
	pub fn new(
		registry: ChainRegistry<T>,
		ledger: Arc<dyn LedgerQueryClient>,
		price: Arc<dyn PriceQuoteClient>,
	) -> Self {
		Self {
			resolver: SearchResolver::new(registry.clone(), ledger.clone()),
			tokenomics: TokenomicsAggregator::new(registry.clone(), price),
			registry,
			ledger,
		}
	}

	/// Handles one JSON-RPC request; failures become error responses
	pub async fn handle(&self, request: RpcRequest) -> RpcResponse {
		let started = Instant::now();
		let outcome = self.dispatch(&request.method, &request.params).await;

		let label = request
			.method
			.parse::<RpcMethod>()
			.map(|method| method.name())
			.unwrap_or("unknown");
		let status = match &outcome {
			Ok(_) => "ok",
			Err(err) => err.outcome(),
		};
		observe_rpc_call(label, status, started.elapsed().as_secs_f64());
		debug!(method = %request.method, outcome = status, "Dispatched RPC call");

		match outcome {
			Ok(result) => RpcResponse::success(request.id, result),
			Err(err) => RpcResponse::failure(request.id, err.to_body()),
		}
	}

	/// Validates the call shape and runs the method
	#[instrument(skip(self, params))]
	pub async fn dispatch(&self, method: &str, params: &[Value]) -> Result<MethodResult, RpcError> {
		let method: RpcMethod = method.parse()?;
		expect_arity(params, method.arity())?;

		match method {
			RpcMethod::GetChainInfo => self.chain_info(),
			RpcMethod::GetOtherChainList => self.other_chain_list(chain_id_param(params, 0)?),
			RpcMethod::GetInfo => self.info(chain_id_param(params, 0)?),
			RpcMethod::GetCoinInfo => {
				let chain = self.chain(chain_id_param(params, 0)?)?;
				Ok(MethodResult::CoinInfo(Box::new(chain.coin)))
			}
			RpcMethod::Search => {
				let chain_id = chain_id_param(params, 0)?;
				let text = text_param(params, 1, "text")?;
				self.search(chain_id, &text).await
			}
			RpcMethod::GetByzantineCount => {
				let chain_id = chain_id_param(params, 0)?;
				let tx_hash = string_param(params, 1, "txHash")?;
				self.chain(chain_id)?;
				let counts = self.ledger.byzantine_count(chain_id, &tx_hash).await?;
				Ok(MethodResult::ByzantineCount(counts))
			}
			RpcMethod::AssetGet => {
				let chain_id = chain_id_param(params, 0)?;
				let report = self.tokenomics.asset_report(chain_id).await?;
				Ok(MethodResult::AssetReport(report))
			}
			RpcMethod::GetNodeInfo => self.node_info(chain_id_param(params, 0)?).await,
			RpcMethod::GetSymbolBaseInfo => Ok(MethodResult::SymbolList(
				self.tokenomics.symbol_base_info().await?,
			)),
			RpcMethod::GetSymbolInfo => {
				let chain_id = u16_param(params, 0, "chainId")?;
				let asset_id = u16_param(params, 1, "assetId")?;
				let info = self.tokenomics.symbol_info(chain_id, asset_id).await?;
				Ok(MethodResult::Symbol(Box::new(info)))
			}
			RpcMethod::GetTotalSupply => Ok(MethodResult::Supply(
				self.tokenomics.total_supply(chain_id_param(params, 0)?)?,
			)),
			RpcMethod::GetCirculation => Ok(MethodResult::Circulation(
				self.tokenomics.circulation(chain_id_param(params, 0)?)?,
			)),
			RpcMethod::GetDestroy => Ok(MethodResult::Destroy(
				self.tokenomics.destroy(chain_id_param(params, 0)?)?,
			)),
			RpcMethod::SymbolReport => Ok(MethodResult::SymbolReport(
				self.tokenomics.symbol_report(chain_id_param(params, 0)?)?,
			)),
		}
	}

	fn chain(&self, chain_id: u16) -> Result<ChainState, RpcError> {
		self.registry
			.get(chain_id)
			.ok_or_else(|| RpcError::data_not_exists(format!("chain {} not found", chain_id)))
	}

	fn chain_info(&self) -> Result<MethodResult, RpcError> {
		let chain = self.chain(self.registry.default_chain_id())?;
		Ok(MethodResult::ChainInfo(Box::new(chain.info)))
	}

	fn other_chain_list(&self, chain_id: u16) -> Result<MethodResult, RpcError> {
		self.chain(chain_id)?;
		let others = self
			.registry
			.get_all()
			.into_iter()
			.filter(|chain| chain.chain_id() != chain_id)
			.map(|chain| ChainListEntry {
				chain_id: chain.chain_id(),
				chain_name: chain.info.chain_name,
			})
			.collect();
		Ok(MethodResult::ChainList(others))
	}

	fn info(&self, chain_id: u16) -> Result<MethodResult, RpcError> {
		let chain = self.chain(chain_id)?;
		let agent_asset = self
			.registry
			.get_registered_asset(chain.config.agent_asset_key())
			.map(|asset| AssetSummary::from(&asset));

		Ok(MethodResult::Info(Box::new(InfoResponse {
			chain_id,
			network_height: chain.heights.network_height,
			local_height: chain.heights.local_height,
			default_asset: AssetSummary::from(chain.default_asset()),
			agent_asset,
			magic_number: chain.config.magic_number,
			is_run_cross_chain: chain.config.run_cross_chain,
			is_run_smart_contract: chain.config.run_smart_contract,
		})))
	}

	async fn search(&self, chain_id: u16, text: &str) -> Result<MethodResult, RpcError> {
		match self.resolver.resolve(chain_id, text).await? {
			SearchResult::NotFound => Err(RpcError::data_not_exists(format!(
				"nothing matches '{}' on chain {}",
				text, chain_id
			))),
			found => Ok(MethodResult::Search(found)),
		}
	}

	async fn node_info(&self, chain_id: u16) -> Result<MethodResult, RpcError> {
		let chain = self.chain(chain_id)?;
		let node_count = match &chain.best_header {
			Some(header) => self.ledger.agents_count(chain_id, header.height).await?,
			None => 0,
		};
		let timing = self
			.ledger
			.block_time_info(chain_id)
			.await?
			.unwrap_or_default();

		Ok(MethodResult::NodeInfo(NodeInfo {
			node_count,
			bank_node_count: 0,
			block_height: timing.block_height,
			avg_block_time_consuming: timing.avg_consume_time,
			last_block_time_consuming: timing.last_consume_time,
		}))
	}
}
