//! Ledger query client.
//!
//! [`LedgerQueryClient`] is the read interface to the node query service.
//! Absent records are `Ok(None)`; failures reported by the node surface as
//! [`LedgerError::UpstreamError`] with the node's own code.

use async_trait::async_trait;
use serde_json::json;
use tracing::instrument;

use crate::{
	models::{
		AccountInfo, BlockHeaderInfo, BlockInfo, BlockTimeInfo, ByzantineCount, ContractInfo,
		HttpRetrySettings, ServiceEndpoint, TransactionInfo,
	},
	services::{ledger::LedgerError, transport::JsonRpcTransport},
};

/// Read access to blocks, transactions, accounts and contracts of a chain
#[async_trait]
pub trait LedgerQueryClient: Send + Sync {
	async fn block_header_by_height(
		&self,
		chain_id: u16,
		height: u64,
	) -> Result<Option<BlockHeaderInfo>, LedgerError>;

	async fn block_header_by_hash(
		&self,
		chain_id: u16,
		hash: &str,
	) -> Result<Option<BlockHeaderInfo>, LedgerError>;

	/// Full block including its transactions
	async fn block_by_hash(&self, chain_id: u16, hash: &str)
		-> Result<Option<BlockInfo>, LedgerError>;

	async fn transaction_by_hash(
		&self,
		chain_id: u16,
		hash: &str,
	) -> Result<Option<TransactionInfo>, LedgerError>;

	async fn account_info(
		&self,
		chain_id: u16,
		address: &str,
	) -> Result<Option<AccountInfo>, LedgerError>;

	async fn contract_info(
		&self,
		chain_id: u16,
		address: &str,
	) -> Result<Option<ContractInfo>, LedgerError>;

	async fn byzantine_count(
		&self,
		chain_id: u16,
		tx_hash: &str,
	) -> Result<ByzantineCount, LedgerError>;

	/// Number of consensus agents registered at `height`
	async fn agents_count(&self, chain_id: u16, height: u64) -> Result<u64, LedgerError>;

	async fn block_time_info(&self, chain_id: u16) -> Result<Option<BlockTimeInfo>, LedgerError>;
}

/// Remote method names of the node query service
mod method {
	pub const HEADER_BY_HEIGHT: &str = "getHeaderByHeight";
	pub const HEADER_BY_HASH: &str = "getHeaderByHash";
	pub const BLOCK_BY_HASH: &str = "getBlockByHash";
	pub const TX: &str = "getTx";
	pub const ACCOUNT: &str = "getAccount";
	pub const CONTRACT: &str = "getContract";
	pub const BYZANTINE_COUNT: &str = "getByzantineCount";
	pub const AGENTS_COUNT: &str = "getAgentsCount";
	pub const BLOCK_TIME: &str = "getBlockTimeInfo";
}

/// [`LedgerQueryClient`] backed by the node's JSON-RPC endpoint
#[derive(Debug, Clone)]
pub struct HttpLedgerClient {
	transport: JsonRpcTransport,
}

impl HttpLedgerClient {
	pub fn new(endpoint: &ServiceEndpoint, retry: &HttpRetrySettings) -> anyhow::Result<Self> {
		Ok(Self {
			transport: JsonRpcTransport::new(endpoint, &retry.into())?,
		})
	}
}

#[async_trait]
impl LedgerQueryClient for HttpLedgerClient {
	#[instrument(skip(self))]
	async fn block_header_by_height(
		&self,
		chain_id: u16,
		height: u64,
	) -> Result<Option<BlockHeaderInfo>, LedgerError> {
		Ok(self
			.transport
			.call(method::HEADER_BY_HEIGHT, json!([chain_id, height]))
			.await?)
	}

	#[instrument(skip(self))]
	async fn block_header_by_hash(
		&self,
		chain_id: u16,
		hash: &str,
	) -> Result<Option<BlockHeaderInfo>, LedgerError> {
		Ok(self
			.transport
			.call(method::HEADER_BY_HASH, json!([chain_id, hash]))
			.await?)
	}

	#[instrument(skip(self))]
	async fn block_by_hash(
		&self,
		chain_id: u16,
		hash: &str,
	) -> Result<Option<BlockInfo>, LedgerError> {
		Ok(self
			.transport
			.call(method::BLOCK_BY_HASH, json!([chain_id, hash]))
			.await?)
	}

	#[instrument(skip(self))]
	async fn transaction_by_hash(
		&self,
		chain_id: u16,
		hash: &str,
	) -> Result<Option<TransactionInfo>, LedgerError> {
		Ok(self.transport.call(method::TX, json!([chain_id, hash])).await?)
	}

	#[instrument(skip(self))]
	async fn account_info(
		&self,
		chain_id: u16,
		address: &str,
	) -> Result<Option<AccountInfo>, LedgerError> {
		Ok(self
			.transport
			.call(method::ACCOUNT, json!([chain_id, address]))
			.await?)
	}

	#[instrument(skip(self))]
	async fn contract_info(
		&self,
		chain_id: u16,
		address: &str,
	) -> Result<Option<ContractInfo>, LedgerError> {
		Ok(self
			.transport
			.call(method::CONTRACT, json!([chain_id, address]))
			.await?)
	}

	#[instrument(skip(self))]
	async fn byzantine_count(
		&self,
		chain_id: u16,
		tx_hash: &str,
	) -> Result<ByzantineCount, LedgerError> {
		let counts: Option<ByzantineCount> = self
			.transport
			.call(method::BYZANTINE_COUNT, json!([chain_id, tx_hash]))
			.await?;
		Ok(counts.unwrap_or_default())
	}

	#[instrument(skip(self))]
	async fn agents_count(&self, chain_id: u16, height: u64) -> Result<u64, LedgerError> {
		let count: Option<u64> = self
			.transport
			.call(method::AGENTS_COUNT, json!([chain_id, height]))
			.await?;
		Ok(count.unwrap_or(0))
	}

	#[instrument(skip(self))]
	async fn block_time_info(&self, chain_id: u16) -> Result<Option<BlockTimeInfo>, LedgerError> {
		Ok(self
			.transport
			.call(method::BLOCK_TIME, json!([chain_id]))
			.await?)
	}
}
