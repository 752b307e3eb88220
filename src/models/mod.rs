//! Domain models and data structures for the explorer query service.
//!
//! This module contains all the core data structures used throughout the application:
//!
//! - `config`: Configuration loading and validation
//! - `core`: Core domain models (chains, assets, ledger records, prices)
//! - `rpc`: JSON-RPC envelopes and typed method responses

mod config;
mod core;
mod rpc;

// Re-export core types
pub use core::{
	AccountInfo, Address, AddressError, AddressType, AssetDescriptor, AssetKey, AssetSnapshot,
	AssetStatus, AssetSummary, BlockHeaderInfo, BlockInfo, BlockTimeInfo, ByzantineCount,
	ChainConfig, ChainInfo, ChainState, CoinAggregate, CoinTransfer, ContractInfo, DestroyInfo,
	PriceQuote, SearchResult, SyncHeights, TransactionInfo, ADDRESS_HASH_LENGTH, ADDRESS_LENGTH,
};

// Re-export config types
pub use config::{
	ChainSnapshot, ConfigError, ConfigLoader, HttpRetrySettings, ServerConfig, ServiceEndpoint,
	MAX_ASSET_DECIMALS,
};

// Re-export rpc types
pub use rpc::{
	AssetReport, ChainListEntry, CirculationFigure, DestroyFigure, InfoResponse, MethodResult,
	NodeInfo, RpcErrorBody, RpcRequest, RpcResponse, SupplyFigure, SymbolPriceInfo,
	SymbolReportRow, JSONRPC_VERSION,
};
