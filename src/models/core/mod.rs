//! Core domain models for the explorer query façade.
//!
//! - Chains: per-chain configuration, heights and coin aggregates
//! - Assets: registry metadata keyed by (chain id, asset id)
//! - Ledger: block, transaction, account and contract records
//! - Search: the tagged result of resolving a search token

mod address;
mod asset;
mod chain;
mod coin;
mod ledger;
mod price;
mod search;
mod statistics;

pub use address::{Address, AddressError, AddressType, ADDRESS_HASH_LENGTH, ADDRESS_LENGTH};
pub use asset::{AssetDescriptor, AssetKey, AssetStatus, AssetSummary};
pub use chain::{ChainConfig, ChainInfo, ChainState, SyncHeights};
pub use coin::{CoinAggregate, DestroyInfo};
pub use ledger::{
	AccountInfo, BlockHeaderInfo, BlockInfo, BlockTimeInfo, ByzantineCount, CoinTransfer,
	ContractInfo, TransactionInfo,
};
pub use price::PriceQuote;
pub use search::SearchResult;
pub use statistics::AssetSnapshot;
