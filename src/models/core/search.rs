use serde::Serialize;

use crate::models::{AccountInfo, BlockInfo, ContractInfo, TransactionInfo};

/// Outcome of resolving a free-text search token
///
/// Serializes as `{"type": "<kind>", "data": {...}}`. `NotFound` carries no
/// payload and is turned into an error result before it reaches the wire.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum SearchResult {
	Block(Box<BlockInfo>),
	#[serde(rename = "tx")]
	Transaction(Box<TransactionInfo>),
	Account(Box<AccountInfo>),
	Contract(Box<ContractInfo>),
	#[serde(skip_serializing)]
	NotFound,
}

impl SearchResult {
	pub fn is_found(&self) -> bool {
		!matches!(self, SearchResult::NotFound)
	}

	/// Wire discriminator of the result
	pub fn kind(&self) -> &'static str {
		match self {
			SearchResult::Block(_) => "block",
			SearchResult::Transaction(_) => "tx",
			SearchResult::Account(_) => "account",
			SearchResult::Contract(_) => "contract",
			SearchResult::NotFound => "notFound",
		}
	}
}
