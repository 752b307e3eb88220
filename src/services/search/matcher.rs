//! Input classification for free-text search.
//!
//! Matchers run in a fixed order; the first one that claims an input decides
//! what kind of entity is looked up. Classification depends only on the shape
//! of the text, never on its length band.

use crate::models::{Address, ChainInfo};

/// Length of a block or transaction hash in hex characters
pub const HASH_HEX_LENGTH: usize = 64;

/// A classified search input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchQuery {
	Height(u64),
	Address(Address),
	Hash(String),
}

/// Decides whether an input has the shape of one entity kind
pub trait InputMatcher: Send + Sync {
	/// Short name used in logs
	fn name(&self) -> &'static str;

	fn classify(&self, input: &str, chain: &ChainInfo) -> Option<SearchQuery>;
}

/// Decimal block height
pub struct HeightMatcher;

impl InputMatcher for HeightMatcher {
	fn name(&self) -> &'static str {
		"height"
	}

	fn classify(&self, input: &str, _chain: &ChainInfo) -> Option<SearchQuery> {
		if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
			return None;
		}
		input.parse::<u64>().ok().map(SearchQuery::Height)
	}
}

/// Address valid for the chain being searched
pub struct AddressMatcher;

impl InputMatcher for AddressMatcher {
	fn name(&self) -> &'static str {
		"address"
	}

	fn classify(&self, input: &str, chain: &ChainInfo) -> Option<SearchQuery> {
		Address::parse(input, chain.chain_id, &chain.address_prefix)
			.ok()
			.map(SearchQuery::Address)
	}
}

/// 32-byte hex digest
pub struct HashMatcher;

impl InputMatcher for HashMatcher {
	fn name(&self) -> &'static str {
		"hash"
	}

	fn classify(&self, input: &str, _chain: &ChainInfo) -> Option<SearchQuery> {
		if input.len() == HASH_HEX_LENGTH && input.bytes().all(|b| b.is_ascii_hexdigit()) {
			Some(SearchQuery::Hash(input.to_string()))
		} else {
			None
		}
	}
}

/// Height, then address, then hash
pub fn default_matchers() -> Vec<Box<dyn InputMatcher>> {
	vec![
		Box::new(HeightMatcher),
		Box::new(AddressMatcher),
		Box::new(HashMatcher),
	]
}

/// Runs `matchers` in order and returns the first claim
pub fn classify(
	matchers: &[Box<dyn InputMatcher>],
	input: &str,
	chain: &ChainInfo,
) -> Option<SearchQuery> {
	matchers
		.iter()
		.find_map(|matcher| matcher.classify(input, chain))
}
