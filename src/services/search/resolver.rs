//! Search resolution.
//!
//! Turns a classified input into a ledger lookup. Absent entities resolve to
//! [`SearchResult::NotFound`]; only registry misses and ledger failures are
//! errors. The one local recovery is an unseen non-contract address, which
//! resolves to a zero-state account.

use std::sync::Arc;
use tracing::{debug, instrument};

use crate::{
	models::{AccountInfo, Address, BlockHeaderInfo, SearchResult},
	repositories::{ChainRegistry, ChainRepositoryTrait},
	services::{
		ledger::LedgerQueryClient,
		search::{
			matcher::{classify, default_matchers, InputMatcher, SearchQuery},
			SearchError,
		},
	},
};

pub struct SearchResolver<T: ChainRepositoryTrait> {
	registry: ChainRegistry<T>,
	ledger: Arc<dyn LedgerQueryClient>,
	matchers: Vec<Box<dyn InputMatcher>>,
}

impl<T: ChainRepositoryTrait> SearchResolver<T> {
	pub fn new(registry: ChainRegistry<T>, ledger: Arc<dyn LedgerQueryClient>) -> Self {
		Self::with_matchers(registry, ledger, default_matchers())
	}

	pub fn with_matchers(
		registry: ChainRegistry<T>,
		ledger: Arc<dyn LedgerQueryClient>,
		matchers: Vec<Box<dyn InputMatcher>>,
	) -> Self {
		Self {
			registry,
			ledger,
			matchers,
		}
	}

	/// Resolves `raw` on chain `chain_id`
	#[instrument(skip(self))]
	pub async fn resolve(&self, chain_id: u16, raw: &str) -> Result<SearchResult, SearchError> {
		let chain = self
			.registry
			.get(chain_id)
			.ok_or_else(|| SearchError::chain_not_found(chain_id))?;

		let input = raw.trim();
		let Some(query) = classify(&self.matchers, input, &chain.info) else {
			debug!(input, "Input matches no entity shape");
			return Ok(SearchResult::NotFound);
		};

		match query {
			SearchQuery::Height(height) => self.block_by_height(chain_id, height).await,
			SearchQuery::Address(address) => self.by_address(chain_id, &address, input).await,
			SearchQuery::Hash(hash) => self.by_hash(chain_id, &hash).await,
		}
	}

	async fn block_by_height(
		&self,
		chain_id: u16,
		height: u64,
	) -> Result<SearchResult, SearchError> {
		match self.ledger.block_header_by_height(chain_id, height).await? {
			Some(header) => self.full_block(chain_id, &header).await,
			None => Ok(SearchResult::NotFound),
		}
	}

	async fn by_address(
		&self,
		chain_id: u16,
		address: &Address,
		text: &str,
	) -> Result<SearchResult, SearchError> {
		if address.is_contract() {
			return Ok(match self.ledger.contract_info(chain_id, text).await? {
				Some(contract) => SearchResult::Contract(Box::new(contract)),
				None => SearchResult::NotFound,
			});
		}

		let account = self
			.ledger
			.account_info(chain_id, text)
			.await?
			.unwrap_or_else(|| AccountInfo::empty(text));
		Ok(SearchResult::Account(Box::new(account)))
	}

	async fn by_hash(&self, chain_id: u16, hash: &str) -> Result<SearchResult, SearchError> {
		if let Some(header) = self.ledger.block_header_by_hash(chain_id, hash).await? {
			return self.full_block(chain_id, &header).await;
		}

		Ok(match self.ledger.transaction_by_hash(chain_id, hash).await? {
			Some(tx) => SearchResult::Transaction(Box::new(tx)),
			None => SearchResult::NotFound,
		})
	}

	async fn full_block(
		&self,
		chain_id: u16,
		header: &BlockHeaderInfo,
	) -> Result<SearchResult, SearchError> {
		Ok(match self.ledger.block_by_hash(chain_id, &header.hash).await? {
			Some(block) => SearchResult::Block(Box::new(block)),
			None => SearchResult::NotFound,
		})
	}
}
