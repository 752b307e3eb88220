use async_trait::async_trait;
use proptest::prelude::*;
use rust_decimal::Decimal;
use std::collections::HashMap;

use explorer_api::{
	models::{
		AccountInfo, BlockHeaderInfo, BlockInfo, BlockTimeInfo, ByzantineCount, ChainState,
		CoinAggregate, ContractInfo, PriceQuote, TransactionInfo,
	},
	services::{
		ledger::{LedgerError, LedgerQueryClient},
		price::{PriceError, PriceQuoteClient},
	},
	utils::tests::builders::{chain::ChainStateBuilder, ledger::BlockBuilder},
};

/// Upper bound for generated counters, well inside the 28 digit decimal range
const MAX_COUNTER: u128 = 10_000_000_000_000_000;
const MAX_DECIMALS: u32 = 18;

fn counter() -> impl Strategy<Value = u128> {
	0..MAX_COUNTER
}

/// A chain whose counters agree with each other
///
/// The initial amount always covers the locked reserves, so published never
/// falls below locked.
pub fn consistent_chain_strategy() -> impl Strategy<Value = ChainState> {
	(
		(counter(), counter(), counter(), counter()),
		counter(),
		counter(),
		counter(),
		0..=MAX_DECIMALS,
	)
		.prop_map(
			|((business, community, team, destroyed), reward_total, headroom, inflation, decimals)| {
				let locked = business + community + team + destroyed;
				let initial_amount = locked + headroom;
				let published = initial_amount + reward_total;
				ChainStateBuilder::new()
					.decimals(decimals)
					.initial_amount(initial_amount)
					.total_inflation_amount(inflation)
					.coin(CoinAggregate {
						total: published,
						destroyed,
						circulation: published - locked,
						reward_total,
						business,
						community,
						team,
						..Default::default()
					})
					.build()
			},
		)
}

/// Positive prices with up to eight fractional digits
pub fn price_strategy() -> impl Strategy<Value = Decimal> {
	(1i64..100_000_000, 0u32..=8).prop_map(|(mantissa, scale)| Decimal::new(mantissa, scale))
}

/// Signed decimals with up to twelve fractional digits
pub fn decimal_strategy() -> impl Strategy<Value = Decimal> {
	(any::<i64>(), 0u32..=12).prop_map(|(mantissa, scale)| Decimal::new(mantissa, scale))
}

pub fn hash_strategy() -> impl Strategy<Value = String> {
	"[0-9a-f]{64}".prop_map(|s| s.to_string())
}

/// Free text mixing heights, hashes, near-hashes and noise
pub fn search_text_strategy() -> impl Strategy<Value = String> {
	prop_oneof![
		any::<u64>().prop_map(|height| height.to_string()),
		(0u64..64).prop_map(|height| height.to_string()),
		hash_strategy(),
		"[0-9a-f]{1,70}".prop_map(|s| s.to_string()),
		"[ -~]{0,80}".prop_map(|s| s.to_string()),
	]
}

/// Fixed price for every symbol
pub struct FixedPrice(pub Decimal);

#[async_trait]
impl PriceQuoteClient for FixedPrice {
	async fn fresh_usd_price(&self, symbol: &str) -> Result<PriceQuote, PriceError> {
		Ok(PriceQuote::new(symbol, self.0))
	}

	async fn usdt_price(&self, symbol: &str) -> Result<PriceQuote, PriceError> {
		Ok(PriceQuote::new(symbol, self.0))
	}
}

/// Ledger holding blocks at the given heights, each with one transaction
pub struct InMemoryLedger {
	blocks: HashMap<String, BlockInfo>,
	heights: HashMap<u64, String>,
	transactions: HashMap<String, TransactionInfo>,
}

impl InMemoryLedger {
	pub fn with_heights(heights: &[u64]) -> Self {
		let mut ledger = Self {
			blocks: HashMap::new(),
			heights: HashMap::new(),
			transactions: HashMap::new(),
		};
		for &height in heights {
			let tx_hash = format!("{:032x}{:032x}", height, u128::MAX);
			let block = BlockBuilder::new(height).transaction(&tx_hash).build();
			ledger
				.transactions
				.insert(tx_hash, block.tx_list[0].clone());
			ledger.heights.insert(height, block.header.hash.clone());
			ledger.blocks.insert(block.header.hash.clone(), block);
		}
		ledger
	}
}

#[async_trait]
impl LedgerQueryClient for InMemoryLedger {
	async fn block_header_by_height(
		&self,
		_chain_id: u16,
		height: u64,
	) -> Result<Option<BlockHeaderInfo>, LedgerError> {
		Ok(self
			.heights
			.get(&height)
			.and_then(|hash| self.blocks.get(hash))
			.map(|block| block.header.clone()))
	}

	async fn block_header_by_hash(
		&self,
		_chain_id: u16,
		hash: &str,
	) -> Result<Option<BlockHeaderInfo>, LedgerError> {
		Ok(self.blocks.get(hash).map(|block| block.header.clone()))
	}

	async fn block_by_hash(&self, _chain_id: u16, hash: &str) -> Result<Option<BlockInfo>, LedgerError> {
		Ok(self.blocks.get(hash).cloned())
	}

	async fn transaction_by_hash(
		&self,
		_chain_id: u16,
		hash: &str,
	) -> Result<Option<TransactionInfo>, LedgerError> {
		Ok(self.transactions.get(hash).cloned())
	}

	async fn account_info(
		&self,
		_chain_id: u16,
		_address: &str,
	) -> Result<Option<AccountInfo>, LedgerError> {
		Ok(None)
	}

	async fn contract_info(
		&self,
		_chain_id: u16,
		_address: &str,
	) -> Result<Option<ContractInfo>, LedgerError> {
		Ok(None)
	}

	async fn byzantine_count(
		&self,
		_chain_id: u16,
		_tx_hash: &str,
	) -> Result<ByzantineCount, LedgerError> {
		Ok(ByzantineCount::new())
	}

	async fn agents_count(&self, _chain_id: u16, _height: u64) -> Result<u64, LedgerError> {
		Ok(0)
	}

	async fn block_time_info(&self, _chain_id: u16) -> Result<Option<BlockTimeInfo>, LedgerError> {
		Ok(None)
	}
}
