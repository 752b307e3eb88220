//! Tokenomics figures derived from cached chain aggregates and live prices.
//!
//! Figures are computed in base units with checked arithmetic. Counters that
//! contradict each other (more destroyed than issued, more locked than
//! published) are reported as [`TokenomicsError::InconsistentAggregate`]
//! rather than clamped.

use futures::future::try_join_all;
use rust_decimal::Decimal;
use std::{collections::BTreeMap, sync::Arc};
use tracing::instrument;

use crate::{
	models::{
		AssetDescriptor, AssetKey, AssetReport, AssetSnapshot, ChainState, CirculationFigure,
		DestroyFigure, PriceQuote, SupplyFigure, SymbolPriceInfo, SymbolReportRow,
	},
	repositories::{ChainRegistry, ChainRepositoryTrait},
	services::{price::PriceQuoteClient, tokenomics::TokenomicsError},
	utils::amount::{round_half_down, to_coin_string, value_in_base_units},
};

/// Number of most recent statistics periods aggregated by the symbol report
pub const SYMBOL_REPORT_WINDOW: usize = 4;

/// Symbol of the USD reference quote
pub const USD_SYMBOL: &str = "USD";

/// Registry key of the USD reference asset, whose decimals govern USD prices
pub const USD_REFERENCE_ASSET: AssetKey = AssetKey {
	chain_id: 0,
	asset_id: 0,
};

pub struct TokenomicsAggregator<T: ChainRepositoryTrait> {
	registry: ChainRegistry<T>,
	price: Arc<dyn PriceQuoteClient>,
}

impl<T: ChainRepositoryTrait> TokenomicsAggregator<T> {
	pub fn new(registry: ChainRegistry<T>, price: Arc<dyn PriceQuoteClient>) -> Self {
		Self { registry, price }
	}

	fn chain(&self, chain_id: u16) -> Result<ChainState, TokenomicsError> {
		self.registry
			.get(chain_id)
			.ok_or_else(|| TokenomicsError::chain_not_found(chain_id))
	}

	/// `total - destroyed` at the default asset's scale
	#[instrument(skip(self))]
	pub fn total_supply(&self, chain_id: u16) -> Result<SupplyFigure, TokenomicsError> {
		let chain = self.chain(chain_id)?;
		let coin = &chain.coin;
		let supply = coin.supply().ok_or_else(|| {
			TokenomicsError::inconsistent_aggregate(format!(
				"chain {} destroyed {} exceeds total {}",
				chain_id, coin.destroyed, coin.total
			))
		})?;

		Ok(SupplyFigure {
			supply_coin: to_coin_string(supply, chain.default_asset().decimals)?,
		})
	}

	/// The independently tracked circulation counter
	#[instrument(skip(self))]
	pub fn circulation(&self, chain_id: u16) -> Result<CirculationFigure, TokenomicsError> {
		let chain = self.chain(chain_id)?;
		Ok(CirculationFigure {
			circulation: to_coin_string(chain.coin.circulation, chain.default_asset().decimals)?,
		})
	}

	#[instrument(skip(self))]
	pub fn destroy(&self, chain_id: u16) -> Result<DestroyFigure, TokenomicsError> {
		let chain = self.chain(chain_id)?;
		Ok(DestroyFigure {
			destroy: to_coin_string(chain.coin.destroyed, chain.default_asset().decimals)?,
			list: chain.coin.destroy_info_list,
		})
	}

	/// Issuance, locking and USD valuation of the default asset
	#[instrument(skip(self))]
	pub async fn asset_report(&self, chain_id: u16) -> Result<AssetReport, TokenomicsError> {
		let chain = self.chain(chain_id)?;
		let coin = &chain.coin;
		let config = &chain.config;

		let published = coin.published(config.initial_amount).ok_or_else(|| {
			TokenomicsError::inconsistent_aggregate(format!(
				"chain {} published amount overflows",
				chain_id
			))
		})?;
		let locked = coin.locked().ok_or_else(|| {
			TokenomicsError::inconsistent_aggregate(format!(
				"chain {} locked amount overflows",
				chain_id
			))
		})?;
		let turnover = published.checked_sub(locked).ok_or_else(|| {
			TokenomicsError::inconsistent_aggregate(format!(
				"chain {} locked {} exceeds published {}",
				chain_id, locked, published
			))
		})?;
		let total = config
			.total_inflation_amount
			.checked_add(config.initial_amount)
			.ok_or_else(|| {
				TokenomicsError::inconsistent_aggregate(format!(
					"chain {} inflation ceiling overflows",
					chain_id
				))
			})?;

		let quote = self
			.price
			.fresh_usd_price(&chain.default_asset().symbol)
			.await?;

		Ok(AssetReport {
			nvt_inflation_amount: coin.reward_total,
			nvt_inflation_total: config.total_inflation_amount,
			nvt_initial_amount: config.initial_amount,
			nvt_publish_amount: published,
			nvt_locked_amount: locked,
			nvt_turnover_amount: turnover,
			nvt_total: total,
			nvt_usdt_value: value_in_base_units(published, quote.price)?,
		})
	}

	/// Rolling statistics for every asset tracked on the chain, ordered by key
	#[instrument(skip(self))]
	pub fn symbol_report(&self, chain_id: u16) -> Result<Vec<SymbolReportRow>, TokenomicsError> {
		if !self.registry.exists(chain_id) {
			return Err(TokenomicsError::chain_not_found(chain_id));
		}

		let mut series: BTreeMap<AssetKey, Vec<AssetSnapshot>> = BTreeMap::new();
		for snapshot in self.registry.asset_snapshots(chain_id) {
			series.entry(snapshot.key()).or_default().push(snapshot);
		}

		series
			.into_iter()
			.map(|(key, mut buckets)| {
				let asset = self
					.registry
					.get_registered_asset(key)
					.ok_or_else(|| TokenomicsError::missing_registration(key))?;
				buckets.sort_by(|a, b| b.period.cmp(&a.period));
				buckets.truncate(SYMBOL_REPORT_WINDOW);
				aggregate_window(&buckets, asset)
			})
			.collect()
	}

	/// Every registered asset with its USD price
	#[instrument(skip(self))]
	pub async fn symbol_base_info(&self) -> Result<Vec<SymbolPriceInfo>, TokenomicsError> {
		let (usd, decimals) = self.usd_reference().await?;
		try_join_all(
			self.registry
				.registered_assets()
				.into_iter()
				.map(|asset| self.priced(asset, &usd, decimals)),
		)
		.await
	}

	/// One registered asset with its USD price
	#[instrument(skip(self))]
	pub async fn symbol_info(
		&self,
		chain_id: u16,
		asset_id: u16,
	) -> Result<SymbolPriceInfo, TokenomicsError> {
		let key = AssetKey::new(chain_id, asset_id);
		let asset = self
			.registry
			.get_registered_asset(key)
			.ok_or_else(|| TokenomicsError::asset_not_found(key))?;
		let (usd, decimals) = self.usd_reference().await?;
		self.priced(asset, &usd, decimals).await
	}

	async fn usd_reference(&self) -> Result<(PriceQuote, u32), TokenomicsError> {
		let reference = self
			.registry
			.get_registered_asset(USD_REFERENCE_ASSET)
			.ok_or_else(|| TokenomicsError::missing_registration(USD_REFERENCE_ASSET))?;
		let usd = self.price.usdt_price(USD_SYMBOL).await?;
		Ok((usd, reference.decimals))
	}

	async fn priced(
		&self,
		asset: AssetDescriptor,
		usd: &PriceQuote,
		decimals: u32,
	) -> Result<SymbolPriceInfo, TokenomicsError> {
		let quote = self.price.usdt_price(&asset.symbol).await?;
		let ratio = usd.transfer(&quote, Decimal::ONE).ok_or_else(|| {
			TokenomicsError::arithmetic_error(format!("price ratio for {} overflows", asset.symbol))
		})?;
		Ok(SymbolPriceInfo {
			asset,
			usd_price: round_half_down(ratio, decimals),
		})
	}
}

/// Folds the newest-first `buckets` of one asset into a report row
///
/// Flows are summed over the window; stocks come from the newest bucket.
fn aggregate_window(
	buckets: &[AssetSnapshot],
	asset: AssetDescriptor,
) -> Result<SymbolReportRow, TokenomicsError> {
	let newest = buckets.first().ok_or_else(|| {
		TokenomicsError::inconsistent_aggregate(format!("asset {} has no snapshots", asset.key()))
	})?;

	let overflow =
		|| TokenomicsError::inconsistent_aggregate(format!("asset {} flows overflow", asset.key()));
	let mut convert = 0u128;
	let mut redeem = 0u128;
	let mut transfers = 0u64;
	for bucket in buckets {
		convert = convert
			.checked_add(bucket.converter_in_total)
			.ok_or_else(overflow)?;
		redeem = redeem
			.checked_add(bucket.converter_out_total)
			.ok_or_else(overflow)?;
		transfers = transfers.checked_add(bucket.tx_total).ok_or_else(overflow)?;
	}

	Ok(SymbolReportRow {
		symbol: newest.symbol.clone(),
		total: newest.total,
		convert24: convert,
		redeem24: redeem,
		transfer24: transfers,
		address_count: newest.address_count,
		icon: asset.icon,
		asset_chain_id: newest.asset_chain_id,
		asset_id: newest.asset_id,
	})
}
