use async_trait::async_trait;
use rust_decimal::Decimal;
use serde_json::json;
use tracing::{instrument, warn};

use crate::{
	models::{HttpRetrySettings, PriceQuote, ServiceEndpoint},
	services::{price::PriceError, transport::JsonRpcTransport},
};

/// Symbol price lookups
#[async_trait]
pub trait PriceQuoteClient: Send + Sync {
	/// Most recently ingested USD quote for `symbol`
	async fn fresh_usd_price(&self, symbol: &str) -> Result<PriceQuote, PriceError>;

	/// USDT quote for `symbol`; an unpriced symbol quotes at zero
	async fn usdt_price(&self, symbol: &str) -> Result<PriceQuote, PriceError>;
}

const FRESH_USD_PRICE: &str = "getFreshUsdPrice";
const USDT_PRICE: &str = "getUsdtPrice";

/// [`PriceQuoteClient`] backed by the price service's JSON-RPC endpoint
#[derive(Debug, Clone)]
pub struct HttpPriceClient {
	transport: JsonRpcTransport,
}

impl HttpPriceClient {
	pub fn new(endpoint: &ServiceEndpoint, retry: &HttpRetrySettings) -> anyhow::Result<Self> {
		Ok(Self {
			transport: JsonRpcTransport::new(endpoint, &retry.into())?,
		})
	}
}

#[async_trait]
impl PriceQuoteClient for HttpPriceClient {
	#[instrument(skip(self))]
	async fn fresh_usd_price(&self, symbol: &str) -> Result<PriceQuote, PriceError> {
		let quote: Option<PriceQuote> = self
			.transport
			.call(FRESH_USD_PRICE, json!([symbol]))
			.await?;
		quote.ok_or_else(|| PriceError::quote_unavailable(symbol))
	}

	#[instrument(skip(self))]
	async fn usdt_price(&self, symbol: &str) -> Result<PriceQuote, PriceError> {
		let quote: Option<PriceQuote> = self.transport.call(USDT_PRICE, json!([symbol])).await?;
		Ok(quote.unwrap_or_else(|| {
			warn!(symbol, "No USDT quote, pricing at zero");
			PriceQuote::new(symbol, Decimal::ZERO)
		}))
	}
}
