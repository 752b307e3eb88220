use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Price of one unit of `symbol`, quoted in USD(T)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuote {
	pub symbol: String,
	pub price: Decimal,
	#[serde(default)]
	pub updated_at: Option<DateTime<Utc>>,
}

impl PriceQuote {
	pub fn new(symbol: impl Into<String>, price: Decimal) -> Self {
		Self {
			symbol: symbol.into(),
			price,
			updated_at: None,
		}
	}

	/// Cross-rate conversion of `amount` between two quotes sharing a reference currency
	///
	/// Computes `amount * self.price / target.price`. A zero-priced target has no
	/// meaningful rate and converts to zero. Returns `None` on decimal overflow.
	pub fn transfer(&self, target: &PriceQuote, amount: Decimal) -> Option<Decimal> {
		if target.price.is_zero() {
			return Some(Decimal::ZERO);
		}
		amount
			.checked_mul(self.price)?
			.checked_div(target.price)
	}
}
