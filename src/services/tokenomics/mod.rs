//! Supply, circulation, destruction, inflation and price figures.

mod aggregator;
mod error;

pub use aggregator::{
	TokenomicsAggregator, SYMBOL_REPORT_WINDOW, USD_REFERENCE_ASSET, USD_SYMBOL,
};
pub use error::TokenomicsError;
