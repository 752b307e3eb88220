//! Access to the price quote provider.

mod client;
mod error;

pub use client::{HttpPriceClient, PriceQuoteClient};
pub use error::PriceError;
