//! Tokenomics error types.

use log::error;

use crate::{models::AssetKey, services::price::PriceError, utils::amount::AmountError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenomicsError {
	/// The chain id is not registered
	ChainNotFound(u16),

	/// The requested asset is not in the registry
	AssetNotFound(AssetKey),

	/// An asset the computation depends on is missing from the registry
	MissingRegistration(AssetKey),

	/// Cached counters contradict each other, e.g. more destroyed than issued
	InconsistentAggregate(String),

	/// A fixed-point conversion left the representable range
	ArithmeticError(String),

	/// The price provider failed
	UpstreamError(PriceError),
}

impl TokenomicsError {
	fn format_message(&self) -> String {
		match self {
			Self::ChainNotFound(chain_id) => format!("Chain not found: {}", chain_id),
			Self::AssetNotFound(key) => format!("Asset not found: {}", key),
			Self::MissingRegistration(key) => {
				format!("Asset {} is missing from the registry", key)
			}
			Self::InconsistentAggregate(msg) => format!("Inconsistent aggregate: {}", msg),
			Self::ArithmeticError(msg) => format!("Arithmetic error: {}", msg),
			Self::UpstreamError(err) => format!("Upstream error: {}", err),
		}
	}

	pub fn chain_not_found(chain_id: u16) -> Self {
		let error = Self::ChainNotFound(chain_id);
		error!("{}", error.format_message());
		error
	}

	pub fn asset_not_found(key: AssetKey) -> Self {
		let error = Self::AssetNotFound(key);
		error!("{}", error.format_message());
		error
	}

	pub fn missing_registration(key: AssetKey) -> Self {
		let error = Self::MissingRegistration(key);
		error!("{}", error.format_message());
		error
	}

	pub fn inconsistent_aggregate(msg: impl Into<String>) -> Self {
		let error = Self::InconsistentAggregate(msg.into());
		error!("{}", error.format_message());
		error
	}

	pub fn arithmetic_error(msg: impl Into<String>) -> Self {
		let error = Self::ArithmeticError(msg.into());
		error!("{}", error.format_message());
		error
	}
}

impl std::fmt::Display for TokenomicsError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.format_message())
	}
}

impl std::error::Error for TokenomicsError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Self::UpstreamError(err) => Some(err),
			_ => None,
		}
	}
}

impl From<PriceError> for TokenomicsError {
	fn from(err: PriceError) -> Self {
		Self::UpstreamError(err)
	}
}

impl From<AmountError> for TokenomicsError {
	fn from(err: AmountError) -> Self {
		Self::arithmetic_error(err.to_string())
	}
}
