//! Price provider error types.

use log::error;

use crate::services::transport::{TransportError, UNKNOWN_REMOTE_CODE};

/// Errors returned by a [`PriceQuoteClient`](crate::services::price::PriceQuoteClient)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
	/// The price service answered with an error object
	UpstreamError { code: String, message: String },

	/// No fresh quote exists for the symbol
	QuoteUnavailable(String),

	/// The price service could not be reached or answered garbage
	ConnectionError(String),
}

impl PriceError {
	fn format_message(&self) -> String {
		match self {
			Self::UpstreamError { code, message } => {
				format!("Price service error {}: {}", code, message)
			}
			Self::QuoteUnavailable(symbol) => format!("No quote available for {}", symbol),
			Self::ConnectionError(msg) => format!("Connection error: {}", msg),
		}
	}

	pub fn upstream_error(code: impl Into<String>, message: impl Into<String>) -> Self {
		let error = Self::UpstreamError {
			code: code.into(),
			message: message.into(),
		};
		error!("{}", error.format_message());
		error
	}

	pub fn quote_unavailable(symbol: impl Into<String>) -> Self {
		let error = Self::QuoteUnavailable(symbol.into());
		error!("{}", error.format_message());
		error
	}

	pub fn connection_error(msg: impl Into<String>) -> Self {
		let error = Self::ConnectionError(msg.into());
		error!("{}", error.format_message());
		error
	}

	/// Error code reported to API callers
	pub fn code(&self) -> &str {
		match self {
			Self::UpstreamError { code, .. } => code,
			_ => UNKNOWN_REMOTE_CODE,
		}
	}
}

impl std::fmt::Display for PriceError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.format_message())
	}
}

impl std::error::Error for PriceError {}

impl From<TransportError> for PriceError {
	fn from(err: TransportError) -> Self {
		match err {
			TransportError::Remote { code, message } => Self::upstream_error(code, message),
			other => Self::connection_error(other.to_string()),
		}
	}
}
