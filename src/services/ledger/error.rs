//! Ledger query error types and handling.

use log::error;

use crate::services::transport::{TransportError, UNKNOWN_REMOTE_CODE};

/// Represents possible errors that can occur while querying the ledger service
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
	/// The ledger service answered with an error object
	UpstreamError { code: String, message: String },

	/// The ledger service could not be reached
	ConnectionError(String),

	/// Malformed request or undecodable response
	RequestError(String),

	/// Internal errors within the ledger client
	InternalError(String),
}

impl LedgerError {
	fn format_message(&self) -> String {
		match self {
			Self::UpstreamError { code, message } => {
				format!("Ledger error {}: {}", code, message)
			}
			Self::ConnectionError(msg) => format!("Connection error: {}", msg),
			Self::RequestError(msg) => format!("Request error: {}", msg),
			Self::InternalError(msg) => format!("Internal error: {}", msg),
		}
	}

	/// Creates a new upstream error with logging
	pub fn upstream_error(code: impl Into<String>, message: impl Into<String>) -> Self {
		let error = Self::UpstreamError {
			code: code.into(),
			message: message.into(),
		};
		error!("{}", error.format_message());
		error
	}

	/// Creates a new connection error with logging
	pub fn connection_error(msg: impl Into<String>) -> Self {
		let error = Self::ConnectionError(msg.into());
		error!("{}", error.format_message());
		error
	}

	/// Creates a new request error with logging
	pub fn request_error(msg: impl Into<String>) -> Self {
		let error = Self::RequestError(msg.into());
		error!("{}", error.format_message());
		error
	}

	/// Creates a new internal error with logging
	pub fn internal_error(msg: impl Into<String>) -> Self {
		let error = Self::InternalError(msg.into());
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

	/// Message without the variant prefix
	pub fn message(&self) -> &str {
		match self {
			Self::UpstreamError { message, .. } => message,
			Self::ConnectionError(msg) | Self::RequestError(msg) | Self::InternalError(msg) => msg,
		}
	}
}

impl std::fmt::Display for LedgerError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.format_message())
	}
}

impl std::error::Error for LedgerError {}

impl From<TransportError> for LedgerError {
	fn from(err: TransportError) -> Self {
		match err {
			TransportError::Remote { code, message } => Self::upstream_error(code, message),
			TransportError::Network(msg) => Self::connection_error(msg),
			TransportError::Http { .. } => Self::connection_error(err.to_string()),
			TransportError::InvalidResponse(msg) => Self::request_error(msg),
		}
	}
}
