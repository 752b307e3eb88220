//! RPC error types and their wire codes.
//!
//! Service errors are folded into four kinds. Upstream codes reported by the
//! ledger or price service pass through unchanged.

use log::error;

use crate::{
	models::RpcErrorBody,
	services::{
		ledger::LedgerError, price::PriceError, search::SearchError,
		tokenomics::TokenomicsError,
	},
};

pub const PARAMS_ERROR: &str = "PARAMS_ERROR";
pub const DATA_NOT_EXISTS: &str = "DATA_NOT_EXISTS";
pub const SYS_UNKNOWN_EXCEPTION: &str = "SYS_UNKNOWN_EXCEPTION";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RpcError {
	/// Wrong arity, wrong type or unparseable argument
	ParamsError(String),

	/// The chain or entity does not exist
	DataNotExists(String),

	/// A downstream service failed with its own code
	UpstreamError { code: String, message: String },

	/// Anything else
	InternalError(String),
}

impl RpcError {
	fn format_message(&self) -> String {
		match self {
			Self::ParamsError(msg) => format!("Params error: {}", msg),
			Self::DataNotExists(msg) => format!("Data not exists: {}", msg),
			Self::UpstreamError { code, message } => format!("Upstream error {}: {}", code, message),
			Self::InternalError(msg) => format!("Internal error: {}", msg),
		}
	}

	/// Creates a params error; these are caller mistakes and are not logged
	pub fn params_error(msg: impl Into<String>) -> Self {
		Self::ParamsError(msg.into())
	}

	pub fn data_not_exists(msg: impl Into<String>) -> Self {
		Self::DataNotExists(msg.into())
	}

	pub fn upstream_error(code: impl Into<String>, message: impl Into<String>) -> Self {
		Self::UpstreamError {
			code: code.into(),
			message: message.into(),
		}
	}

	pub fn internal_error(msg: impl Into<String>) -> Self {
		let error = Self::InternalError(msg.into());
		error!("{}", error.format_message());
		error
	}

	/// Wire error code
	pub fn code(&self) -> &str {
		match self {
			Self::ParamsError(_) => PARAMS_ERROR,
			Self::DataNotExists(_) => DATA_NOT_EXISTS,
			Self::UpstreamError { code, .. } => code,
			Self::InternalError(_) => SYS_UNKNOWN_EXCEPTION,
		}
	}

	/// Label used for the request outcome metric
	pub fn outcome(&self) -> &'static str {
		match self {
			Self::ParamsError(_) => "params_error",
			Self::DataNotExists(_) => "not_found",
			Self::UpstreamError { .. } => "upstream_error",
			Self::InternalError(_) => "internal_error",
		}
	}

	pub fn to_body(&self) -> RpcErrorBody {
		let message = match self {
			Self::ParamsError(msg) | Self::DataNotExists(msg) | Self::InternalError(msg) => {
				msg.clone()
			}
			Self::UpstreamError { message, .. } => message.clone(),
		};
		RpcErrorBody {
			code: self.code().to_string(),
			message,
			data: None,
		}
	}
}

impl std::fmt::Display for RpcError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.format_message())
	}
}

impl std::error::Error for RpcError {}

impl From<LedgerError> for RpcError {
	fn from(err: LedgerError) -> Self {
		match err {
			LedgerError::UpstreamError { code, message } => Self::upstream_error(code, message),
			other => Self::internal_error(other.to_string()),
		}
	}
}

impl From<PriceError> for RpcError {
	fn from(err: PriceError) -> Self {
		match err {
			PriceError::UpstreamError { code, message } => Self::upstream_error(code, message),
			PriceError::QuoteUnavailable(_) => Self::data_not_exists(err.to_string()),
			other => Self::internal_error(other.to_string()),
		}
	}
}

impl From<SearchError> for RpcError {
	fn from(err: SearchError) -> Self {
		match err {
			SearchError::ChainNotFound(chain_id) => {
				Self::data_not_exists(format!("chain {} not found", chain_id))
			}
			SearchError::UpstreamError(err) => err.into(),
		}
	}
}

impl From<TokenomicsError> for RpcError {
	fn from(err: TokenomicsError) -> Self {
		match err {
			TokenomicsError::ChainNotFound(chain_id) => {
				Self::data_not_exists(format!("chain {} not found", chain_id))
			}
			TokenomicsError::AssetNotFound(key) => {
				Self::data_not_exists(format!("asset {} not found", key))
			}
			TokenomicsError::UpstreamError(err) => err.into(),
			other => Self::internal_error(other.to_string()),
		}
	}
}
