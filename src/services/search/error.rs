//! Search error types.

use log::error;

use crate::services::ledger::LedgerError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
	/// The chain id is not registered
	ChainNotFound(u16),

	/// The ledger service failed while resolving the input
	UpstreamError(LedgerError),
}

impl SearchError {
	fn format_message(&self) -> String {
		match self {
			Self::ChainNotFound(chain_id) => format!("Chain not found: {}", chain_id),
			Self::UpstreamError(err) => format!("Upstream error: {}", err),
		}
	}

	pub fn chain_not_found(chain_id: u16) -> Self {
		let error = Self::ChainNotFound(chain_id);
		error!("{}", error.format_message());
		error
	}
}

impl std::fmt::Display for SearchError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.format_message())
	}
}

impl std::error::Error for SearchError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Self::UpstreamError(err) => Some(err),
			Self::ChainNotFound(_) => None,
		}
	}
}

/// The ledger error was logged when it was created
impl From<LedgerError> for SearchError {
	fn from(err: LedgerError) -> Self {
		Self::UpstreamError(err)
	}
}
