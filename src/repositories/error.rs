//! Failures while building the chain registry from its snapshot files.

use log::error;
use std::{error::Error, fmt};

use crate::models::{AssetKey, ConfigError};

#[derive(Debug)]
pub enum RepositoryError {
	/// Two snapshot files describe the same chain
	DuplicateChain(u16),

	/// Two snapshot files register the same asset with different metadata
	ConflictingAsset(AssetKey),

	/// The configured default chain has no snapshot
	MissingDefaultChain(u16),

	/// Snapshot files could not be read or parsed
	LoadError(String),
}

impl RepositoryError {
	fn format_message(&self) -> String {
		match self {
			Self::DuplicateChain(chain_id) => format!("Duplicate chain id {}", chain_id),
			Self::ConflictingAsset(key) => {
				format!("Asset {} is registered twice with different metadata", key)
			}
			Self::MissingDefaultChain(chain_id) => {
				format!("Default chain {} has no snapshot", chain_id)
			}
			Self::LoadError(msg) => format!("Load error: {}", msg),
		}
	}

	pub fn duplicate_chain(chain_id: u16) -> Self {
		let error = Self::DuplicateChain(chain_id);
		error!("{}", error.format_message());
		error
	}

	pub fn conflicting_asset(key: AssetKey) -> Self {
		let error = Self::ConflictingAsset(key);
		error!("{}", error.format_message());
		error
	}

	pub fn missing_default_chain(chain_id: u16) -> Self {
		let error = Self::MissingDefaultChain(chain_id);
		error!("{}", error.format_message());
		error
	}

	/// Create a new load error with the given message
	///
	/// Also logs the error message at the error level.
	pub fn load_error(msg: impl Into<String>) -> Self {
		let error = Self::LoadError(msg.into());
		error!("{}", error.format_message());
		error
	}
}

impl fmt::Display for RepositoryError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.format_message())
	}
}

impl Error for RepositoryError {}

impl From<ConfigError> for RepositoryError {
	fn from(err: ConfigError) -> Self {
		Self::load_error(err.to_string())
	}
}
