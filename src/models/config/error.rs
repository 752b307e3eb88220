//! Errors raised while reading `server.json` and the chain snapshot files.

use log::error;
use std::{
	error::Error,
	fmt,
	path::{Path, PathBuf},
};

#[derive(Debug)]
#[allow(clippy::enum_variant_names)]
pub enum ConfigError {
	/// A file parsed but its content is rejected
	ValidationError(String),

	/// A file is not valid JSON for its schema
	ParseError { path: PathBuf, message: String },

	/// A file could not be opened or read
	FileError(String),

	/// The configuration directory itself is missing
	DirectoryNotFound(PathBuf),
}

impl ConfigError {
	fn format_message(&self) -> String {
		match self {
			Self::ValidationError(msg) => format!("Validation error: {}", msg),
			Self::ParseError { path, message } => {
				format!("Parse error in {}: {}", path.display(), message)
			}
			Self::FileError(msg) => format!("File error: {}", msg),
			Self::DirectoryNotFound(dir) => {
				format!("Config directory not found: {}", dir.display())
			}
		}
	}

	pub fn validation_error(msg: impl Into<String>) -> Self {
		let error = Self::ValidationError(msg.into());
		error!("{}", error.format_message());
		error
	}

	pub fn parse_error(path: &Path, err: serde_json::Error) -> Self {
		let error = Self::ParseError {
			path: path.to_path_buf(),
			message: err.to_string(),
		};
		error!("{}", error.format_message());
		error
	}

	pub fn file_error(msg: impl Into<String>) -> Self {
		let error = Self::FileError(msg.into());
		error!("{}", error.format_message());
		error
	}

	pub fn directory_not_found(dir: &Path) -> Self {
		let error = Self::DirectoryNotFound(dir.to_path_buf());
		error!("{}", error.format_message());
		error
	}
}

impl fmt::Display for ConfigError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.format_message())
	}
}

impl Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
	fn from(err: std::io::Error) -> Self {
		Self::file_error(err.to_string())
	}
}
