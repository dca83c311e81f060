//! Error types.

use std::path::PathBuf;

use thiserror::Error;

/// Failures of the notification engine.
///
/// Malformed notification input never produces an error; it degrades to the
/// configured defaults. The variants here are startup-time failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NotifyError {
	/// The tag name was already reserved on this host.
	#[error("element tag '{0}' is already defined")]
	TagAlreadyDefined(String),

	/// The tag name is not a valid custom element name.
	#[error("invalid element tag '{0}': expected lowercase ASCII with a hyphen")]
	InvalidTagName(String),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error reading a configuration file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// Error parsing TOML syntax or shape.
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),
}

/// Result type for configuration loading.
pub type Result<T, E = ConfigError> = std::result::Result<T, E>;
