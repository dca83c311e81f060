//! Engine configuration.
//!
//! Configuration is written in TOML. Every key is optional:
//!
//! ```toml
//! tag-name = "herald-notify"
//! # stylesheet = "..."   # replaces the built-in stylesheet
//!
//! [defaults]
//! expire = 10000
//! type = "info"
//! position = "ne"
//! closeable = false
//! grouped = false
//! # heading = "Notice"
//! ```

use std::path::Path;

use herald_primitives::{Anchor, Kind};
use serde::{Deserialize, Serialize};

use crate::DEFAULT_TAG_NAME;
use crate::error::{ConfigError, Result};
use crate::style::DEFAULT_STYLESHEET;

/// Values used when a notification does not carry the matching attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct Defaults {
	/// Display time in milliseconds.
	pub expire: u64,
	/// Presentational kind.
	#[serde(rename = "type")]
	pub kind: Kind,
	/// Anchor the notification stacks from.
	#[serde(rename = "position")]
	pub anchor: Anchor,
	/// Whether a click dismisses the notification.
	pub closeable: bool,
	/// Whether the notification overlaps its siblings instead of stacking.
	pub grouped: bool,
	/// Heading shown above the content.
	pub heading: Option<String>,
}

impl Defaults {
	/// Display time used when `expire` is absent or unparsable.
	pub const EXPIRE_MS: u64 = 10_000;
}

impl Default for Defaults {
	fn default() -> Self {
		Self {
			expire: Self::EXPIRE_MS,
			kind: Kind::Info,
			anchor: Anchor::Ne,
			closeable: false,
			grouped: false,
			heading: None,
		}
	}
}

/// Engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct NotifyConfig {
	/// Tag reserved on the host for notification elements.
	pub tag_name: String,
	/// Replacement for the built-in stylesheet.
	pub stylesheet: Option<String>,
	/// Attribute fallbacks.
	pub defaults: Defaults,
}

impl Default for NotifyConfig {
	fn default() -> Self {
		Self {
			tag_name: DEFAULT_TAG_NAME.to_owned(),
			stylesheet: None,
			defaults: Defaults::default(),
		}
	}
}

impl NotifyConfig {
	/// Parse a TOML string into a [`NotifyConfig`].
	pub fn parse(input: &str) -> Result<Self> {
		Ok(toml::from_str(input)?)
	}

	/// Load configuration from a file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
			path: path.to_path_buf(),
			error: e,
		})?;
		Self::parse(&content)
	}

	/// Stylesheet injected into every notification.
	pub fn stylesheet(&self) -> &str {
		self.stylesheet.as_deref().unwrap_or(DEFAULT_STYLESHEET)
	}
}
