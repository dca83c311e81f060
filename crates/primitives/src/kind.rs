use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Presentational category of a notification.
///
/// Only the stylesheet reacts to the kind; the engine never branches on it.
#[derive(
	Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, EnumIter, IntoStaticStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Kind {
	/// Unstyled notification, spelled `default` in markup.
	#[strum(to_string = "default")]
	Plain,
	/// Informational message (default).
	#[default]
	Info,
	/// Completed operation.
	Success,
	/// Something needs attention.
	Warning,
	/// Failed operation.
	Error,
}

impl Kind {
	/// Every kind, in declaration order.
	pub const ALL: [Kind; 5] = [Kind::Plain, Kind::Info, Kind::Success, Kind::Warning, Kind::Error];

	/// Canonical names, in the same order as [`Kind::ALL`].
	pub const NAMES: &'static [&'static str] = &["default", "info", "success", "warning", "error"];

	/// Returns the canonical lowercase name.
	pub fn as_str(self) -> &'static str {
		self.into()
	}

	/// Parses an optional attribute value; absent or unknown values resolve to
	/// `fallback`.
	pub fn parse_or(value: Option<&str>, fallback: Kind) -> Self {
		value
			.and_then(|v| v.trim().parse().ok())
			.unwrap_or(fallback)
	}
}

impl Serialize for Kind {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(self.as_str())
	}
}

impl<'de> Deserialize<'de> for Kind {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let raw = String::deserialize(deserializer)?;
		raw.parse()
			.map_err(|_| de::Error::unknown_variant(&raw, Self::NAMES))
	}
}
