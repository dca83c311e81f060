use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Screen region a notification stacks from.
///
/// Parsing is case-insensitive (`"NE"`, `"ne"` and `"Ne"` are equal); the
/// canonical spelling is lowercase.
#[derive(
	Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, EnumIter, IntoStaticStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Anchor {
	/// Top edge, horizontally centered.
	N,
	/// Top-right corner (default).
	#[default]
	Ne,
	/// Right edge, vertically centered.
	E,
	/// Bottom-right corner.
	Se,
	/// Bottom edge, horizontally centered.
	S,
	/// Bottom-left corner.
	Sw,
	/// Left edge, vertically centered.
	W,
	/// Top-left corner.
	Nw,
}

impl Anchor {
	/// Every anchor, clockwise from north.
	pub const ALL: [Anchor; 8] = [
		Anchor::N,
		Anchor::Ne,
		Anchor::E,
		Anchor::Se,
		Anchor::S,
		Anchor::Sw,
		Anchor::W,
		Anchor::Nw,
	];

	/// Canonical names, in the same order as [`Anchor::ALL`].
	pub const NAMES: &'static [&'static str] = &["n", "ne", "e", "se", "s", "sw", "w", "nw"];

	/// Returns the canonical lowercase name.
	pub fn as_str(self) -> &'static str {
		self.into()
	}

	/// Dense index into [`Anchor::ALL`], used for array-backed storage.
	pub const fn index(self) -> usize {
		self as usize
	}

	/// Parses an optional attribute value, falling back to `fallback` when
	/// the value is absent or unknown.
	pub fn parse_or(value: Option<&str>, fallback: Anchor) -> Self {
		value.and_then(|v| v.trim().parse().ok()).unwrap_or(fallback)
	}
}

impl Serialize for Anchor {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(self.as_str())
	}
}

impl<'de> Deserialize<'de> for Anchor {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let raw = String::deserialize(deserializer)?;
		raw.parse()
			.map_err(|_| de::Error::unknown_variant(&raw, Self::NAMES))
	}
}
