use std::path::PathBuf;

use clap::Parser;
use herald_notify::{Anchor, AttrValue, Kind};

#[derive(Parser, Debug)]
#[command(name = "herald-demo")]
#[command(about = "Mount notifications in a headless document and watch them expire")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// Messages to show, one notification each
	#[arg(default_value = "Hello from herald")]
	pub messages: Vec<String>,

	/// Anchor to stack from (n, ne, e, se, s, sw, w, nw)
	#[arg(long, short = 'p')]
	pub position: Option<Anchor>,

	/// Presentational type (default, info, success, warning, error)
	#[arg(long = "type", short = 't')]
	pub kind: Option<Kind>,

	/// Display time in milliseconds; non-numeric values use the default
	#[arg(long, short = 'e', allow_hyphen_values = true)]
	pub expire: Option<String>,

	/// Let clicks dismiss the notifications
	#[arg(long)]
	pub closeable: bool,

	/// Overlap the notifications instead of stacking them
	#[arg(long)]
	pub grouped: bool,

	/// Heading shown above each message
	#[arg(long)]
	pub heading: Option<String>,

	/// Parse messages as markup instead of literal text
	#[arg(long)]
	pub trusted: bool,

	/// Click the notification at this position (0-based) before the first frame
	#[arg(long, value_name = "INDEX")]
	pub click: Vec<usize>,

	/// Configuration file (TOML)
	#[arg(long, short = 'c', value_name = "PATH")]
	pub config: Option<PathBuf>,

	/// Milliseconds between frames
	#[arg(long, default_value_t = 16)]
	pub frame_ms: u64,

	/// Give up after this many milliseconds
	#[arg(long, default_value_t = 30_000)]
	pub deadline_ms: u64,

	/// Verbose logging
	#[arg(long, short = 'v')]
	pub verbose: bool,
}

impl Cli {
	/// Attributes applied to every notification. Unset options are null and
	/// fall back to the configured defaults.
	pub fn attributes(&self) -> Vec<(&'static str, AttrValue)> {
		vec![
			("position", self.position.into()),
			("type", self.kind.into()),
			("expire", self.expire.clone().into()),
			("closeable", self.closeable.into()),
			("grouped", self.grouped.into()),
			("heading", self.heading.clone().into()),
		]
	}
}

#[cfg(test)]
mod tests;
