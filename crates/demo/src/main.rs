//! Herald demo binary.
//!
//! Mounts one notification per message in a headless document, prints where
//! each one was placed, then drives frames in real time until every
//! notification has expired and prints the events that fired.

mod cli;
mod report;

use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use cli::Cli;
use herald_notify::headless::Document;
use herald_notify::{Notifier, NotifyConfig};
use herald_runtime::RealtimeDriver;
use tracing::{info, warn};

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();
	herald_runtime::init_tracing(cli.verbose);

	let config = match &cli.config {
		Some(path) => NotifyConfig::load(path)
			.with_context(|| format!("loading config from {}", path.display()))?,
		None => NotifyConfig::default(),
	};
	let mut notifier = Notifier::new(Document::new(), config)?;
	info!(tag = %notifier.config().tag_name, "notifier ready");

	let attributes = cli.attributes();
	let ids: Vec<_> = cli
		.messages
		.iter()
		.map(|message| notifier.notify(message, attributes.iter().cloned(), cli.trusted))
		.collect();

	println!("placements:");
	for line in report::placements(&notifier) {
		println!("{line}");
	}

	for &index in &cli.click {
		match ids.get(index) {
			Some(&id) if notifier.click(id) => info!(%id, "clicked"),
			Some(&id) => warn!(%id, "notification is not closeable"),
			None => warn!(index, count = ids.len(), "click index out of range"),
		}
	}

	let mut driver = RealtimeDriver::new().frame_interval(Duration::from_millis(cli.frame_ms));
	let summary = driver.run_until_idle(&mut notifier, Duration::from_millis(cli.deadline_ms));

	println!("events:");
	for event in notifier.host().events() {
		println!("{}", report::event_line(event));
	}
	println!(
		"{} frame(s) over {:.0} ms, {} still live",
		summary.frames,
		summary.elapsed_ms,
		notifier.live_count()
	);

	if !summary.idle {
		warn!(deadline_ms = cli.deadline_ms, "deadline reached before all notifications closed");
	}
	Ok(())
}
