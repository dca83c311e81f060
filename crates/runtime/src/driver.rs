use std::time::Duration;

use herald_notify::{Host, Notifier};
use tracing::{debug, trace};

use crate::clock::{Clock, MonotonicClock};

/// Frame interval of a 60 Hz display.
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_micros(16_667);

/// Outcome of [`RealtimeDriver::run_until_idle`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
	/// Frames delivered to the notifier.
	pub frames: u64,
	/// Clock time spent, in milliseconds.
	pub elapsed_ms: f64,
	/// Whether the notifier stopped requesting frames before the deadline.
	pub idle: bool,
}

/// Feeds clock timestamps to a [`Notifier`].
#[derive(Debug)]
pub struct RealtimeDriver<C: Clock = MonotonicClock> {
	clock: C,
	frame_interval: Duration,
	frames: u64,
}

impl RealtimeDriver<MonotonicClock> {
	pub fn new() -> Self {
		Self::with_clock(MonotonicClock::new())
	}
}

impl Default for RealtimeDriver<MonotonicClock> {
	fn default() -> Self {
		Self::new()
	}
}

impl<C: Clock> RealtimeDriver<C> {
	pub fn with_clock(clock: C) -> Self {
		Self {
			clock,
			frame_interval: DEFAULT_FRAME_INTERVAL,
			frames: 0,
		}
	}

	#[must_use]
	pub fn frame_interval(mut self, interval: Duration) -> Self {
		self.frame_interval = interval;
		self
	}

	pub fn clock(&self) -> &C {
		&self.clock
	}

	/// Frames delivered so far.
	pub fn frames(&self) -> u64 {
		self.frames
	}

	/// Delivers one frame stamped with the current clock time.
	pub fn pump<H: Host>(&mut self, notifier: &mut Notifier<H>) {
		let ts = self.clock.now_ms();
		trace!(ts, frame = self.frames, "pump");
		notifier.frame(ts);
		self.frames += 1;
	}

	/// Pumps frames until the notifier requests none or `deadline` passes.
	///
	/// Notifications waiting on an exit animation need no frames, so they do
	/// not keep this loop alive.
	pub fn run_until_idle<H: Host>(
		&mut self,
		notifier: &mut Notifier<H>,
		deadline: Duration,
	) -> RunSummary {
		let start = self.clock.now_ms();
		let limit = deadline.as_secs_f64() * 1_000.0;
		let first = self.frames;

		while !notifier.is_idle() && self.clock.now_ms() - start < limit {
			self.pump(notifier);
			if !notifier.is_idle() {
				self.clock.wait(self.frame_interval);
			}
		}

		let summary = RunSummary {
			frames: self.frames - first,
			elapsed_ms: self.clock.now_ms() - start,
			idle: notifier.is_idle(),
		};
		debug!(
			frames = summary.frames,
			elapsed_ms = summary.elapsed_ms,
			idle = summary.idle,
			live = notifier.live_count(),
			"run finished"
		);
		summary
	}
}

#[cfg(test)]
mod tests {
	use herald_notify::headless::Document;
	use herald_notify::{NotifyConfig, Phase};
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	use super::*;
	use crate::clock::ManualClock;

	fn notifier() -> Notifier<Document> {
		Notifier::new(Document::new(), NotifyConfig::default()).unwrap()
	}

	fn driver() -> RealtimeDriver<ManualClock> {
		RealtimeDriver::with_clock(ManualClock::new()).frame_interval(Duration::from_millis(10))
	}

	#[test]
	fn pump_stamps_frames_with_clock_time() {
		let mut n = notifier();
		let id = n.notify("x", [("expire", 25)], false);
		let mut d = driver();

		d.pump(&mut n);
		d.clock().advance(Duration::from_millis(20));
		d.pump(&mut n);
		assert_eq!(n.phase(id), Phase::Displaying);
		d.clock().advance(Duration::from_millis(5));
		d.pump(&mut n);
		assert_eq!(n.phase(id), Phase::Removed);
		assert_eq!(d.frames(), 3);
	}

	#[rstest]
	#[case(0, 1)]
	#[case(30, 4)]
	#[case(35, 5)]
	fn run_until_idle_stops_after_removal(#[case] expire: u32, #[case] frames: u64) {
		let mut n = notifier();
		let id = n.notify("x", [("expire", expire)], false);
		let summary = driver().run_until_idle(&mut n, Duration::from_secs(1));

		assert!(summary.idle);
		assert_eq!(summary.frames, frames);
		assert_eq!(n.phase(id), Phase::Removed);
	}

	#[test]
	fn run_until_idle_respects_deadline() {
		let mut n = notifier();
		let id = n.notify("x", [("expire", 10_000)], false);
		let summary = driver().run_until_idle(&mut n, Duration::from_millis(50));

		assert!(!summary.idle);
		assert_eq!(summary.frames, 5);
		assert_eq!(summary.elapsed_ms, 50.0);
		assert_eq!(n.phase(id), Phase::Displaying);
	}

	#[test]
	fn idle_notifier_gets_no_frames() {
		let mut n = notifier();
		let summary = driver().run_until_idle(&mut n, Duration::from_secs(1));
		assert_eq!(summary.frames, 0);
		assert!(summary.idle);
	}
}
