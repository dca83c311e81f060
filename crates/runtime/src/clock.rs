use std::cell::Cell;
use std::time::Duration;

use web_time::Instant;

/// Source of frame timestamps.
pub trait Clock {
	/// Milliseconds since the clock's origin. Never decreases.
	fn now_ms(&self) -> f64;

	/// Blocks (or pretends to) until `interval` has passed.
	fn wait(&self, interval: Duration);
}

/// Wall clock measured from construction.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
	origin: Instant,
}

impl MonotonicClock {
	pub fn new() -> Self {
		Self {
			origin: Instant::now(),
		}
	}
}

impl Default for MonotonicClock {
	fn default() -> Self {
		Self::new()
	}
}

impl Clock for MonotonicClock {
	fn now_ms(&self) -> f64 {
		self.origin.elapsed().as_secs_f64() * 1_000.0
	}

	fn wait(&self, interval: Duration) {
		std::thread::sleep(interval);
	}
}

/// Clock that only moves when waited on or advanced.
#[derive(Debug, Default)]
pub struct ManualClock {
	now: Cell<f64>,
}

impl ManualClock {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn starting_at(ms: f64) -> Self {
		Self { now: Cell::new(ms) }
	}

	pub fn advance(&self, interval: Duration) {
		self.now.set(self.now.get() + interval.as_secs_f64() * 1_000.0);
	}
}

impl Clock for ManualClock {
	fn now_ms(&self) -> f64 {
		self.now.get()
	}

	fn wait(&self, interval: Duration) {
		self.advance(interval);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn manual_clock_moves_on_wait() {
		let clock = ManualClock::starting_at(5.0);
		clock.wait(Duration::from_millis(16));
		assert_eq!(clock.now_ms(), 21.0);
	}

	#[test]
	fn monotonic_clock_does_not_go_backwards() {
		let clock = MonotonicClock::new();
		let a = clock.now_ms();
		let b = clock.now_ms();
		assert!(b >= a);
		assert!(a >= 0.0);
	}
}
