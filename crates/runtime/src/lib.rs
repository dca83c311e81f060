//! Real-time driving for herald notifications.
//!
//! The engine in `herald-notify` only advances when [`Notifier::frame`] is
//! called with a timestamp. This crate supplies those timestamps from a
//! monotonic clock and pumps frames at a fixed interval, the way a browser's
//! animation-frame loop would.
//!
//! [`Notifier::frame`]: herald_notify::Notifier::frame

mod clock;
mod driver;
mod logging;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use driver::{DEFAULT_FRAME_INTERVAL, RealtimeDriver, RunSummary};
pub use logging::{LOG_ENV, init_tracing};
