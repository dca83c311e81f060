//! Per-notification state machine.
//!
//! ```text
//!   Created ──mount──► Mounted ──hydrate──► Displaying ──tick──► Closing ──close──► Removed
//! ```
//!
//! `Displaying → Closing` happens on a frame, either because the display
//! time elapsed or because a click set the forced-close flag. Both causes go
//! through [`Notification::tick`], so a notification can only start closing
//! once.

use herald_primitives::{Anchor, ElementId, Kind, parse_number};

use crate::config::Defaults;
use crate::element::Element;

/// Lifecycle phase of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
	/// Built but not in the rendering tree.
	Created,
	/// Attached and registered; properties resolved.
	Mounted,
	/// Waiting for a closing condition on each frame.
	Displaying,
	/// Closing condition observed; exit animation may be running.
	Closing,
	/// Detached and deregistered.
	Removed,
}

/// Properties resolved from attributes when a notification is mounted.
///
/// Resolution happens once; later attribute changes are not observed.
#[derive(Debug, Clone, PartialEq)]
pub struct Props {
	pub anchor: Anchor,
	pub kind: Kind,
	/// Display time in milliseconds; `0` closes on the first frame and
	/// infinity never expires.
	pub expire_ms: f64,
	pub closeable: bool,
	pub grouped: bool,
	pub heading: Option<String>,
}

impl Props {
	/// Resolves properties from an element's attributes, falling back to
	/// `defaults` for anything absent or malformed.
	pub fn reflect(element: &Element, defaults: &Defaults) -> Self {
		let heading = element
			.attribute("heading")
			.or_else(|| element.attribute("title"))
			.map(str::to_owned)
			.or_else(|| defaults.heading.clone())
			.filter(|h| !h.is_empty());

		Self {
			anchor: Anchor::parse_or(element.attribute("position"), defaults.anchor),
			kind: Kind::parse_or(element.attribute("type"), defaults.kind),
			expire_ms: resolve_expire(element.attribute("expire"), defaults.expire),
			closeable: defaults.closeable || element.has_attribute("closeable"),
			grouped: defaults.grouped || element.has_attribute("grouped"),
			heading,
		}
	}
}

impl Default for Props {
	fn default() -> Self {
		Self::reflect(&Element::default(), &Defaults::default())
	}
}

/// Resolves an `expire` attribute to milliseconds.
///
/// Absent or non-numeric values use `fallback` and negative values clamp
/// to 0. Fractions are kept as-is and compared against elapsed frame time.
pub fn resolve_expire(raw: Option<&str>, fallback: u64) -> f64 {
	let value = raw.map_or(f64::NAN, parse_number);
	if value.is_nan() {
		fallback as f64
	} else {
		value.max(0.0)
	}
}

/// Outcome of one frame for one notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Tick {
	/// Keep displaying; request another frame.
	Continue,
	/// Closing began. With an animation, removal waits for it to end.
	Closing { animated: bool },
	/// Not displaying; nothing to do.
	Idle,
}

/// A mounted notification.
#[derive(Debug, Clone)]
pub struct Notification {
	id: ElementId,
	props: Props,
	phase: Phase,
	forced_close: bool,
	animated: bool,
	first_frame: Option<f64>,
}

impl Notification {
	pub(crate) fn new(id: ElementId, props: Props) -> Self {
		Self {
			id,
			props,
			phase: Phase::Mounted,
			forced_close: false,
			animated: false,
			first_frame: None,
		}
	}

	pub fn id(&self) -> ElementId {
		self.id
	}

	pub fn props(&self) -> &Props {
		&self.props
	}

	pub fn phase(&self) -> Phase {
		self.phase
	}

	pub fn is_closing(&self) -> bool {
		self.phase == Phase::Closing
	}

	/// Whether a click asked for the notification to close.
	pub fn is_force_closed(&self) -> bool {
		self.forced_close
	}

	/// Whether closing runs an exit animation.
	pub fn is_animated(&self) -> bool {
		self.animated
	}

	/// Timestamp of the first frame observed while displaying.
	pub fn first_frame(&self) -> Option<f64> {
		self.first_frame
	}

	/// Starts the display clock. `animated` is sampled once, here.
	pub(crate) fn hydrate(&mut self, animated: bool) {
		if self.phase == Phase::Mounted {
			self.animated = animated;
			self.phase = Phase::Displaying;
		}
	}

	/// Sets the forced-close flag if the notification is closeable. The flag
	/// is acted on by the next [`tick`](Self::tick).
	pub(crate) fn force_close(&mut self) -> bool {
		if self.props.closeable && self.phase == Phase::Displaying {
			self.forced_close = true;
		}
		self.forced_close
	}

	/// Runs one frame at timestamp `ts` (milliseconds).
	///
	/// Elapsed time is measured from the first observed timestamp, never from
	/// the previous call.
	pub(crate) fn tick(&mut self, ts: f64) -> Tick {
		if self.phase != Phase::Displaying {
			return Tick::Idle;
		}
		let start = *self.first_frame.get_or_insert(ts);
		if ts - start >= self.props.expire_ms || self.forced_close {
			self.phase = Phase::Closing;
			return Tick::Closing {
				animated: self.animated,
			};
		}
		Tick::Continue
	}
}
