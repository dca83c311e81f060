//! Box geometry consumed and produced by the layout engine.
//!
//! All values are CSS pixels (or percentages for [`BasePoint`]) stored as
//! `f64`. Measurements may be `NaN` when a host reports unparsable style
//! values; the types never reject them.

/// Rendered width and height of a box.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoxSize {
	pub width: f64,
	pub height: f64,
}

impl BoxSize {
	pub const fn new(width: f64, height: f64) -> Self {
		Self { width, height }
	}
}

/// Margins around a box, clockwise from the top.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Margins {
	pub top: f64,
	pub right: f64,
	pub bottom: f64,
	pub left: f64,
}

impl Margins {
	pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
		Self {
			top,
			right,
			bottom,
			left,
		}
	}

	/// Same margin on every side.
	pub const fn uniform(value: f64) -> Self {
		Self::new(value, value, value, value)
	}

	/// Sum of left and right margins.
	pub fn horizontal(&self) -> f64 {
		self.left + self.right
	}

	/// Sum of top and bottom margins.
	pub fn vertical(&self) -> f64 {
		self.top + self.bottom
	}

	/// Returns true if any side is `NaN`.
	pub fn has_nan(&self) -> bool {
		[self.top, self.right, self.bottom, self.left]
			.iter()
			.any(|v| v.is_nan())
	}
}

/// Everything the offset formulas need to know about one rendered box.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoxMetrics {
	pub size: BoxSize,
	pub margins: Margins,
}

impl BoxMetrics {
	pub const fn new(size: BoxSize, margins: Margins) -> Self {
		Self { size, margins }
	}
}

/// Anchor point expressed as percentages of the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BasePoint {
	/// Horizontal position, `0.0..=100.0`.
	pub x: f64,
	/// Vertical position, `0.0..=100.0`.
	pub y: f64,
}

impl BasePoint {
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}
}

/// Pixel displacement from a [`BasePoint`].
///
/// `dx` is subtracted from the horizontal base and `dy` added to the vertical
/// base when the final position is composed.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
	pub dx: f64,
	pub dy: f64,
}

impl Offset {
	pub const fn new(dx: f64, dy: f64) -> Self {
		Self { dx, dy }
	}
}
