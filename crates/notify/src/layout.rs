//! Placement math for stacked notifications.
//!
//! A placement is a base point (percentages of the viewport, fixed per
//! anchor) adjusted by a pixel offset that walks the notification away from
//! the anchor by its stack index. The result is emitted as `calc()`
//! expressions for the renderer to resolve:
//!
//! ```text
//! left = calc(<x>% - <dx>px)
//! top  = calc(<y>% + <dy>px)
//! ```

use herald_primitives::{
	Anchor, BasePoint, BoxMetrics, ElementId, Margins, Offset, format_number, parse_int_prefix,
};

use crate::host::Host;
use crate::style::MARGIN_PROPERTIES;

/// Stacking priority from which grouped notifications count down.
pub const Z_INDEX_CEILING: i64 = 10_000;

/// Position of a notification, ready to apply as style properties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
	pub left: String,
	pub top: String,
	/// Only grouped notifications carry a stacking priority.
	pub z_index: Option<i64>,
}

/// Viewport point an anchor's stack grows from.
pub fn base_point(anchor: Anchor) -> BasePoint {
	match anchor {
		Anchor::N => BasePoint::new(50.0, 0.0),
		Anchor::Ne => BasePoint::new(100.0, 0.0),
		Anchor::E => BasePoint::new(100.0, 50.0),
		Anchor::Se => BasePoint::new(100.0, 100.0),
		Anchor::S => BasePoint::new(50.0, 100.0),
		Anchor::Sw => BasePoint::new(0.0, 100.0),
		Anchor::W => BasePoint::new(0.0, 50.0),
		Anchor::Nw => BasePoint::new(0.0, 0.0),
	}
}

/// Pixel offset of the `index`-th notification in an anchor's stack.
///
/// Index 0 sits against the anchor; later indices move outward by one box
/// (plus margins) each. `NaN` measurements propagate into the result.
pub fn offset(anchor: Anchor, index: usize, metrics: &BoxMetrics) -> Offset {
	let i = index as f64;
	let w = metrics.size.width;
	let h = metrics.size.height;
	let Margins {
		top: mt,
		right: mr,
		bottom: mb,
		left: ml,
	} = metrics.margins;

	match anchor {
		Anchor::N => Offset::new(w / 2.0, i * (h + mt)),
		Anchor::Ne => Offset::new(w + ml + mr, i * (h + mt)),
		Anchor::E => Offset::new((i + 1.0) * (w + ml + mr), -(h / 2.0 + mt + mb)),
		Anchor::Se => Offset::new(w + ml + mr, -(i + 1.0) * (h + mt + mb)),
		Anchor::S => Offset::new(w / 2.0, -(i + 1.0) * (h + mt + mb)),
		Anchor::Sw => Offset::new(0.0, -(i + 1.0) * (h + mt + mb)),
		Anchor::W => Offset::new(i * -(w + ml), -(h / 2.0 + mt + mb)),
		Anchor::Nw => Offset::new(0.0, i * (h + mt)),
	}
}

/// Full placement of one notification.
///
/// Grouped notifications ignore `index` (they all overlap at the anchor) and
/// instead receive a priority of [`Z_INDEX_CEILING`] minus `stack_depth`, the
/// number of notifications registered at the anchor up to and including this
/// one, so later ones render beneath earlier ones.
pub fn placement(
	anchor: Anchor,
	index: usize,
	metrics: &BoxMetrics,
	grouped: bool,
	stack_depth: usize,
) -> Placement {
	let index = if grouped { 0 } else { index };
	let base = base_point(anchor);
	let Offset { dx, dy } = offset(anchor, index, metrics);
	Placement {
		left: format!(
			"calc({}% - {}px)",
			format_number(base.x),
			format_number(dx)
		),
		top: format!(
			"calc({}% + {}px)",
			format_number(base.y),
			format_number(dy)
		),
		z_index: grouped
			.then(|| Z_INDEX_CEILING - i64::try_from(stack_depth).unwrap_or(Z_INDEX_CEILING)),
	}
}

/// Reads an element's box and margins from the host.
///
/// Margins are parsed with integer-prefix rules; a missing or unparsable
/// value becomes `NaN`.
pub fn measure<H: Host + ?Sized>(host: &H, id: ElementId) -> BoxMetrics {
	let [top, right, bottom, left] = MARGIN_PROPERTIES.map(|property| {
		host.computed_style(id, property)
			.map_or(f64::NAN, |value| parse_int_prefix(&value))
	});
	BoxMetrics::new(host.bounding_box(id), Margins::new(top, right, bottom, left))
}
