//! In-memory [`Host`] implementation.
//!
//! [`Document`] keeps attached elements in a map, reports a fixed box size
//! and margin for every element unless told otherwise, and records every
//! dispatched event. It performs no layout: `calc()` expressions written by
//! the engine are stored verbatim.

use herald_primitives::{BoxSize, ElementId};
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::trace;

use crate::element::Element;
use crate::error::NotifyError;
use crate::host::{Host, NotifyEvent, ShadowTree};
use crate::style::{ANIMATION_DURATION, MARGIN_PROPERTIES};

/// Box reported for elements without an explicit size.
pub const DEFAULT_BOX: BoxSize = BoxSize::new(320.0, 60.0);
/// Computed margin reported on every side unless overridden inline.
pub const DEFAULT_MARGIN: &str = "8px";

/// An event observed by the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dispatched {
	pub target: ElementId,
	pub event: NotifyEvent,
}

#[derive(Debug, Clone)]
struct Attached {
	element: Element,
	shadow: Option<ShadowTree>,
	size: Option<BoxSize>,
}

/// Headless rendering tree.
#[derive(Debug, Clone)]
pub struct Document {
	defined: FxHashSet<String>,
	attached: FxHashMap<ElementId, Attached>,
	next_id: u64,
	events: Vec<Dispatched>,
	default_box: BoxSize,
	margin: String,
	animation_duration: String,
}

impl Default for Document {
	fn default() -> Self {
		Self {
			defined: FxHashSet::default(),
			attached: FxHashMap::default(),
			next_id: 1,
			events: Vec::new(),
			default_box: DEFAULT_BOX,
			margin: DEFAULT_MARGIN.to_owned(),
			animation_duration: "0s".to_owned(),
		}
	}
}

impl Document {
	pub fn new() -> Self {
		Self::default()
	}

	/// Box size reported for elements without their own.
	pub fn with_box(mut self, size: BoxSize) -> Self {
		self.default_box = size;
		self
	}

	/// Computed margin reported on every side.
	pub fn with_margin(mut self, margin: impl Into<String>) -> Self {
		self.margin = margin.into();
		self
	}

	/// Computed `animation-duration` reported for every element.
	pub fn with_animation_duration(mut self, duration: impl Into<String>) -> Self {
		self.animation_duration = duration.into();
		self
	}

	/// Overrides the rendered size of one element.
	pub fn set_box(&mut self, id: ElementId, size: BoxSize) {
		if let Some(node) = self.attached.get_mut(&id) {
			node.size = Some(size);
		}
	}

	pub fn is_defined(&self, tag: &str) -> bool {
		self.defined.contains(tag)
	}

	pub fn connected_count(&self) -> usize {
		self.attached.len()
	}

	/// The attached element: its attributes, inline style and light content.
	pub fn element(&self, id: ElementId) -> Option<&Element> {
		self.attached.get(&id).map(|node| &node.element)
	}

	pub fn shadow(&self, id: ElementId) -> Option<&ShadowTree> {
		self.attached.get(&id).and_then(|node| node.shadow.as_ref())
	}

	/// Inline style property of an attached element.
	pub fn style_property(&self, id: ElementId, property: &str) -> Option<&str> {
		self.element(id).and_then(|el| el.style(property))
	}

	/// Every dispatched event, oldest first.
	pub fn events(&self) -> &[Dispatched] {
		&self.events
	}

	/// Events dispatched on `id`, oldest first.
	pub fn events_for(&self, id: ElementId) -> Vec<NotifyEvent> {
		self.events
			.iter()
			.filter(|d| d.target == id)
			.map(|d| d.event)
			.collect()
	}

	pub fn clear_events(&mut self) {
		self.events.clear();
	}
}

/// Value of one side of a `margin`-style shorthand, sides numbered
/// clockwise from the top. One to four values expand the CSS way; an empty
/// shorthand yields an empty value.
fn shorthand_side(shorthand: &str, side: usize) -> &str {
	let values: Vec<&str> = shorthand.split_ascii_whitespace().collect();
	let pick = match (values.len(), side) {
		(0, _) => return "",
		(1, _) => 0,
		(2, 0 | 2) | (3, 0) => 0,
		(2, _) | (3, 1 | 3) => 1,
		(3, _) => 2,
		(_, side) => side,
	};
	values.get(pick).copied().unwrap_or("")
}

impl Host for Document {
	fn define_element(&mut self, tag: &str) -> Result<(), NotifyError> {
		if self.defined.insert(tag.to_owned()) {
			Ok(())
		} else {
			Err(NotifyError::TagAlreadyDefined(tag.to_owned()))
		}
	}

	fn attach(&mut self, element: Element) -> ElementId {
		let id = ElementId::new(self.next_id);
		self.next_id += 1;
		trace!(%id, tag = element.tag(), "attach");
		self.attached.insert(
			id,
			Attached {
				element,
				shadow: None,
				size: None,
			},
		);
		id
	}

	fn detach(&mut self, id: ElementId) {
		if self.attached.remove(&id).is_some() {
			trace!(%id, "detach");
		}
	}

	fn is_connected(&self, id: ElementId) -> bool {
		self.attached.contains_key(&id)
	}

	fn bounding_box(&self, id: ElementId) -> BoxSize {
		match self.attached.get(&id) {
			Some(node) => node.size.unwrap_or(self.default_box),
			None => BoxSize::default(),
		}
	}

	fn computed_style(&self, id: ElementId, property: &str) -> Option<String> {
		let node = self.attached.get(&id)?;
		if let Some(inline) = node.element.style(property) {
			return Some(inline.to_owned());
		}
		if let Some(side) = MARGIN_PROPERTIES.iter().position(|&p| p == property) {
			let shorthand = node.element.style("margin").unwrap_or(&self.margin);
			return Some(shorthand_side(shorthand, side).to_owned());
		}
		(property == ANIMATION_DURATION).then(|| self.animation_duration.clone())
	}

	fn set_style_property(&mut self, id: ElementId, property: &str, value: &str) {
		if let Some(node) = self.attached.get_mut(&id) {
			node.element.set_style(property, value);
		}
	}

	fn set_attribute(&mut self, id: ElementId, name: &str, value: &str) {
		if let Some(node) = self.attached.get_mut(&id) {
			node.element.set_attribute(name, value);
		}
	}

	fn render(&mut self, id: ElementId, tree: ShadowTree) {
		if let Some(node) = self.attached.get_mut(&id) {
			node.shadow = Some(tree);
		}
	}

	fn dispatch(&mut self, id: ElementId, event: NotifyEvent) {
		trace!(%id, event = event.name(), "dispatch");
		self.events.push(Dispatched { target: id, event });
	}
}
