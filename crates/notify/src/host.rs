//! The boundary between the engine and a rendering environment.

use herald_primitives::{BoxSize, ElementId};

use crate::element::{Element, ElementNode, Node, find_in, text_of};
use crate::error::NotifyError;

/// Signals emitted on notification elements.
///
/// Both events bubble; subscribers are owned by the host and the engine never
/// depends on what they do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotifyEvent {
	/// Fired once, when the notification is mounted.
	Open,
	/// Fired once, right before the notification is detached after closing.
	Close,
}

impl NotifyEvent {
	/// Event type name as dispatched on the element.
	pub fn name(self) -> &'static str {
		match self {
			NotifyEvent::Open => "herald-notify:open",
			NotifyEvent::Close => "herald-notify:close",
		}
	}

	pub fn bubbles(self) -> bool {
		true
	}
}

/// Encapsulated presentation of a mounted notification.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ShadowTree {
	/// Stylesheet text scoped to this notification.
	pub stylesheet: String,
	/// Rendered nodes: optional heading followed by the content.
	pub children: Vec<Node>,
}

impl ShadowTree {
	/// First element with `tag` in the tree.
	pub fn find(&self, tag: &str) -> Option<&ElementNode> {
		find_in(&self.children, tag)
	}

	pub fn text_content(&self) -> String {
		text_of(&self.children)
	}
}

/// Rendering capabilities the engine consumes.
///
/// Implementations own element storage and layout. All calls happen on one
/// thread, from inside [`Notifier`](crate::Notifier) methods.
pub trait Host {
	/// Reserves `tag` for notification elements. Reserving a tag twice must
	/// fail with [`NotifyError::TagAlreadyDefined`].
	fn define_element(&mut self, tag: &str) -> Result<(), NotifyError>;

	/// Inserts a detached element into the rendering tree.
	fn attach(&mut self, element: Element) -> ElementId;

	/// Removes an element from the rendering tree. Unknown ids are ignored.
	fn detach(&mut self, id: ElementId);

	/// Returns true while `id` is in the rendering tree. The engine forgets
	/// notifications whose element was detached behind its back.
	fn is_connected(&self, id: ElementId) -> bool;

	/// Rendered border-box size of an attached element.
	fn bounding_box(&self, id: ElementId) -> BoxSize;

	/// Computed value of a style property, as text (`"8px"`, `"0.3s"`).
	fn computed_style(&self, id: ElementId, property: &str) -> Option<String>;

	/// Sets an inline style property.
	fn set_style_property(&mut self, id: ElementId, property: &str, value: &str);

	/// Sets an attribute on the element.
	fn set_attribute(&mut self, id: ElementId, name: &str, value: &str);

	/// Installs the element's encapsulated presentation.
	fn render(&mut self, id: ElementId, tree: ShadowTree);

	/// Dispatches an event on the element.
	fn dispatch(&mut self, id: ElementId, event: NotifyEvent);
}
