//! Detached notification elements and the factory that builds them.

mod content;

use herald_primitives::format_number;
use indexmap::IndexMap;

pub use content::{ElementNode, Node, find_in, markup_of, parse_markup, text_of};

/// Value of a declarative attribute passed to [`create`].
///
/// `false` and [`AttrValue::Null`] mean "absent": they never materialize on
/// the element.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
	Str(String),
	Int(i64),
	Float(f64),
	Bool(bool),
	Null,
}

impl AttrValue {
	/// Attribute text to set, or `None` when the value is falsy.
	pub fn materialize(&self) -> Option<String> {
		match self {
			AttrValue::Bool(false) | AttrValue::Null => None,
			AttrValue::Bool(true) => Some("true".to_owned()),
			AttrValue::Str(s) => Some(s.clone()),
			AttrValue::Int(v) => Some(v.to_string()),
			AttrValue::Float(v) => Some(format_number(*v)),
		}
	}
}

impl From<&str> for AttrValue {
	fn from(value: &str) -> Self {
		AttrValue::Str(value.to_owned())
	}
}

impl From<String> for AttrValue {
	fn from(value: String) -> Self {
		AttrValue::Str(value)
	}
}

impl From<bool> for AttrValue {
	fn from(value: bool) -> Self {
		AttrValue::Bool(value)
	}
}

impl From<i32> for AttrValue {
	fn from(value: i32) -> Self {
		AttrValue::Int(value.into())
	}
}

impl From<u32> for AttrValue {
	fn from(value: u32) -> Self {
		AttrValue::Int(value.into())
	}
}

impl From<i64> for AttrValue {
	fn from(value: i64) -> Self {
		AttrValue::Int(value)
	}
}

impl From<f64> for AttrValue {
	fn from(value: f64) -> Self {
		AttrValue::Float(value)
	}
}

impl<T: Into<AttrValue>> From<Option<T>> for AttrValue {
	fn from(value: Option<T>) -> Self {
		value.map_or(AttrValue::Null, Into::into)
	}
}

impl From<herald_primitives::Anchor> for AttrValue {
	fn from(value: herald_primitives::Anchor) -> Self {
		AttrValue::Str(value.as_str().to_owned())
	}
}

impl From<herald_primitives::Kind> for AttrValue {
	fn from(value: herald_primitives::Kind) -> Self {
		AttrValue::Str(value.as_str().to_owned())
	}
}

/// A notification element that has not been mounted yet.
///
/// Attribute names are case-insensitive and stored lowercase. Inline style
/// set here is handed to the host on mount, so callers can, for example,
/// disable the exit animation with `animation-duration: 0s`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Element {
	tag: String,
	attributes: IndexMap<String, String>,
	style: IndexMap<String, String>,
	content: Vec<Node>,
}

impl Element {
	/// Creates an empty element with the given tag.
	pub fn new(tag: impl Into<String>) -> Self {
		Self {
			tag: tag.into(),
			..Self::default()
		}
	}

	pub fn tag(&self) -> &str {
		&self.tag
	}

	pub fn attribute(&self, name: &str) -> Option<&str> {
		self.attributes
			.get(&name.to_ascii_lowercase())
			.map(String::as_str)
	}

	pub fn has_attribute(&self, name: &str) -> bool {
		self.attributes.contains_key(&name.to_ascii_lowercase())
	}

	pub fn set_attribute(&mut self, name: &str, value: impl Into<String>) {
		self.attributes
			.insert(name.to_ascii_lowercase(), value.into());
	}

	pub fn remove_attribute(&mut self, name: &str) -> Option<String> {
		self.attributes.shift_remove(&name.to_ascii_lowercase())
	}

	/// Attributes in insertion order.
	pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
		self.attributes
			.iter()
			.map(|(k, v)| (k.as_str(), v.as_str()))
	}

	pub fn style(&self, property: &str) -> Option<&str> {
		self.style.get(property).map(String::as_str)
	}

	pub fn set_style(&mut self, property: &str, value: impl Into<String>) {
		self.style.insert(property.to_owned(), value.into());
	}

	pub fn remove_style(&mut self, property: &str) -> Option<String> {
		self.style.shift_remove(property)
	}

	/// Inline style declarations in insertion order.
	pub fn styles(&self) -> impl Iterator<Item = (&str, &str)> {
		self.style.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}

	pub fn content(&self) -> &[Node] {
		&self.content
	}

	/// Replaces the content with a single literal text node.
	pub fn set_text(&mut self, text: impl Into<String>) {
		let text = text.into();
		self.content = if text.is_empty() {
			Vec::new()
		} else {
			vec![Node::Text(text)]
		};
	}

	/// Replaces the content with parsed markup.
	pub fn set_markup(&mut self, markup: &str) {
		self.content = parse_markup(markup);
	}

	/// Moves the content out, leaving the element empty.
	pub fn take_content(&mut self) -> Vec<Node> {
		std::mem::take(&mut self.content)
	}

	pub fn text_content(&self) -> String {
		text_of(&self.content)
	}

	/// Content serialized as markup; literal text is escaped.
	pub fn inner_markup(&self) -> String {
		markup_of(&self.content)
	}

	/// First content element with `tag`.
	pub fn find(&self, tag: &str) -> Option<&ElementNode> {
		find_in(&self.content, tag)
	}
}

/// Builds a detached notification element.
///
/// Attributes are applied in order; falsy values (`false`, null) are skipped
/// rather than stringified. `content` is stored as literal text unless
/// `trusted` is set, in which case it is parsed as markup. Mounting the
/// element is the caller's responsibility.
pub fn create<K, V>(
	tag: &str,
	content: &str,
	attributes: impl IntoIterator<Item = (K, V)>,
	trusted: bool,
) -> Element
where
	K: AsRef<str>,
	V: Into<AttrValue>,
{
	let mut element = Element::new(tag);
	for (name, value) in attributes {
		if let Some(text) = value.into().materialize() {
			element.set_attribute(name.as_ref(), text);
		}
	}
	if trusted {
		element.set_markup(content);
	} else {
		element.set_text(content);
	}
	element
}
