//! Content nodes and lenient markup parsing.

use std::borrow::Cow;

use quick_xml::escape::escape;
use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

/// HTML elements that never have children, even when written without `/>`.
const VOID_ELEMENTS: &[&str] = &[
	"area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
	"wbr",
];

/// A piece of notification content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
	/// Literal text; escaped whenever it is serialized.
	Text(String),
	/// A parsed element.
	Element(ElementNode),
}

/// An element inside notification content.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ElementNode {
	/// Lowercase tag name.
	pub tag: String,
	/// Attributes in source order.
	pub attributes: Vec<(String, String)>,
	/// Child nodes.
	pub children: Vec<Node>,
}

impl ElementNode {
	pub fn new(tag: impl Into<String>) -> Self {
		Self {
			tag: tag.into(),
			..Self::default()
		}
	}

	#[must_use]
	pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.attributes.push((name.into(), value.into()));
		self
	}

	#[must_use]
	pub fn with_text(mut self, text: impl Into<String>) -> Self {
		self.children.push(Node::Text(text.into()));
		self
	}

	/// Returns the value of an attribute.
	pub fn attribute(&self, name: &str) -> Option<&str> {
		self.attributes
			.iter()
			.find(|(k, _)| k == name)
			.map(|(_, v)| v.as_str())
	}

	/// Returns true if the element carries `class` among its classes.
	pub fn has_class(&self, class: &str) -> bool {
		self.attribute("class")
			.is_some_and(|list| list.split_ascii_whitespace().any(|c| c == class))
	}
}

impl Node {
	/// Concatenated text of this node and its descendants.
	pub fn text_content(&self) -> String {
		let mut out = String::new();
		self.collect_text(&mut out);
		out
	}

	fn collect_text(&self, out: &mut String) {
		match self {
			Node::Text(text) => out.push_str(text),
			Node::Element(el) => el.children.iter().for_each(|c| c.collect_text(out)),
		}
	}

	/// First element with `tag` in document order, including `self`.
	pub fn find(&self, tag: &str) -> Option<&ElementNode> {
		match self {
			Node::Text(_) => None,
			Node::Element(el) if el.tag == tag => Some(el),
			Node::Element(el) => find_in(&el.children, tag),
		}
	}

	/// Appends the serialized form of this node to `out`.
	pub fn write_markup(&self, out: &mut String) {
		match self {
			Node::Text(text) => out.push_str(&escape(text.as_str())),
			Node::Element(el) => {
				out.push('<');
				out.push_str(&el.tag);
				for (name, value) in &el.attributes {
					out.push(' ');
					out.push_str(name);
					out.push_str("=\"");
					out.push_str(&escape(value.as_str()));
					out.push('"');
				}
				if el.children.is_empty() && VOID_ELEMENTS.contains(&el.tag.as_str()) {
					out.push_str("/>");
					return;
				}
				out.push('>');
				el.children.iter().for_each(|c| c.write_markup(out));
				out.push_str("</");
				out.push_str(&el.tag);
				out.push('>');
			}
		}
	}
}

/// First element with `tag` in document order across `nodes`.
pub fn find_in<'a>(nodes: &'a [Node], tag: &str) -> Option<&'a ElementNode> {
	nodes.iter().find_map(|n| n.find(tag))
}

/// Concatenated text of `nodes`.
pub fn text_of(nodes: &[Node]) -> String {
	nodes.iter().map(Node::text_content).collect()
}

/// Serializes `nodes` back to markup.
pub fn markup_of(nodes: &[Node]) -> String {
	let mut out = String::new();
	nodes.iter().for_each(|n| n.write_markup(&mut out));
	out
}

/// Parses trusted markup into nodes.
///
/// Parsing never fails: mismatched end tags close back to the nearest
/// matching open element (or are dropped), unclosed elements are closed at
/// the end, void elements never take children, unknown entities stay as
/// literal text, and a syntax error turns the remaining input into text.
pub fn parse_markup(input: &str) -> Vec<Node> {
	let mut reader = Reader::from_str(input);
	let config = reader.config_mut();
	config.check_end_names = false;
	config.allow_unmatched_ends = true;

	let mut tree = TreeBuilder::default();
	loop {
		match reader.read_event() {
			Ok(Event::Start(start)) => {
				let el = element_from(&start);
				if VOID_ELEMENTS.contains(&el.tag.as_str()) {
					tree.push(Node::Element(el));
				} else {
					tree.open.push(el);
				}
			}
			Ok(Event::Empty(start)) => tree.push(Node::Element(element_from(&start))),
			Ok(Event::End(end)) => tree.close(&lowercase_name(end.name().as_ref())),
			Ok(Event::Text(text)) => {
				let decoded = text
					.unescape()
					.map(Cow::into_owned)
					.unwrap_or_else(|_| String::from_utf8_lossy(&text).into_owned());
				tree.text(&decoded);
			}
			Ok(Event::CData(data)) => tree.text(&String::from_utf8_lossy(&data)),
			Ok(Event::Eof) => break,
			Ok(_) => {}
			Err(_) => {
				let rest = usize::try_from(reader.error_position())
					.ok()
					.and_then(|pos| input.get(pos..));
				if let Some(rest) = rest {
					tree.text(rest);
				}
				break;
			}
		}
	}
	tree.finish()
}

fn lowercase_name(raw: &[u8]) -> String {
	String::from_utf8_lossy(raw).to_ascii_lowercase()
}

fn element_from(start: &BytesStart<'_>) -> ElementNode {
	let attributes = start
		.html_attributes()
		.filter_map(Result::ok)
		.map(|attr| {
			let name = lowercase_name(attr.key.as_ref());
			let value = attr
				.unescape_value()
				.map(Cow::into_owned)
				.unwrap_or_else(|_| String::from_utf8_lossy(&attr.value).into_owned());
			(name, value)
		})
		.collect();
	ElementNode {
		tag: lowercase_name(start.name().as_ref()),
		attributes,
		children: Vec::new(),
	}
}

#[derive(Default)]
struct TreeBuilder {
	root: Vec<Node>,
	open: Vec<ElementNode>,
}

impl TreeBuilder {
	fn push(&mut self, node: Node) {
		match self.open.last_mut() {
			Some(parent) => parent.children.push(node),
			None => self.root.push(node),
		}
	}

	fn text(&mut self, text: &str) {
		if text.is_empty() {
			return;
		}
		let siblings = match self.open.last_mut() {
			Some(parent) => &mut parent.children,
			None => &mut self.root,
		};
		match siblings.last_mut() {
			Some(Node::Text(prev)) => prev.push_str(text),
			_ => siblings.push(Node::Text(text.to_owned())),
		}
	}

	fn close(&mut self, tag: &str) {
		let Some(depth) = self.open.iter().rposition(|el| el.tag == tag) else {
			return;
		};
		while self.open.len() > depth {
			if let Some(el) = self.open.pop() {
				self.push(Node::Element(el));
			}
		}
	}

	fn finish(mut self) -> Vec<Node> {
		while let Some(el) = self.open.pop() {
			self.push(Node::Element(el));
		}
		self.root
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn nested_markup_builds_a_tree() {
		let nodes = parse_markup("<p>Hello <b>world</b></p>");
		assert_eq!(
			nodes,
			vec![Node::Element(ElementNode {
				tag: "p".into(),
				attributes: vec![],
				children: vec![
					Node::Text("Hello ".into()),
					Node::Element(ElementNode::new("b").with_text("world")),
				],
			})]
		);
		assert_eq!(text_of(&nodes), "Hello world");
		assert!(find_in(&nodes, "b").is_some());
	}

	#[test]
	fn void_elements_do_not_swallow_siblings() {
		let nodes = parse_markup("one<br>two");
		assert_eq!(
			nodes,
			vec![
				Node::Text("one".into()),
				Node::Element(ElementNode::new("br")),
				Node::Text("two".into()),
			]
		);
	}

	#[test]
	fn unclosed_and_mismatched_tags_are_tolerated() {
		let nodes = parse_markup("<div><i>slanted</div> tail</span>");
		let div = find_in(&nodes, "div").unwrap();
		assert_eq!(div.children.len(), 1);
		assert!(find_in(&nodes, "i").is_some());
		assert_eq!(text_of(&nodes), "slanted tail");

		let open = parse_markup("<em>never closed");
		assert_eq!(open, vec![Node::Element(ElementNode::new("em").with_text("never closed"))]);
	}

	#[test]
	fn attributes_and_entities_are_decoded() {
		let nodes = parse_markup(r#"<a href="/x?a=1&amp;b=2" class="link primary">Tom &amp; Jerry</a>"#);
		let a = find_in(&nodes, "a").unwrap();
		assert_eq!(a.attribute("href"), Some("/x?a=1&b=2"));
		assert!(a.has_class("primary"));
		assert_eq!(text_of(&nodes), "Tom & Jerry");
	}

	#[test]
	fn tag_names_are_lowercased() {
		let nodes = parse_markup("<STRONG>loud</Strong>");
		assert_eq!(nodes, vec![Node::Element(ElementNode::new("strong").with_text("loud"))]);
	}

	#[test]
	fn serialization_escapes_text() {
		let nodes = vec![
			Node::Text("<b>hi</b>".into()),
			Node::Element(ElementNode::new("i").with_attribute("title", "\"q\"").with_text("x")),
		];
		assert_eq!(
			markup_of(&nodes),
			"&lt;b&gt;hi&lt;/b&gt;<i title=\"&quot;q&quot;\">x</i>"
		);
	}
}
