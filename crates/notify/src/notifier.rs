//! The notification service.
//!
//! [`Notifier`] owns the host, the per-anchor [`Collection`], the live
//! notification state and the frame queue. Every membership change runs a
//! full [`reflow_all`](Notifier::reflow_all), so no notification is ever
//! positioned against a stale sibling count.

use herald_primitives::{Anchor, ElementId};
use rustc_hash::FxHashMap;
use tracing::{debug, trace, warn};

use crate::collection::Collection;
use crate::config::NotifyConfig;
use crate::element::{AttrValue, Element, ElementNode, Node, create};
use crate::error::NotifyError;
use crate::frames::FrameQueue;
use crate::host::{Host, NotifyEvent, ShadowTree};
use crate::layout::{self, Placement};
use crate::lifecycle::{Notification, Phase, Props, Tick};
use crate::style::{
	ANIMATION_DURATION, ANIMATION_PLAY_STATE, CLOSING_ATTRIBUTE, LEFT_PROPERTY, ROLE_ATTRIBUTE,
	TOP_PROPERTY, Z_INDEX_PROPERTY,
};

/// Notification engine bound to one host.
///
/// All timing is advanced by [`frame`](Self::frame). A typical driver:
///
/// ```
/// use herald_notify::headless::Document;
/// use herald_notify::{Notifier, NotifyConfig, Phase};
///
/// let mut notifier = Notifier::new(Document::new(), NotifyConfig::default()).unwrap();
/// let id = notifier.notify("Saved", [("expire", 100)], false);
/// notifier.frame(0.0);
/// notifier.frame(100.0);
/// assert_eq!(notifier.phase(id), Phase::Removed);
/// ```
#[derive(Debug)]
pub struct Notifier<H: Host> {
	host: H,
	config: NotifyConfig,
	collection: Collection,
	live: FxHashMap<ElementId, Notification>,
	frames: FrameQueue,
}

impl<H: Host> Notifier<H> {
	/// Binds a notifier to `host`, reserving the configured tag name.
	///
	/// Fails if the tag is not a valid custom element name or is already
	/// reserved on the host. Both are startup errors.
	pub fn new(mut host: H, config: NotifyConfig) -> Result<Self, NotifyError> {
		validate_tag_name(&config.tag_name)?;
		if let Err(err) = host.define_element(&config.tag_name) {
			warn!(tag = %config.tag_name, error = %err, "notification tag already defined");
			return Err(err);
		}
		debug!(tag = %config.tag_name, "notification tag defined");
		Ok(Self {
			host,
			config,
			collection: Collection::new(),
			live: FxHashMap::default(),
			frames: FrameQueue::new(),
		})
	}

	pub fn host(&self) -> &H {
		&self.host
	}

	pub fn host_mut(&mut self) -> &mut H {
		&mut self.host
	}

	pub fn into_host(self) -> H {
		self.host
	}

	pub fn config(&self) -> &NotifyConfig {
		&self.config
	}

	/// Registry of mounted notifications per anchor.
	pub fn collection(&self) -> &Collection {
		&self.collection
	}

	pub fn notification(&self, id: ElementId) -> Option<&Notification> {
		self.live.get(&id)
	}

	pub fn props(&self, id: ElementId) -> Option<&Props> {
		self.live.get(&id).map(Notification::props)
	}

	/// Phase of `id`. Ids that are not live report [`Phase::Removed`].
	pub fn phase(&self, id: ElementId) -> Phase {
		self.live.get(&id).map_or(Phase::Removed, Notification::phase)
	}

	/// Live notifications, in no particular order.
	pub fn notifications(&self) -> impl Iterator<Item = &Notification> {
		self.live.values()
	}

	pub fn live_count(&self) -> usize {
		self.live.len()
	}

	/// Number of notifications waiting for the next frame.
	pub fn pending_frames(&self) -> usize {
		self.frames.len()
	}

	/// Returns true when no frame is requested. Notifications running an exit
	/// animation are still live but need no frames.
	pub fn is_idle(&self) -> bool {
		self.frames.is_empty()
	}

	/// Builds a detached element with the configured tag.
	pub fn create<K, V>(
		&self,
		content: &str,
		attributes: impl IntoIterator<Item = (K, V)>,
		trusted: bool,
	) -> Element
	where
		K: AsRef<str>,
		V: Into<AttrValue>,
	{
		create(&self.config.tag_name, content, attributes, trusted)
	}

	/// Creates and mounts a notification in one step.
	pub fn notify<K, V>(
		&mut self,
		content: &str,
		attributes: impl IntoIterator<Item = (K, V)>,
		trusted: bool,
	) -> ElementId
	where
		K: AsRef<str>,
		V: Into<AttrValue>,
	{
		let element = self.create(content, attributes, trusted);
		self.mount(element)
	}

	/// Attaches `element` to the host and starts its lifecycle.
	///
	/// Attributes are resolved into [`Props`] here, once. The open event is
	/// dispatched before the shadow tree is rendered, and the first frame is
	/// requested after the notification has been placed.
	pub fn mount(&mut self, mut element: Element) -> ElementId {
		let props = Props::reflect(&element, &self.config.defaults);
		let content = element.take_content();
		let id = self.host.attach(element);
		let anchor = props.anchor;

		self.collection.register(anchor, id);
		self.live.insert(id, Notification::new(id, props.clone()));
		self.host.dispatch(id, NotifyEvent::Open);
		self.render(id, &props, content);
		self.hydrate(id);

		debug!(
			%id,
			%anchor,
			kind = %props.kind,
			expire_ms = props.expire_ms,
			closeable = props.closeable,
			grouped = props.grouped,
			"notification mounted"
		);
		id
	}

	fn render(&mut self, id: ElementId, props: &Props, content: Vec<Node>) {
		let mut children = Vec::with_capacity(content.len() + 1);
		if let Some(heading) = &props.heading {
			children.push(Node::Element(
				ElementNode::new("h3")
					.with_attribute("class", "heading")
					.with_text(heading.as_str()),
			));
		}
		children.extend(content);

		self.host.render(
			id,
			ShadowTree {
				stylesheet: self.config.stylesheet().to_owned(),
				children,
			},
		);
		self.host.set_attribute(id, ROLE_ATTRIBUTE, "alert");
		self.host.set_attribute(id, "type", props.kind.as_str());
	}

	fn hydrate(&mut self, id: ElementId) {
		let animated = self
			.host
			.computed_style(id, ANIMATION_DURATION)
			.is_some_and(|value| herald_primitives::parse_float_prefix(&value) > 0.0);
		if let Some(n) = self.live.get_mut(&id) {
			n.hydrate(animated);
		}
		self.reflow_all();
		self.frames.request(id);
	}

	/// Runs one frame at timestamp `ts` (milliseconds, monotonic).
	///
	/// Only requests queued before this call are serviced; notifications
	/// that keep displaying are queued for the next frame.
	pub fn frame(&mut self, ts: f64) {
		if self.prune_detached() > 0 {
			self.reflow();
		}
		let due = self.frames.take();
		trace!(ts, due = due.len(), "frame");

		for id in due {
			let Some(n) = self.live.get_mut(&id) else {
				continue;
			};
			let tick = n.tick(ts);
			let anchor = n.props().anchor;
			let forced = n.is_force_closed();

			match tick {
				Tick::Continue => self.frames.request(id),
				Tick::Closing { animated } => {
					debug!(%id, %anchor, forced, animated, "notification closing");
					self.host.set_attribute(id, CLOSING_ATTRIBUTE, "true");
					if animated {
						self.host
							.set_style_property(id, ANIMATION_PLAY_STATE, "running");
					} else {
						self.close(id);
					}
				}
				Tick::Idle => {}
			}
		}
	}

	/// Handles a click. Closeable notifications are marked for closing on the
	/// next frame; returns whether the mark is set.
	pub fn click(&mut self, id: ElementId) -> bool {
		let marked = self.live.get_mut(&id).is_some_and(Notification::force_close);
		trace!(%id, marked, "click");
		marked
	}

	/// Handles the end of the exit animation.
	pub fn animation_end(&mut self, id: ElementId) {
		self.close(id);
	}

	/// Completes closing.
	///
	/// A notification that has not reached [`Phase::Closing`] only has its
	/// animation paused. Unknown ids are ignored.
	pub fn close(&mut self, id: ElementId) {
		let Some(n) = self.live.get(&id) else {
			return;
		};
		if !n.is_closing() {
			trace!(%id, "close before closing; pausing animation");
			self.host
				.set_style_property(id, ANIMATION_PLAY_STATE, "paused");
			return;
		}
		debug!(%id, anchor = %n.props().anchor, "notification closed");
		self.host.dispatch(id, NotifyEvent::Close);
		self.remove(id);
	}

	/// Detaches `id` from the host and forgets it, in any phase.
	///
	/// This is the disconnect path: it keeps the collection free of detached
	/// ids. No close event is dispatched.
	pub fn remove(&mut self, id: ElementId) -> bool {
		if self.forget(id).is_none() {
			return false;
		}
		self.reflow();
		true
	}

	fn forget(&mut self, id: ElementId) -> Option<Anchor> {
		let n = self.live.remove(&id)?;
		let anchor = n.props().anchor;
		self.frames.cancel(id);
		self.collection.deregister(anchor, id);
		self.host.detach(id);
		debug!(%id, %anchor, remaining = self.collection.get(anchor).len(), "notification removed");
		Some(anchor)
	}

	/// Forgets notifications whose element the host no longer holds. Returns
	/// how many were dropped.
	fn prune_detached(&mut self) -> usize {
		let stale: Vec<ElementId> = self
			.live
			.keys()
			.copied()
			.filter(|&id| !self.host.is_connected(id))
			.collect();
		for &id in &stale {
			debug!(%id, "element detached outside the notifier");
			self.forget(id);
		}
		stale.len()
	}

	/// Current placement of a live notification, computed from fresh
	/// measurements.
	pub fn placement(&self, id: ElementId) -> Option<Placement> {
		let n = self.live.get(&id)?;
		let anchor = n.props().anchor;
		let index = self.collection.index_of(anchor, id)?;
		let metrics = layout::measure(&self.host, id);
		Some(layout::placement(
			anchor,
			index,
			&metrics,
			n.props().grouped,
			index + 1,
		))
	}

	/// Recomputes and applies the placement of every live notification,
	/// first dropping any whose element was detached directly on the host.
	pub fn reflow_all(&mut self) {
		self.prune_detached();
		self.reflow();
	}

	fn reflow(&mut self) {
		let mut applied = 0usize;
		for anchor in Anchor::ALL {
			for (index, &id) in self.collection.get(anchor).iter().enumerate() {
				let grouped = self.live.get(&id).is_some_and(|n| n.props().grouped);
				let metrics = layout::measure(&self.host, id);
				let placement = layout::placement(anchor, index, &metrics, grouped, index + 1);
				apply_placement(&mut self.host, id, &placement);
				applied += 1;
			}
		}
		trace!(applied, "reflow");
	}

	/// Detaches every live notification and clears all engine state.
	///
	/// No close events are dispatched. The tag stays reserved.
	pub fn reset(&mut self) {
		for id in self.live.keys() {
			self.host.detach(*id);
		}
		debug!(detached = self.live.len(), "notifier reset");
		self.live.clear();
		self.collection.clear();
		self.frames.clear();
	}
}

fn apply_placement<H: Host + ?Sized>(host: &mut H, id: ElementId, placement: &Placement) {
	host.set_style_property(id, LEFT_PROPERTY, &placement.left);
	host.set_style_property(id, TOP_PROPERTY, &placement.top);
	if let Some(z) = placement.z_index {
		host.set_style_property(id, Z_INDEX_PROPERTY, &z.to_string());
	}
}

/// Checks that `tag` is usable as a custom element name: lowercase ASCII,
/// starting with a letter and containing a hyphen.
pub fn validate_tag_name(tag: &str) -> Result<(), NotifyError> {
	let valid = tag.starts_with(|c: char| c.is_ascii_lowercase())
		&& tag.contains('-')
		&& tag
			.chars()
			.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '-' | '.' | '_'));
	if valid {
		Ok(())
	} else {
		Err(NotifyError::InvalidTagName(tag.to_owned()))
	}
}

#[cfg(test)]
mod tests;
