//! Frame request queue.
//!
//! Mirrors `requestAnimationFrame`: a callback requested during frame `n`
//! runs during frame `n + 1`, never during the frame that requested it.

use herald_primitives::ElementId;

/// Notifications waiting for the next frame, in request order.
#[derive(Debug, Clone, Default)]
pub struct FrameQueue {
	pending: Vec<ElementId>,
}

impl FrameQueue {
	pub fn new() -> Self {
		Self::default()
	}

	/// Requests a frame callback for `id`. Repeated requests before the next
	/// frame collapse into one.
	pub fn request(&mut self, id: ElementId) {
		if !self.pending.contains(&id) {
			self.pending.push(id);
		}
	}

	/// Drops any pending request for `id`.
	pub fn cancel(&mut self, id: ElementId) {
		self.pending.retain(|&x| x != id);
	}

	/// Takes the requests due in the frame that is starting now.
	pub fn take(&mut self) -> Vec<ElementId> {
		std::mem::take(&mut self.pending)
	}

	pub fn is_pending(&self, id: ElementId) -> bool {
		self.pending.contains(&id)
	}

	pub fn is_empty(&self) -> bool {
		self.pending.is_empty()
	}

	pub fn len(&self) -> usize {
		self.pending.len()
	}

	pub fn clear(&mut self) {
		self.pending.clear();
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn requests_collapse_and_drain_in_order() {
		let mut q = FrameQueue::new();
		let [a, b] = [1, 2].map(ElementId::new);
		q.request(a);
		q.request(b);
		q.request(a);
		assert_eq!(q.len(), 2);
		assert_eq!(q.take(), vec![a, b]);
		assert!(q.is_empty());
	}

	#[test]
	fn cancel_removes_only_that_id() {
		let mut q = FrameQueue::new();
		let [a, b] = [1, 2].map(ElementId::new);
		q.request(a);
		q.request(b);
		q.cancel(a);
		assert!(!q.is_pending(a));
		assert!(q.is_pending(b));
	}
}
