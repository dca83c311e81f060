//! Per-anchor stacking order of active notifications.

use herald_primitives::{Anchor, ElementId};

/// Ordered notification ids for each anchor.
///
/// Insertion order is stacking order: index 0 is the oldest surviving
/// notification and sits closest to the anchor. The collection only stores
/// identities; the host owns the elements themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collection {
	stacks: [Vec<ElementId>; 8],
}

impl Collection {
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends `id` to the anchor's stack. Registering an id that is already
	/// present is a no-op.
	pub fn register(&mut self, anchor: Anchor, id: ElementId) {
		let stack = &mut self.stacks[anchor.index()];
		if !stack.contains(&id) {
			stack.push(id);
		}
	}

	/// Removes `id` from the anchor's stack, keeping the order of the rest.
	/// Returns whether it was present.
	pub fn deregister(&mut self, anchor: Anchor, id: ElementId) -> bool {
		let stack = &mut self.stacks[anchor.index()];
		match stack.iter().position(|&x| x == id) {
			Some(pos) => {
				stack.remove(pos);
				true
			}
			None => false,
		}
	}

	/// Position of `id` in the anchor's stack.
	pub fn index_of(&self, anchor: Anchor, id: ElementId) -> Option<usize> {
		self.stacks[anchor.index()].iter().position(|&x| x == id)
	}

	/// Ids registered at `anchor`, oldest first.
	pub fn get(&self, anchor: Anchor) -> &[ElementId] {
		&self.stacks[anchor.index()]
	}

	/// Total number of registered ids across all anchors.
	pub fn len(&self) -> usize {
		self.stacks.iter().map(Vec::len).sum()
	}

	pub fn is_empty(&self) -> bool {
		self.stacks.iter().all(Vec::is_empty)
	}

	/// Every anchor with its stack, in [`Anchor::ALL`] order.
	pub fn iter(&self) -> impl Iterator<Item = (Anchor, &[ElementId])> {
		Anchor::ALL
			.into_iter()
			.map(|anchor| (anchor, self.get(anchor)))
	}

	/// Forgets every registered id.
	pub fn clear(&mut self) {
		self.stacks.iter_mut().for_each(Vec::clear);
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use proptest::prelude::*;

	use super::*;

	fn ids(raw: &[u64]) -> Vec<ElementId> {
		raw.iter().copied().map(ElementId::new).collect()
	}

	#[test]
	fn anchors_are_independent() {
		let mut c = Collection::new();
		c.register(Anchor::N, ElementId::new(1));
		c.register(Anchor::N, ElementId::new(2));
		c.register(Anchor::S, ElementId::new(3));
		assert_eq!(c.get(Anchor::N), ids(&[1, 2]).as_slice());
		assert_eq!(c.get(Anchor::S), ids(&[3]).as_slice());
		assert!(c.get(Anchor::Ne).is_empty());
		assert_eq!(c.len(), 3);
	}

	#[test]
	fn duplicates_are_ignored() {
		let mut c = Collection::new();
		c.register(Anchor::E, ElementId::new(7));
		c.register(Anchor::E, ElementId::new(7));
		assert_eq!(c.get(Anchor::E).len(), 1);
	}

	#[test]
	fn deregister_is_idempotent() {
		let mut c = Collection::new();
		c.register(Anchor::W, ElementId::new(1));
		assert!(c.deregister(Anchor::W, ElementId::new(1)));
		assert!(!c.deregister(Anchor::W, ElementId::new(1)));
		assert!(!c.deregister(Anchor::Nw, ElementId::new(99)));
		assert!(c.is_empty());
	}

	#[test]
	fn index_closes_gaps_after_removal() {
		let mut c = Collection::new();
		let [a, b, cc] = [1, 2, 3].map(ElementId::new);
		for id in [a, b, cc] {
			c.register(Anchor::S, id);
		}
		assert_eq!(c.index_of(Anchor::S, cc), Some(2));
		c.deregister(Anchor::S, b);
		assert_eq!(c.index_of(Anchor::S, cc), Some(1));
		assert_eq!(c.index_of(Anchor::S, b), None);
	}

	#[test]
	fn iter_visits_every_anchor_and_clear_empties() {
		let mut c = Collection::new();
		c.register(Anchor::Nw, ElementId::new(1));
		let anchors: Vec<_> = c.iter().map(|(a, _)| a).collect();
		assert_eq!(anchors, Anchor::ALL);
		c.clear();
		assert!(c.is_empty());
	}

	proptest! {
		#[test]
		fn removal_preserves_relative_order(
			n in 1usize..24,
			pick in any::<prop::sample::Index>(),
			anchor_idx in 0usize..8,
		) {
			let anchor = Anchor::ALL[anchor_idx];
			let mut c = Collection::new();
			let all: Vec<ElementId> = (0..n as u64).map(ElementId::new).collect();
			for &id in &all {
				c.register(anchor, id);
			}
			let victim = all[pick.index(n)];
			c.deregister(anchor, victim);

			let expected: Vec<ElementId> = all.iter().copied().filter(|&id| id != victim).collect();
			prop_assert_eq!(c.get(anchor), expected.as_slice());
			for (k, &id) in expected.iter().enumerate() {
				prop_assert_eq!(c.index_of(anchor, id), Some(k));
			}
		}
	}
}
