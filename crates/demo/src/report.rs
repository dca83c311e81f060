//! Plain-text rendering of notifier state.

use herald_notify::headless::{Dispatched, Document};
use herald_notify::{ElementId, Notifier, Placement};

/// One line describing where a notification sits.
pub fn placement_line(id: ElementId, anchor: &str, index: usize, placement: &Placement) -> String {
	let id = id.to_string();
	let mut line = format!(
		"{id:>4}  {anchor:<2} #{index}  left={}  top={}",
		placement.left, placement.top
	);
	if let Some(z) = placement.z_index {
		line.push_str(&format!("  z={z}"));
	}
	line
}

pub fn event_line(event: &Dispatched) -> String {
	format!("{:>4}  {}", event.target.to_string(), event.event.name())
}

/// Placement lines for every live notification, anchor by anchor.
pub fn placements(notifier: &Notifier<Document>) -> Vec<String> {
	notifier
		.collection()
		.iter()
		.flat_map(|(anchor, ids)| {
			ids.iter().enumerate().filter_map(move |(index, &id)| {
				notifier
					.placement(id)
					.map(|p| placement_line(id, anchor.as_str(), index, &p))
			})
		})
		.collect()
}
