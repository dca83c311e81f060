use herald_primitives::Kind;
use pretty_assertions::assert_eq;
use rstest::rstest;

use super::*;
use crate::headless::Document;

fn notifier() -> Notifier<Document> {
	Notifier::new(Document::new(), NotifyConfig::default()).unwrap()
}

fn at(anchor: &str) -> [(&'static str, AttrValue); 1] {
	[("position", AttrValue::from(anchor))]
}

#[test]
fn test_mount_registers_and_renders() {
	let mut n = notifier();
	let id = n.notify("Hello", [("heading", "Greeting")], false);

	assert_eq!(n.collection().get(Anchor::Ne), &[id]);
	assert_eq!(n.phase(id), Phase::Displaying);
	assert_eq!(n.pending_frames(), 1);

	let doc = n.host();
	assert_eq!(doc.events_for(id), vec![NotifyEvent::Open]);
	let el = doc.element(id).unwrap();
	assert_eq!(el.attribute("role"), Some("alert"));
	assert_eq!(el.attribute("type"), Some("info"));

	let shadow = doc.shadow(id).unwrap();
	assert!(!shadow.stylesheet.is_empty());
	let heading = shadow.find("h3").unwrap();
	assert!(heading.has_class("heading"));
	assert_eq!(shadow.text_content(), "GreetingHello");
}

#[test]
fn test_no_heading_element_without_heading() {
	let mut n = notifier();
	let id = n.notify("Body", [("heading", "")], false);
	assert!(n.host().shadow(id).unwrap().find("h3").is_none());
}

#[test]
fn test_placement_is_applied_as_custom_properties() {
	let mut n = notifier();
	let a = n.notify("a", at("ne"), false);
	let b = n.notify("b", at("ne"), false);
	let doc = n.host();

	// 320x60 box with 8px margins.
	assert_eq!(doc.style_property(a, LEFT_PROPERTY), Some("calc(100% - 336px)"));
	assert_eq!(doc.style_property(a, TOP_PROPERTY), Some("calc(0% + 0px)"));
	assert_eq!(doc.style_property(b, TOP_PROPERTY), Some("calc(0% + 68px)"));
	assert_eq!(doc.style_property(b, Z_INDEX_PROPERTY), None);
	assert_eq!(n.placement(b).unwrap().top, "calc(0% + 68px)");
}

#[test]
fn test_grouped_notifications_overlap_with_descending_priority() {
	let mut n = notifier();
	let ids: Vec<_> = (0..3)
		.map(|_| n.notify("g", [("grouped", true)], false))
		.collect();
	let doc = n.host();

	let tops: Vec<_> = ids
		.iter()
		.map(|&id| doc.style_property(id, TOP_PROPERTY).unwrap())
		.collect();
	assert!(tops.iter().all(|t| *t == "calc(0% + 0px)"));

	let z: Vec<_> = ids
		.iter()
		.map(|&id| doc.style_property(id, Z_INDEX_PROPERTY).unwrap())
		.collect();
	assert_eq!(z, ["9999", "9998", "9997"]);
}

#[test]
fn test_expiry_closes_after_expire_ms() {
	let mut n = notifier();
	let id = n.notify("x", [("expire", 50)], false);

	n.frame(1_000.0);
	n.frame(1_049.0);
	assert_eq!(n.phase(id), Phase::Displaying);
	n.frame(1_050.0);

	assert_eq!(n.phase(id), Phase::Removed);
	assert!(n.collection().is_empty());
	assert!(!n.host().is_connected(id));
	assert_eq!(n.host().events_for(id), vec![NotifyEvent::Open, NotifyEvent::Close]);
	assert!(n.is_idle());
}

#[test]
fn test_zero_expire_closes_on_first_frame() {
	let mut n = notifier();
	let id = n.notify("x", [("expire", 0)], false);
	n.frame(16.0);
	assert_eq!(n.phase(id), Phase::Removed);
}

#[test]
fn test_click_is_observed_on_the_next_frame() {
	let mut n = notifier();
	let id = n.notify("x", [("closeable", true)], false);
	n.frame(0.0);

	assert!(n.click(id));
	assert_eq!(n.phase(id), Phase::Displaying);

	n.frame(16.0);
	assert_eq!(n.phase(id), Phase::Removed);
	assert_eq!(n.host().events_for(id), vec![NotifyEvent::Open, NotifyEvent::Close]);
}

#[test]
fn test_click_on_non_closeable_is_ignored() {
	let mut n = notifier();
	let id = n.notify("x", [("closeable", false)], false);
	assert!(!n.click(id));
	n.frame(0.0);
	n.frame(16.0);
	assert_eq!(n.phase(id), Phase::Displaying);
}

#[test]
fn test_animated_close_waits_for_animation_end() {
	let doc = Document::new().with_animation_duration("0.3s");
	let mut n = Notifier::new(doc, NotifyConfig::default()).unwrap();
	let id = n.notify("x", [("expire", 0)], false);

	n.frame(0.0);
	assert_eq!(n.phase(id), Phase::Closing);
	let el = n.host().element(id).unwrap();
	assert_eq!(el.attribute(CLOSING_ATTRIBUTE), Some("true"));
	assert_eq!(el.style(ANIMATION_PLAY_STATE), Some("running"));
	assert!(n.is_idle());

	n.animation_end(id);
	assert_eq!(n.phase(id), Phase::Removed);
	assert_eq!(n.host().events_for(id), vec![NotifyEvent::Open, NotifyEvent::Close]);
}

#[test]
fn test_premature_close_only_pauses() {
	let mut n = notifier();
	let id = n.notify("x", [("expire", 1_000)], false);
	n.animation_end(id);

	assert_eq!(n.phase(id), Phase::Displaying);
	assert_eq!(
		n.host().style_property(id, ANIMATION_PLAY_STATE),
		Some("paused")
	);
	assert_eq!(n.host().events_for(id), vec![NotifyEvent::Open]);
}

#[test]
fn test_close_unknown_id_is_noop() {
	let mut n = notifier();
	n.close(ElementId::new(42));
	assert!(!n.remove(ElementId::new(42)));
	assert!(n.host().events().is_empty());
}

#[test]
fn test_remove_reflows_siblings() {
	let mut n = notifier();
	let [a, b, c] = ["a", "b", "c"].map(|s| n.notify(s, at("s"), false));
	assert_eq!(n.host().style_property(c, TOP_PROPERTY), Some("calc(100% + -228px)"));

	assert!(n.remove(b));
	assert_eq!(n.collection().get(Anchor::S), &[a, c]);
	assert_eq!(n.host().style_property(c, TOP_PROPERTY), Some("calc(100% + -152px)"));
	assert_eq!(n.host().events_for(b), vec![NotifyEvent::Open]);
}

#[test]
fn test_reflow_forgets_elements_detached_by_the_host() {
	let mut n = notifier();
	let [a, b, c] = ["a", "b", "c"].map(|s| n.notify(s, at("s"), false));
	n.host_mut().detach(b);

	n.reflow_all();
	assert_eq!(n.collection().get(Anchor::S), &[a, c]);
	assert_eq!(n.live_count(), 2);
	assert_eq!(n.phase(b), Phase::Removed);
	assert_eq!(n.host().style_property(c, TOP_PROPERTY), Some("calc(100% + -152px)"));
	assert_eq!(n.host().events_for(b), vec![NotifyEvent::Open]);
}

#[test]
fn test_frame_forgets_elements_detached_by_the_host() {
	let mut n = notifier();
	let [a, b, c] = ["a", "b", "c"].map(|s| n.notify(s, at("s"), false));
	n.host_mut().detach(b);

	n.frame(0.0);
	assert_eq!(n.collection().get(Anchor::S), &[a, c]);
	assert_eq!(n.live_count(), 2);
	assert_eq!(n.phase(b), Phase::Removed);
	assert_eq!(n.pending_frames(), 2);
	assert_eq!(n.host().style_property(c, TOP_PROPERTY), Some("calc(100% + -152px)"));
}

#[test]
fn test_grouped_priority_descends_after_removal() {
	let mut n = notifier();
	let [a, b, c] = ["a", "b", "c"].map(|s| n.notify(s, [("grouped", true)], false));
	assert!(n.remove(b));

	let doc = n.host();
	let z = [a, c].map(|id| doc.style_property(id, Z_INDEX_PROPERTY).unwrap());
	assert_eq!(z, ["9999", "9998"]);
}

#[test]
fn test_unknown_position_uses_configured_anchor() {
	let mut config = NotifyConfig::default();
	config.defaults.anchor = Anchor::Sw;
	let mut n = Notifier::new(Document::new(), config).unwrap();
	let id = n.notify("x", at("centre"), false);
	assert_eq!(n.props(id).unwrap().anchor, Anchor::Sw);
}

#[test]
fn test_removal_cancels_pending_frame() {
	let mut n = notifier();
	let id = n.notify("x", Vec::<(&str, AttrValue)>::new(), false);
	assert_eq!(n.pending_frames(), 1);
	n.remove(id);
	assert!(n.is_idle());
}

#[rstest]
#[case("herald-notify", true)]
#[case("app-toast-2", true)]
#[case("toast", false)]
#[case("Herald-notify", false)]
#[case("-notify", false)]
#[case("", false)]
fn test_tag_name_validation(#[case] tag: &str, #[case] ok: bool) {
	assert_eq!(validate_tag_name(tag).is_ok(), ok);
}

#[test]
fn test_invalid_tag_is_rejected_before_definition() {
	let config = NotifyConfig {
		tag_name: "toast".into(),
		..NotifyConfig::default()
	};
	let err = Notifier::new(Document::new(), config).unwrap_err();
	assert_eq!(err, NotifyError::InvalidTagName("toast".into()));
}

#[test]
fn test_configured_defaults_apply() {
	let mut config = NotifyConfig::default();
	config.defaults.kind = Kind::Warning;
	config.defaults.anchor = Anchor::Sw;
	config.defaults.heading = Some("Notice".into());
	let mut n = Notifier::new(Document::new(), config).unwrap();

	let id = n.notify("x", Vec::<(&str, AttrValue)>::new(), false);
	let props = n.props(id).unwrap();
	assert_eq!(props.kind, Kind::Warning);
	assert_eq!(props.anchor, Anchor::Sw);
	assert_eq!(n.collection().get(Anchor::Sw), &[id]);
	assert!(n.host().shadow(id).unwrap().find("h3").is_some());
}

#[test]
fn test_reset_detaches_everything() {
	let mut n = notifier();
	let a = n.notify("a", at("n"), false);
	let b = n.notify("b", at("w"), false);
	n.reset();

	assert!(n.collection().is_empty());
	assert_eq!(n.live_count(), 0);
	assert!(n.is_idle());
	assert!(!n.host().is_connected(a));
	assert!(!n.host().is_connected(b));
	assert_eq!(n.phase(a), Phase::Removed);
}
