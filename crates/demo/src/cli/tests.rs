use pretty_assertions::assert_eq;

use super::*;

fn parse(args: &[&str]) -> Cli {
	Cli::try_parse_from(std::iter::once("herald-demo").chain(args.iter().copied())).unwrap()
}

#[test]
fn defaults_to_one_greeting() {
	let cli = parse(&[]);
	assert_eq!(cli.messages, vec!["Hello from herald".to_owned()]);
	assert_eq!(cli.frame_ms, 16);
	assert!(cli.position.is_none());
}

#[test]
fn parses_anchor_and_kind_case_insensitively() {
	let cli = parse(&["-p", "SW", "--type", "Warning", "one", "two"]);
	assert_eq!(cli.position, Some(Anchor::Sw));
	assert_eq!(cli.kind, Some(Kind::Warning));
	assert_eq!(cli.messages, vec!["one".to_owned(), "two".to_owned()]);
}

#[test]
fn rejects_unknown_anchor() {
	let err = Cli::try_parse_from(["herald-demo", "--position", "middle"]).unwrap_err();
	assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
}

#[test]
fn unset_options_become_null_attributes() {
	let cli = parse(&["--expire", "-5", "--closeable"]);
	let attrs = cli.attributes();
	let get = |name: &str| {
		attrs
			.iter()
			.find(|(k, _)| *k == name)
			.map(|(_, v)| v.materialize())
			.unwrap()
	};
	assert_eq!(get("position"), None);
	assert_eq!(get("expire"), Some("-5".to_owned()));
	assert_eq!(get("closeable"), Some("true".to_owned()));
	assert_eq!(get("grouped"), None);
}

#[test]
fn click_may_repeat() {
	let cli = parse(&["--click", "0", "--click", "2", "a", "b", "c"]);
	assert_eq!(cli.click, vec![0, 2]);
}
