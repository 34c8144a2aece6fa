use pretty_assertions::{assert_eq, assert_ne};

use super::*;

#[test]
fn test_defaults_keep_table_order() {
	let registry = Registry::defaults();
	assert_eq!(registry.len(), 10);
	assert_eq!(
		registry.labels().collect::<Vec<_>>(),
		vec![
			"ze/hir",
			"ze/zir",
			"they/.../themselves",
			"they/.../themself",
			"she/her",
			"he/him",
			"xey/xem",
			"sie/hir",
			"it/it",
			"ey/em",
		]
	);
	assert_eq!(
		registry.get("ey/em").map(PronounSet::as_str),
		Some("ey/em/eir/eirs/eirself")
	);
	assert!(registry.sets().all(PronounSet::is_canonical));
}

#[test]
fn test_from_entries_keeps_first_position_on_duplicate_label() {
	let registry = Registry::from_entries([
		("a", PronounSet::verbatim("a/a/a/a/a")),
		("b", PronounSet::verbatim("b/b/b/b/b")),
		("a", PronounSet::verbatim("c/c/c/c/c")),
	]);
	assert_eq!(
		registry.iter().collect::<Vec<_>>(),
		vec![
			("a", &PronounSet::verbatim("c/c/c/c/c")),
			("b", &PronounSet::verbatim("b/b/b/b/b")),
		]
	);
}

#[test]
fn test_shared_refresh_replaces_wholesale() {
	let shared = SharedRegistry::with_defaults();
	let before = shared.load();

	let count = shared
		.refresh::<_, String>(Ok("fae\tfaer\tfaer\tfaers\tfaerself\n"))
		.unwrap();
	assert_eq!(count, 1);
	assert_eq!(shared.len(), 1);
	assert_eq!(shared.label_for("fae/faer/faer/faers/faerself"), "fae/.../faerself");
	assert_eq!(shared.resolve("she/her"), MatchResult::NoMatch);

	// Snapshots taken before the swap are unaffected.
	assert_eq!(before.len(), 10);
	assert_eq!(*before, Registry::defaults());
}

#[test]
fn test_shared_refresh_failure_keeps_current() {
	let shared = SharedRegistry::with_defaults();

	assert_eq!(shared.refresh::<_, String>(Ok("")), Err(LoadError::Empty));
	assert_eq!(*shared.load(), Registry::defaults());

	let err = shared
		.refresh::<&str, _>(Err("connection reset"))
		.unwrap_err();
	assert_eq!(err, LoadError::Fetch("connection reset".into()));
	assert_eq!(*shared.load(), Registry::defaults());
}

#[test]
fn test_replace_returns_previous() {
	let shared = SharedRegistry::new(Registry::default());
	assert!(shared.is_empty());
	let prev = shared.replace(Registry::defaults());
	assert!(prev.is_empty());
	assert_eq!(shared.len(), 10);
}

#[test]
fn test_equality_respects_order() {
	let forward = Registry::from_entries([
		("x", PronounSet::verbatim("s/a/a/a/a")),
		("y", PronounSet::verbatim("s/b/b/b/b")),
	]);
	let reversed = Registry::from_entries([
		("y", PronounSet::verbatim("s/b/b/b/b")),
		("x", PronounSet::verbatim("s/a/a/a/a")),
	]);
	assert_ne!(forward, reversed);
	assert_ne!(forward.resolve("s").accepted(), reversed.resolve("s").accepted());
	assert_eq!(forward, forward.clone());
}
