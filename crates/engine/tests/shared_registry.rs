//! Readers racing a refresh must see one whole table or the other.

use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

use pretty_assertions::assert_eq;
use pronouns_engine::{
	EngineConfig, MatchResult, MemoryStore, PronounSet, Registry, SharedRegistry, set_pronouns,
	show_pronouns,
};

const FETCHED: &str = "\
they\tthem\ttheir\ttheirs\tthemselves
fae\tfaer\tfaer\tfaers\tfaerself
ne\tnem\tnir\tnirs\tnemself
";

#[test]
fn readers_never_observe_mixed_tables() {
	let shared = SharedRegistry::with_defaults();
	let defaults = Registry::defaults();
	let fetched = Registry::from_table(FETCHED).unwrap();
	let done = AtomicBool::new(false);

	thread::scope(|s| {
		for _ in 0..4 {
			s.spawn(|| {
				while !done.load(Ordering::Relaxed) {
					let snap = shared.load();
					assert!(*snap == defaults || *snap == fetched, "torn registry snapshot");
				}
			});
		}

		for i in 0..200 {
			if i % 2 == 0 {
				shared.refresh::<_, String>(Ok(FETCHED)).unwrap();
			} else {
				shared.replace(Registry::defaults());
			}
		}
		done.store(true, Ordering::Relaxed);
	});
}

#[test]
fn failed_refresh_keeps_serving_defaults() {
	let shared = SharedRegistry::default();
	assert!(shared.refresh::<&str, _>(Err("timed out")).is_err());
	assert!(shared.refresh::<_, String>(Ok("she\t\ther")).is_err());

	assert_eq!(shared.len(), 10);
	assert_eq!(
		shared.resolve("she/her"),
		MatchResult::Unique(PronounSet::verbatim("she/her/her/hers/herself"))
	);
}

#[test]
fn commands_follow_refreshed_registry() {
	let shared = SharedRegistry::default();
	let store = MemoryStore::new();
	let config = EngineConfig::default();

	shared.refresh::<_, String>(Ok(FETCHED)).unwrap();
	let registry = shared.load();

	let reply = set_pronouns(&store, "rowan", "ne/nem", &registry);
	assert_eq!(
		reply.to_string(),
		"Thanks for telling me! I'll remember you use ne/nem/nir/nirs/nemself."
	);

	let shown = show_pronouns(&store, "rowan", None, &registry, &config);
	assert_eq!(
		shown.to_string(),
		"rowan's pronouns are ne/nem/nir/nirs/nemself. See https://pronoun.is/ne/.../nemself for examples."
	);
}
