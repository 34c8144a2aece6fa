//! Per-user storage of saved pronoun sets.

use parking_lot::RwLock;
use rustc_hash::FxHashMap as HashMap;

use crate::set::PronounSet;

/// Key/value storage of each user's saved set, keyed by user identity.
///
/// Nicks are case-insensitive: `Alex` and `alex` name the same user.
pub trait PronounStore {
	fn get(&self, user: &str) -> Option<PronounSet>;
	fn set(&self, user: &str, set: PronounSet);
}

/// Store key for `user`. Nicks compare ASCII case-insensitively.
pub fn user_key(user: &str) -> Box<str> {
	user.to_ascii_lowercase().into_boxed_str()
}

/// In-process [`PronounStore`].
#[derive(Debug, Default)]
pub struct MemoryStore {
	entries: RwLock<HashMap<Box<str>, PronounSet>>,
}

impl MemoryStore {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn from_entries<I, U>(entries: I) -> Self
	where
		I: IntoIterator<Item = (U, PronounSet)>,
		U: Into<Box<str>>,
	{
		let map = entries
			.into_iter()
			.map(|(user, set)| {
				let user: Box<str> = user.into();
				(user_key(&user), set)
			})
			.collect();
		Self {
			entries: RwLock::new(map),
		}
	}

	/// Copies out all entries, sorted by user.
	pub fn entries(&self) -> Vec<(String, PronounSet)> {
		let mut out: Vec<_> = self
			.entries
			.read()
			.iter()
			.map(|(user, set)| (user.to_string(), set.clone()))
			.collect();
		out.sort_by(|a, b| a.0.cmp(&b.0));
		out
	}

	pub fn len(&self) -> usize {
		self.entries.read().len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

impl PronounStore for MemoryStore {
	fn get(&self, user: &str) -> Option<PronounSet> {
		self.entries.read().get(&*user_key(user)).cloned()
	}

	fn set(&self, user: &str, set: PronounSet) {
		self.entries.write().insert(user_key(user), set);
	}
}
