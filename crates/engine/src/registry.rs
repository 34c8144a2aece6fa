//! The label → set registry and its shared, swappable handle.
//!
//! A [`Registry`] is never mutated once built. Hosts keep the current one in a
//! [`SharedRegistry`], which publishes replacements with a single atomic
//! pointer swap: readers holding an older snapshot keep seeing it in full, and
//! new readers see the replacement in full.

use std::fmt::Display;
use std::sync::Arc;

use arc_swap::ArcSwap;
use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;

use crate::error::LoadError;
use crate::loader;
use crate::matcher::{self, MatchResult};
use crate::set::PronounSet;

#[cfg(test)]
mod tests;

type EntryMap = IndexMap<Box<str>, PronounSet, FxBuildHasher>;

/// Immutable mapping from short label to pronoun set, in insertion order.
///
/// Order matters: when a partial input matches several sets, the one seen
/// first is accepted.
#[derive(Clone, Debug, Default)]
pub struct Registry {
	entries: EntryMap,
}

/// Entries compare pairwise, in registry order.
impl PartialEq for Registry {
	fn eq(&self, other: &Self) -> bool {
		self.entries.iter().eq(other.entries.iter())
	}
}

impl Eq for Registry {}

impl Registry {
	/// The built-in table. See [`loader::DEFAULT_SETS`].
	pub fn defaults() -> Self {
		loader::load_defaults()
	}

	/// Parses a fetched tab-separated table. See [`loader::parse_table`].
	pub fn from_table(text: &str) -> Result<Self, LoadError> {
		loader::parse_table(text)
	}

	/// Builds a registry from `(label, set)` pairs. Later duplicates of a label
	/// replace the set but keep the original position.
	pub fn from_entries<I, L>(entries: I) -> Self
	where
		I: IntoIterator<Item = (L, PronounSet)>,
		L: Into<Box<str>>,
	{
		let mut map = EntryMap::default();
		for (label, set) in entries {
			map.insert(label.into(), set);
		}
		Self { entries: map }
	}

	pub(crate) fn from_map(entries: EntryMap) -> Self {
		Self { entries }
	}

	#[inline]
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	#[inline]
	pub fn get(&self, label: &str) -> Option<&PronounSet> {
		self.entries.get(label)
	}

	/// Iterates `(label, set)` pairs in registry order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &PronounSet)> {
		self.entries.iter().map(|(label, set)| (&**label, set))
	}

	pub fn labels(&self) -> impl Iterator<Item = &str> {
		self.entries.keys().map(|label| &**label)
	}

	pub fn sets(&self) -> impl Iterator<Item = &PronounSet> {
		self.entries.values()
	}

	/// Matches user input against this registry. See [`matcher::resolve`].
	pub fn resolve(&self, input: &str) -> MatchResult {
		matcher::resolve(input, self)
	}

	/// Finds the display label for `set`. See [`crate::label::label_for`].
	pub fn label_for<'a>(&'a self, set: &'a str) -> &'a str {
		crate::label::label_for(self, set)
	}
}

/// Process-wide handle to the current registry.
pub struct SharedRegistry {
	snap: ArcSwap<Registry>,
}

impl SharedRegistry {
	pub fn new(registry: Registry) -> Self {
		Self {
			snap: ArcSwap::from_pointee(registry),
		}
	}

	pub fn with_defaults() -> Self {
		Self::new(Registry::defaults())
	}

	/// Returns the current snapshot. It stays valid across later swaps.
	#[inline]
	pub fn load(&self) -> Arc<Registry> {
		self.snap.load_full()
	}

	pub fn with_snapshot<R>(&self, f: impl FnOnce(&Registry) -> R) -> R {
		let snap = self.snap.load();
		f(&snap)
	}

	#[inline]
	pub fn len(&self) -> usize {
		self.with_snapshot(Registry::len)
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Publishes `registry` wholesale and returns the snapshot it replaced.
	pub fn replace(&self, registry: Registry) -> Arc<Registry> {
		let prev = self.snap.swap(Arc::new(registry));
		tracing::debug!(
			previous = prev.len(),
			current = self.len(),
			"pronoun registry swapped"
		);
		prev
	}

	/// Builds a registry from a fetch outcome and publishes it on success.
	///
	/// On failure the current registry stays active and the error is logged
	/// and returned. Returns the number of entries now active on success.
	pub fn refresh<S, E>(&self, fetched: Result<S, E>) -> Result<usize, LoadError>
	where
		S: AsRef<str>,
		E: Display,
	{
		match loader::refresh(fetched) {
			Ok(next) => {
				let count = next.len();
				self.replace(next);
				tracing::info!(count, "pronoun registry refreshed");
				Ok(count)
			}
			Err(error) => {
				tracing::warn!(
					%error,
					retained = self.len(),
					"failed to refresh pronoun registry; keeping current sets"
				);
				Err(error)
			}
		}
	}

	pub fn resolve(&self, input: &str) -> MatchResult {
		self.with_snapshot(|registry| registry.resolve(input))
	}

	/// Owned variant of [`Registry::label_for`], since the snapshot may be
	/// swapped out once this returns.
	pub fn label_for(&self, set: &str) -> String {
		self.with_snapshot(|registry| registry.label_for(set).to_owned())
	}
}

impl Default for SharedRegistry {
	fn default() -> Self {
		Self::with_defaults()
	}
}
