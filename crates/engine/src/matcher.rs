//! Resolution of abbreviated pronoun input against a registry.
//!
//! Input is split on '/' and used exactly as typed: no trimming, no case
//! folding. Five or more components are taken as a fully specified set and
//! accepted verbatim. Shorter input matches every registry set that satisfies
//! at least one of:
//!
//! - **prefix**: the components are the leading slots of the set
//!   (`they/them` → `they/them/their/theirs/themselves`);
//! - **ellipsis**: `subject/.../reflexive` names the first and last slots
//!   (`they/.../themself`);
//! - **three-slot**: `subject/object/possessive-pronoun`
//!   (`they/them/theirs`).

use indexmap::IndexSet;
use rustc_hash::FxBuildHasher;

use crate::registry::Registry;
use crate::set::{PronounSet, SLOT_COUNT, SLOT_SEP, Slot};


/// Placeholder for elided middle slots.
pub const ELLIPSIS: &str = "...";

/// Outcome of resolving user input.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum MatchResult {
	/// Nothing in the registry is consistent with the input.
	NoMatch,
	/// Exactly one set matched, or the input was fully specified.
	Unique(PronounSet),
	/// Several sets matched. `primary` is the first in registry order and is
	/// the one to accept; `alternatives` follow in the same order and should
	/// be offered back to the user.
	Ambiguous {
		primary: PronounSet,
		alternatives: Vec<PronounSet>,
	},
}

impl MatchResult {
	fn from_matches(matches: impl IntoIterator<Item = PronounSet>) -> Self {
		let mut matches = matches.into_iter();
		let Some(primary) = matches.next() else {
			return Self::NoMatch;
		};
		let alternatives: Vec<_> = matches.collect();
		if alternatives.is_empty() {
			Self::Unique(primary)
		} else {
			Self::Ambiguous {
				primary,
				alternatives,
			}
		}
	}

	/// The set to accept, if any.
	pub fn accepted(&self) -> Option<&PronounSet> {
		match self {
			Self::NoMatch => None,
			Self::Unique(set) | Self::Ambiguous { primary: set, .. } => Some(set),
		}
	}

	pub fn alternatives(&self) -> &[PronounSet] {
		match self {
			Self::Ambiguous { alternatives, .. } => alternatives,
			_ => &[],
		}
	}

	/// Every matched set, accepted one first.
	pub fn matches(&self) -> impl Iterator<Item = &PronounSet> {
		self.accepted().into_iter().chain(self.alternatives())
	}

	#[inline]
	pub fn is_match(&self) -> bool {
		!matches!(self, Self::NoMatch)
	}

	#[inline]
	pub fn is_ambiguous(&self) -> bool {
		matches!(self, Self::Ambiguous { .. })
	}
}

/// Resolves `input` against `registry`.
pub fn resolve(input: &str, registry: &Registry) -> MatchResult {
	let requested: Vec<&str> = input.split(SLOT_SEP).collect();
	if requested.len() >= SLOT_COUNT {
		return MatchResult::Unique(PronounSet::verbatim(input));
	}

	let prefix = format!("{input}{SLOT_SEP}");
	let mut matching: IndexSet<&PronounSet, FxBuildHasher> = IndexSet::default();
	for known in registry.sets() {
		if is_consistent(&requested, &prefix, known) {
			matching.insert(known);
		}
	}

	tracing::debug!(input, matches = matching.len(), "resolved pronoun input");
	MatchResult::from_matches(matching.into_iter().cloned())
}

fn is_consistent(requested: &[&str], prefix: &str, known: &PronounSet) -> bool {
	if known.as_str().starts_with(prefix) {
		return true;
	}

	let &[subject, second, last] = requested else {
		return false;
	};
	if known.slot(Slot::Subject) != Some(subject) {
		return false;
	}
	if second == ELLIPSIS {
		known.slot(Slot::Reflexive) == Some(last)
	} else {
		known.slot(Slot::Object) == Some(second)
			&& known.slot(Slot::PossessivePronoun) == Some(last)
	}
}
