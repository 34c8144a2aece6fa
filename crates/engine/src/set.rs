//! Pronoun sets in their '/'-joined text form.
//!
//! A canonical set names all five grammatical slots in a fixed order:
//!
//! ```text
//! subject/object/possessive-determiner/possessive-pronoun/reflexive
//! they   /them  /their               /theirs            /themselves
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SetParseError;


/// Separator between slots in the text form.
pub const SLOT_SEP: char = '/';

/// Number of slots in a canonical set.
pub const SLOT_COUNT: usize = 5;

/// One grammatical position within a pronoun set.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Slot {
	Subject,
	Object,
	PossessiveDeterminer,
	PossessivePronoun,
	Reflexive,
}

impl Slot {
	pub const ALL: [Slot; SLOT_COUNT] = [
		Slot::Subject,
		Slot::Object,
		Slot::PossessiveDeterminer,
		Slot::PossessivePronoun,
		Slot::Reflexive,
	];

	/// Position of this slot in the joined form.
	#[inline]
	pub const fn index(self) -> usize {
		match self {
			Slot::Subject => 0,
			Slot::Object => 1,
			Slot::PossessiveDeterminer => 2,
			Slot::PossessivePronoun => 3,
			Slot::Reflexive => 4,
		}
	}

	pub const fn name(self) -> &'static str {
		match self {
			Slot::Subject => "subject",
			Slot::Object => "object",
			Slot::PossessiveDeterminer => "possessive-determiner",
			Slot::PossessivePronoun => "possessive-pronoun",
			Slot::Reflexive => "reflexive",
		}
	}
}

impl fmt::Display for Slot {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

/// A pronoun set stored as its '/'-joined text.
///
/// Sets built through [`FromStr`] are guaranteed canonical. Sets built with
/// [`PronounSet::verbatim`] hold whatever the caller supplied; fully specified
/// user input is accepted that way without validation.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PronounSet(Box<str>);

impl PronounSet {
	/// Wraps `text` without checking the five-slot invariant.
	pub fn verbatim(text: impl Into<Box<str>>) -> Self {
		Self(text.into())
	}

	/// Joins `slots` with '/' and wraps the result verbatim.
	pub fn from_slots<I, S>(slots: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let mut joined = String::new();
		for (i, slot) in slots.into_iter().enumerate() {
			if i > 0 {
				joined.push(SLOT_SEP);
			}
			joined.push_str(slot.as_ref());
		}
		Self(joined.into_boxed_str())
	}

	#[inline]
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Iterates the '/'-separated components, empty ones included.
	#[inline]
	pub fn slots(&self) -> std::str::Split<'_, char> {
		self.0.split(SLOT_SEP)
	}

	/// Returns the text at `slot`, if the set has that many components.
	pub fn slot(&self, slot: Slot) -> Option<&str> {
		self.slots().nth(slot.index())
	}

	/// Returns `true` if the set has exactly five non-empty components.
	pub fn is_canonical(&self) -> bool {
		let mut count = 0;
		for part in self.slots() {
			if part.is_empty() {
				return false;
			}
			count += 1;
		}
		count == SLOT_COUNT
	}
}

impl FromStr for PronounSet {
	type Err = SetParseError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let mut count = 0;
		for (i, part) in s.split(SLOT_SEP).enumerate() {
			if part.is_empty() {
				return Err(SetParseError::EmptySlot {
					position: i,
					text: s.into(),
				});
			}
			count += 1;
		}
		if count != SLOT_COUNT {
			return Err(SetParseError::SlotCount {
				found: count,
				text: s.into(),
			});
		}
		Ok(Self(s.into()))
	}
}

impl fmt::Display for PronounSet {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl AsRef<str> for PronounSet {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

impl PartialEq<str> for PronounSet {
	fn eq(&self, other: &str) -> bool {
		&*self.0 == other
	}
}

impl PartialEq<&str> for PronounSet {
	fn eq(&self, other: &&str) -> bool {
		&*self.0 == *other
	}
}
