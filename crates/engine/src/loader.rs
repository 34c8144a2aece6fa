//! Builds registries from the built-in table or from fetched tab-separated text.
//!
//! The fetched format is the upstream `pronouns.tab`: one set per line, one
//! slot per tab-separated column. The short label of a fetched row is derived
//! from its first and last columns (`they/.../themselves`), and its set is all
//! columns joined with '/'. Row width is not assumed.

use std::fmt::Display;

use indexmap::IndexMap;

use crate::error::LoadError;
use crate::registry::Registry;
use crate::set::{PronounSet, SLOT_SEP};

#[cfg(test)]
mod tests;

/// Where the upstream table lives. Fetching it is the host's job.
pub const DEFAULT_SOURCE_URL: &str =
	"https://github.com/witch-house/pronoun.is/raw/master/resources/pronouns.tab";

/// Column separator in the fetched table.
pub const COLUMN_SEP: char = '\t';

/// Built-in sets that are always available, even when no table can be fetched.
///
/// When a partial input matches several of these, the earlier entry is accepted.
pub const DEFAULT_SETS: [(&str, &str); 10] = [
	("ze/hir", "ze/hir/hir/hirs/hirself"),
	("ze/zir", "ze/zir/zir/zirs/zirself"),
	("they/.../themselves", "they/them/their/theirs/themselves"),
	("they/.../themself", "they/them/their/theirs/themself"),
	("she/her", "she/her/her/hers/herself"),
	("he/him", "he/him/his/his/himself"),
	("xey/xem", "xey/xem/xyr/xyrs/xemself"),
	("sie/hir", "sie/hir/hir/hirs/hirself"),
	("it/it", "it/it/its/its/itself"),
	("ey/em", "ey/em/eir/eirs/eirself"),
];

/// Returns a registry holding [`DEFAULT_SETS`] in order.
pub fn load_defaults() -> Registry {
	Registry::from_entries(
		DEFAULT_SETS
			.iter()
			.map(|&(label, set)| (label, PronounSet::verbatim(set))),
	)
}

/// Parses a fetched table into a fresh registry.
///
/// All-or-nothing: the first malformed row fails the whole table. Blank lines
/// are skipped, and both `\n` and `\r\n` line endings are accepted. A label
/// that appears twice keeps its first position and takes the later set.
pub fn parse_table(text: &str) -> Result<Registry, LoadError> {
	let mut entries: IndexMap<Box<str>, PronounSet, rustc_hash::FxBuildHasher> =
		IndexMap::default();

	for (idx, row) in text.lines().enumerate() {
		if row.trim().is_empty() {
			continue;
		}
		let line = idx + 1;
		let columns: Vec<&str> = row.split(COLUMN_SEP).collect();

		for (i, &column) in columns.iter().enumerate() {
			if column.is_empty() {
				return Err(LoadError::EmptyColumn {
					line,
					column: i + 1,
				});
			}
			if column.contains(SLOT_SEP) {
				return Err(LoadError::SlashInColumn {
					line,
					column: i + 1,
					text: column.into(),
				});
			}
		}

		// `split` always yields at least one column.
		let (first, last) = (columns[0], columns[columns.len() - 1]);
		let label = format!("{first}/.../{last}");
		entries.insert(label.into_boxed_str(), PronounSet::from_slots(&columns));
	}

	if entries.is_empty() {
		return Err(LoadError::Empty);
	}
	Ok(Registry::from_map(entries))
}

/// Turns the outcome of a fetch into a registry.
///
/// Transport failures and malformed text are reported the same way, so the
/// caller has a single path for keeping its current registry.
pub fn refresh<S, E>(fetched: Result<S, E>) -> Result<Registry, LoadError>
where
	S: AsRef<str>,
	E: Display,
{
	match fetched {
		Ok(text) => parse_table(text.as_ref()),
		Err(error) => Err(LoadError::Fetch(error.to_string())),
	}
}
