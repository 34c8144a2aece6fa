use std::path::PathBuf;

/// Failure to build a registry from a fetched pronoun table.
///
/// A refresh that fails with any of these leaves the active registry untouched.
#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
pub enum LoadError {
	/// The table contained no rows.
	#[error("pronoun table is empty")]
	Empty,

	/// A row contained an empty column, e.g. from doubled tabs.
	#[error("empty column {column} on line {line}")]
	EmptyColumn { line: usize, column: usize },

	/// A column contained the slot separator and would corrupt the joined form.
	#[error("column {column} on line {line} contains '/': {text:?}")]
	SlashInColumn {
		line: usize,
		column: usize,
		text: Box<str>,
	},

	/// The collaborator that fetches the table reported a transport failure.
	#[error("failed to fetch pronoun table: {0}")]
	Fetch(String),
}

/// Failure to parse text as a canonical five-slot set.
#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
pub enum SetParseError {
	#[error("expected 5 slots, found {found}: {text:?}")]
	SlotCount { found: usize, text: Box<str> },

	#[error("slot {position} is empty: {text:?}")]
	EmptySlot { position: usize, text: Box<str> },
}

/// Failure to read or parse an engine configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	#[error("failed to read {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("invalid configuration: {0}")]
	Parse(#[from] toml::de::Error),

	#[error("bot_pronouns is not a canonical set: {0}")]
	BotPronouns(#[from] SetParseError),
}
