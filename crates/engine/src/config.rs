//! Engine configuration.
//!
//! Every field has a default, so an empty file is a valid configuration:
//!
//! ```toml
//! source_url = "https://github.com/witch-house/pronoun.is/raw/master/resources/pronouns.tab"
//! examples_url = "https://pronoun.is/"
//! help_prefix = "."
//! bot_nick = "pronounbot"
//! bot_pronouns = "it/it/its/its/itself"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::label::DEFAULT_EXAMPLES_URL;
use crate::loader::DEFAULT_SOURCE_URL;
use crate::set::PronounSet;


#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
	/// Location of the tab-separated table a host may fetch for refreshes.
	pub source_url: String,
	/// Base of the "see examples" links shown next to a user's pronouns.
	pub examples_url: String,
	/// Prefix shown in hints that name the commands, e.g. `.setpronouns`.
	pub help_prefix: String,
	/// Name the host answers to; asking for its pronouns gets `bot_pronouns`.
	pub bot_nick: String,
	pub bot_pronouns: PronounSet,
}

impl Default for EngineConfig {
	fn default() -> Self {
		Self {
			source_url: DEFAULT_SOURCE_URL.to_owned(),
			examples_url: DEFAULT_EXAMPLES_URL.to_owned(),
			help_prefix: ".".to_owned(),
			bot_nick: "pronounbot".to_owned(),
			bot_pronouns: PronounSet::verbatim("it/it/its/its/itself"),
		}
	}
}

impl EngineConfig {
	pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
		let config: Self = toml::from_str(content)?;
		config.bot_pronouns.as_str().parse::<PronounSet>()?;
		Ok(config)
	}

	pub fn load(path: &Path) -> Result<Self, ConfigError> {
		let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
			path: path.to_path_buf(),
			source,
		})?;
		Self::from_toml_str(&content)
	}
}
