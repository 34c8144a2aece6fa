//! The two user-facing commands: saving one's pronouns and showing someone's.
//!
//! Both return a [`Reply`]; how it reaches the user (chat message, terminal
//! output) is up to the host.

use std::fmt;

use crate::config::EngineConfig;
use crate::label::{examples_link, label_for};
use crate::matcher::MatchResult;
use crate::registry::Registry;
use crate::set::PronounSet;
use crate::store::PronounStore;


/// Text of a command's answer. Rendered through [`fmt::Display`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Reply {
	/// `set` was called without any pronouns.
	AskPronouns,
	/// Partial input matched nothing in the registry.
	UnknownPronouns,
	/// The set was saved. Non-empty `alternatives` are offered back.
	Saved {
		set: PronounSet,
		alternatives: Vec<PronounSet>,
	},
	Pronouns {
		user: String,
		set: PronounSet,
		link: String,
	},
	/// The requester has nothing saved.
	UnknownSelf { help_prefix: String },
	/// Someone else has nothing saved.
	UnknownUser { user: String, help_prefix: String },
	/// Someone asked for the host's own pronouns.
	Bot { set: PronounSet, link: String },
}

impl fmt::Display for Reply {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Reply::AskPronouns => f.write_str("What pronouns do you use?"),
			Reply::UnknownPronouns => f.write_str(
				"I'm sorry, I don't know those pronouns. You can give me a set I don't know \
				 by formatting it subject/object/possessive-determiner/possessive-pronoun/reflexive, \
				 as in: they/them/their/theirs/themselves",
			),
			Reply::Saved { set, alternatives } => {
				write!(f, "Thanks for telling me! I'll remember you use {set}.")?;
				if !alternatives.is_empty() {
					f.write_str(" Or, if you meant one of these, please tell me: ")?;
					for (i, alt) in alternatives.iter().enumerate() {
						if i > 0 {
							f.write_str(", ")?;
						}
						write!(f, "{alt}")?;
					}
				}
				Ok(())
			}
			Reply::Pronouns { user, set, link } => {
				write!(f, "{user}'s pronouns are {set}. See {link} for examples.")
			}
			Reply::UnknownSelf { help_prefix } => write!(
				f,
				"I don't know your pronouns! You can set them with {help_prefix}setpronouns"
			),
			Reply::UnknownUser { user, help_prefix } => write!(
				f,
				"I don't know {user}'s pronouns. They can set them with {help_prefix}setpronouns"
			),
			Reply::Bot { set, link } => write!(
				f,
				"I am a bot. Beep boop. My pronouns are {set}. See {link} for examples."
			),
		}
	}
}

/// Resolves `text` and saves the accepted set for `user`.
///
/// Surrounding whitespace is dropped before resolving; nothing is saved when
/// the input is blank or matches nothing.
pub fn set_pronouns<S>(store: &S, user: &str, text: &str, registry: &Registry) -> Reply
where
	S: PronounStore + ?Sized,
{
	let text = text.trim();
	if text.is_empty() {
		return Reply::AskPronouns;
	}

	let (set, alternatives) = match registry.resolve(text) {
		MatchResult::NoMatch => return Reply::UnknownPronouns,
		MatchResult::Unique(set) => (set, Vec::new()),
		MatchResult::Ambiguous {
			primary,
			alternatives,
		} => (primary, alternatives),
	};

	tracing::debug!(user, set = %set, alternatives = alternatives.len(), "saving pronouns");
	store.set(user, set.clone());
	Reply::Saved { set, alternatives }
}

/// Shows the saved pronouns of `target`, or of `requester` when no target is given.
pub fn show_pronouns<S>(
	store: &S,
	requester: &str,
	target: Option<&str>,
	registry: &Registry,
	config: &EngineConfig,
) -> Reply
where
	S: PronounStore + ?Sized,
{
	let user = target.unwrap_or(requester);
	if let Some(set) = store.get(user) {
		let link = examples_link(&config.examples_url, label_for(registry, set.as_str()));
		return Reply::Pronouns {
			user: user.to_owned(),
			set,
			link,
		};
	}

	match target {
		None => Reply::UnknownSelf {
			help_prefix: config.help_prefix.clone(),
		},
		Some(target) if target.eq_ignore_ascii_case(&config.bot_nick) => {
			let set = config.bot_pronouns.clone();
			let link = examples_link(&config.examples_url, label_for(registry, set.as_str()));
			Reply::Bot { set, link }
		}
		Some(target) => Reply::UnknownUser {
			user: target.to_owned(),
			help_prefix: config.help_prefix.clone(),
		},
	}
}
