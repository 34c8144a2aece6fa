//! Display labels for pronoun sets.

use crate::registry::Registry;


/// Default base for "see examples" links.
pub const DEFAULT_EXAMPLES_URL: &str = "https://pronoun.is/";

/// Returns the label of the first registry entry whose set equals `set`.
///
/// Sets that are not in the registry (typically ones a user typed out in
/// full) are their own label.
pub fn label_for<'a>(registry: &'a Registry, set: &'a str) -> &'a str {
	registry
		.iter()
		.find(|(_, known)| known.as_str() == set)
		.map_or(set, |(label, _)| label)
}

/// Builds the examples link for `label` under `base_url`.
pub fn examples_link(base_url: &str, label: &str) -> String {
	format!("{}/{label}", base_url.trim_end_matches('/'))
}
