//! TOML-backed user store.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::Context;
use pronouns_engine::{MemoryStore, PronounSet, PronounStore};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreFile {
	#[serde(default)]
	users: BTreeMap<String, PronounSet>,
}

/// [`MemoryStore`] loaded from, and saved back to, a TOML file.
pub struct FileStore {
	path: PathBuf,
	inner: MemoryStore,
}

impl FileStore {
	/// Opens `path`, starting empty if it does not exist yet.
	pub fn open(path: &Path) -> anyhow::Result<Self> {
		let file = if path.exists() {
			let content = std::fs::read_to_string(path)
				.with_context(|| format!("failed to read store {}", path.display()))?;
			toml::from_str::<StoreFile>(&content)
				.with_context(|| format!("invalid store {}", path.display()))?
		} else {
			StoreFile::default()
		};
		tracing::debug!(path = %path.display(), users = file.users.len(), "opened pronoun store");
		Ok(Self {
			path: path.to_path_buf(),
			inner: MemoryStore::from_entries(file.users),
		})
	}

	pub fn save(&self) -> anyhow::Result<()> {
		let file = StoreFile {
			users: self.inner.entries().into_iter().collect(),
		};
		let content = toml::to_string(&file).context("failed to serialize store")?;
		std::fs::write(&self.path, content)
			.with_context(|| format!("failed to write store {}", self.path.display()))
	}
}

impl PronounStore for FileStore {
	fn get(&self, user: &str) -> Option<PronounSet> {
		self.inner.get(user)
	}

	fn set(&self, user: &str, set: PronounSet) {
		self.inner.set(user, set);
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn test_round_trip_through_file() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("store.toml");

		let store = FileStore::open(&path).unwrap();
		assert_eq!(store.get("alex"), None);
		store.set("alex", PronounSet::verbatim("she/her/her/hers/herself"));
		store.save().unwrap();

		let reopened = FileStore::open(&path).unwrap();
		assert_eq!(
			reopened.get("alex"),
			Some(PronounSet::verbatim("she/her/her/hers/herself"))
		);
	}

	#[test]
	fn test_saved_nick_reopens_in_any_case() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("store.toml");

		let store = FileStore::open(&path).unwrap();
		store.set("Alex", PronounSet::verbatim("ey/em/eir/eirs/eirself"));
		store.save().unwrap();

		let reopened = FileStore::open(&path).unwrap();
		assert_eq!(
			reopened.get("ALEX"),
			Some(PronounSet::verbatim("ey/em/eir/eirs/eirself"))
		);
	}

	#[test]
	fn test_rejects_garbage() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("store.toml");
		std::fs::write(&path, "users = 3").unwrap();
		assert!(FileStore::open(&path).is_err());
	}
}
