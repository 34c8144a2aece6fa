//! Command-line host for the pronoun resolution engine.
//!
//! Stands in for the pieces the engine leaves to its host: the table fetch is
//! a file read, persistence is a TOML file, and replies go to stdout.

mod cli;
mod store;

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use pronouns_engine::{
	EngineConfig, MatchResult, MemoryStore, PronounStore, Registry, Reply, SharedRegistry,
	label_for, set_pronouns, show_pronouns,
};

use crate::cli::{Cli, Command};
use crate::store::FileStore;

fn main() -> anyhow::Result<ExitCode> {
	let cli = Cli::parse();

	let subscriber = tracing_subscriber::fmt()
		.with_max_level(if cli.verbose {
			tracing::Level::DEBUG
		} else {
			tracing::Level::WARN
		})
		.with_writer(std::io::stderr)
		.finish();
	tracing::subscriber::set_global_default(subscriber)?;

	let config = match &cli.config {
		Some(path) => EngineConfig::load(path)?,
		None => EngineConfig::default(),
	};

	let registry = load_registry(cli.table.as_deref()).load();

	match cli.command {
		Command::Resolve { input } => {
			let result = registry.resolve(&input);
			if let MatchResult::NoMatch = result {
				eprintln!("{}", Reply::UnknownPronouns);
				return Ok(ExitCode::FAILURE);
			}
			for (i, set) in result.matches().enumerate() {
				if i == 0 {
					println!("{set}");
				} else {
					println!("  or {set}");
				}
			}
			Ok(ExitCode::SUCCESS)
		}
		Command::Label { set } => {
			println!("{}", label_for(&registry, &set));
			Ok(ExitCode::SUCCESS)
		}
		Command::List => {
			for (label, set) in registry.iter() {
				println!("{label}\t{set}");
			}
			Ok(ExitCode::SUCCESS)
		}
		Command::Set { user, pronouns } => {
			let path = require_store(cli.store.as_deref())?;
			let reply = save_pronouns(path, &user, pronouns.as_deref().unwrap_or_default(), &registry)?;
			println!("{reply}");
			Ok(exit_code(&reply))
		}
		Command::Show { target, requester } => {
			let store: Box<dyn PronounStore> = match &cli.store {
				Some(path) => Box::new(FileStore::open(path)?),
				None => Box::new(MemoryStore::new()),
			};
			let reply = show_pronouns(&*store, &requester, target.as_deref(), &registry, &config);
			println!("{reply}");
			Ok(exit_code(&reply))
		}
	}
}

/// Starts from the built-in sets and refreshes from `table` when given.
fn load_registry(table: Option<&Path>) -> SharedRegistry {
	let registry = SharedRegistry::with_defaults();
	let Some(path) = table else {
		return registry;
	};
	match registry.refresh(std::fs::read_to_string(path)) {
		Ok(count) => tracing::info!(path = %path.display(), count, "loaded pronoun table"),
		Err(_) => tracing::warn!(
			path = %path.display(),
			count = registry.len(),
			"pronoun table unusable; using built-in sets"
		),
	}
	registry
}

/// `set` only makes sense with somewhere to remember the answer.
fn require_store(store: Option<&Path>) -> anyhow::Result<&Path> {
	store.ok_or_else(|| anyhow::anyhow!("`set` needs --store <PATH> to remember pronouns"))
}

/// Resolves `text` for `user` and writes the store back if anything was saved.
fn save_pronouns(path: &Path, user: &str, text: &str, registry: &Registry) -> anyhow::Result<Reply> {
	let store = FileStore::open(path)?;
	let reply = set_pronouns(&store, user, text, registry);
	if matches!(reply, Reply::Saved { .. }) {
		store.save()?;
	}
	Ok(reply)
}

fn exit_code(reply: &Reply) -> ExitCode {
	match reply {
		Reply::AskPronouns | Reply::UnknownPronouns => ExitCode::FAILURE,
		_ => ExitCode::SUCCESS,
	}
}
