//! Pronoun resolution engine.
//!
//! Users describe their pronouns loosely: `she/her`, `they/.../themself`,
//! `they/them/theirs`, or a full `fae/faer/faer/faers/faerself`. This crate
//! turns such input into a full five-slot [`PronounSet`] by matching it
//! against a [`Registry`] of known sets, and goes the other way with
//! [`label_for`] to find a short label for display.
//!
//! The registry starts from a built-in table and can be replaced wholesale
//! from a fetched `pronouns.tab` through [`SharedRegistry::refresh`]. Fetching
//! and persistence are left to the host; [`PronounStore`] is the seam for the
//! latter.
//!
//! ```
//! use pronouns_engine::{MatchResult, Registry};
//!
//! let registry = Registry::defaults();
//! assert_eq!(
//! 	registry.resolve("she/her").accepted().map(|s| s.as_str()),
//! 	Some("she/her/her/hers/herself"),
//! );
//! assert_eq!(registry.resolve("bleep/bloop"), MatchResult::NoMatch);
//! assert_eq!(registry.label_for("xey/xem/xyr/xyrs/xemself"), "xey/xem");
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod label;
pub mod loader;
pub mod matcher;
pub mod registry;
pub mod set;
pub mod store;

pub use commands::{Reply, set_pronouns, show_pronouns};
pub use config::EngineConfig;
pub use error::{ConfigError, LoadError, SetParseError};
pub use label::{examples_link, label_for};
pub use matcher::{MatchResult, resolve};
pub use registry::{Registry, SharedRegistry};
pub use set::{PronounSet, Slot};
pub use store::{MemoryStore, PronounStore};

