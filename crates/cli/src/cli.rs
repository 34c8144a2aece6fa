use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "pronouns")]
#[command(about = "Resolve abbreviated pronouns into full five-slot sets")]
#[command(version)]
pub struct Cli {
	/// Tab-separated pronoun table to load instead of the built-in sets
	#[arg(long, value_name = "PATH", global = true)]
	pub table: Option<PathBuf>,

	/// TOML file holding saved user pronouns
	#[arg(long, value_name = "PATH", global = true)]
	pub store: Option<PathBuf>,

	/// Engine configuration file
	#[arg(short, long, value_name = "PATH", global = true)]
	pub config: Option<PathBuf>,

	/// Verbose logging
	#[arg(short, long, global = true)]
	pub verbose: bool,

	#[command(subcommand)]
	pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
	/// Resolve pronoun input such as `they/them` or `they/.../themself`
	Resolve { input: String },
	/// Print the short label of a full set
	Label { set: String },
	/// List every known set with its label
	List,
	/// Save pronouns for a user
	Set { user: String, pronouns: Option<String> },
	/// Show saved pronouns
	Show {
		/// User to look up (defaults to the requester)
		target: Option<String>,
		/// Who is asking
		#[arg(long = "as", value_name = "USER", default_value = "me")]
		requester: String,
	},
}
