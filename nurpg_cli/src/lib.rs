use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;
use nurpg_core::NodeKind;

#[derive(Parser)]
#[command(
	name = "nurpgd",
	author,
	version,
	about = "NuRPG Document Manager",
	long_about = "nurpgd manages a NuRPG rule-book document: it validates the document, looks up \
	              nodes by kind and keeps a stash of drafts.\n\nQuick start:\n  nurpgd init \
	              rules.nrpg  Track a document in this directory\n  nurpgd status           \
	              Check that the document parses\n  nurpgd find section     List every section"
)]
pub struct NurpgCli {
	#[command(subcommand)]
	pub command: Option<Commands>,

	/// Path to the project root directory.
	#[arg(long, short, global = true)]
	pub path: Option<PathBuf>,

	/// Enables debug output and code paths.
	#[arg(long, short = 'D', global = true, default_value_t = false)]
	pub debug: bool,

	/// Sets the logging output to quiet. This supersedes `--debug`.
	#[arg(long, short, global = true, default_value_t = false)]
	pub quiet: bool,

	/// Disable colored output.
	#[arg(long, global = true, default_value_t = false)]
	pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
	/// Initialize a document context for this directory.
	///
	/// Writes `.nds/config` pointing at the given document and creates the
	/// stash directory. Refuses to overwrite an existing configuration.
	Init {
		/// Name of the NuRPG document file.
		document: PathBuf,
	},
	/// Read the document file and check its validity.
	///
	/// Prints the title, authors and node count of a valid document. Exits
	/// with status 2 when the document fails to parse.
	Status,
	/// Look up nodes of a given kind.
	///
	/// Prints every matching node as a directive line, in document order.
	/// Exits with status 100 when nothing matches.
	Find {
		/// The desired document node kind, e.g. `section` or `cost`.
		#[arg(value_parser = parse_kind)]
		kind: NodeKind,

		/// Only match nodes whose content is exactly this text.
		#[arg(long, short)]
		content: Option<String>,
	},
	/// Rewrite the document in canonical directive form.
	Fmt,
	/// Save and restore document drafts.
	Stash {
		#[command(subcommand)]
		command: StashCommands,
	},
}

#[derive(Subcommand)]
pub enum StashCommands {
	/// Copy a draft into the stash.
	Push {
		/// The draft document to stash.
		file: PathBuf,
	},
	/// Remove the most recent draft from the stash and print its path.
	Pop,
}

/// Parse a node kind argument. Matching ignores case.
pub fn parse_kind(value: &str) -> Result<NodeKind, String> {
	value
		.to_lowercase()
		.parse::<NodeKind>()
		.map_err(|error| error.to_string())
}

/// The log filter directive for the given verbosity flags. `quiet` wins over
/// `debug`.
pub fn log_level(debug: bool, quiet: bool) -> &'static str {
	if quiet {
		"error"
	} else if debug {
		"debug"
	} else {
		"warn"
	}
}
