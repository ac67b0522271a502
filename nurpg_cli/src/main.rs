use std::path::Path;
use std::path::PathBuf;
use std::process;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;

use clap::Parser;
use nurpg_cli::Commands;
use nurpg_cli::NurpgCli;
use nurpg_cli::StashCommands;
use nurpg_cli::log_level;
use nurpg_core::EXIT_GENERAL_FAILURE;
use nurpg_core::NodeKind;
use nurpg_core::NurpgError;
use nurpg_core::config::NdsConfig;
use nurpg_core::document;
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;

static USE_COLOR: AtomicBool = AtomicBool::new(true);

fn color_enabled() -> bool {
	USE_COLOR.load(Ordering::Relaxed)
}

/// Color `text` when output coloring is on.
macro_rules! colored {
	($text:expr,red) => {
		if color_enabled() {
			format!("{}", $text.red())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,green) => {
		if color_enabled() {
			format!("{}", $text.green())
		} else {
			format!("{}", $text)
		}
	};
}

fn main() {
	let args = NurpgCli::parse();

	let use_color = !args.no_color && std::env::var_os("NO_COLOR").is_none();
	USE_COLOR.store(use_color, Ordering::Relaxed);

	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	init_tracing(&args, use_color);

	let result = match &args.command {
		Some(Commands::Init { document }) => run_init(&args, document),
		Some(Commands::Status) => run_status(&args),
		Some(Commands::Find { kind, content }) => run_find(&args, *kind, content.as_deref()),
		Some(Commands::Fmt) => run_fmt(&args),
		Some(Commands::Stash { command }) => {
			match command {
				StashCommands::Push { file } => run_stash_push(&args, file),
				StashCommands::Pop => run_stash_pop(&args),
			}
		}
		None => {
			eprintln!("No subcommand specified. Run `nurpgd --help` for usage.");
			process::exit(EXIT_GENERAL_FAILURE);
		}
	};

	if let Err(error) = result {
		process::exit(report_error(error));
	}
}

/// Print a failed command's error and return the exit status for it. Crate
/// errors go through miette; a document that failed to parse is called out
/// before the report.
fn report_error(error: Box<dyn std::error::Error>) -> i32 {
	let error = match error.downcast::<NurpgError>() {
		Ok(error) => *error,
		Err(other) => {
			eprintln!("{} {other}", colored!("error:", red));
			return EXIT_GENERAL_FAILURE;
		}
	};

	if error.is_parse_error() {
		eprintln!("{}", colored!("Document is invalid!", red));
	}

	let code = error.exit_code();
	eprintln!("{:?}", miette::Report::new(error));

	code
}

/// Log to stderr. `RUST_LOG` takes precedence over the verbosity flags.
fn init_tracing(args: &NurpgCli, use_color: bool) {
	let filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new(log_level(args.debug, args.quiet)));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_ansi(use_color)
		.with_target(false)
		.try_init()
		.ok();
}

fn resolve_root(args: &NurpgCli) -> PathBuf {
	args.path
		.clone()
		.unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

/// Load the configuration and the document it points at.
fn load_document(
	root: &Path,
) -> Result<(PathBuf, nurpg_core::Document), Box<dyn std::error::Error>> {
	let config = NdsConfig::load(root)?;
	let path = config.document_path(root);
	let document = document::read(&path)?;

	Ok((path, document))
}

fn run_init(args: &NurpgCli, document: &Path) -> Result<(), Box<dyn std::error::Error>> {
	let root = resolve_root(args);

	println!("Writing document configuration.");
	NdsConfig::init(&root, document)?;
	println!("Initialization OK.");

	Ok(())
}

fn run_status(args: &NurpgCli) -> Result<(), Box<dyn std::error::Error>> {
	let root = resolve_root(args);
	let (_, document) = load_document(&root)?;

	println!("{}", colored!("Document is valid!", green));
	println!(
		"Document title: {}",
		document.title().unwrap_or("(untitled)")
	);
	if !document.authors().is_empty() {
		println!("Document authors: {}", document.authors().join(", "));
	}
	println!("Document sections: {}", document.sections().count());
	println!("Document length: {} nodes", document.len());

	Ok(())
}

fn run_find(
	args: &NurpgCli,
	kind: NodeKind,
	content: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
	let root = resolve_root(args);
	let (_, document) = load_document(&root)?;
	let nodes: Vec<_> = document.find(kind, content).collect();

	if nodes.is_empty() {
		return Err(NurpgError::NodeNotFound {
			kind: kind.to_string(),
		}
		.into());
	}

	tracing::debug!(matches = nodes.len(), %kind, "found nodes");
	for node in nodes {
		print!("{node}");
	}

	Ok(())
}

fn run_fmt(args: &NurpgCli) -> Result<(), Box<dyn std::error::Error>> {
	let root = resolve_root(args);
	let (path, document) = load_document(&root)?;

	document::write(&document, &path)?;
	println!("Formatted {}", path.display());

	Ok(())
}

fn run_stash_push(args: &NurpgCli, file: &Path) -> Result<(), Box<dyn std::error::Error>> {
	let root = resolve_root(args);
	let mut config = NdsConfig::load(&root)?;

	if !file.is_file() {
		return Err(NurpgError::DocumentNotFound {
			path: file.display().to_string(),
		}
		.into());
	}

	let stash_id = config.stash_push(&root, file)?;
	println!("Stashed: {stash_id}");

	Ok(())
}

fn run_stash_pop(args: &NurpgCli) -> Result<(), Box<dyn std::error::Error>> {
	let root = resolve_root(args);
	let mut config = NdsConfig::load(&root)?;

	match config.stash_pop(&root)? {
		Some(path) => println!("Popped stash: {}", path.display()),
		None => println!("Stash is empty."),
	}

	Ok(())
}
