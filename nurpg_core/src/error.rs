use miette::Diagnostic;
use thiserror::Error;

/// Process status: success.
pub const EXIT_OK: i32 = 0;
/// Process status: an error that doesn't fall into any other category.
pub const EXIT_GENERAL_FAILURE: i32 = 1;
/// Process status: the document could not be read or parsed.
pub const EXIT_BAD_DOCUMENT: i32 = 2;
/// Process status: the `.nds` configuration is missing or invalid.
pub const EXIT_CONFIGURATION_ERROR: i32 = 10;
/// Process status: a query matched nothing.
pub const EXIT_NODE_NOT_FOUND: i32 = 100;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum NurpgError {
	#[error(transparent)]
	#[diagnostic(code(nurpg::io_error))]
	Io(#[from] std::io::Error),

	#[error("directive was opened but never terminated")]
	#[diagnostic(
		code(nurpg::unterminated_directive),
		help("every `@directive` line must end with a newline")
	)]
	UnterminatedDirective,

	#[error("unknown directive: `{0}`")]
	#[diagnostic(
		code(nurpg::unknown_directive),
		help(
			"available directives: root, title, difficulty, grants, author, date, content, \
			 mechanic, note, effect, requires, cost, ability, section, feature, ref, aspect, halt"
		)
	)]
	UnknownDirective(String),

	#[error("document has two title nodes")]
	#[diagnostic(
		code(nurpg::duplicate_title),
		help("a document may declare `@title` only once")
	)]
	DuplicateTitle,

	#[error("`@{kind}` must appear inside a `@section`")]
	#[diagnostic(
		code(nurpg::misplaced_node),
		help("add a `@section` directive before this `@{kind}`")
	)]
	MisplacedNode { kind: String },

	#[error("file {path} not found")]
	#[diagnostic(code(nurpg::document_not_found))]
	DocumentNotFound { path: String },

	#[error("file `{path}` is too large to read: {size} bytes (limit: {limit} bytes)")]
	#[diagnostic(
		code(nurpg::document_too_large),
		help("the maximum supported document size is 16 MB")
	)]
	DocumentTooLarge { path: String, size: u64, limit: u64 },

	#[error("a valid NDS configuration was not found")]
	#[diagnostic(code(nurpg::config_not_found), help("run `nurpgd init <document>` first"))]
	ConfigNotFound,

	#[error("cowardly refusing to reinit over a pre-existing NDS configuration")]
	#[diagnostic(code(nurpg::config_exists), help("remove `.nds/config` to start over"))]
	ConfigExists,

	#[error("failed to parse config file: {0}")]
	#[diagnostic(
		code(nurpg::config_parse),
		help("check that `.nds/config` is valid JSON with `document_file`, `stash_dir` and `stash_stack`")
	)]
	ConfigParse(String),

	#[error("formatting would change the document in `{path}`")]
	#[diagnostic(
		code(nurpg::unstable_format),
		help(
			"consecutive blocks of multi-line text can't be kept apart; separate them with a \
			 directive"
		)
	)]
	UnstableFormat { path: String },

	#[error("no `{kind}` nodes found")]
	#[diagnostic(code(nurpg::node_not_found))]
	NodeNotFound { kind: String },
}

impl NurpgError {
	/// The process status reported when this error ends a command.
	pub fn exit_code(&self) -> i32 {
		match self {
			Self::UnterminatedDirective
			| Self::UnknownDirective(_)
			| Self::DuplicateTitle
			| Self::MisplacedNode { .. }
			| Self::DocumentNotFound { .. }
			| Self::DocumentTooLarge { .. }
			| Self::UnstableFormat { .. } => EXIT_BAD_DOCUMENT,
			Self::ConfigNotFound | Self::ConfigExists | Self::ConfigParse(_) => {
				EXIT_CONFIGURATION_ERROR
			}
			Self::NodeNotFound { .. } => EXIT_NODE_NOT_FOUND,
			Self::Io(_) => EXIT_GENERAL_FAILURE,
		}
	}

	/// Whether the error came from the document text itself rather than the
	/// file system or configuration around it.
	pub fn is_parse_error(&self) -> bool {
		matches!(
			self,
			Self::UnterminatedDirective
				| Self::UnknownDirective(_)
				| Self::DuplicateTitle
				| Self::MisplacedNode { .. }
		)
	}
}

pub type NurpgResult<T> = Result<T, NurpgError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;
