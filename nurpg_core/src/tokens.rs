use std::fmt::Display;

/// Directive statement start character.
pub const DIRECTIVE_START: char = '@';
/// Directive statement end character.
pub const DIRECTIVE_END: char = '\n';
/// Escape character for literal `@` in content runs.
pub const ESCAPE: char = '\\';

/// A flat token produced by the tokenizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
	/// A run of free text between directives, trimmed of surrounding
	/// whitespace. Never empty.
	Content(String),
	/// `@name arguments\n`. `arguments` is empty when the directive has none.
	Directive { name: String, arguments: String },
}

impl Token {
	/// Build a directive token from the text between `@` and the newline,
	/// splitting on the first space.
	pub fn directive(body: &str) -> Self {
		let (name, arguments) = body.split_once(' ').unwrap_or((body, ""));

		Token::Directive {
			name: name.to_string(),
			arguments: arguments.to_string(),
		}
	}

	/// Build a content token from an accumulated buffer. Returns `None` when
	/// the buffer holds nothing but whitespace.
	pub fn content(buffer: &str) -> Option<Self> {
		let trimmed = buffer.trim();

		if trimmed.is_empty() {
			None
		} else {
			Some(Token::Content(trimmed.to_string()))
		}
	}
}

impl Display for Token {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Token::Content(content) => write!(f, "{content}"),
			Token::Directive { name, arguments } if arguments.is_empty() => {
				write!(f, "{DIRECTIVE_START}{name}{DIRECTIVE_END}")
			}
			Token::Directive { name, arguments } => {
				write!(f, "{DIRECTIVE_START}{name} {arguments}{DIRECTIVE_END}")
			}
		}
	}
}
