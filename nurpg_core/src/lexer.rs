use logos::Logos;

use crate::NurpgError;
use crate::NurpgResult;
use crate::tokens::DIRECTIVE_END;
use crate::tokens::ESCAPE;
use crate::tokens::Token;

/// Raw tokens produced by logos. The walker decides what each of them means
/// depending on the scanner state.
#[derive(Logos, Debug, PartialEq)]
enum RawToken {
	#[token("@")]
	DirectiveStart,
	#[token("\n")]
	DirectiveEnd,
	/// A backslash and the character it escapes.
	#[regex(r"\\(.|\n)")]
	Escaped,
	#[regex(r"[^@\n\\]+")]
	Text,
}

/// States of the character scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
	/// Nothing has been read yet.
	Start,
	/// Accumulating free text.
	Content,
	/// Accumulating a directive name and its arguments.
	Directive,
	/// Input is exhausted or an error was reported.
	Done,
}

/// Lazily scans document text into [`Token`]s.
///
/// The iterator yields `Err(NurpgError::UnterminatedDirective)` once if the
/// input ends inside a directive, and is fused afterwards.
pub struct Tokenizer<'a> {
	raw: logos::Lexer<'a, RawToken>,
	state: ScanState,
	buffer: String,
}

impl<'a> Tokenizer<'a> {
	pub fn new(source: &'a str) -> Self {
		Self {
			raw: RawToken::lexer(source),
			state: ScanState::Start,
			buffer: String::new(),
		}
	}

	fn flush_content(&mut self) -> Option<Token> {
		let token = Token::content(&self.buffer);
		self.buffer.clear();
		token
	}

	fn flush_directive(&mut self) -> Token {
		let token = Token::directive(&self.buffer);
		self.buffer.clear();
		token
	}

	/// Process one raw token while accumulating free text.
	fn step_content(&mut self, raw: Result<RawToken, ()>, slice: &str) -> Option<Token> {
		match raw {
			Ok(RawToken::DirectiveStart) => {
				self.state = ScanState::Directive;
				self.flush_content()
			}
			Ok(RawToken::Escaped) => {
				self.buffer.push_str(&slice[ESCAPE.len_utf8()..]);
				None
			}
			Ok(RawToken::DirectiveEnd | RawToken::Text) => {
				self.buffer.push_str(slice);
				None
			}
			// A lone escape at the very end of the input escapes nothing.
			Err(()) => None,
		}
	}

	/// Process one raw token while accumulating a directive. Escapes carry no
	/// meaning here, so the backslash is kept and the escaped character is
	/// handled on its own.
	fn step_directive(&mut self, raw: Result<RawToken, ()>, slice: &str) -> Option<Token> {
		match raw {
			Ok(RawToken::DirectiveEnd) => {
				self.state = ScanState::Content;
				Some(self.flush_directive())
			}
			Ok(RawToken::Escaped) => {
				let escaped = &slice[ESCAPE.len_utf8()..];
				self.buffer.push(ESCAPE);

				if escaped.starts_with(DIRECTIVE_END) {
					self.state = ScanState::Content;
					Some(self.flush_directive())
				} else {
					self.buffer.push_str(escaped);
					None
				}
			}
			Ok(RawToken::DirectiveStart | RawToken::Text) | Err(()) => {
				self.buffer.push_str(slice);
				None
			}
		}
	}

	/// Handle the end of the input.
	fn finish(&mut self) -> Option<NurpgResult<Token>> {
		let state = std::mem::replace(&mut self.state, ScanState::Done);

		match state {
			ScanState::Directive => {
				tracing::debug!(buffer = %self.buffer, "input ended inside a directive");
				Some(Err(NurpgError::UnterminatedDirective))
			}
			ScanState::Start | ScanState::Content => self.flush_content().map(Ok),
			ScanState::Done => None,
		}
	}
}

impl Iterator for Tokenizer<'_> {
	type Item = NurpgResult<Token>;

	fn next(&mut self) -> Option<Self::Item> {
		loop {
			if self.state == ScanState::Done {
				return None;
			}

			let Some(raw) = self.raw.next() else {
				return self.finish();
			};

			if self.state == ScanState::Start {
				self.state = ScanState::Content;
			}

			let slice = self.raw.slice();
			let token = match self.state {
				ScanState::Directive => self.step_directive(raw, slice),
				_ => self.step_content(raw, slice),
			};

			if let Some(token) = token {
				return Some(Ok(token));
			}
		}
	}
}

impl std::iter::FusedIterator for Tokenizer<'_> {}

/// Tokenize a whole document.
pub fn tokenize(source: &str) -> Tokenizer<'_> {
	Tokenizer::new(source)
}
