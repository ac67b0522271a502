use crate::Document;
use crate::NodeIndex;
use crate::NodeKind;
use crate::NurpgError;
use crate::NurpgResult;
use crate::lexer::tokenize;
use crate::tokens::Token;

/// A node produced by the directive interpreter, not yet linked into a tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedNode {
	pub kind: NodeKind,
	pub content: String,
}

/// Parse document text into a [`Document`].
///
/// The first error aborts the parse; no partial tree is returned.
pub fn parse(content: impl AsRef<str>) -> NurpgResult<Document> {
	let content = content.as_ref();
	let mut builder = DocumentBuilder::new();

	for node in interpret(tokenize(content)) {
		builder.push(node?)?;
	}

	let document = builder.finish();
	tracing::info!(nodes = document.len(), "parsed document");

	Ok(document)
}

/// Turns a token stream into [`ParsedNode`]s, stopping at `@halt`.
pub struct Directives<I> {
	tokens: I,
	done: bool,
}

/// Interpret a token stream lazily.
pub fn interpret<I>(tokens: I) -> Directives<I::IntoIter>
where
	I: IntoIterator<Item = NurpgResult<Token>>,
{
	Directives {
		tokens: tokens.into_iter(),
		done: false,
	}
}

impl<I> Iterator for Directives<I>
where
	I: Iterator<Item = NurpgResult<Token>>,
{
	type Item = NurpgResult<ParsedNode>;

	fn next(&mut self) -> Option<Self::Item> {
		if self.done {
			return None;
		}

		let token = match self.tokens.next()? {
			Ok(token) => token,
			Err(error) => {
				self.done = true;
				return Some(Err(error));
			}
		};

		let node = match token {
			Token::Content(content) => {
				ParsedNode {
					kind: NodeKind::Content,
					content,
				}
			}
			Token::Directive { name, arguments } => {
				match NodeKind::from_word(&name) {
					Some(NodeKind::Halt) => {
						tracing::debug!("halt directive reached, ignoring the rest of the input");
						self.done = true;
						return None;
					}
					Some(kind) => {
						ParsedNode {
							kind,
							content: arguments,
						}
					}
					None => {
						self.done = true;
						return Some(Err(NurpgError::UnknownDirective(name)));
					}
				}
			}
		};

		Some(Ok(node))
	}
}

impl<I> std::iter::FusedIterator for Directives<I> where I: Iterator<Item = NurpgResult<Token>> {}

/// Builds a [`Document`] one node at a time.
///
/// `current` is where leaves are attached; `stack` holds the ancestors that
/// were left to reach it. Entering a container from the root pushes the root,
/// so it sits at the bottom of the stack and popping always ends there.
struct DocumentBuilder {
	document: Document,
	current: NodeIndex,
	stack: Vec<NodeIndex>,
}

impl DocumentBuilder {
	fn new() -> Self {
		Self {
			document: Document::new(),
			current: NodeIndex::ROOT,
			stack: vec![],
		}
	}

	fn current_kind(&self) -> NodeKind {
		self.document[self.current].kind()
	}

	fn push(&mut self, node: ParsedNode) -> NurpgResult<()> {
		let ParsedNode { kind, content } = node;

		match kind {
			NodeKind::Section => {
				self.exit_to_root();
				self.enter(kind, content);
			}
			kind if kind.requires_section() => {
				if !self.exit_to(NodeKind::Section) {
					return Err(NurpgError::MisplacedNode {
						kind: kind.to_string(),
					});
				}
				self.enter(kind, content);
			}
			NodeKind::Mechanic => {
				// A mechanic directly after another is its sibling.
				self.exit_if(NodeKind::Mechanic);
				self.enter(kind, content);
			}
			NodeKind::Author => {
				self.document.append(NodeIndex::ROOT, kind, content.as_str());
				self.document.push_author(content);
			}
			NodeKind::Title => {
				if self.document.title().is_some() {
					return Err(NurpgError::DuplicateTitle);
				}
				self.document.append(NodeIndex::ROOT, kind, content.as_str());
				self.document.set_title(content);
			}
			_ => {
				self.document.append(self.current, kind, content);
			}
		}

		Ok(())
	}

	/// Append under `current` and make the new node `current`.
	fn enter(&mut self, kind: NodeKind, content: String) {
		let index = self.document.append(self.current, kind, content);
		self.stack.push(self.current);
		self.current = index;
	}

	/// Move `current` back to its enclosing container. Returns `false` at the
	/// root.
	fn exit(&mut self) -> bool {
		match self.stack.pop() {
			Some(parent) => {
				self.current = parent;
				true
			}
			None => false,
		}
	}

	fn exit_if(&mut self, kind: NodeKind) {
		if self.current_kind() == kind {
			self.exit();
		}
	}

	/// Pop until `current` has the given kind. Returns `false` if the root
	/// was reached without finding it.
	fn exit_to(&mut self, kind: NodeKind) -> bool {
		while self.current_kind() != kind {
			if !self.exit() {
				return false;
			}
		}

		true
	}

	fn exit_to_root(&mut self) {
		self.stack.clear();
		self.current = NodeIndex::ROOT;
	}

	fn finish(mut self) -> Document {
		self.exit_to_root();
		self.document
	}
}
