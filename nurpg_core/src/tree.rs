use std::fmt::Display;
use std::ops::Index;

use serde::Serialize;
use uuid::Uuid;

use crate::NodeKind;
use crate::query::Find;
use crate::tokens::DIRECTIVE_END;
use crate::tokens::DIRECTIVE_START;
use crate::tokens::ESCAPE;

/// Position of a node inside its [`Document`]'s arena.
///
/// Only meaningful for the document that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeIndex(usize);

impl NodeIndex {
	pub(crate) const ROOT: NodeIndex = NodeIndex(0);
}

/// A single node of a parsed document.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentNode {
	id: Uuid,
	index: NodeIndex,
	kind: NodeKind,
	content: Option<String>,
	parent: Option<NodeIndex>,
	children: Vec<NodeIndex>,
}

impl DocumentNode {
	/// Unique, opaque identifier assigned when the node was built.
	pub fn id(&self) -> Uuid {
		self.id
	}

	/// The arena slot of this node, used to navigate through the owning
	/// [`Document`].
	pub fn index(&self) -> NodeIndex {
		self.index
	}

	pub fn kind(&self) -> NodeKind {
		self.kind
	}

	pub fn content(&self) -> Option<&str> {
		self.content.as_deref()
	}

	/// The parent slot. `None` only for the root.
	pub fn parent(&self) -> Option<NodeIndex> {
		self.parent
	}

	/// Child slots in document order.
	pub fn children(&self) -> &[NodeIndex] {
		&self.children
	}

	pub fn has_children(&self) -> bool {
		!self.children.is_empty()
	}
}

/// Renders the node as a single directive line: `@kind content\n`, or
/// `@kind\n` when the content is missing or empty. Children are not
/// included.
impl Display for DocumentNode {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{DIRECTIVE_START}{}", escape(self.kind.as_str()))?;

		if let Some(content) = self.content().filter(|content| !content.is_empty()) {
			write!(f, " {}", escape(content))?;
		}

		write!(f, "{DIRECTIVE_END}")
	}
}

/// Escape a string for a directive line. Backslashes are doubled and `|` is
/// written as `\|`.
pub fn escape(source: &str) -> String {
	source.replace('\\', "\\\\").replace('|', "\\|")
}

/// Escape free text so the tokenizer reads it back unchanged: every `\` and
/// `@` gets a leading backslash.
pub fn escape_text(source: &str) -> String {
	let mut output = String::with_capacity(source.len());

	for ch in source.chars() {
		if ch == ESCAPE || ch == DIRECTIVE_START {
			output.push(ESCAPE);
		}
		output.push(ch);
	}

	output
}

/// Whether `content` can be written as free text. The tokenizer trims text
/// and drops blank runs, so only non-empty trimmed content survives.
fn is_free_text(content: &str) -> bool {
	!content.is_empty() && content.trim() == content
}

/// A parsed document: the node arena plus the metadata collected while
/// building it.
///
/// The root always lives in the first slot and is the only node without a
/// parent. Nodes are only ever added by the parser, so every child list is
/// in document order.
#[derive(Debug, Clone, Serialize)]
pub struct Document {
	nodes: Vec<DocumentNode>,
	title: Option<String>,
	authors: Vec<String>,
}

impl Default for Document {
	fn default() -> Self {
		Self::new()
	}
}

impl Document {
	pub(crate) fn new() -> Self {
		let root = DocumentNode {
			id: Uuid::new_v4(),
			index: NodeIndex::ROOT,
			kind: NodeKind::Root,
			content: Some(String::new()),
			parent: None,
			children: vec![],
		};

		Self {
			nodes: vec![root],
			title: None,
			authors: vec![],
		}
	}

	/// Create a node and link it as the last child of `parent`.
	pub(crate) fn append(
		&mut self,
		parent: NodeIndex,
		kind: NodeKind,
		content: impl Into<String>,
	) -> NodeIndex {
		let index = NodeIndex(self.nodes.len());

		self.nodes.push(DocumentNode {
			id: Uuid::new_v4(),
			index,
			kind,
			content: Some(content.into()),
			parent: Some(parent),
			children: vec![],
		});
		self.nodes[parent.0].children.push(index);

		index
	}

	pub(crate) fn set_title(&mut self, title: impl Into<String>) {
		self.title = Some(title.into());
	}

	pub(crate) fn push_author(&mut self, author: impl Into<String>) {
		self.authors.push(author.into());
	}

	pub fn root(&self) -> &DocumentNode {
		&self.nodes[NodeIndex::ROOT.0]
	}

	pub fn title(&self) -> Option<&str> {
		self.title.as_deref()
	}

	/// Author names in the order their `@author` directives appeared.
	pub fn authors(&self) -> &[String] {
		&self.authors
	}

	pub fn get(&self, index: NodeIndex) -> Option<&DocumentNode> {
		self.nodes.get(index.0)
	}

	pub fn parent(&self, node: &DocumentNode) -> Option<&DocumentNode> {
		node.parent.and_then(|index| self.get(index))
	}

	pub fn children<'a>(
		&'a self,
		node: &'a DocumentNode,
	) -> impl DoubleEndedIterator<Item = &'a DocumentNode> + ExactSizeIterator + 'a {
		node.children.iter().map(|index| &self[*index])
	}

	/// The number of nodes below the root.
	pub fn len(&self) -> usize {
		self.nodes.len() - 1
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Every node below the root in document order.
	pub fn iter(&self) -> impl Iterator<Item = &DocumentNode> {
		self.descendants(self.root())
	}

	/// Every node below `node` in document order, excluding `node` itself.
	pub fn descendants<'a>(&'a self, node: &'a DocumentNode) -> Descendants<'a> {
		Descendants {
			document: self,
			stack: node.children.iter().rev().copied().collect(),
		}
	}

	/// Find all nodes of `kind` below the root, optionally requiring an exact
	/// content match.
	pub fn find<'a>(&'a self, kind: NodeKind, content: Option<&'a str>) -> Find<'a> {
		Find::new(self, self.root(), kind, content)
	}

	/// Like [`Document::find`] but searches below `node` only.
	pub fn find_from<'a>(
		&'a self,
		node: &'a DocumentNode,
		kind: NodeKind,
		content: Option<&'a str>,
	) -> Find<'a> {
		Find::new(self, node, kind, content)
	}

	/// All sections in document order.
	pub fn sections(&self) -> Find<'_> {
		self.find(NodeKind::Section, None)
	}

	/// The directive line for a single node.
	pub fn render_node(&self, index: NodeIndex) -> String {
		self.get(index).map(ToString::to_string).unwrap_or_default()
	}

	/// Serialize the whole tree as document text that parses back into the
	/// same tree.
	///
	/// Nodes are written in document order. `content` nodes become free text
	/// with `@` and `\` escaped. A `content` node directly after free text, or
	/// one that free text can't hold, is written as an `@content` directive
	/// instead. Directive arguments are written verbatim since the tokenizer
	/// never unescapes them.
	///
	/// Use [`Document::same_tree`] on the reparsed text to check the result:
	/// consecutive multi-line `content` nodes can't be kept apart.
	pub fn to_directive_text(&self) -> String {
		let mut output = String::new();
		let mut after_text = false;

		for node in self.iter() {
			let content = node.content().unwrap_or_default();

			if node.kind == NodeKind::Content && !after_text && is_free_text(content) {
				output.push_str(&escape_text(content));
				output.push(DIRECTIVE_END);
				after_text = true;
				continue;
			}

			output.push(DIRECTIVE_START);
			output.push_str(node.kind.as_str());
			if !content.is_empty() {
				output.push(' ');
				output.push_str(content);
			}
			output.push(DIRECTIVE_END);
			after_text = false;
		}

		output
	}

	/// Compare two documents by title, authors and the kind, content and
	/// children of every node. Node ids are ignored.
	pub fn same_tree(&self, other: &Document) -> bool {
		if self.title != other.title || self.authors != other.authors {
			return false;
		}

		let mut stack = vec![(self.root(), other.root())];
		while let Some((left, right)) = stack.pop() {
			if left.kind != right.kind
				|| left.content != right.content
				|| left.children.len() != right.children.len()
			{
				return false;
			}

			stack.extend(self.children(left).zip(other.children(right)));
		}

		true
	}
}

impl Index<NodeIndex> for Document {
	type Output = DocumentNode;

	fn index(&self, index: NodeIndex) -> &Self::Output {
		&self.nodes[index.0]
	}
}

/// Pre-order walk over a subtree.
#[derive(Debug, Clone)]
pub struct Descendants<'a> {
	document: &'a Document,
	stack: Vec<NodeIndex>,
}

impl<'a> Iterator for Descendants<'a> {
	type Item = &'a DocumentNode;

	fn next(&mut self) -> Option<Self::Item> {
		let index = self.stack.pop()?;
		let node = &self.document[index];
		self.stack.extend(node.children.iter().rev().copied());

		Some(node)
	}
}
