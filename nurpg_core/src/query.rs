use crate::Document;
use crate::DocumentNode;
use crate::NodeIndex;
use crate::NodeKind;

/// Lazy pre-order search for nodes of a given kind.
///
/// The walk keeps its own stack of `(next child, node)` pairs, so its depth
/// is bounded by the heap rather than the call stack. Cloning a `Find`
/// restarts nothing; it forks the traversal at its current position.
#[derive(Debug, Clone)]
pub struct Find<'a> {
	document: &'a Document,
	kind: NodeKind,
	content: Option<&'a str>,
	stack: Vec<(usize, NodeIndex)>,
}

impl<'a> Find<'a> {
	/// Search the descendants of `start`. `start` itself is never yielded.
	pub fn new(
		document: &'a Document,
		start: &'a DocumentNode,
		kind: NodeKind,
		content: Option<&'a str>,
	) -> Self {
		Self {
			document,
			kind,
			content,
			stack: vec![(0, start.index())],
		}
	}

	fn matches(&self, node: &DocumentNode) -> bool {
		if node.kind() != self.kind {
			return false;
		}

		match self.content {
			Some(expected) => node.content() == Some(expected),
			None => true,
		}
	}
}

impl<'a> Iterator for Find<'a> {
	type Item = &'a DocumentNode;

	fn next(&mut self) -> Option<Self::Item> {
		while let Some((cursor, index)) = self.stack.pop() {
			let document = self.document;
			let Some(&child) = document[index].children().get(cursor) else {
				// Exhausted this node's children.
				continue;
			};

			self.stack.push((cursor + 1, index));

			let node = &document[child];
			if node.has_children() {
				self.stack.push((0, child));
			}

			if self.matches(node) {
				return Some(node);
			}
		}

		None
	}
}

impl std::iter::FusedIterator for Find<'_> {}

/// Find all nodes of `kind` in `document`, optionally filtered by exact
/// content.
pub fn find<'a>(document: &'a Document, kind: NodeKind, content: Option<&'a str>) -> Find<'a> {
	document.find(kind, content)
}
