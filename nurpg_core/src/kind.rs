use std::fmt::Display;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use crate::NurpgError;

/// The closed set of directive words a document may use.
///
/// Every `@word` in a document must map to one of these variants. Parsing
/// looks words up in [`NodeKind::ALL`]; [`NodeKind::as_str`] spells the same
/// words out for rendering and serde uses them as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
	/// The synthetic document root.
	Root,
	Title,
	Difficulty,
	Grants,
	Author,
	Date,
	/// Free text between directives.
	Content,
	Mechanic,
	Note,
	Effect,
	Requires,
	Cost,
	Ability,
	Section,
	Feature,
	Ref,
	Aspect,
	/// Stops parsing. Never appears in a built tree.
	Halt,
}

impl NodeKind {
	/// Every kind paired with its directive word, in declaration order.
	pub const ALL: [(&'static str, NodeKind); 18] = [
		("root", NodeKind::Root),
		("title", NodeKind::Title),
		("difficulty", NodeKind::Difficulty),
		("grants", NodeKind::Grants),
		("author", NodeKind::Author),
		("date", NodeKind::Date),
		("content", NodeKind::Content),
		("mechanic", NodeKind::Mechanic),
		("note", NodeKind::Note),
		("effect", NodeKind::Effect),
		("requires", NodeKind::Requires),
		("cost", NodeKind::Cost),
		("ability", NodeKind::Ability),
		("section", NodeKind::Section),
		("feature", NodeKind::Feature),
		("ref", NodeKind::Ref),
		("aspect", NodeKind::Aspect),
		("halt", NodeKind::Halt),
	];

	/// Look up the kind for a directive word. Matching is exact and
	/// case-sensitive.
	pub fn from_word(word: &str) -> Option<Self> {
		Self::ALL
			.iter()
			.find(|(candidate, _)| *candidate == word)
			.map(|(_, kind)| *kind)
	}

	/// The directive word for this kind.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Root => "root",
			Self::Title => "title",
			Self::Difficulty => "difficulty",
			Self::Grants => "grants",
			Self::Author => "author",
			Self::Date => "date",
			Self::Content => "content",
			Self::Mechanic => "mechanic",
			Self::Note => "note",
			Self::Effect => "effect",
			Self::Requires => "requires",
			Self::Cost => "cost",
			Self::Ability => "ability",
			Self::Section => "section",
			Self::Feature => "feature",
			Self::Ref => "ref",
			Self::Aspect => "aspect",
			Self::Halt => "halt",
		}
	}

	/// Container kinds may hold nested nodes of other kinds.
	pub fn is_container(self) -> bool {
		matches!(
			self,
			Self::Section
				| Self::Aspect
				| Self::Feature
				| Self::Mechanic
				| Self::Effect
				| Self::Ability
		)
	}

	/// Kinds that always attach directly beneath a `section`.
	pub fn requires_section(self) -> bool {
		matches!(
			self,
			Self::Feature | Self::Effect | Self::Ability | Self::Aspect
		)
	}
}

impl Display for NodeKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for NodeKind {
	type Err = NurpgError;

	fn from_str(word: &str) -> Result<Self, Self::Err> {
		Self::from_word(word).ok_or_else(|| NurpgError::UnknownDirective(word.to_string()))
	}
}
