//! `nurpg_core` parses NuRPG rule-book documents into a typed tree and
//! queries that tree.
//!
//! ## Processing Pipeline
//!
//! ```text
//! Document text
//!   → Tokenizer (scans `@directive` lines and free text into Tokens)
//!   → Directive interpreter (maps words to NodeKinds, stops at `@halt`)
//!   → Tree builder (nests sections, features, mechanics, ...)
//!   → Document
//! ```
//!
//! ## Syntax
//!
//! A directive starts with `@`, names a [`NodeKind`] and runs to the end of
//! the line. Everything after the first space is its argument. Text between
//! directives becomes `content` nodes. A backslash makes the next character
//! literal, so `\@` is a plain `@`.
//!
//! ```text
//! @title The Book
//! @author Jane Doe
//! @section Combat
//! Rolling for initiative.
//! @feature Quick Draw
//! @mechanic Reaction
//! @cost 2
//! ```
//!
//! ## Modules
//!
//! - [`config`]: The `.nds/config` project file and the draft stash.
//! - [`document`]: Reading and writing document files with size checks.
//!
//! ## Quick Start
//!
//! ```rust
//! use nurpg_core::NodeKind;
//! use nurpg_core::parse;
//!
//! let document = parse("@section Intro\nHello\n@title The Book\n").unwrap();
//! assert_eq!(document.title(), Some("The Book"));
//!
//! let sections: Vec<_> = document.find(NodeKind::Section, None).collect();
//! assert_eq!(sections[0].content(), Some("Intro"));
//! ```

pub use error::*;
pub use kind::*;
pub use lexer::Tokenizer;
pub use lexer::tokenize;
pub use parser::*;
pub use query::*;
pub use tokens::Token;
pub use tree::*;

pub mod config;
pub mod document;
#[allow(unused_assignments)]
mod error;
mod kind;
pub(crate) mod lexer;
mod parser;
mod query;
pub(crate) mod tokens;
mod tree;
