//! Processor for a linked-data document format layered on a generic JSON
//! tree.
//!
//! Documents are converted between two canonical shapes: an *expanded* form
//! in which every term is resolved to an absolute identifier and every
//! literal carries its datatype or language, and a *compact* form in which
//! identifiers are shortened back to terms using a user-supplied context.
//! A third operation folds local contexts into the *active context* the
//! other two operate under.
//!
//! All three operations are synchronous pure functions of their inputs:
//! remote contexts are not fetched, and the same input tree and context
//! always produce the same output tree.
//!
//! # Usage
//!
//! ```
//! use json_syntax::json;
//! use treeld::{Compact, Context, Expand, Process};
//!
//! # fn main() -> Result<(), treeld::Error> {
//! // Fold a local context into an active context.
//! let context = json!({"name": "http://schema.org/name"})
//! 	.process(&Context::default())?;
//!
//! // Expand a document against it.
//! let expanded = json!({"name": "Ada"}).expand(&context)?;
//! assert_eq!(expanded, json!({"http://schema.org/name": [{"@value": "Ada"}]}));
//!
//! // And compact it back.
//! let compacted = expanded.compact(&context)?;
//! assert_eq!(compacted, json!({"name": "Ada"}));
//! # Ok(())
//! # }
//! ```
pub mod compaction;
mod container;
pub mod context;
mod error;
pub mod expansion;
mod keyword;
mod lang;
pub mod object;
mod parse;
mod util;

pub use compaction::Compact;
pub use container::ContainerKind;
pub use context::{Context, Process, TermDefinition, Type};
pub use error::{Error, ParseError, ProcessError, SyntaxError, SyntaxErrorKind};
pub use expansion::Expand;
pub use keyword::{is_keyword, Keyword, NotAKeyword};
pub use lang::LenientLangTagBuf;
pub use parse::{parse, MAX_DEPTH};
