//! Expansion algorithm.
//!
//! Rewrites a document into expanded form: every term is resolved to an
//! absolute identifier, every literal becomes a value object carrying its
//! datatype or language, and every property value becomes an array.
use crate::{Context, Error};
use json_syntax::Value;

mod array;
mod element;
mod iri;
mod literal;
mod node;

pub(crate) use array::expand_array;
pub(crate) use element::expand_element;
pub(crate) use iri::expand_iri;
pub(crate) use literal::expand_value;
pub(crate) use node::expand_node;

/// Document expansion.
///
/// This trait provides the functions necessary to expand a document into its
/// expanded form. It is implemented by [`json_syntax::Value`].
pub trait Expand {
	/// Expands the document under the given active property.
	///
	/// The active property selects the container, datatype and language
	/// coercions applied to the document, as if it were the value of that
	/// property.
	fn expand_with(
		&self,
		active_context: &Context,
		active_property: Option<&str>,
	) -> Result<Value, Error>;

	/// Expands the document against `active_context`.
	fn expand(&self, active_context: &Context) -> Result<Value, Error> {
		self.expand_with(active_context, None)
	}
}

impl Expand for Value {
	fn expand_with(
		&self,
		active_context: &Context,
		active_property: Option<&str>,
	) -> Result<Value, Error> {
		expand_element(active_context, active_property, self)
	}
}
