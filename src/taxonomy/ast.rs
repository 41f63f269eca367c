//! Syntax tree for taxonomy sources
//!
//!     The syntax tree stays faithful to the source layout: one [Expression] per
//!     recognized line (plus one per trailing line comment), grouped into [Block]s by
//!     indentation level. Nothing is interpreted here; folding the tree into nodes,
//!     tags and documentation is the job of [building](crate::taxonomy::building).

pub mod block;
pub mod error;
pub mod expression;

pub use block::{Block, BlockItem};
pub use error::{format_source_context, ParserError, ParserResult};
pub use expression::Expression;
