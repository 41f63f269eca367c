//! Parsing
//!
//!     Parsing turns source lines into the [Block](crate::taxonomy::ast::Block) tree in a
//!     single pass. Two pieces cooperate:
//!
//!         1. The line grammar (see [grammar](grammar)). An ordered list of regex rules
//!            that classifies the content of one line. The order is significant: the
//!            metadata rule accepts any `key=value` shape and would shadow tags and
//!            aliases if it were tried earlier.
//!
//!         2. The indentation-stack builder (see [builder](builder)). It tracks the open
//!            blocks, opens a nested block when the indentation grows right after a node
//!            header, and closes blocks when the indentation returns to an enclosing
//!            level.
//!
//!     Both are fail fast: the first offending line aborts the parse with a
//!     [ParserError](crate::taxonomy::ast::ParserError) carrying its line number.

pub mod builder;
pub mod grammar;

pub use builder::{parse_lines, parse_source, BlockBuilder};
pub use grammar::{recognize, GRAMMAR_RULES};
