//! Lexing
//!
//!     Taxonomy sources are line oriented, so lexing is deliberately shallow. A line is
//!     split into its indentation and its content (see [line](line)), and the content
//!     may lose a trailing line comment before the grammar sees it.
//!
//!     Tag patterns are the only place with inner structure. They are tokenized with a
//!     logos lexer (see [pattern](pattern)) into alternation bars, integer range tokens
//!     and literal runs, which the tag model then expands.

pub mod line;
pub mod pattern;

pub use line::{split_line, split_line_comment, LINE_COMMENT_DELIMITER};
pub use pattern::{alternatives, tokenize_pattern, PatternToken, Segment};
