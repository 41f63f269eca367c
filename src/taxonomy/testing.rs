//! Testing utilities
//!
//!     Helpers for tests of this crate and of crates building on it:
//!
//!         - [compare](compare): position-wise structural comparison of two block trees
//!           or two semantic mappings, reported one item per line as `[ok]` or
//!           `[fail]`, plus a plain listing of a block tree.
//!           [diff_mappings](compare::diff_mappings) and
//!           [assert_mappings_eq](compare::assert_mappings_eq) also check section order,
//!           which `==` on the mapping ignores.
//!         - [text_diff](text_diff): line-based assertions for formatter output.
//!
//!     The comparison reports are meant to be printed next to a failing `assert_eq!`
//!     on large trees, where the derived `Debug` output is hard to read.

pub mod compare;
pub mod text_diff;

pub use compare::{
    assert_mappings_eq, compare_blocks, compare_mappings, diff_mappings, format_block, ABSENT,
};
pub use text_diff::{assert_text_eq, diff_text};
