//! Tree
//!
//!     The semantic model of a taxonomy: a [Tree] of named nodes, each carrying
//!     [Tag]s, aliases, metadata and an optional comment.
//!
//!         - [tag](tag): tag patterns, their expansion into parts and completion
//!           matching.
//!         - [node](node): the arena tree, its [Node] handles and the conversions from
//!           and to the [SemanticMapping](crate::taxonomy::building::SemanticMapping).
//!         - [format](format): the canonical text form, which parses back into the same
//!           mapping.

pub mod format;
pub mod node;
pub mod tag;

pub use node::{Node, NodeId, Tree};
pub use tag::{expand, Tag};
