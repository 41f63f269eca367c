//! # taxa
//!
//! A parser and tree model for taxonomy files.
//!
//! A taxonomy file describes a classification tree (for example the classes used to
//! annotate plankton images) in an indentation-structured text format. Every node may
//! carry tags with value patterns, aliases, free-form metadata and documentation
//! comments.
//!
//! File Layout
//!
//! src/taxonomy
//!   ├── lexing      Line splitting and tag pattern tokenization
//!   ├── ast         Expressions, blocks and parser errors
//!   ├── parsing     The line grammar and the indentation-stack builder
//!   ├── building    Lowering of the block tree into the semantic mapping
//!   ├── tree        The navigable node tree, tags and the canonical formatter
//!   ├── testing     Structural comparison and text diffing helpers
//!   ├── loader      Reading sources and running the pipeline
//!   └── config      Formatter settings layered over embedded defaults
//!
//! The contract between the stages is: source text in, [`Block`](taxonomy::ast::Block)
//! tree, then [`SemanticMapping`](taxonomy::building::SemanticMapping), then
//! [`Tree`](taxonomy::tree::Tree). The mapping is the only shape guaranteed to external
//! consumers such as database loaders or exporters.

pub mod taxonomy;
