//! Building
//!
//!     Lowers the [Block](crate::taxonomy::ast::Block) tree into a [SemanticMapping].
//!     This is where layout turns into meaning: node headers become children, the block
//!     that follows a header becomes the child's body, and runs of comments become
//!     documentation.
//!
//! Documentation
//!
//!     Comments are collected in a buffer until the next non-comment expression:
//!         - A blank line turns the buffer into the enclosing node's `doc`, unless the
//!           node already has one.
//!         - A tag declaration takes the buffer as the tag's own `doc`.
//!         - Anything else discards it.
//!     Trailing line comments are kept in the syntax tree only; they are skipped here
//!     and leave the buffer untouched.

pub mod mapping;

pub use mapping::{SemanticMapping, TagSpec};

use crate::taxonomy::ast::{Block, BlockItem, Expression, ParserError, ParserResult};

/// Lower a root block into its semantic mapping.
pub fn to_mapping(block: &Block) -> ParserResult<SemanticMapping> {
    let mut mapping = SemanticMapping::default();
    lower_block(block, &mut mapping)?;
    tracing::debug!(
        nodes = mapping.descendant_count(),
        tags = mapping.tags.len(),
        "lowered syntax tree"
    );
    Ok(mapping)
}

fn lower_block(block: &Block, data: &mut SemanticMapping) -> ParserResult<()> {
    let mut doc: Vec<&str> = Vec::new();
    let mut pending_child: Option<&str> = None;

    for item in &block.items {
        match item {
            BlockItem::Expression(Expression::Comment(text)) => {
                doc.push(text.as_str());
                continue;
            }
            BlockItem::Expression(Expression::LineComment(_)) => continue,
            BlockItem::Expression(Expression::Blank) => {
                if !doc.is_empty() && data.doc.is_none() {
                    data.doc = Some(doc.join("\n"));
                }
            }
            BlockItem::Expression(Expression::NodeHeader(name)) => {
                data.children
                    .insert(name.clone(), SemanticMapping::default());
                pending_child = Some(name.as_str());
            }
            BlockItem::Block(nested) => {
                let child = pending_child
                    .and_then(|name| data.children.get_mut(name))
                    .ok_or_else(|| ParserError::Internal {
                        message: "nested block without a preceding node header".to_string(),
                    })?;
                lower_block(nested, child)?;
            }
            BlockItem::Expression(Expression::AliasDecl(name)) => {
                data.aliases.push(name.clone());
            }
            BlockItem::Expression(Expression::TagDecl {
                name,
                multi,
                pattern,
            }) => {
                let doc = (!doc.is_empty()).then(|| doc.join("\n"));
                data.tags.insert(
                    name.clone(),
                    TagSpec {
                        pattern: pattern.clone(),
                        multi: *multi,
                        doc,
                    },
                );
            }
            BlockItem::Expression(Expression::MetaDecl { key, value }) => {
                data.meta.insert(key.clone(), value.clone());
            }
        }

        doc.clear();
    }

    Ok(())
}
