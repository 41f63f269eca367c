//! Blocks
//!
//! A block is everything written at one indentation level under the same parent. The
//! root block holds the top-level lines; every `Name::` header may be followed by a
//! nested block holding its body.
//!
//! Blocks do not point back at their parent. While parsing, the builder keeps the
//! chain of open blocks on an explicit stack (see
//! [builder](crate::taxonomy::parsing::builder)); once a block is closed it is owned
//! by its parent and never changes again.

use super::expression::Expression;

/// An item of a block: a recognized line or a nested, deeper-indented block
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockItem {
    Expression(Expression),
    Block(Block),
}

impl BlockItem {
    pub fn as_expression(&self) -> Option<&Expression> {
        match self {
            BlockItem::Expression(expr) => Some(expr),
            BlockItem::Block(_) => None,
        }
    }

    pub fn as_block(&self) -> Option<&Block> {
        match self {
            BlockItem::Block(block) => Some(block),
            BlockItem::Expression(_) => None,
        }
    }

    fn is_blank(&self) -> bool {
        matches!(self, BlockItem::Expression(Expression::Blank))
    }
}

impl From<Expression> for BlockItem {
    fn from(expr: Expression) -> Self {
        BlockItem::Expression(expr)
    }
}

impl From<Block> for BlockItem {
    fn from(block: Block) -> Self {
        BlockItem::Block(block)
    }
}

/// One indentation level's worth of parsed lines
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Block {
    /// Exact leading whitespace shared by every line of the block
    pub indent: String,
    pub items: Vec<BlockItem>,
}

impl Block {
    pub fn new(indent: impl Into<String>) -> Self {
        Self {
            indent: indent.into(),
            items: Vec::new(),
        }
    }

    /// Build a block from items, mostly useful for spelling out expected trees.
    pub fn with_items<I>(indent: impl Into<String>, items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<BlockItem>,
    {
        Self {
            indent: indent.into(),
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    pub fn push(&mut self, item: impl Into<BlockItem>) {
        self.items.push(item.into());
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Direct expressions of this block, nested blocks skipped.
    pub fn expressions(&self) -> impl Iterator<Item = &Expression> {
        self.items.iter().filter_map(BlockItem::as_expression)
    }

    /// Direct child blocks of this block.
    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.items.iter().filter_map(BlockItem::as_block)
    }

    /// The last item that is not a Blank expression.
    pub fn last_non_blank(&self) -> Option<&BlockItem> {
        self.items.iter().rev().find(|item| !item.is_blank())
    }

    /// Total number of blocks in this tree, this one included.
    pub fn block_count(&self) -> usize {
        1 + self.blocks().map(Block::block_count).sum::<usize>()
    }

    /// Split the block into its leading block comment and the rest.
    ///
    /// A block comment is a run of `Comment` lines terminated by a Blank; the Blank
    /// belongs to the head. When the run is not terminated by a Blank the head is
    /// empty and the whole block is returned as the tail.
    pub fn split_block_comment(&self) -> (&[BlockItem], &[BlockItem]) {
        for (i, item) in self.items.iter().enumerate() {
            match item {
                BlockItem::Expression(Expression::Comment(_)) => continue,
                BlockItem::Expression(Expression::Blank) => return self.items.split_at(i + 1),
                _ => break,
            }
        }
        (&[], self.items.as_slice())
    }
}
