//! Indentation-stack builder
//!
//!     Builds the [Block] tree from source lines. The builder is a small state machine
//!     over a stack of open blocks: the bottom entry is the root block, the top entry is
//!     the block receiving lines, and each entry is the parent of the one above it.
//!
//! Algorithm
//!
//!     For every line (right-trimmed first):
//!         1. Split it into indentation and content.
//!         2. The very first line fixes the root indentation.
//!         3. Blank lines and lines at the current indentation stay in the current block.
//!         4. A strict extension of the current indentation opens a nested block, but
//!            only when the last non-blank item of the current block is a node header.
//!         5. Anything else closes blocks until the indentation matches an open block
//!            exactly. Running out of blocks, or stopping on a level the line does not
//!            match, is an illegal dedent.
//!         6. The content is classified by the [grammar](super::grammar) and appended.
//!
//!     Indentation levels are compared as strings, never as widths, so tabs and spaces
//!     never alias each other.

use super::grammar::{recognize, recognize_comment};
use crate::taxonomy::ast::{Block, BlockItem, Expression, ParserError, ParserResult};
use crate::taxonomy::lexing::{split_line, split_line_comment};

/// Parse a whole source text into its root block.
pub fn parse_source(source: &str) -> ParserResult<Block> {
    parse_lines(source.lines())
}

/// Parse a sequence of lines (without line terminators) into the root block.
pub fn parse_lines<I, S>(lines: I) -> ParserResult<Block>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut builder = BlockBuilder::new();
    for line in lines {
        builder.feed(line.as_ref())?;
    }
    Ok(builder.finish())
}

/// Incremental line consumer holding the stack of open blocks
#[derive(Debug)]
pub struct BlockBuilder {
    stack: Vec<Block>,
    root_indent_known: bool,
    line_no: usize,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            stack: vec![Block::default()],
            root_indent_known: false,
            line_no: 0,
        }
    }

    /// Number of currently open blocks, the root included.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Number of lines consumed so far.
    pub fn lines_consumed(&self) -> usize {
        self.line_no
    }

    fn current(&self) -> &Block {
        &self.stack[self.stack.len() - 1]
    }

    fn current_mut(&mut self) -> &mut Block {
        let top = self.stack.len() - 1;
        &mut self.stack[top]
    }

    /// Consume one line.
    pub fn feed(&mut self, raw: &str) -> ParserResult<()> {
        self.line_no += 1;
        let line = raw.trim_end();
        let (indent, content) = split_line(line);

        if !self.root_indent_known {
            self.current_mut().indent = indent.to_string();
            self.root_indent_known = true;
        } else if line.is_empty() || indent == self.current().indent {
            // Same level
        } else if indent.starts_with(self.current().indent.as_str()) {
            self.open(indent, line)?;
        } else {
            self.close_until(indent, line)?;
        }

        if let Some(comment) = recognize_comment(content) {
            self.current_mut().push(comment);
            return Ok(());
        }

        let (content, trailing) = split_line_comment(content);
        if let Some(trailing) = trailing {
            self.current_mut()
                .push(Expression::LineComment(trailing.to_string()));
        }

        match recognize(content) {
            Some(expression) => {
                self.current_mut().push(expression);
                Ok(())
            }
            None => Err(ParserError::UnmatchedLine {
                line: self.line_no,
                text: line.to_string(),
            }),
        }
    }

    fn open(&mut self, indent: &str, line: &str) -> ParserResult<()> {
        let previous = self.current().last_non_blank();
        let after_header = matches!(
            previous,
            Some(BlockItem::Expression(Expression::NodeHeader(_)))
        );

        if !after_header {
            let previous = previous.map(|item| match item {
                BlockItem::Expression(expression) => expression.to_string(),
                BlockItem::Block(_) => "<Block>".to_string(),
            });
            return Err(ParserError::UnexpectedIndent {
                line: self.line_no,
                text: line.to_string(),
                previous,
            });
        }

        tracing::trace!(line = self.line_no, depth = self.stack.len(), "open block");
        self.stack.push(Block::new(indent));
        Ok(())
    }

    fn close_until(&mut self, indent: &str, line: &str) -> ParserResult<()> {
        loop {
            let current = self.current().indent.as_str();
            if current == indent {
                return Ok(());
            }

            if !current.starts_with(indent) || self.stack.len() == 1 {
                return Err(ParserError::IllegalDedent {
                    line: self.line_no,
                    text: line.to_string(),
                });
            }

            self.close();
            tracing::trace!(line = self.line_no, depth = self.stack.len(), "close block");
        }
    }

    /// Fold the top block into its parent. The root is never closed.
    fn close(&mut self) {
        if self.stack.len() > 1 {
            if let Some(block) = self.stack.pop() {
                self.current_mut().push(block);
            }
        }
    }

    /// Close every open block and return the root.
    pub fn finish(mut self) -> Block {
        while self.stack.len() > 1 {
            self.close();
        }
        tracing::debug!(lines = self.line_no, "parsed taxonomy source");
        self.stack.pop().unwrap_or_default()
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(block: &Block) -> Vec<&BlockItem> {
        block.items.iter().collect()
    }

    #[test]
    fn test_gen_ast() {
        let source = concat!(
            "    Foo::\n",
            "        # Comment Foo\n",
            "        tag~=A|B|* # Line comment\n",
            "\n",
            "        Bar::\n",
            "            # Comment Bar\n",
            "\n",
            "    Baz::\n",
            "    \n",
        );

        let expected = Block::with_items(
            "    ",
            [
                BlockItem::from(Expression::node("Foo")),
                BlockItem::from(Block::with_items(
                    "        ",
                    [
                        BlockItem::from(Expression::comment("Comment Foo")),
                        BlockItem::from(Expression::line_comment("Line comment")),
                        BlockItem::from(Expression::tag("tag", "A|B|*")),
                        BlockItem::from(Expression::Blank),
                        BlockItem::from(Expression::node("Bar")),
                        BlockItem::from(Block::with_items(
                            "            ",
                            [Expression::comment("Comment Bar"), Expression::Blank],
                        )),
                    ],
                )),
                BlockItem::from(Expression::node("Baz")),
                BlockItem::from(Expression::Blank),
            ],
        );

        let ast = parse_source(source).expect("source should parse");

        assert_eq!(ast, expected);
    }

    #[test]
    fn test_empty_source() {
        let ast = parse_source("").unwrap();
        assert_eq!(ast, Block::default());
    }

    #[test]
    fn test_blank_line_before_body_is_allowed() {
        let ast = parse_source("Foo::\n\n  tag~=?\n").unwrap();
        assert_eq!(ast.len(), 3);
        assert_eq!(
            items(&ast)[2],
            &BlockItem::from(Block::with_items("  ", [Expression::tag("tag", "?")]))
        );
    }

    #[test]
    fn test_unexpected_indent_after_tag() {
        let source = "Foo::\n  Bar::\n  baz~=x\n    qux~=y\n";
        let error = parse_source(source).unwrap_err();

        assert_eq!(
            error,
            ParserError::UnexpectedIndent {
                line: 4,
                text: "    qux~=y".to_string(),
                previous: Some("<TagDecl \"baz\" \"x\">".to_string()),
            }
        );
    }

    #[test]
    fn test_unexpected_indent_at_start() {
        let error = parse_source("\n  Foo::\n").unwrap_err();
        assert!(matches!(
            error,
            ParserError::UnexpectedIndent {
                line: 2,
                previous: None,
                ..
            }
        ));
    }

    #[test]
    fn test_dedent_to_enclosing_level() {
        let ast = parse_source("A::\n  B::\n    C::\nD::\n").unwrap();
        let names: Vec<_> = ast.expressions().cloned().collect();
        assert_eq!(names, vec![Expression::node("A"), Expression::node("D")]);
        assert_eq!(ast.block_count(), 3);
    }

    #[test]
    fn test_dedent_beyond_root() {
        let error = parse_source("  Foo::\nBar::\n").unwrap_err();
        assert_eq!(
            error,
            ParserError::IllegalDedent {
                line: 2,
                text: "Bar::".to_string(),
            }
        );
    }

    #[test]
    fn test_misaligned_dedent() {
        let error = parse_source("Foo::\n    Bar::\n  Baz::\n").unwrap_err();
        assert!(matches!(error, ParserError::IllegalDedent { line: 3, .. }));
    }

    #[test]
    fn test_tab_and_spaces_do_not_mix() {
        let error = parse_source("Foo::\n\tBar::\n    Baz::\n").unwrap_err();
        assert!(matches!(error, ParserError::IllegalDedent { line: 3, .. }));
    }

    #[test]
    fn test_unmatched_line() {
        let error = parse_source("Foo::\n  some free text\n").unwrap_err();
        assert_eq!(
            error,
            ParserError::UnmatchedLine {
                line: 2,
                text: "  some free text".to_string(),
            }
        );
    }

    #[test]
    fn test_line_comment_on_header() {
        let ast = parse_source("Foo:: # the foo\n  =foo\n").unwrap();
        assert_eq!(
            ast.items[0],
            BlockItem::from(Expression::line_comment("the foo"))
        );
        assert_eq!(ast.items[1], BlockItem::from(Expression::node("Foo")));
        assert_eq!(ast.block_count(), 2);
    }

    #[test]
    fn test_builder_depth() {
        let mut builder = BlockBuilder::new();
        builder.feed("A::").unwrap();
        builder.feed("  B::").unwrap();
        builder.feed("    C::").unwrap();
        assert_eq!(builder.depth(), 3);
        builder.feed("  D::").unwrap();
        assert_eq!(builder.depth(), 2);
        assert_eq!(builder.lines_consumed(), 4);
        assert_eq!(builder.finish().block_count(), 3);
    }
}
