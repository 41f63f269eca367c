//! Structural comparison reports
//!
//! The comparisons walk their inputs in lockstep by position. A slot missing on one
//! side is shown as [ABSENT]. Nested structures are compared recursively and their
//! report lines are indented by two spaces.

use crate::taxonomy::ast::{Block, BlockItem};
use crate::taxonomy::building::{SemanticMapping, TagSpec};

/// Placeholder for a slot present on one side only
pub const ABSENT: &str = "<absent>";

const NESTED_BLOCK: &str = "<Block>";

/// Compare two block trees position by position.
pub fn compare_blocks(left: &Block, right: &Block) -> String {
    let mut lines = Vec::new();
    let len = left.items.len().max(right.items.len());

    for index in 0..len {
        match (left.items.get(index), right.items.get(index)) {
            (Some(BlockItem::Block(a)), Some(BlockItem::Block(b))) => {
                push_nested(&mut lines, &compare_blocks(a, b));
            }
            (a, b) => push_leaf(&mut lines, a.map(describe_item), b.map(describe_item)),
        }
    }

    lines.join("\n")
}

/// List a block tree, one expression per line, nested blocks indented.
pub fn format_block(block: &Block) -> String {
    let mut lines = Vec::new();

    for item in &block.items {
        match item {
            BlockItem::Expression(expression) => lines.push(expression.to_string()),
            BlockItem::Block(nested) => push_nested(&mut lines, &format_block(nested)),
        }
    }

    lines.join("\n")
}

/// Compare two semantic mappings node by node.
///
/// For each node the documentation, tags, aliases and metadata are compared, then the
/// children pairwise by position. Children are reported by name and, when both sides
/// have one, followed by the comparison of their contents.
pub fn compare_mappings(left: &SemanticMapping, right: &SemanticMapping) -> String {
    let mut lines = Vec::new();

    if left.doc.is_some() || right.doc.is_some() {
        push_leaf(
            &mut lines,
            Some(describe_doc(left.doc.as_deref())),
            Some(describe_doc(right.doc.as_deref())),
        );
    }

    let len = left.tags.len().max(right.tags.len());
    for index in 0..len {
        push_leaf(
            &mut lines,
            left.tags
                .get_index(index)
                .map(|(name, spec)| describe_tag(name, spec)),
            right
                .tags
                .get_index(index)
                .map(|(name, spec)| describe_tag(name, spec)),
        );
    }

    let len = left.aliases.len().max(right.aliases.len());
    for index in 0..len {
        push_leaf(
            &mut lines,
            left.aliases.get(index).map(|alias| format!("={}", alias)),
            right.aliases.get(index).map(|alias| format!("={}", alias)),
        );
    }

    let len = left.meta.len().max(right.meta.len());
    for index in 0..len {
        push_leaf(
            &mut lines,
            left.meta
                .get_index(index)
                .map(|(key, value)| format!("{}={}", key, value)),
            right
                .meta
                .get_index(index)
                .map(|(key, value)| format!("{}={}", key, value)),
        );
    }

    let len = left.children.len().max(right.children.len());
    for index in 0..len {
        let a = left.children.get_index(index);
        let b = right.children.get_index(index);
        push_leaf(
            &mut lines,
            a.map(|(name, _)| format!("{}::", name)),
            b.map(|(name, _)| format!("{}::", name)),
        );
        if let (Some((_, a)), Some((_, b))) = (a, b) {
            push_nested(&mut lines, &compare_mappings(a, b));
        }
    }

    lines.join("\n")
}

/// Assert that two semantic mappings are equal, section order included.
///
/// # Panics
///
/// Panics with the [compare_mappings] report when they differ.
pub fn assert_mappings_eq(expected: &SemanticMapping, actual: &SemanticMapping) {
    if let Some(report) = diff_mappings(expected, actual) {
        panic!("\n\nMapping comparison failed.\n{}\n", report);
    }
}

/// Compare two semantic mappings, section order included.
///
/// Returns `None` when they are equal and the [compare_mappings] report otherwise.
/// `==` on [SemanticMapping] compares its maps as maps, so a reordered child, tag or
/// meta entry only shows up here.
pub fn diff_mappings(expected: &SemanticMapping, actual: &SemanticMapping) -> Option<String> {
    if same_order(expected, actual) {
        None
    } else {
        Some(compare_mappings(expected, actual))
    }
}

fn same_order(left: &SemanticMapping, right: &SemanticMapping) -> bool {
    if left.children.len() != right.children.len() {
        return false;
    }
    for ((a_name, a), (b_name, b)) in left.children.iter().zip(&right.children) {
        if a_name != b_name || !same_order(a, b) {
            return false;
        }
    }

    left.doc == right.doc
        && left.tags.iter().eq(&right.tags)
        && left.aliases == right.aliases
        && left.meta.iter().eq(&right.meta)
}

fn describe_item(item: &BlockItem) -> String {
    match item {
        BlockItem::Expression(expression) => expression.to_string(),
        BlockItem::Block(_) => NESTED_BLOCK.to_string(),
    }
}

fn describe_doc(doc: Option<&str>) -> String {
    match doc {
        Some(doc) => format!("doc {:?}", doc),
        None => format!("doc {}", ABSENT),
    }
}

fn describe_tag(name: &str, spec: &TagSpec) -> String {
    let marker = if spec.multi { "*" } else { "" };
    match &spec.doc {
        Some(doc) => format!("{}{}~={} (doc {:?})", name, marker, spec.pattern, doc),
        None => format!("{}{}~={}", name, marker, spec.pattern),
    }
}

fn push_leaf(lines: &mut Vec<String>, left: Option<String>, right: Option<String>) {
    if left == right {
        if let Some(value) = left {
            lines.push(format!("[ok] {}", value));
        }
        return;
    }

    lines.push(format!(
        "[fail] {} != {}",
        left.as_deref().unwrap_or(ABSENT),
        right.as_deref().unwrap_or(ABSENT)
    ));
}

fn push_nested(lines: &mut Vec<String>, report: &str) {
    lines.extend(report.lines().map(|line| {
        if line.is_empty() {
            String::new()
        } else {
            format!("  {}", line)
        }
    }));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::ast::Expression;

    fn sample() -> Block {
        Block::with_items(
            "",
            [
                BlockItem::from(Expression::node("Foo")),
                BlockItem::from(Block::with_items(
                    "  ",
                    [Expression::comment("doc"), Expression::tag("tag", "A|B")],
                )),
            ],
        )
    }

    #[test]
    fn test_compare_equal_blocks() {
        let report = compare_blocks(&sample(), &sample());
        assert_eq!(
            report,
            "[ok] <NodeHeader \"Foo\">\n  [ok] <Comment \"doc\">\n  [ok] <TagDecl \"tag\" \"A|B\">"
        );
        assert!(!report.contains("[fail]"));
    }

    #[test]
    fn test_compare_reports_absent_slots() {
        let mut longer = sample();
        longer.push(Expression::Blank);

        let report = compare_blocks(&sample(), &longer);
        assert_eq!(report.lines().last(), Some("[fail] <absent> != <Blank>"));
    }

    #[test]
    fn test_compare_block_against_expression() {
        let left = Block::with_items("", [BlockItem::from(Block::new("  "))]);
        let right = Block::with_items("", [Expression::Blank]);

        assert_eq!(compare_blocks(&left, &right), "[fail] <Block> != <Blank>");
    }

    #[test]
    fn test_format_block() {
        assert_eq!(
            format_block(&sample()),
            "<NodeHeader \"Foo\">\n  <Comment \"doc\">\n  <TagDecl \"tag\" \"A|B\">"
        );
    }

    #[test]
    fn test_compare_mappings() {
        let left = SemanticMapping::new()
            .with_child("A", SemanticMapping::new().with_alias("a"))
            .with_child("B", SemanticMapping::new());
        let right = SemanticMapping::new()
            .with_child("A", SemanticMapping::new().with_alias("x"));

        assert_eq!(
            compare_mappings(&left, &right),
            "[ok] A::\n  [fail] =a != =x\n[fail] B:: != <absent>"
        );
    }

    #[test]
    fn test_compare_mappings_doc_and_tags() {
        let left = SemanticMapping::new()
            .with_doc("top")
            .with_tag("view", TagSpec::new("lateral").multi().with_doc("Angle"));
        let right = SemanticMapping::new().with_tag("view", TagSpec::new("lateral").multi());

        assert_eq!(
            compare_mappings(&left, &right),
            concat!(
                "[fail] doc \"top\" != doc <absent>\n",
                "[fail] view*~=lateral (doc \"Angle\") != view*~=lateral",
            )
        );
    }

    #[test]
    fn test_diff_mappings_sees_order() {
        let xy = SemanticMapping::new()
            .with_child("X", SemanticMapping::new())
            .with_child("Y", SemanticMapping::new());
        let yx = SemanticMapping::new()
            .with_child("Y", SemanticMapping::new())
            .with_child("X", SemanticMapping::new());

        assert_eq!(xy, yx);
        assert_eq!(
            diff_mappings(&xy, &yx).as_deref(),
            Some("[fail] X:: != Y::\n[fail] Y:: != X::")
        );
        assert_eq!(diff_mappings(&xy, &xy.clone()), None);
    }

    #[test]
    fn test_diff_mappings_sees_nested_tag_order() {
        let left = SemanticMapping::new().with_child(
            "A",
            SemanticMapping::new()
                .with_tag("a", TagSpec::new("?"))
                .with_tag("b", TagSpec::new("?")),
        );
        let right = SemanticMapping::new().with_child(
            "A",
            SemanticMapping::new()
                .with_tag("b", TagSpec::new("?"))
                .with_tag("a", TagSpec::new("?")),
        );

        let report = diff_mappings(&left, &right).unwrap();
        assert!(report.contains("  [fail] a~=? != b~=?"));
    }

    #[test]
    #[should_panic(expected = "Mapping comparison failed")]
    fn test_assert_mappings_eq_panics_on_reorder() {
        let left = SemanticMapping::new()
            .with_meta("a", "1")
            .with_meta("b", "2");
        let right = SemanticMapping::new()
            .with_meta("b", "2")
            .with_meta("a", "1");
        assert_mappings_eq(&left, &right);
    }
}
