//! Line grammar
//!
//! Classifies the content of one line (indentation already removed) into an
//! [`Expression`]. Rules are regexes tried in declaration order; the first match wins.
//!
//! The rule order:
//! 1. comment (`# text`, checked before line comments are split off)
//! 2. node header (`Name::`)
//! 3. tag (`name~=pattern`, `name*~=pattern`)
//! 4. alias (`=name`)
//! 5. blank (empty or whitespace only)
//! 6. meta (`key=value`, the catch-all)
//!
//! Line comment extraction happens between 1 and 2, in the builder, because it adds an
//! expression of its own.

use crate::taxonomy::ast::Expression;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Grammar rules as (name, regex) pairs, in matching order
pub const GRAMMAR_RULES: &[(&str, &str)] = &[
    ("node", r"^([a-zA-Z0-9_-]+)::$"),
    ("tag", r"^([a-zA-Z0-9:_.-]+)([*]?)\s*~=\s*(.*)$"),
    ("alias", r"^=(\w+)$"),
    ("blank", r"^\s*$"),
    ("meta", r"^([a-zA-Z0-9:_.-]+)\s*=\s*(.*)$"),
];

/// Compiled rules, same order as [`GRAMMAR_RULES`]
static COMPILED_RULES: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    GRAMMAR_RULES
        .iter()
        .map(|(name, pattern)| (*name, Regex::new(pattern).unwrap()))
        .collect()
});

fn group(captures: &Captures, index: usize) -> String {
    captures
        .get(index)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

fn build(rule: &str, captures: &Captures) -> Option<Expression> {
    let expression = match rule {
        "node" => Expression::NodeHeader(group(captures, 1)),
        "tag" => Expression::TagDecl {
            name: group(captures, 1),
            multi: group(captures, 2) == "*",
            pattern: group(captures, 3),
        },
        "alias" => Expression::AliasDecl(group(captures, 1)),
        "blank" => Expression::Blank,
        "meta" => Expression::MetaDecl {
            key: group(captures, 1),
            value: group(captures, 2),
        },
        _ => return None,
    };
    Some(expression)
}

/// Match the content of a line against the rules that follow comment handling.
///
/// Returns `None` when no rule matches.
pub fn recognize(content: &str) -> Option<Expression> {
    COMPILED_RULES.iter().find_map(|(rule, regex)| {
        regex
            .captures(content)
            .and_then(|captures| build(rule, &captures))
    })
}

/// Recognize a full-line comment, returning its trimmed text.
pub fn recognize_comment(content: &str) -> Option<Expression> {
    content
        .strip_prefix('#')
        .map(|text| Expression::Comment(text.trim().to_string()))
}
