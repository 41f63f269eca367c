//! Line-level expressions
//!
//! The grammar is closed: every source line becomes exactly one of these variants
//! (a trailing line comment adds a [`Expression::LineComment`] in front of it).

use std::fmt;

/// One recognized line of a taxonomy source
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    /// `# text` on its own line
    Comment(String),
    /// `content # text` trailing comment
    LineComment(String),
    /// Empty or whitespace-only line
    Blank,
    /// `Name::`
    NodeHeader(String),
    /// `name~=pattern` or `name*~=pattern`
    TagDecl {
        name: String,
        multi: bool,
        pattern: String,
    },
    /// `key=value`
    MetaDecl { key: String, value: String },
    /// `=alias`
    AliasDecl(String),
}

impl Expression {
    pub fn comment(text: impl Into<String>) -> Self {
        Expression::Comment(text.into())
    }

    pub fn line_comment(text: impl Into<String>) -> Self {
        Expression::LineComment(text.into())
    }

    pub fn node(name: impl Into<String>) -> Self {
        Expression::NodeHeader(name.into())
    }

    pub fn tag(name: impl Into<String>, pattern: impl Into<String>) -> Self {
        Expression::TagDecl {
            name: name.into(),
            multi: false,
            pattern: pattern.into(),
        }
    }

    pub fn multi_tag(name: impl Into<String>, pattern: impl Into<String>) -> Self {
        Expression::TagDecl {
            name: name.into(),
            multi: true,
            pattern: pattern.into(),
        }
    }

    pub fn meta(key: impl Into<String>, value: impl Into<String>) -> Self {
        Expression::MetaDecl {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn alias(name: impl Into<String>) -> Self {
        Expression::AliasDecl(name.into())
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Expression::Blank)
    }

    pub fn is_node_header(&self) -> bool {
        matches!(self, Expression::NodeHeader(_))
    }

    /// Grammar name of the variant, as used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Expression::Comment(_) => "Comment",
            Expression::LineComment(_) => "LineComment",
            Expression::Blank => "Blank",
            Expression::NodeHeader(_) => "NodeHeader",
            Expression::TagDecl { .. } => "TagDecl",
            Expression::MetaDecl { .. } => "MetaDecl",
            Expression::AliasDecl(_) => "AliasDecl",
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Comment(text) | Expression::LineComment(text) => {
                write!(f, "<{} {:?}>", self.kind(), text)
            }
            Expression::Blank => write!(f, "<Blank>"),
            Expression::NodeHeader(name) | Expression::AliasDecl(name) => {
                write!(f, "<{} {:?}>", self.kind(), name)
            }
            Expression::TagDecl {
                name,
                multi,
                pattern,
            } => {
                let marker = if *multi { "*" } else { "" };
                write!(f, "<TagDecl {:?}{} {:?}>", name, marker, pattern)
            }
            Expression::MetaDecl { key, value } => write!(f, "<MetaDecl {:?} {:?}>", key, value),
        }
    }
}
