//! Tags
//!
//! A tag is a named annotation an object classified under a node may carry. Its pattern
//! spells out the legal values:
//!
//!     part~=?|head|tail       presence flag, or one of two literal values
//!     nauplius~=?|{1..6}      presence flag, or a stage number from 1 to 6
//!     like~=*                 any free value
//!
//! [`expand`] enumerates a pattern; [`Tag::matches`] answers the substring queries used
//! for tag completion, yielding `name=value` candidates.

use crate::taxonomy::building::TagSpec;
use crate::taxonomy::lexing::{alternatives, Segment};
use once_cell::sync::OnceCell;

/// Wildcard part accepting any value
pub const ANY_VALUE: &str = "*";
/// Wildcard part marking a presence flag
pub const FLAG: &str = "?";

/// Expand a pattern into its concrete parts.
///
/// Alternatives are expanded in declaration order. Within an alternative, every range
/// token is substituted by each integer of its inclusive range, the leftmost range
/// varying slowest. Duplicates are kept.
pub fn expand(pattern: &str) -> Vec<String> {
    alternatives(pattern)
        .iter()
        .flat_map(|segments| expand_alternative(segments))
        .collect()
}

fn expand_alternative(segments: &[Segment]) -> Vec<String> {
    let mut results = vec![String::new()];

    for segment in segments {
        results = match segment {
            Segment::Literal(text) => results
                .into_iter()
                .map(|mut prefix| {
                    prefix.push_str(text);
                    prefix
                })
                .collect(),
            Segment::Range { start, stop } => results
                .iter()
                .flat_map(|prefix| (*start..=*stop).map(move |value| format!("{prefix}{value}")))
                .collect(),
        };
    }

    results
}

/// A declared tag of a node
#[derive(Debug, Clone)]
pub struct Tag {
    name: String,
    pattern: String,
    multi: bool,
    comment: Option<String>,
    parts: OnceCell<Vec<String>>,
}

impl Tag {
    pub fn new(name: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pattern: pattern.into(),
            multi: false,
            comment: None,
            parts: OnceCell::new(),
        }
    }

    pub fn multi(mut self) -> Self {
        self.multi = true;
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn from_spec(name: impl Into<String>, spec: &TagSpec) -> Self {
        Self {
            name: name.into(),
            pattern: spec.pattern.clone(),
            multi: spec.multi,
            comment: spec.doc.clone(),
            parts: OnceCell::new(),
        }
    }

    pub fn to_spec(&self) -> TagSpec {
        TagSpec {
            pattern: self.pattern.clone(),
            multi: self.multi,
            doc: self.comment.clone(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn is_multi(&self) -> bool {
        self.multi
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// The expanded pattern, computed on first access.
    pub fn parts(&self) -> &[String] {
        self.parts.get_or_init(|| expand(&self.pattern))
    }

    /// The parts as stored values: the any-value wildcard becomes the empty string.
    pub fn values(&self) -> Vec<&str> {
        self.parts()
            .iter()
            .map(|part| if part == ANY_VALUE { "" } else { part.as_str() })
            .collect()
    }

    /// Case-insensitive completion candidates for `query`.
    ///
    /// When the tag name contains the query every part is offered (`name=` for `*`,
    /// `name` and `name=no` for `?`, `name=part` otherwise); then every part that
    /// contains the query is offered as `name=part`. Candidates are not deduplicated.
    pub fn matches<'a>(&'a self, query: &str) -> impl Iterator<Item = String> + 'a {
        let query = query.to_lowercase();
        let by_name = self.name.to_lowercase().contains(&query);
        let name = self.name.as_str();

        let name_matches = self
            .parts()
            .iter()
            .filter(move |_| by_name)
            .flat_map(move |part| match part.as_str() {
                ANY_VALUE => vec![format!("{name}=")],
                FLAG => vec![name.to_string(), format!("{name}=no")],
                _ => vec![format!("{name}={part}")],
            });

        let part_matches = self
            .parts()
            .iter()
            .filter(move |part| part.to_lowercase().contains(&query))
            .map(move |part| format!("{name}={part}"));

        name_matches.chain(part_matches)
    }

    /// The declaration line without indentation, e.g. `view*~=lateral|dorsal`.
    pub fn source_line(&self) -> String {
        let marker = if self.multi { "*" } else { "" };
        format!("{}{}~={}", self.name, marker, self.pattern)
    }
}

impl PartialEq for Tag {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.pattern == other.pattern
            && self.multi == other.multi
            && self.comment == other.comment
    }
}

impl Eq for Tag {}
