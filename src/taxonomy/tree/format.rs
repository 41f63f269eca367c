//! Canonical text form
//!
//!     A node formats as its header followed by its indented body:
//!
//!         Name::
//!           # node documentation
//!
//!           # tag documentation
//!           tag~=pattern
//!           multi*~=pattern
//!
//!           =alias
//!
//!           key=value
//!
//!           Child::
//!             ...
//!
//!     Every section is followed by one blank line and omitted when empty. The
//!     synthetic root has no header and formats its body at column zero, so the
//!     formatted tree parses back into the mapping it was built from. With `sort`,
//!     tags and children are ordered by name at every level.
//!
//!     When the last line is a section's blank line, the text ends with an extra
//!     newline. Line-oriented readers drop one final empty line, and the node doc
//!     only reaches the mapping when a blank line follows it.
//!
//! Limits
//!
//!     Tag patterns, meta values and doc lines are written verbatim. Source lines are
//!     cut at the first `" #"` and trimmed, so a value containing `" #"` reads back
//!     truncated, and whitespace around a value or doc line is lost. `tag~=a #b`
//!     parses as the pattern `a` followed by a line comment.

use super::node::{Node, Tree};
use super::tag::Tag;
use crate::taxonomy::config::FormattingConfig;
use std::fmt;

impl<'a> Node<'a> {
    /// Format this node and everything below it.
    pub fn format(&self, indent_width: usize, sort: bool) -> String {
        let lines = self.render(indent_width, sort);
        let mut text = lines.join("\n");
        if lines.last().is_some_and(|line| line.is_empty()) {
            text.push('\n');
        }
        text
    }

    fn render(&self, indent_width: usize, sort: bool) -> Vec<String> {
        if self.is_root() && self.name().is_empty() {
            return self.body(indent_width, sort);
        }

        let mut lines = vec![format!("{}::", self.name())];
        lines.extend(indent_lines(&self.body(indent_width, sort), indent_width));
        lines
    }

    fn body(&self, indent_width: usize, sort: bool) -> Vec<String> {
        let mut lines = Vec::new();

        if let Some(comment) = self.comment() {
            push_comment(&mut lines, comment);
            lines.push(String::new());
        }

        let mut tags: Vec<&Tag> = self.tags().iter().collect();
        if sort {
            tags.sort_by(|a, b| a.name().cmp(b.name()));
        }
        for tag in &tags {
            if let Some(comment) = tag.comment() {
                push_comment(&mut lines, comment);
            }
            lines.push(tag.source_line());
        }
        if !tags.is_empty() {
            lines.push(String::new());
        }

        for alias in self.aliases() {
            lines.push(format!("={}", alias));
        }
        if !self.aliases().is_empty() {
            lines.push(String::new());
        }

        for (key, value) in self.meta() {
            lines.push(format!("{}={}", key, value));
        }
        if !self.meta().is_empty() {
            lines.push(String::new());
        }

        let mut children: Vec<Node<'a>> = self.children().collect();
        if sort {
            children.sort_by(|a, b| a.name().cmp(b.name()));
        }
        for child in children {
            lines.extend(child.render(indent_width, sort));
        }

        lines
    }
}

fn push_comment(lines: &mut Vec<String>, comment: &str) {
    for line in comment.split('\n') {
        if line.is_empty() {
            lines.push("#".to_string());
        } else {
            lines.push(format!("# {}", line));
        }
    }
}

fn indent_lines(lines: &[String], indent_width: usize) -> Vec<String> {
    let prefix = " ".repeat(indent_width);
    lines
        .iter()
        .map(|line| {
            if line.trim().is_empty() {
                String::new()
            } else {
                format!("{}{}", prefix, line)
            }
        })
        .collect()
}

impl Tree {
    pub fn format(&self, indent_width: usize, sort: bool) -> String {
        self.root().format(indent_width, sort)
    }

    pub fn format_with(&self, config: &FormattingConfig) -> String {
        self.format(config.indent_width, config.sort)
    }
}

impl fmt::Display for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(2, true))
    }
}

impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.root(), f)
    }
}
