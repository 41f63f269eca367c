//! Line splitting
//!
//! Splits raw source lines into indentation and content. Both functions are total:
//! every input, including the empty string, produces a result.

/// Separator between a line's content and its trailing comment.
pub const LINE_COMMENT_DELIMITER: &str = " #";

/// Split a line into its leading run of spaces/tabs and the remaining content.
///
/// The indentation is kept verbatim. Levels are compared as strings, so a tab and
/// four spaces are different levels.
pub fn split_line(line: &str) -> (&str, &str) {
    let content_start = line
        .find(|c: char| c != ' ' && c != '\t')
        .unwrap_or(line.len());
    line.split_at(content_start)
}

/// Split trailing `" #"` comments off a line's content.
///
/// Only the first delimiter counts; everything after it belongs to the comment.
pub fn split_line_comment(content: &str) -> (&str, Option<&str>) {
    match content.split_once(LINE_COMMENT_DELIMITER) {
        Some((head, comment)) => (head.trim_end(), Some(comment.trim())),
        None => (content, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_line_spaces() {
        assert_eq!(split_line("    Foo::"), ("    ", "Foo::"));
    }

    #[test]
    fn test_split_line_mixed_whitespace() {
        assert_eq!(split_line("\t  tag~=A"), ("\t  ", "tag~=A"));
    }

    #[test]
    fn test_split_line_empty() {
        assert_eq!(split_line(""), ("", ""));
    }

    #[test]
    fn test_split_line_whitespace_only() {
        assert_eq!(split_line("   "), ("   ", ""));
    }

    #[test]
    fn test_split_line_keeps_inner_whitespace() {
        assert_eq!(split_line("  key = some value"), ("  ", "key = some value"));
    }

    #[test]
    fn test_split_line_comment() {
        assert_eq!(
            split_line_comment("tag~=A|B # trailing"),
            ("tag~=A|B", Some("trailing"))
        );
    }

    #[test]
    fn test_split_line_comment_first_delimiter_wins() {
        assert_eq!(
            split_line_comment("Foo:: # one # two"),
            ("Foo::", Some("one # two"))
        );
    }

    #[test]
    fn test_split_line_comment_requires_space() {
        assert_eq!(split_line_comment("key=a#b"), ("key=a#b", None));
    }
}
