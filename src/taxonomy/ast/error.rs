//! Error types for parsing and AST lowering

use std::fmt;

/// Errors that can occur while parsing a taxonomy source or lowering its syntax tree
///
/// Line numbers are 1-based. Every kind aborts the whole parse; there are no partial
/// results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParserError {
    /// The line content matches none of the grammar rules
    UnmatchedLine { line: usize, text: String },
    /// Indentation increased without a preceding node header
    UnexpectedIndent {
        line: usize,
        text: String,
        /// Description of the previous non-blank item, if there was one
        previous: Option<String>,
    },
    /// Indentation decreased to a level that was never opened
    IllegalDedent { line: usize, text: String },
    /// The lowering stage met a tree shape the grammar cannot produce
    Internal { message: String },
}

impl ParserError {
    /// The 1-based source line the error points at, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            ParserError::UnmatchedLine { line, .. }
            | ParserError::UnexpectedIndent { line, .. }
            | ParserError::IllegalDedent { line, .. } => Some(*line),
            ParserError::Internal { .. } => None,
        }
    }

    /// The error message followed by the numbered source lines around it.
    pub fn render(&self, source: &str) -> String {
        match self.line() {
            Some(line) => format!("{}\n\n{}", self, format_source_context(source, line)),
            None => self.to_string(),
        }
    }
}

impl fmt::Display for ParserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParserError::UnmatchedLine { line, text } => {
                write!(f, "Can not parse line {}: {:?}", line, text)
            }
            ParserError::UnexpectedIndent {
                line,
                text,
                previous,
            } => {
                writeln!(f, "Unexpected indent in line {}: {:?}", line, text)?;
                match previous {
                    Some(previous) => write!(f, "Previous non-empty token was {}.", previous),
                    None => write!(f, "There is no previous non-empty token."),
                }
            }
            ParserError::IllegalDedent { line, text } => {
                write!(
                    f,
                    "Dedent beyond initial indentation in line {}: {:?}",
                    line, text
                )
            }
            ParserError::Internal { message } => write!(f, "Internal error: {}", message),
        }
    }
}

impl std::error::Error for ParserError {}

/// Type alias for parser results
pub type ParserResult<T> = Result<T, ParserError>;

/// Format source code context around a 1-based error line
///
/// Shows 2 lines before the error, the error line with >> marker, and 2 lines after.
pub fn format_source_context(source: &str, line: usize) -> String {
    let lines: Vec<&str> = source.lines().collect();
    let error_line = line.saturating_sub(1);

    let start_line = error_line.saturating_sub(2);
    let end_line = (error_line + 3).min(lines.len());

    let mut context = String::new();

    for (line_num, text) in lines.iter().enumerate().take(end_line).skip(start_line) {
        let marker = if line_num == error_line { ">>" } else { "  " };
        context.push_str(&format!("{} {:3} | {}\n", marker, line_num + 1, text));
    }

    context
}
