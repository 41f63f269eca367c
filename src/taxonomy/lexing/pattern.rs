//! Tag pattern tokenization
//!
//! A tag pattern is a `|`-separated list of alternatives. Inside an alternative,
//! `{start..stop}` stands for every integer in the inclusive range; everything else is
//! literal text, including the wildcards `*` and `?`.
//!
//! The logos lexer produces the raw tokens; [`alternatives`] groups them into
//! [`Segment`] lists, one per alternative, merging adjacent literal runs.
use logos::Logos;

/// Raw tokens of a tag pattern
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum PatternToken {
    // Alternation
    #[token("|")]
    Bar,

    // Integer range, e.g. {1..6}
    #[regex(r"\{[0-9]+\.\.[0-9]+\}", parse_range)]
    Range((u64, u64)),

    // A brace that does not open a range is plain text
    #[token("{")]
    Brace,

    // Text content (catch-all for non-special characters)
    #[regex(r"[^|{]+")]
    Literal,
}

fn parse_range(lex: &mut logos::Lexer<PatternToken>) -> Option<(u64, u64)> {
    let inner = lex.slice().trim_start_matches('{').trim_end_matches('}');
    let (start, stop) = inner.split_once("..")?;
    Some((start.parse().ok()?, stop.parse().ok()?))
}

/// One piece of an alternative
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Range { start: u64, stop: u64 },
}

/// Tokenize a pattern, pairing every token with its byte span.
///
/// Slices the lexer rejects (a range whose bounds overflow `u64`) come back as
/// `Literal` so that no input text is ever dropped.
pub fn tokenize_pattern(pattern: &str) -> Vec<(PatternToken, logos::Span)> {
    let mut lexer = PatternToken::lexer(pattern);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let token = result.unwrap_or(PatternToken::Literal);
        tokens.push((token, lexer.span()));
    }

    tokens
}

/// Group a pattern into its alternatives.
///
/// There is always at least one alternative; an empty pattern is a single empty
/// alternative, and `a||b` has an empty one in the middle.
pub fn alternatives(pattern: &str) -> Vec<Vec<Segment>> {
    let mut result = Vec::new();
    let mut current: Vec<Segment> = Vec::new();

    for (token, span) in tokenize_pattern(pattern) {
        match token {
            PatternToken::Bar => result.push(std::mem::take(&mut current)),
            PatternToken::Range((start, stop)) => current.push(Segment::Range { start, stop }),
            PatternToken::Brace | PatternToken::Literal => {
                let text = &pattern[span];
                match current.last_mut() {
                    Some(Segment::Literal(previous)) => previous.push_str(text),
                    _ => current.push(Segment::Literal(text.to_string())),
                }
            }
        }
    }

    result.push(current);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn literal(text: &str) -> Segment {
        Segment::Literal(text.to_string())
    }

    #[test]
    fn test_tokenizes() {
        let tokens: Vec<_> = tokenize_pattern("A|B{1..3}")
            .into_iter()
            .map(|(t, _)| t)
            .collect();
        assert_eq!(
            tokens,
            vec![
                PatternToken::Literal,
                PatternToken::Bar,
                PatternToken::Literal,
                PatternToken::Range((1, 3)),
            ]
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(tokenize_pattern(""), vec![]);
        assert_eq!(alternatives(""), vec![Vec::<Segment>::new()]);
    }

    #[test]
    fn test_alternatives_with_ranges() {
        assert_eq!(
            alternatives("?|stage{1..6}x"),
            vec![
                vec![literal("?")],
                vec![
                    literal("stage"),
                    Segment::Range { start: 1, stop: 6 },
                    literal("x"),
                ],
            ]
        );
    }

    #[test]
    fn test_unclosed_brace_is_literal() {
        assert_eq!(alternatives("a{1..b"), vec![vec![literal("a{1..b")]]);
    }

    #[test]
    fn test_empty_alternative() {
        assert_eq!(
            alternatives("a||b"),
            vec![vec![literal("a")], vec![], vec![literal("b")]]
        );
    }

    #[test]
    fn test_overflowing_range_is_literal() {
        let pattern = "{1..99999999999999999999999}";
        assert_eq!(alternatives(pattern), vec![vec![literal(pattern)]]);
    }
}
