//! Line-based text diffing
//!
//! Formatter output is compared as whole strings, but a failing `assert_eq!` on two
//! taxonomy texts prints them on one line each. These helpers report the differing
//! lines by number instead.

/// Assert that two texts are equal, panicking with a line-by-line report otherwise.
///
/// # Panics
///
/// Panics when the texts differ. The message lists every line that differs, is
/// missing from `actual`, or is extra in `actual`, followed by both full texts.
pub fn assert_text_eq(expected: &str, actual: &str) {
    if let Some(report) = diff_text(expected, actual) {
        panic!("\n\nText comparison failed.\n{}\n", report);
    }
}

/// Compare two texts line by line.
///
/// Returns `None` when they are equal and the difference report otherwise.
pub fn diff_text(expected: &str, actual: &str) -> Option<String> {
    if expected == actual {
        return None;
    }

    let expected_lines: Vec<&str> = expected.lines().collect();
    let actual_lines: Vec<&str> = actual.lines().collect();
    let len = expected_lines.len().max(actual_lines.len());

    let mut report = Vec::new();
    for index in 0..len {
        match (expected_lines.get(index), actual_lines.get(index)) {
            (Some(exp), Some(act)) if exp == act => {}
            (Some(exp), Some(act)) => {
                report.push(format!("Line {}: MISMATCH", index + 1));
                report.push(format!("  Expected: {exp:?}"));
                report.push(format!("  Actual:   {act:?}"));
            }
            (Some(exp), None) => {
                report.push(format!("Line {}: MISSING in actual", index + 1));
                report.push(format!("  Expected: {exp:?}"));
            }
            (None, Some(act)) => {
                report.push(format!("Line {}: EXTRA in actual", index + 1));
                report.push(format!("  Actual:   {act:?}"));
            }
            (None, None) => {}
        }
    }

    // Same lines, different line endings or a trailing newline.
    if report.is_empty() {
        report.push(format!(
            "Line endings differ: expected {:?}, actual {:?}",
            trailing(expected),
            trailing(actual)
        ));
    }

    Some(format!(
        "Text differs:\n{}\n\nExpected ({} lines):\n{}\n\nActual ({} lines):\n{}",
        report.join("\n"),
        expected_lines.len(),
        expected,
        actual_lines.len(),
        actual
    ))
}

fn trailing(text: &str) -> &str {
    let trimmed = text.trim_end_matches(['\n', '\r']);
    &text[trimmed.len()..]
}
