//! Small text utilities for prompt literals.

/// Strip per-line indentation from a template literal.
///
/// Trims surrounding whitespace from every line, then removes a single
/// leading and trailing newline so a multi-line literal can be written
/// indented in source but shipped flush-left:
///
/// ```
/// use apex_prompts::text::strip_indents;
///
/// let text = strip_indents("  first line\n  second line");
/// assert_eq!(text, "first line\nsecond line");
/// ```
pub fn strip_indents(value: &str) -> String {
    let stripped = value
        .lines()
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("\n");
    stripped
        .strip_prefix('\n')
        .unwrap_or(&stripped)
        .strip_suffix('\n')
        .map(str::to_string)
        .unwrap_or(stripped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_leading_whitespace_per_line() {
        assert_eq!(strip_indents("  a\n    b\n\tc"), "a\nb\nc");
    }

    #[test]
    fn strips_trailing_whitespace_per_line() {
        assert_eq!(strip_indents("a   \nb\t"), "a\nb");
    }

    #[test]
    fn preserves_interior_blank_lines() {
        assert_eq!(strip_indents("  a\n\n  b"), "a\n\nb");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(strip_indents(""), "");
    }

    #[test]
    fn single_unindented_line_unchanged() {
        assert_eq!(strip_indents("plain"), "plain");
    }
}
