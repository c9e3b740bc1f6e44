//! HTML element allow-list for rich-text responses.
//!
//! The assistant renders its answers as markdown; the renderer sanitizes any
//! embedded HTML against this allow-list. The prompt enumerates the same list
//! so the model never emits an element the renderer would strip.

/// HTML elements the renderer keeps when sanitizing model output.
///
/// Order matters: the prompt enumerates the list in this exact order, and
/// assembly must stay byte-deterministic.
pub const ALLOWED_HTML_ELEMENTS: &[&str] = &[
    "a", "b", "blockquote", "br", "code", "dd", "del", "details", "div", "dl", "dt", "em", "h1",
    "h2", "h3", "h4", "h5", "h6", "hr", "i", "ins", "kbd", "li", "ol", "p", "pre", "q", "rp", "rt",
    "ruby", "s", "samp", "source", "span", "strike", "strong", "sub", "summary", "sup", "table",
    "tbody", "td", "tfoot", "th", "thead", "tr", "ul", "var",
];

/// Render the allow-list for inline enumeration in the prompt:
/// `<a>, <b>, <blockquote>, …`.
pub fn allowed_html_elements_inline() -> String {
    ALLOWED_HTML_ELEMENTS
        .iter()
        .map(|tag| format!("<{tag}>"))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_rendering_is_comma_separated_tags() {
        let rendered = allowed_html_elements_inline();
        assert!(rendered.starts_with("<a>, <b>, <blockquote>, "));
        assert!(rendered.ends_with(", <var>"));
        assert_eq!(
            rendered.matches(", ").count(),
            ALLOWED_HTML_ELEMENTS.len() - 1
        );
    }

    #[test]
    fn allow_list_has_no_duplicates() {
        let mut seen = std::collections::HashSet::new();
        for tag in ALLOWED_HTML_ELEMENTS {
            assert!(seen.insert(tag), "duplicate element: {tag}");
        }
    }

    #[test]
    fn structural_table_elements_included() {
        for tag in ["table", "thead", "tbody", "tr", "td", "th"] {
            assert!(ALLOWED_HTML_ELEMENTS.contains(&tag));
        }
    }
}
