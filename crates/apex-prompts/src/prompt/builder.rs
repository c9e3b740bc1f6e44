//! Structured prompt builder for tagged-block prompts.
//!
//! [`PromptBuilder`] provides a builder-pattern API for assembling prompts
//! made of XML-style tagged blocks (`<system_constraints>…</system_constraints>`)
//! interleaved with untagged paragraphs. This replaces manual string
//! concatenation with a structured, composable approach.

/// Builder for prompts composed of tagged blocks and raw paragraphs.
///
/// Blocks are joined with double newlines. Empty blocks (from `tag_if` with a
/// false condition, or `tag_opt` with `None`) are silently skipped.
///
/// # Example
///
/// ```
/// use apex_prompts::prompt::PromptBuilder;
///
/// let prompt = PromptBuilder::new("You are a helpful assistant.")
///     .tag("context", "Today is Monday.")
///     .tag_if(true, "active_feature", || "Feature X is enabled.".into())
///     .tag_opt("analytics", Some("Top result: ..."))
///     .tag_opt("missing", None::<String>)
///     .build();
///
/// assert!(prompt.contains("<context>"));
/// assert!(prompt.contains("<active_feature>"));
/// assert!(prompt.contains("</analytics>"));
/// assert!(!prompt.contains("<missing>"));
/// ```
pub struct PromptBuilder {
    blocks: Vec<String>,
}

impl PromptBuilder {
    /// Create a new builder with an initial untagged preamble.
    pub fn new(preamble: impl Into<String>) -> Self {
        Self {
            blocks: vec![preamble.into()],
        }
    }

    /// Append a tagged block: `<name>` on its own line, the content, then
    /// `</name>`.
    ///
    /// The content is emitted exactly as given; any indentation it carries is
    /// preserved. Skipped if `content` is empty.
    pub fn tag(mut self, name: &str, content: impl Into<String>) -> Self {
        let content = content.into();
        if !content.is_empty() {
            self.blocks.push(format!("<{name}>\n{content}\n</{name}>"));
        }
        self
    }

    /// Conditionally append a tagged block.
    ///
    /// The `content_fn` is only called when `condition` is true.
    pub fn tag_if(self, condition: bool, name: &str, content_fn: impl FnOnce() -> String) -> Self {
        if condition {
            self.tag(name, content_fn())
        } else {
            self
        }
    }

    /// Append a tagged block only if the content is `Some`.
    pub fn tag_opt(self, name: &str, content: Option<impl Into<String>>) -> Self {
        match content {
            Some(c) => self.tag(name, c),
            None => self,
        }
    }

    /// Append raw text without a surrounding tag.
    ///
    /// Skipped if `content` is empty.
    pub fn raw(mut self, content: impl Into<String>) -> Self {
        let content = content.into();
        if !content.is_empty() {
            self.blocks.push(content);
        }
        self
    }

    /// Conditionally append raw text.
    ///
    /// The `content_fn` is only called when `condition` is true.
    pub fn raw_if(self, condition: bool, content_fn: impl FnOnce() -> String) -> Self {
        if condition {
            self.raw(content_fn())
        } else {
            self
        }
    }

    /// Build the final prompt by joining all blocks with double newlines.
    pub fn build(self) -> String {
        self.blocks.join("\n\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preamble_only() {
        let prompt = PromptBuilder::new("You are an assistant.").build();
        assert_eq!(prompt, "You are an assistant.");
    }

    #[test]
    fn tag_wraps_content() {
        let prompt = PromptBuilder::new("Preamble")
            .tag("context", "Some context")
            .build();
        assert_eq!(prompt, "Preamble\n\n<context>\nSome context\n</context>");
    }

    #[test]
    fn tag_preserves_indentation() {
        let prompt = PromptBuilder::new("P")
            .tag("block", "  indented line")
            .build();
        assert!(prompt.contains("<block>\n  indented line\n</block>"));
    }

    #[test]
    fn empty_tag_skipped() {
        let prompt = PromptBuilder::new("Preamble")
            .tag("empty", "")
            .tag("present", "content")
            .build();
        assert!(!prompt.contains("empty"));
        assert!(prompt.contains("<present>"));
    }

    #[test]
    fn tag_if_true_included() {
        let prompt = PromptBuilder::new("Preamble")
            .tag_if(true, "active", || "active content".into())
            .build();
        assert!(prompt.contains("<active>"));
    }

    #[test]
    fn tag_if_false_excluded() {
        let prompt = PromptBuilder::new("Preamble")
            .tag_if(false, "inactive", || "should not appear".into())
            .build();
        assert!(!prompt.contains("inactive"));
    }

    #[test]
    fn tag_opt_some_included() {
        let prompt = PromptBuilder::new("Preamble")
            .tag_opt("optional", Some("present"))
            .build();
        assert!(prompt.contains("<optional>\npresent\n</optional>"));
    }

    #[test]
    fn tag_opt_none_excluded() {
        let prompt = PromptBuilder::new("Preamble")
            .tag_opt("missing", None::<String>)
            .build();
        assert!(!prompt.contains("missing"));
    }

    #[test]
    fn raw_appended_without_tag() {
        let prompt = PromptBuilder::new("Preamble")
            .raw("IMPORTANT: A bare rule.")
            .build();
        assert_eq!(prompt, "Preamble\n\nIMPORTANT: A bare rule.");
    }

    #[test]
    fn raw_if_true() {
        let prompt = PromptBuilder::new("P")
            .raw_if(true, || "raw content".into())
            .build();
        assert!(prompt.contains("raw content"));
    }

    #[test]
    fn raw_if_false() {
        let prompt = PromptBuilder::new("P")
            .raw_if(false, || "hidden".into())
            .build();
        assert!(!prompt.contains("hidden"));
    }

    #[test]
    fn empty_raw_skipped() {
        let prompt = PromptBuilder::new("P").raw("").build();
        assert_eq!(prompt, "P");
    }

    #[test]
    fn blocks_joined_in_order() {
        let prompt = PromptBuilder::new("Intro")
            .tag("first", "a")
            .raw("Between the tags.")
            .tag("second", "b")
            .build();
        assert_eq!(
            prompt,
            "Intro\n\n<first>\na\n</first>\n\nBetween the tags.\n\n<second>\nb\n</second>"
        );
    }
}
