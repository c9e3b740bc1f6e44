//! Assembly of the Apex.ai system prompt.
//!
//! The prompt is a fixed sequence of tagged blocks (`<system_constraints>`,
//! `<diff_spec>`, `<artifact_info>`, …) interleaved with a handful of untagged
//! rule paragraphs. [`system_prompt`] assembles the sequence with
//! [`PromptBuilder`], substituting three values into the template:
//!
//! 1. the working directory (caller-supplied, default [`WORK_DIR`](crate::WORK_DIR)),
//! 2. the modifications tag name ([`MODIFICATIONS_TAG_NAME`](crate::MODIFICATIONS_TAG_NAME)),
//! 3. the rendered HTML element allow-list ([`crate::markdown`]).
//!
//! Assembly is pure and deterministic: no I/O, no validation, no error
//! conditions. The working directory is interpolated as-is.

pub mod builder;
mod sections;

pub use builder::PromptBuilder;

use crate::text::strip_indents;
use tracing::debug;

/// Assemble the full system prompt for the given working directory.
///
/// The path is substituted verbatim into the `artifact_info` section, yielding
/// the literal sentence ``The current working directory is `{cwd}`.`` — no
/// normalization or validation is applied.
pub fn system_prompt(cwd: &str) -> String {
    let prompt = PromptBuilder::new(sections::PREAMBLE)
        .tag("technical_expertise", sections::TECHNICAL_EXPERTISE)
        .tag("next_js_best_practices", sections::NEXT_JS_BEST_PRACTICES)
        .tag("project_structure", sections::PROJECT_STRUCTURE)
        .tag("system_constraints", sections::SYSTEM_CONSTRAINTS)
        .tag("code_formatting_info", sections::CODE_FORMATTING_INFO)
        .tag("message_formatting_info", sections::message_formatting_info())
        .tag("diff_spec", sections::diff_spec())
        .tag("artifact_info", sections::artifact_info(cwd))
        .raw(sections::NO_ARTIFACT_WORD_RULE)
        .raw(sections::MARKDOWN_ONLY_RULE)
        .raw(sections::BREVITY_RULE)
        .raw(sections::ARTIFACT_FIRST_RULE)
        .raw(sections::EXAMPLES_PREFACE)
        .tag("examples", sections::EXAMPLES)
        .tag("code_quality_standards", sections::CODE_QUALITY_STANDARDS)
        .tag("design_system", sections::DESIGN_SYSTEM)
        .tag("modern_ui_patterns", sections::MODERN_UI_PATTERNS)
        .tag("accessibility_standards", sections::ACCESSIBILITY_STANDARDS)
        .tag("continue_prompt", sections::CONTINUATION_GUIDANCE)
        .build();

    debug!("assembled system prompt: {} chars, cwd={}", prompt.len(), cwd);
    prompt
}

/// [`system_prompt`] with the default working directory, [`crate::WORK_DIR`].
pub fn default_system_prompt() -> String {
    system_prompt(crate::WORK_DIR)
}

/// The standalone continuation prompt, sent when the model's previous response
/// was cut off mid-generation.
///
/// Same text as the `<continue_prompt>` section of the system prompt, dedented
/// for use as a direct user message.
pub fn continue_prompt() -> String {
    strip_indents(sections::CONTINUATION_GUIDANCE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::allowed_html_elements_inline;
    use crate::{MODIFICATIONS_TAG_NAME, WORK_DIR};

    #[test]
    fn substitutes_working_directory() {
        let prompt = system_prompt("/home/project");
        assert!(prompt.contains("The current working directory is `/home/project`."));
    }

    #[test]
    fn substitutes_custom_working_directory() {
        let prompt = system_prompt("/tmp/scratch");
        assert!(prompt.contains("The current working directory is `/tmp/scratch`."));
        assert!(!prompt.contains("The current working directory is `/home/project`."));
    }

    #[test]
    fn empty_working_directory_interpolated_as_is() {
        let prompt = system_prompt("");
        assert!(prompt.contains("The current working directory is ``."));
    }

    #[test]
    fn default_matches_explicit_work_dir() {
        assert_eq!(default_system_prompt(), system_prompt(WORK_DIR));
    }

    #[test]
    fn deterministic_for_equal_input() {
        assert_eq!(system_prompt("/home/project"), system_prompt("/home/project"));
    }

    #[test]
    fn contains_full_html_allow_list() {
        let prompt = system_prompt(WORK_DIR);
        let rendered = allowed_html_elements_inline();
        assert!(prompt.contains(&rendered));
        assert!(rendered.starts_with("<a>, <b>, "));
    }

    #[test]
    fn contains_modifications_tag() {
        let prompt = system_prompt(WORK_DIR);
        assert!(prompt.contains(&format!("<{MODIFICATIONS_TAG_NAME}>")));
        assert!(prompt.contains(&format!("</{MODIFICATIONS_TAG_NAME}>")));
    }

    #[test]
    fn opens_with_identity_preamble() {
        let prompt = system_prompt(WORK_DIR);
        assert!(prompt.starts_with("You are Apex.ai, an expert AI assistant"));
    }

    #[test]
    fn sections_appear_in_template_order() {
        let prompt = system_prompt(WORK_DIR);
        let order = [
            "<technical_expertise>",
            "<next_js_best_practices>",
            "<project_structure>",
            "<system_constraints>",
            "<code_formatting_info>",
            "<message_formatting_info>",
            "<diff_spec>",
            "<artifact_info>",
            "<examples>",
            "<code_quality_standards>",
            "<design_system>",
            "<modern_ui_patterns>",
            "<accessibility_standards>",
            "<continue_prompt>",
        ];
        let positions: Vec<usize> = order
            .iter()
            .map(|tag| prompt.find(tag).unwrap_or_else(|| panic!("missing {tag}")))
            .collect();
        assert!(
            positions.windows(2).all(|w| w[0] < w[1]),
            "sections out of order"
        );
    }

    #[test]
    fn tags_are_balanced() {
        let prompt = system_prompt(WORK_DIR);
        for tag in [
            "technical_expertise",
            "system_constraints",
            "diff_spec",
            "artifact_info",
            "artifact_instructions",
            "examples",
            "continue_prompt",
        ] {
            assert!(prompt.contains(&format!("<{tag}>")), "missing open <{tag}>");
            assert!(
                prompt.contains(&format!("</{tag}>")),
                "missing close </{tag}>"
            );
        }
    }

    #[test]
    fn untagged_rules_present() {
        let prompt = system_prompt(WORK_DIR);
        assert!(prompt.contains("NEVER use the word \"artifact\"."));
        assert!(prompt.contains("IMPORTANT: Use valid markdown only"));
        assert!(prompt.contains("ULTRA IMPORTANT: Do NOT be verbose"));
        assert!(prompt.contains("ULTRA IMPORTANT: Think first"));
        assert!(prompt.contains("Here are some examples of correct usage of artifacts:"));
    }

    #[test]
    fn webcontainer_constraints_survive_assembly() {
        let prompt = system_prompt(WORK_DIR);
        assert!(prompt.contains("WebContainer, an in-browser Node.js runtime"));
        assert!(prompt.contains("There is NO `pip` support!"));
        assert!(prompt.contains("IMPORTANT: Git is NOT available."));
        assert!(prompt.contains("Available shell commands: cat, chmod, cp, echo,"));
    }

    #[test]
    fn continue_prompt_is_dedented() {
        let text = continue_prompt();
        assert!(text.starts_with("Continue your prior response."));
        assert!(text.lines().all(|l| !l.starts_with(' ')));
        assert!(text.contains("Do not repeat any content"));
    }
}
