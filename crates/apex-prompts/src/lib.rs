//! System prompt assembly for the Apex.ai in-browser coding assistant.
//!
//! Apex.ai runs inside WebContainer — a browser-hosted Node.js runtime — and
//! answers with a single `<boltArtifact>` block of file and shell actions.
//! Everything the model needs to know about that environment, the response
//! format, and the design conventions to follow lives in one large system
//! prompt. This crate owns that prompt: the literal section texts, the three
//! values substituted into them, and the assembly that joins them into the
//! final string.
//!
//! Assembly is a pure function. Given the same working directory it returns a
//! byte-identical prompt, performs no I/O, and cannot fail — an unusual path
//! is interpolated as-is rather than rejected.
//!
//! # Getting started
//!
//! ```
//! use apex_prompts::prompt::{default_system_prompt, system_prompt};
//!
//! // Default working directory (`/home/project`).
//! let prompt = default_system_prompt();
//! assert!(prompt.contains("The current working directory is `/home/project`."));
//!
//! // Or point the assistant at a different project root.
//! let prompt = system_prompt("/workspace/demo");
//! assert!(prompt.contains("The current working directory is `/workspace/demo`."));
//! ```
//!
//! Wrap the result as a chat message when building an API payload:
//!
//! ```
//! use apex_prompts::Message;
//! use apex_prompts::prompt::default_system_prompt;
//!
//! let msg = Message::system(default_system_prompt());
//! ```
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`prompt`] | [`PromptBuilder`](prompt::PromptBuilder), section texts, and the [`system_prompt`](prompt::system_prompt) / [`continue_prompt`](prompt::continue_prompt) entry points |
//! | [`markdown`] | HTML element allow-list enumerated in the prompt |
//! | [`message`] | [`Message`] / [`MessageRole`] chat payload types |
//! | [`text`] | [`strip_indents`](text::strip_indents) template dedenting |

pub mod markdown;
pub mod message;
pub mod prompt;
pub mod text;

pub use message::{Message, MessageRole};

// ── Constants ──────────────────────────────────────────────────────

/// Name of the project directory inside WebContainer.
pub const WORK_DIR_NAME: &str = "project";

/// Default working directory substituted into the prompt: `/home/project`.
pub const WORK_DIR: &str = "/home/project";

/// Tag wrapping user-made file modifications at the start of a user message.
pub const MODIFICATIONS_TAG_NAME: &str = "bolt_file_modifications";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn work_dir_is_rooted_at_work_dir_name() {
        assert_eq!(WORK_DIR, format!("/home/{WORK_DIR_NAME}"));
    }

    #[test]
    fn modifications_tag_is_a_valid_element_name() {
        assert!(
            MODIFICATIONS_TAG_NAME
                .chars()
                .all(|c| c.is_ascii_lowercase() || c == '_')
        );
    }
}
