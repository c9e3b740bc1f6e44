//! Print the Apex.ai system prompt to stdout.
//!
//! Useful for inspecting the exact prompt a given working directory produces,
//! diffing prompt revisions, or piping a ready-made message payload into API
//! tooling.
//!
//! # Examples
//!
//! ```sh
//! # Full system prompt for the default working directory
//! apex-prompt
//!
//! # Point the assistant at a different project root
//! apex-prompt --workdir /workspace/demo
//!
//! # Ready-to-send JSON chat message
//! apex-prompt --json
//!
//! # Continuation prompt (sent when a response was cut off)
//! apex-prompt --continuation
//! ```

use apex_prompts::prompt::{continue_prompt, system_prompt};
use apex_prompts::{Message, WORK_DIR};
use clap::Parser;
use std::process;
use tracing::Level;

/// Print the Apex.ai system prompt to stdout.
#[derive(Parser)]
#[command(name = "apex-prompt")]
struct Cli {
    /// Working directory substituted into the prompt
    #[arg(long, default_value = WORK_DIR)]
    workdir: String,

    /// Print the continuation prompt instead of the system prompt
    #[arg(long)]
    continuation: bool,

    /// Emit the prompt as a JSON chat message instead of plain text
    #[arg(long)]
    json: bool,

    /// Log assembly details to stderr
    #[arg(long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .init();

    // The continuation prompt goes out as a user message; the system prompt
    // as a system message.
    let message = if cli.continuation {
        Message::user(continue_prompt())
    } else {
        Message::system(system_prompt(&cli.workdir))
    };

    if cli.json {
        match serde_json::to_string_pretty(&message) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error: failed to serialize message: {e}");
                process::exit(1);
            }
        }
    } else {
        println!("{}", message.content);
    }
}
