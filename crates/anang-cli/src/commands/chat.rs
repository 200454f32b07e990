use std::io::Read;

use anang_chat::{Block, format_message, render_plain};
use anang_portal::{ChatPanel, render_message};
use anyhow::Context;
use serde::Serialize;

use crate::bootstrap::AppContext;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::cli::subcommands::ChatCommands;
use crate::output::output;
use crate::progress::Spinner;

#[derive(Serialize)]
struct AnswerResponse<'a> {
    question: &'a str,
    answer: &'a str,
    blocks: Vec<Block>,
}

/// Handle `anang chat ask`.
pub async fn handle(action: &ChatCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        ChatCommands::Ask { question } => ask(question, ctx, flags).await,
        ChatCommands::Format => format_stdin(flags),
    }
}

async fn ask(question: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut panel = ChatPanel::new(ctx.api.clone());
    let reply = Spinner::around("Thinking...", panel.send(question)).await?.cloned();
    let Some(reply) = reply else {
        anyhow::bail!("Question cannot be empty");
    };
    if let Some(error) = panel.error() {
        anyhow::bail!("{error}");
    }
    print_blocks(
        &AnswerResponse {
            question: question.trim(),
            answer: &reply.content,
            blocks: render_message(&reply),
        },
        flags.format,
    )
}

/// Handle `anang chat format`: format an assistant reply read from stdin.
pub fn format_stdin(flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut message = String::new();
    std::io::stdin()
        .read_to_string(&mut message)
        .context("failed to read stdin")?;
    print_blocks(
        &AnswerResponse {
            question: "",
            answer: &message,
            blocks: format_message(&message),
        },
        flags.format,
    )
}

/// Table mode prints the reply as terminal text instead of a grid.
fn print_blocks(response: &AnswerResponse<'_>, format: OutputFormat) -> anyhow::Result<()> {
    if format == OutputFormat::Table {
        println!("{}", render_plain(&response.blocks));
        return Ok(());
    }
    output(response, format)
}
