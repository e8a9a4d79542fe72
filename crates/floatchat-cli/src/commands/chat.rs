/// Interactive chat session handler
use anyhow::Result;
use floatchat_core::{
    prompts::{suggested_prompt, SUGGESTED_PROMPTS},
    ChatMessage, Config, DashboardPage, SubmitError, TurnOutcome,
};
use tokio::io::{AsyncBufReadExt, BufReader};

use super::{dashboard::print_dashboard, helpers::format_message};

#[derive(Debug, PartialEq, Eq)]
pub enum ChatInput<'a> {
    Quit,
    Dashboard,
    Hints,
    /// Send the numbered suggested prompt
    Hint(usize),
    Message(&'a str),
    Unknown(&'a str),
}

pub fn parse_input(line: &str) -> ChatInput<'_> {
    let trimmed = line.trim();
    let Some(command) = trimmed.strip_prefix('/') else {
        return ChatInput::Message(line);
    };

    let mut parts = command.split_whitespace();
    match (parts.next(), parts.next()) {
        (Some("quit" | "exit"), None) => ChatInput::Quit,
        (Some("dashboard"), None) => ChatInput::Dashboard,
        (Some("hints"), None) => ChatInput::Hints,
        (Some("ask"), Some(number)) => number
            .parse()
            .map_or(ChatInput::Unknown(trimmed), ChatInput::Hint),
        _ => ChatInput::Unknown(trimmed),
    }
}

fn print_hints() {
    println!("Try asking about:");
    for (i, prompt) in SUGGESTED_PROMPTS.iter().enumerate() {
        println!("  {}. {}", i + 1, prompt.label);
    }
    println!("Send one with /ask <number>.");
}

async fn send_turn(page: &mut DashboardPage, text: &str) {
    println!("{}", format_message(&ChatMessage::pending()));
    match page.send(text).await {
        Ok(outcome) => {
            if let Some(reply) = page.conversation().messages().last() {
                println!("{}", format_message(reply));
            }
            if let TurnOutcome::Faulted(fault) = outcome {
                log::warn!("Reply failed: {fault}");
            }
        }
        Err(SubmitError::EmptyInput) => {}
        Err(e) => println!("Cannot send right now: {e}"),
    }
}

pub async fn chat_command(config: &Config) -> Result<()> {
    let mut page = DashboardPage::from_config(config)?;
    let mut annotation = page.conversation().annotation().view();

    for message in page.conversation().messages() {
        println!("{}", format_message(message));
    }
    println!("(/hints for suggestions, /dashboard to view the dashboard, /quit to exit)");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match parse_input(&line) {
            ChatInput::Quit => break,
            ChatInput::Dashboard => print_dashboard(page.dashboard_mut()),
            ChatInput::Hints => print_hints(),
            ChatInput::Hint(number) => match suggested_prompt(number) {
                Some(prompt) => {
                    println!("{}", format_message(&ChatMessage::user(prompt.question)));
                    send_turn(&mut page, prompt.question).await;
                }
                None => println!("No suggestion #{number}. Use /hints to list them."),
            },
            ChatInput::Message(text) if text.trim().is_empty() => {}
            ChatInput::Message(text) => send_turn(&mut page, text).await,
            ChatInput::Unknown(command) => println!("Unknown command: {command}"),
        }

        if let Some(query) = annotation.take_changed() {
            println!("Dashboard updated. Query: {query}");
        }
    }

    Ok(())
}
