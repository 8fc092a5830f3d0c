//! Input line parsing for the terminal client.

use folio_core::chat::SUGGESTIONS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Plain text to submit.
    Prompt(String),
    /// `/suggest` lists suggestions; `/suggest N` (1-based) sends one.
    Suggest(Option<usize>),
    Projects,
    Open(String),
    Close,
    Quit,
    Invalid(String),
}

pub fn parse_command(line: &str) -> Command {
    let line = line.trim();
    let Some(rest) = line.strip_prefix('/') else {
        return Command::Prompt(line.to_string());
    };

    let mut parts = rest.split_whitespace();
    let name = parts.next().unwrap_or_default();
    let arg = parts.next();
    let extra = parts.next().is_some();

    match (name, arg, extra) {
        ("suggest", None, _) => Command::Suggest(None),
        ("suggest", Some(n), false) => match n.parse::<usize>() {
            Ok(n) if (1..=SUGGESTIONS.len()).contains(&n) => Command::Suggest(Some(n - 1)),
            _ => Command::Invalid(format!(
                "suggestion must be a number from 1 to {}",
                SUGGESTIONS.len()
            )),
        },
        ("projects", None, _) => Command::Projects,
        ("open", Some(slug), false) => Command::Open(slug.to_string()),
        ("open", None, _) => Command::Invalid("usage: /open <slug>".to_string()),
        ("close", None, _) => Command::Close,
        ("quit" | "exit", None, _) => Command::Quit,
        _ => Command::Invalid(format!("unknown command: {line}")),
    }
}
