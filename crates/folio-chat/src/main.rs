use std::io::Write;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use folio_chat::command::{Command, parse_command};
use folio_chat::relay::{DEFAULT_ENDPOINT, RelayClient};
use folio_chat::session::{ChatObserver, ChatSession};
use folio_core::chat::SUGGESTIONS;
use folio_core::focus::{FocusControl, ProjectFocus};
use folio_core::models::message::Message;
use folio_core::models::portfolio::Project;

/// Chat with a portfolio agent from the terminal.
#[derive(Parser)]
#[command(name = "folio-chat")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Base URL of the folio server.
    #[arg(short, long, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    #[arg(short, long)]
    verbose: bool,
}

struct TerminalObserver;

impl ChatObserver for TerminalObserver {
    fn on_chunk(&mut self, text: &str) {
        print!("{text}");
        let _ = std::io::stdout().flush();
    }

    fn on_message(&mut self, _message: &Message) {
        println!();
    }

    fn on_error(&mut self, error: &str) {
        println!();
        eprintln!("error: {error}");
    }
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(default_level.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut session = ChatSession::new(RelayClient::new(cli.endpoint));
    let mut focus = ProjectFocus::new();
    let mut observer = TerminalObserver;

    for message in session.view().transcript() {
        println!("{}", message.text());
    }
    println!("Type a question, /suggest, /projects, /open <slug>, /close or /quit.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        match focus.selected() {
            Some(slug) => print!("[{slug}]> "),
            None => print!("> "),
        }
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match parse_command(&line) {
            Command::Prompt(text) => {
                session.send(&text, &mut observer).await;
            }
            Command::Suggest(None) => {
                for (i, suggestion) in SUGGESTIONS.iter().enumerate() {
                    println!("  {}. {suggestion}", i + 1);
                }
            }
            Command::Suggest(Some(index)) => {
                if session.apply_suggestion(index) {
                    println!("> {}", session.view().input());
                    session.submit(&mut observer).await;
                }
            }
            Command::Projects => match session.relay().fetch_projects().await {
                Ok(entries) => {
                    for entry in entries {
                        println!("  {:<16} {}", entry.slug, entry.project.tagline);
                    }
                }
                Err(e) => eprintln!("error: {e}"),
            },
            Command::Open(slug) => match session.relay().fetch_project(&slug).await {
                Ok(project) => {
                    focus.open(&slug);
                    print_project(&project);
                }
                Err(e) => eprintln!("error: {e}"),
            },
            Command::Close => focus.close(),
            Command::Quit => break,
            Command::Invalid(message) => eprintln!("{message}"),
        }
    }

    Ok(())
}

fn print_project(project: &Project) {
    println!("{} - {}", project.title, project.tagline);
    println!("  Situation: {}", project.situation);
    println!("  Task:      {}", project.task);
    for step in &project.action {
        println!("  * {step}");
    }
    println!(
        "  Result:    {}{} {}",
        project.result.metric, project.result.suffix, project.result.label
    );
    if !project.github.is_empty() {
        println!("  {}", project.github);
    }
    if !project.demo.is_empty() {
        println!("  {}", project.demo);
    }
}
