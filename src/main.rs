//! RelaMind CLI
//!
//! Command-line client for the RelaMind backend:
//! - Chat with RelaMind or the Manus agent (streamed)
//! - Save diary entries
//! - Inspect the web app's route table

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use futures_util::StreamExt;
use relamind::{
    api::parse_tags, config::generate_default_config, Config, EventStream, RelaMindClient,
    SaveDiaryRequest, SaveDiaryResponse, StreamEvent, ROUTES,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "relamind")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Command-line client for the RelaMind AI companion")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: ~/.config/relamind/config.toml or ./relamind.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// API base URL, overrides the config (e.g., http://localhost:8123/api)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Chat with RelaMind (intent-routed: chat, history lookup or tools)
    Chat {
        /// Message to send
        message: String,
        /// Conversation id for multi-turn memory (default: a new one)
        #[arg(long)]
        chat_id: Option<String>,
    },

    /// Hand a multi-step task to the Manus agent
    Manus {
        /// Task description
        message: String,
    },

    /// Diary entries
    Diary {
        #[command(subcommand)]
        action: DiaryCommands,
    },

    /// List the web app's routes
    Routes,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum DiaryCommands {
    /// Save a diary entry with optional mood and tags
    Save {
        /// Diary content
        content: String,
        /// Mood label
        #[arg(short, long)]
        mood: Option<String>,
        /// Tags (repeatable or comma-separated)
        #[arg(short, long = "tag")]
        tags: Vec<String>,
        /// User id
        #[arg(long)]
        user_id: Option<String>,
    },

    /// Save a diary entry from its content alone
    Quick {
        /// Diary content
        content: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(url) = &cli.api_url {
        config.api.base_url = Some(url.clone());
    }

    init_logging(&config);

    let json = cli.format == "json";

    match cli.command {
        Commands::Chat { message, chat_id } => {
            let client = build_client(&config)?;
            let chat_id = chat_id.unwrap_or_else(relamind::new_chat_id);
            eprintln!("chat id: {}", chat_id);

            let events = client.chat_with_relamind(&message, &chat_id);
            if !print_stream(events, json).await? {
                std::process::exit(1);
            }
        }

        Commands::Manus { message } => {
            let client = build_client(&config)?;

            let events = client.chat_with_manus(&message);
            if !print_stream(events, json).await? {
                std::process::exit(1);
            }
        }

        Commands::Diary { action } => {
            let client = build_client(&config)?;

            let result = match action {
                DiaryCommands::Save {
                    content,
                    mood,
                    tags,
                    user_id,
                } => {
                    let tags: Vec<String> = tags.iter().flat_map(|t| parse_tags(t)).collect();
                    let request = SaveDiaryRequest {
                        user_id,
                        content,
                        mood,
                        tags: (!tags.is_empty()).then_some(tags),
                    };
                    client.save_diary(&request).await
                }
                DiaryCommands::Quick { content } => client.quick_save_diary(&content).await,
            };

            match result {
                Ok(response) => {
                    if !print_diary_response(&response, json)? {
                        std::process::exit(1);
                    }
                }
                Err(e) => {
                    eprintln!("Failed to save diary: {}", e);
                    std::process::exit(1);
                }
            }
        }

        Commands::Routes => {
            if json {
                println!("{}", serde_json::to_string_pretty(ROUTES)?);
            } else {
                println!("{:<14} {:<12} {}", "PATH", "NAME", "TITLE");
                for route in ROUTES {
                    println!(
                        "{:<14} {:<12} {}",
                        route.path,
                        route.name,
                        route.meta.title.unwrap_or("-")
                    );
                }
            }
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("Failed to write {:?}", path))?;
                    println!("Config written to {:?}", path);
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

fn init_logging(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(format!("relamind={}", config.logging.level))
    });

    // stdout carries the streamed reply, so logs go to stderr
    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn build_client(config: &Config) -> anyhow::Result<RelaMindClient> {
    let client_config = config.api.client_config()?;
    tracing::debug!(base_url = %client_config.base_url, "Using RelaMind API");
    Ok(RelaMindClient::new(client_config)?)
}

/// Print a reply as it streams in. Returns whether it ended with `[DONE]`.
async fn print_stream(mut events: EventStream, json: bool) -> anyhow::Result<bool> {
    let mut stdout = std::io::stdout();

    while let Some(event) = events.next().await {
        if json {
            println!("{}", event_json(&event));
        }

        match event {
            StreamEvent::Message(chunk) => {
                if !json {
                    write!(stdout, "{}", chunk)?;
                    stdout.flush()?;
                }
            }
            StreamEvent::Done => {
                if !json {
                    writeln!(stdout)?;
                }
                return Ok(true);
            }
            StreamEvent::Error(e) => {
                if !json {
                    writeln!(stdout)?;
                }
                eprintln!("Stream failed: {}", e);
                return Ok(false);
            }
        }
    }

    Ok(false)
}

fn event_json(event: &StreamEvent) -> serde_json::Value {
    match event {
        StreamEvent::Message(data) => serde_json::json!({ "type": "message", "data": data }),
        StreamEvent::Done => serde_json::json!({ "type": "done" }),
        StreamEvent::Error(e) => serde_json::json!({ "type": "error", "error": e.to_string() }),
    }
}

/// Print the save result. Returns whether the backend stored the entry.
fn print_diary_response(response: &SaveDiaryResponse, json: bool) -> anyhow::Result<bool> {
    if json {
        println!("{}", serde_json::to_string_pretty(response)?);
        return Ok(response.success);
    }

    let message = response.message.as_deref().unwrap_or_default();
    if response.success {
        println!("Saved: {}", message);
        if let Some(id) = &response.document_id {
            println!("Document: {}", id);
        }
    } else {
        eprintln!("Not saved: {}", message);
    }

    Ok(response.success)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_diary_save() {
        let cli = Cli::parse_from([
            "relamind", "diary", "save", "went running", "-m", "good", "-t", "sport,health",
            "--tag", "morning",
        ]);

        match cli.command {
            Commands::Diary {
                action: DiaryCommands::Save { content, mood, tags, user_id },
            } => {
                assert_eq!(content, "went running");
                assert_eq!(mood.as_deref(), Some("good"));
                assert_eq!(tags, vec!["sport,health", "morning"]);
                assert_eq!(user_id, None);
            }
            _ => panic!("expected diary save"),
        }
    }

    #[test]
    fn test_event_json() {
        assert_eq!(
            event_json(&StreamEvent::Message("hi".into())),
            serde_json::json!({ "type": "message", "data": "hi" })
        );
        assert_eq!(event_json(&StreamEvent::Done), serde_json::json!({ "type": "done" }));
    }

    #[test]
    fn test_rejected_diary_fails_in_every_format() {
        let rejected = SaveDiaryResponse {
            success: false,
            message: Some("日记内容不能为空".to_string()),
            document_id: None,
        };
        assert!(!print_diary_response(&rejected, false).unwrap());
        assert!(!print_diary_response(&rejected, true).unwrap());

        let saved = SaveDiaryResponse {
            success: true,
            message: None,
            document_id: Some("doc-1".to_string()),
        };
        assert!(print_diary_response(&saved, false).unwrap());
        assert!(print_diary_response(&saved, true).unwrap());
    }
}
