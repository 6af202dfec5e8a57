//! Airwave Terminal Chat
//!
//! Interactive chat with the music service. One run is one session: the
//! artist list is fetched up front, a fresh session id is generated, and a
//! single WebSocket carries the conversation until exit.

use clap::Parser;
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use airwave::config::generate_default_config;
use airwave::{ApiClient, ChatSession, Config, SessionEvent, SubmitOutcome};

#[derive(Parser)]
#[command(name = "airwave")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Terminal client for the music chat service")]
struct Cli {
    /// Path to a config file (default: standard config locations)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Chat service base URL (overrides config)
    #[arg(long)]
    api_url: Option<String>,

    /// Print a default config file and exit
    #[arg(long)]
    generate_config: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.generate_config {
        print!("{}", generate_default_config());
        return Ok(());
    }

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(url) = cli.api_url {
        config.api.base_url = url;
    }

    init_logging(&config);

    let api = ApiClient::new(&config.api.base_url, config.api.request_timeout_ms);
    // A failed fetch is not surfaced: the list just stays empty
    let artists = match api.fetch_artists().await {
        Ok(list) => list,
        Err(e) => {
            tracing::debug!(error = %e, "Artist list unavailable");
            Vec::new()
        }
    };

    let mut session = ChatSession::new();
    tracing::debug!(session_id = %session.session_id(), "Starting chat session");
    let mut events = session.connect(&config.ws_base_url()).await?;

    println!("=== Airwave Music Chat ===");
    print_artists(&artists);
    println!("Type 'artists' to list artists, 'exit' or 'quit' to leave.\n");

    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    loop {
        tokio::select! {
            event = events.recv() => {
                let Some(event) = event else { break };
                match &event {
                    SessionEvent::Opened => println!("(connected)"),
                    SessionEvent::Reply(text) => println!("\nAnnie: {}\n", text),
                    SessionEvent::Closed => println!("(connection closed, replies will no longer arrive)"),
                }
                session.handle_event(event);
            }
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match line.trim() {
                    "exit" | "quit" => break,
                    "artists" => print_artists(&artists),
                    _ => {
                        session.set_draft(line);
                        match session.submit() {
                            SubmitOutcome::Sent => {}
                            SubmitOutcome::Ignored => {
                                if !session.draft().trim().is_empty() {
                                    println!("(not connected, message not sent)");
                                }
                            }
                            SubmitOutcome::Failed => {
                                println!("(connection lost, message not sent)");
                            }
                        }
                    }
                }
            }
        }
    }

    session.close();
    println!("Thanks for the chat! Keep the music playing.");
    Ok(())
}

/// Initialize tracing from the logging config
fn init_logging(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(format!("airwave={}", config.logging.level))
    });

    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

fn print_artists(artists: &[String]) {
    if artists.is_empty() {
        println!("No artists available right now.");
        return;
    }
    println!("Available artists:");
    for artist in artists {
        println!("- {}", artist);
    }
}
