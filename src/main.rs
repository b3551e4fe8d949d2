//! Diamond Chat CLI
//!
//! Terminal client for the diamond store assistant:
//! - Chat with the assistant
//! - Watch the insights dashboard
//! - Check backend health
//! - Generate a config file

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use diamond_chat::client::ChatApi;
use diamond_chat::config::{generate_default_config, Config, LoggingConfig};
use diamond_chat::render::{render_message, render_snapshot, BOT_NAME, TYPING_PLACEHOLDER};
use diamond_chat::{ChatSession, Composer, HttpChatClient, InsightsPoller, PollerConfig};

/// Delay before the typing placeholder is printed, so fast replies don't flash it
const TYPING_DELAY: Duration = Duration::from_millis(300);

#[derive(Parser)]
#[command(name = "diamond-chat")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Chat with the diamond store assistant")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Chatbot backend URL (overrides config file and DIAMOND_CHAT_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Config file (default: ~/.config/diamond-chat/config.toml, then ./config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start a chat session
    Chat,

    /// Watch backend stats and logs
    Insights {
        /// Refresh interval in milliseconds
        #[arg(long)]
        interval_ms: Option<u64>,
    },

    /// Check backend health
    Health,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Commands::Config { output } = &cli.command {
        return write_default_config(output.as_deref());
    }

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(url) = cli.api_url {
        config.api.base_url = url;
    }

    init_logging(&config.logging);
    for warning in &config.warnings {
        tracing::warn!("{}", warning);
    }
    if let Some(path) = &config.source {
        tracing::debug!("Loaded config from {:?}", path);
    }
    tracing::debug!("Using backend at {}", config.api.base_url);

    let api = Arc::new(HttpChatClient::new(&config.api.base_url)?);

    match cli.command {
        Commands::Chat => run_chat(api).await,
        Commands::Insights { interval_ms } => {
            if let Some(ms) = interval_ms {
                config.insights.poll_interval_ms = ms;
            }
            run_insights(api, PollerConfig::from(&config.insights)).await
        }
        Commands::Health => run_health(api).await,
        Commands::Config { .. } => Ok(()),
    }
}

/// Logs go to stderr so they don't interleave with the conversation
fn init_logging(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("diamond_chat={}", logging.level)));

    let registry = tracing_subscriber::registry().with(filter);

    if logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

async fn run_chat(api: Arc<HttpChatClient>) -> anyhow::Result<()> {
    let session = ChatSession::new(api);

    println!("{} (session {})", BOT_NAME, session.session_id());
    println!("Type a message and press Enter. /dismiss hides the error banner, /quit exits.");
    println!();

    with_typing_indicator(&session, session.load_greeting()).await;
    let mut printed = print_new_messages(&session, 0).await;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();
    let mut composer = Composer::new();

    loop {
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await.context("Failed to read input")? else {
            break;
        };

        match line.trim() {
            "/quit" | "/exit" => break,
            "/dismiss" => {
                session.dismiss_error().await;
                continue;
            }
            _ => {}
        }

        composer.set_draft(line);
        let Some(text) = composer.submit(session.is_typing()) else {
            continue;
        };

        with_typing_indicator(&session, session.send(&text)).await;
        printed = print_new_messages(&session, printed).await;
    }

    Ok(())
}

/// Await `call`, printing the typing placeholder if it is still running after a short delay
async fn with_typing_indicator<A, F>(session: &ChatSession<A>, call: F) -> F::Output
where
    A: ChatApi + ?Sized,
    F: Future,
{
    tokio::pin!(call);
    let delay = tokio::time::sleep(TYPING_DELAY);
    tokio::pin!(delay);
    let mut waited = false;

    loop {
        tokio::select! {
            output = &mut call => return output,
            _ = &mut delay, if !waited => {
                waited = true;
                if session.is_typing() {
                    println!("{}", TYPING_PLACEHOLDER);
                }
            }
        }
    }
}

/// Print messages from index `from` on, then the banner; returns the new count
async fn print_new_messages<A: ChatApi + ?Sized>(session: &ChatSession<A>, from: usize) -> usize {
    let messages = session.messages().await;

    for message in messages.iter().skip(from) {
        println!("{}", render_message(message));
    }

    if let Some(error) = session.error().await {
        eprintln!("! {} (/dismiss to hide)", error);
    }

    messages.len()
}

async fn run_insights(api: Arc<HttpChatClient>, config: PollerConfig) -> anyhow::Result<()> {
    let handle = InsightsPoller::new(api, config).start();
    let mut snapshots = handle.subscribe();

    println!("System Insights (Ctrl+C to stop)");
    println!();
    println!("{}", render_snapshot(None));

    loop {
        tokio::select! {
            changed = snapshots.changed() => {
                if changed.is_err() {
                    break;
                }
                let snapshot = snapshots.borrow_and_update().clone();
                // Clear the screen and redraw
                print!("\x1b[2J\x1b[H");
                println!("System Insights (Ctrl+C to stop)");
                if let Some(s) = &snapshot {
                    println!("Updated {}", s.fetched_at.with_timezone(&chrono::Local).format("%H:%M:%S"));
                }
                println!();
                println!("{}", render_snapshot(snapshot.as_ref()));
            }
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    handle.stop();
    Ok(())
}

async fn run_health(api: Arc<HttpChatClient>) -> anyhow::Result<()> {
    match api.health_check().await {
        Ok(status) => {
            println!("Backend: {}", api.base_url());
            println!("{}", serde_json::to_string_pretty(&status)?);
            Ok(())
        }
        Err(e) => {
            eprintln!("Cannot connect to the chatbot backend at {}", api.base_url());
            eprintln!("Error: {}", e);
            eprintln!();
            eprintln!("Check that the backend is running, or pass --api-url.");
            std::process::exit(1);
        }
    }
}

fn write_default_config(output: Option<&std::path::Path>) -> anyhow::Result<()> {
    let config = generate_default_config();

    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, &config)
                .with_context(|| format!("Failed to write config to {:?}", path))?;
            println!("Config written to {:?}", path);
        }
        None => {
            print!("{}", config);
        }
    }

    Ok(())
}
