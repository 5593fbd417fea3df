//! scorekeep
//!
//! Webhook server and offline tools for the scoreboard

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use scorekeep_core::logging_facility::{init, Profile};
use scorekeep_engine::commands::render;
use scorekeep_engine::Scoreboard;
use scorekeep_server::{app, ServerConfig};
use scorekeep_store::{HistoryStore, JsonFileStore};
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "scorekeep", about = "Chat-command scoreboard tracker", version)]
struct Cli {
    /// Path to TOML config file
    #[arg(short, long, default_value = scorekeep_server::config::DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Start the webhook server
    Serve(ServeArgs),
    /// Print all-time points-per-game from the history file
    Standings(StandingsArgs),
}

#[derive(Debug, Args)]
struct ServeArgs {
    /// History file (overrides config)
    #[arg(long)]
    history: Option<PathBuf>,

    /// Listen address (overrides config)
    #[arg(long)]
    host: Option<String>,

    /// Listen port (overrides config)
    #[arg(long)]
    port: Option<u16>,
}

#[derive(Debug, Args)]
struct StandingsArgs {
    /// History file (overrides config)
    #[arg(long)]
    history: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut cfg = ServerConfig::load(&cli.config)
        .with_context(|| format!("failed to load config from {}", cli.config.display()))?;

    let profile: Profile = cfg
        .log_profile
        .parse()
        .map_err(|e: String| anyhow::anyhow!(e))?;
    init(profile);

    match cli.command {
        Commands::Serve(args) => {
            if let Some(history) = args.history {
                cfg.history_path = history;
            }
            if let Some(host) = args.host {
                cfg.host = host;
            }
            if let Some(port) = args.port {
                cfg.port = port;
            }
            serve(cfg).await
        }
        Commands::Standings(args) => {
            if let Some(history) = args.history {
                cfg.history_path = history;
            }
            standings(&cfg)
        }
    }
}

async fn serve(cfg: ServerConfig) -> anyhow::Result<()> {
    // A corrupt history file has no recovery path; refuse to start
    let board = Scoreboard::open(JsonFileStore::new(&cfg.history_path)).with_context(|| {
        format!(
            "failed to load history from {}",
            cfg.history_path.display()
        )
    })?;
    let history = board.history()?;
    info!(
        games = history.games.len(),
        sessions = history.sessions.len(),
        path = %cfg.history_path.display(),
        "history loaded"
    );

    let listener = tokio::net::TcpListener::bind(cfg.bind_addr())
        .await
        .with_context(|| format!("failed to bind {}:{}", cfg.host, cfg.port))?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app(Arc::new(board)))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Server stopped");
    Ok(())
}

fn standings(cfg: &ServerConfig) -> anyhow::Result<()> {
    let history = JsonFileStore::new(&cfg.history_path)
        .load()
        .with_context(|| {
            format!(
                "failed to load history from {}",
                cfg.history_path.display()
            )
        })?;
    println!("{}", render::standings(&history));
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
    }
    info!("Shutdown signal received");
}
