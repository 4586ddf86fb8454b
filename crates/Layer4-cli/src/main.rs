//! vmagent CLI - Main entry point

mod handler;

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vmagent_action::{ActionDispatcher, ActionRegistry};
use vmagent_foundation::{AgentConfig, UuidGenerator};
use vmagent_task::AsyncTaskService;

/// vmagent - answers orchestrator requests on stdin/stdout
#[derive(Parser, Debug)]
#[command(name = "vmagent")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to an agent.json config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Load configuration
    let mut config = AgentConfig::load(args.config.as_deref()).with_context(|| match &args.config {
        Some(path) => format!("loading config from {}", path.display()),
        None => "loading global config".to_string(),
    })?;
    if args.debug {
        config = config.with_log_level("debug");
    }

    // Initialize logging; stdout carries responses only
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(config.log_target)
                .with_writer(std::io::stderr),
        )
        .init();

    info!(
        "vmagent {} starting (agent id: {})",
        env!("CARGO_PKG_VERSION"),
        config.agent_id.as_deref().unwrap_or("unset")
    );

    let task_service = Arc::new(AsyncTaskService::new(Arc::new(UuidGenerator::new())));
    let registry = Arc::new(ActionRegistry::with_builtins(task_service.clone()));
    info!("Registered actions: {}", registry.names().join(", "));
    let dispatcher = ActionDispatcher::new(registry, task_service);

    let stdin = BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();

    tokio::select! {
        served = handler::serve(&dispatcher, stdin, stdout) => {
            let handled = served?;
            info!("Input closed after {} request(s)", handled);
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Interrupted, shutting down");
        }
    }

    Ok(())
}
