//! # Main Entry Point
//!
//! Wires the engine together and runs it against the console:
//! - Domain: configuration
//! - Application: registry, dispatcher, scheduler
//! - Infrastructure: console event source
//! - Interface: bundled command sets
//!

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::runtime::Handle;

use parley::application::dispatcher::Dispatcher;
use parley::application::scheduler::TokioScheduler;
use parley::domain::config::{AppConfig, LoggingConfig};
use parley::domain::traits::EventSource;
use parley::infrastructure::console;
use parley::interface::commands::build_registry;
use parley::strings::logs;

#[derive(Debug, Parser)]
#[command(name = "parley", about = "Command dispatch for chat bots, driven from the console")]
struct Args {
    /// Path to config.yaml. Defaults to data/config.yaml, then the user config directory.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override bot.prefix.
    #[arg(short, long)]
    prefix: Option<String>,

    /// Override logging.filter, e.g. "debug" or "parley=trace".
    #[arg(long)]
    log_filter: Option<String>,
}

fn init_logging(config: &LoggingConfig) -> Result<tracing_appender::non_blocking::WorkerGuard> {
    let dir = Path::new(&config.directory);
    if !dir.exists() {
        fs::create_dir_all(dir).context("Failed to create log directory")?;
    }

    // Clear previous session log
    let log_path = dir.join(&config.file);
    if log_path.exists() {
        let _ = fs::remove_file(&log_path);
    }

    let file_appender = tracing_appender::rolling::never(dir, &config.file);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.filter));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false);

    let console_layer = if config.console {
        Some(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
    } else {
        None
    };

    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer)
        .init();

    Ok(guard)
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // 1. Load Configuration
    let (mut config, config_path) = AppConfig::discover(args.config.as_deref())?;
    if let Some(prefix) = args.prefix {
        config.bot.prefix = prefix;
    }
    if let Some(filter) = args.log_filter {
        config.logging.filter = filter;
    }

    // 2. Logging Setup
    let _guard = init_logging(&config.logging)?;
    tracing::info!("Starting {}...", config.bot.name);
    match &config_path {
        Some(path) => tracing::info!("{}", logs::config_loaded(&path.display().to_string())),
        None => tracing::info!("{}", logs::CONFIG_DEFAULTS),
    }

    // 3. Commands
    let registry = build_registry(&config.bot).context("Invalid command declaration")?;
    tracing::info!(
        "{}",
        logs::commands_registered(registry.len(), registry.categories().len())
    );

    let scheduler = Arc::new(TokioScheduler::from_config(Handle::current(), &config.dispatch));
    let dispatcher = Dispatcher::new(registry, scheduler.clone(), config.bot.prefix.clone());

    // 4. Event Loop
    let (mut source, mut replies) = console::stdin().context("Failed to start console reader")?;
    let printer = tokio::spawn(async move {
        while let Some(reply) = replies.recv().await {
            println!("{reply}");
        }
    });

    tracing::info!("{}", logs::EVENT_LOOP_START);
    loop {
        tokio::select! {
            signal = tokio::signal::ctrl_c() => {
                if let Err(e) = signal {
                    tracing::error!("{}", logs::shutdown_fail(&e.to_string()));
                }
                break;
            }
            event = source.next_event() => {
                let Some(message) = event else {
                    tracing::info!("{}", logs::SOURCE_EXHAUSTED);
                    break;
                };
                tracing::debug!(
                    "Received message from {}: {}",
                    message.context.source().author_id,
                    message.text
                );
                let outcome = dispatcher.dispatch(&message.text, message.context);
                tracing::debug!("Dispatch outcome: {:?}", outcome);
            }
        }
    }

    // 5. Shutdown
    tracing::info!("{}", logs::SHUTDOWN);
    drop(dispatcher);
    drop(source);
    tokio::select! {
        _ = scheduler.shutdown() => {
            let _ = printer.await;
            tracing::info!("{}", logs::SHUTDOWN_COMPLETE);
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::warn!("{}", logs::SHUTDOWN_FORCED);
            printer.abort();
        }
    }

    Ok(())
}
