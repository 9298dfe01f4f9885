//! CLI entrypoint for trivia-notify
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;
use trivia_application::{ChannelEventListener, QuestionManager, RunTriviaUseCase, TriviaConfig};
use trivia_infrastructure::{ConfigLoader, FileConfig, OpenTdbClient};
use trivia_presentation::{
    Cli, ConsoleFormatter, ConsoleNotifier, OutputFormat, spawn_stdin_reader,
};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    // Logs go to stderr so prompts on stdout stay readable
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // Load configuration
    let file_config: FileConfig = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")?
    };
    file_config
        .validate()
        .context("Invalid configuration")?;

    ConsoleFormatter::set_color(file_config.output.color);

    let config: TriviaConfig = cli.apply_to(file_config.to_trivia_config());

    info!("Starting trivia-notify");

    // === Dependency Injection ===
    let source = Arc::new(
        OpenTdbClient::from_config(&file_config.source)
            .context("Failed to create Open Trivia DB client")?,
    );

    // One-shot mode: print a batch and exit
    if cli.fetch {
        let questions = source
            .get_questions(&config.query)
            .await
            .context("Failed to fetch questions")?;

        let output = match cli.output {
            OutputFormat::Text => ConsoleFormatter::format_questions(&questions),
            OutputFormat::Json => ConsoleFormatter::format_json(&questions),
        };
        println!("{}", output);
        return Ok(());
    }

    let token = CancellationToken::new();
    {
        let token = token.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                info!("Interrupted, shutting down");
                token.cancel();
            } else {
                warn!("Failed to listen for Ctrl+C");
            }
        });
    }

    let (listener, events) = ChannelEventListener::channel();
    let (responses_tx, responses_rx) = mpsc::unbounded_channel();

    let mut manager =
        QuestionManager::new(source, config.interaction_interval).with_query(config.query.clone());
    manager.subscribe(Arc::new(listener));

    let notifier = ConsoleNotifier::new(responses_tx);
    let notifier_task = tokio::spawn(notifier.run(events, spawn_stdin_reader(), token.clone()));

    println!(
        "Asking a question every {} minute(s). Press Ctrl+C to quit.",
        config.interaction_interval.as_secs() / 60
    );

    let mut use_case =
        RunTriviaUseCase::new(manager, config.tick_period).with_cancellation(token.clone());
    let result = use_case.execute(responses_rx).await;

    token.cancel();
    if let Err(e) = notifier_task.await {
        warn!("Console notifier task failed: {}", e);
    }

    result.context("Trivia loop failed")?;

    let manager = use_case.manager();
    info!(
        "Session finished: {} question(s) answered or dismissed",
        manager.answered_len()
    );

    Ok(())
}
