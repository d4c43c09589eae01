use std::{path::PathBuf, sync::Arc, time::Duration};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use client_core::{
    presenter::ResultView, AnalyzerController, HttpSentimentService, SentimentService,
};
use tracing::{info, warn};

mod config;
mod interactive;
mod render;

use config::{load_settings, DEFAULT_CONFIG_FILE};

#[derive(Parser, Debug)]
#[command(name = "desktop", about = "Movie review sentiment analyzer client", version)]
struct Args {
    /// Base URL of the sentiment service (overrides config and env)
    #[arg(long, global = true)]
    server_url: Option<String>,

    /// Path to the TOML config file
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Ask the service whether a trained model exists
    Status,
    /// Train the remote model
    Train,
    /// Analyze a single review
    Analyze {
        /// Review text, sent as given
        text: String,
    },
    /// List the built-in example reviews
    Examples,
    /// Interactive session (default)
    Interactive,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let loaded = load_settings(&args.config);
    let mut settings = loaded.settings;
    if let Some(server_url) = args.server_url {
        settings.server_url = server_url;
    }

    tracing_subscriber::fmt()
        .with_env_filter(settings.log_filter.as_str())
        .with_writer(std::io::stderr)
        .init();
    if let Some(err) = loaded.file_error {
        warn!("{err}");
    }

    let service = HttpSentimentService::with_timeout(
        &settings.server_url,
        settings.request_timeout_secs.map(Duration::from_secs),
    )
    .with_context(|| format!("invalid sentiment service url '{}'", settings.server_url))?;
    info!(server_url = %service.base_url(), "sentiment service configured");
    let service: Arc<dyn SentimentService> = Arc::new(service);

    match args.command.unwrap_or(Command::Interactive) {
        Command::Status => run_status(service).await,
        Command::Train => run_train(service).await,
        Command::Analyze { text } => run_analyze(service, &text).await,
        Command::Examples => {
            print!("{}", render::render_examples());
            Ok(())
        }
        Command::Interactive => interactive::run(service).await,
    }
}

async fn run_status(service: Arc<dyn SentimentService>) -> Result<()> {
    let mut controller = AnalyzerController::new(service);
    controller.initialize().await;
    if let Some(err) = controller.state().error() {
        bail!("{}", err.message());
    }
    if controller.state().readiness().is_ready() {
        println!("Model Ready");
    } else {
        println!("Model Not Ready (run `desktop train`)");
    }
    Ok(())
}

async fn run_train(service: Arc<dyn SentimentService>) -> Result<()> {
    let mut controller = AnalyzerController::new(service);
    match controller.train().await {
        Some(notice) => {
            println!("{notice}");
            Ok(())
        }
        None => match controller.state().error() {
            Some(err) => bail!("{}", err.message()),
            None => bail!("training did not start"),
        },
    }
}

async fn run_analyze(service: Arc<dyn SentimentService>, text: &str) -> Result<()> {
    let mut controller = AnalyzerController::new(service);
    controller.initialize().await;
    if let Some(err) = controller.state().error() {
        bail!("{}", err.message());
    }
    if !controller.state().readiness().is_ready() {
        bail!("model is not trained yet; run `desktop train` first");
    }

    controller.analyze(text).await;
    if let Some(err) = controller.state().error() {
        bail!("{}", err.message());
    }
    let result = controller
        .state()
        .result()
        .context("service returned no analysis")?;
    print!("{}", render::render_result(&ResultView::project(result, text)));
    Ok(())
}

