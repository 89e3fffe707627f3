pub mod cli;
pub mod completion;
pub mod config;
pub mod credentials;
pub mod error;
pub mod logging;
pub mod model;
pub mod providers;
pub mod task;

use anyhow::{Context, Result};
use clap::Parser;
use reqwest::Client;
use tracing::info;

use cli::{Cli, Command};
use completion::CompletionClient;
use config::Config;
use credentials::CredentialStore;
use task::TaskRequest;

pub use error::render_error;

/// Parses argv, runs the selected command and prints its output.
///
/// Usage errors exit the process from inside clap; every other failure is
/// returned for the caller to render.
pub async fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    let _log_guard = logging::init();

    let cli = Cli::parse();
    let cfg = Config::from_env().context("Failed to resolve runtime configuration")?;
    info!(
        api_base_url = %cfg.api_base_url,
        credential_path = %cfg.credential_path.display(),
        "loaded runtime configuration"
    );

    execute(&cli.command, &cfg).await
}

pub async fn execute(command: &Command, cfg: &Config) -> Result<()> {
    match command {
        Command::SetKey { key } => {
            CredentialStore::new(cfg.credential_path.clone()).save(key)?;
            println!("API key has been saved successfully!");
            Ok(())
        }
        Command::Summarize { text } => run_task(cfg, TaskRequest::summarize(text.clone())).await,
        Command::Translate { text, to } => {
            run_task(cfg, TaskRequest::translate(text.clone(), Some(to.clone()))).await
        }
        Command::SentimentAnalysis { text } => {
            run_task(cfg, TaskRequest::analyze_sentiment(text.clone())).await
        }
    }
}

async fn run_task(cfg: &Config, request: TaskRequest) -> Result<()> {
    let client = Client::builder()
        .build()
        .context("Failed to initialize HTTP client")?;
    let result = CompletionClient::new(&client, cfg).complete(&request).await?;
    println!("\n\n{}: {}", request.kind.result_label(), result);
    Ok(())
}
