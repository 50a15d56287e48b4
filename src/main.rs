//! `benefit-advisor` - preview quotes for a raw answers document.
//!
//! Reads a JSON answers payload (`{"General": {...}, "Health": {...},
//! "Life": {...}}`) from stdin and prints the quote for every insurance
//! category as JSON on stdout.

use std::sync::Arc;
use thiserror::Error;
use tokio::io::AsyncReadExt;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use benefit_advisor::adapters::{
    CatalogFile, CatalogFileError, InMemoryPlanCatalog, InMemoryRecommendationStore,
    UsdCurrencyFormatter,
};
use benefit_advisor::application::{
    PreviewQuotesCommand, PreviewQuotesHandler, RecommendationService,
};
use benefit_advisor::config::{AppConfig, ConfigError, LoggingConfig};
use benefit_advisor::domain::catalog::PlanCatalog;

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Catalog(#[from] CatalogFileError),

    #[error("Failed to read answers from stdin: {0}")]
    Stdin(#[from] std::io::Error),

    #[error("Answers are not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let config = AppConfig::load()?;
    config
        .validate()
        .map_err(|e| CliError::Config(ConfigError::from(e)))?;
    init_tracing(&config.logging);

    tracing::info!(environment = %config.environment, "Configuration loaded");

    let catalog = match &config.catalog.path {
        Some(path) => CatalogFile::load(path).await?,
        None => {
            tracing::warn!("No catalog configured; health and life quotes will be unavailable");
            PlanCatalog::default()
        }
    };

    let service = Arc::new(RecommendationService::new(
        Arc::new(InMemoryPlanCatalog::new(catalog)),
        Arc::new(InMemoryRecommendationStore::new()),
        Arc::new(UsdCurrencyFormatter),
    ));
    let handler = PreviewQuotesHandler::new(service);

    let mut input = String::new();
    tokio::io::stdin().read_to_string(&mut input).await?;
    let answers = serde_json::from_str(&input)?;

    let quotes = handler.handle(PreviewQuotesCommand { answers }).await;
    println!("{}", serde_json::to_string_pretty(&quotes)?);
    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(logging.level.as_str()));
    let registry = tracing_subscriber::registry().with(filter);

    // Logs go to stderr so stdout stays a clean JSON document.
    if logging.json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
