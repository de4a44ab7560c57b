//! Fast-Move Ingestion Pipeline - Main Entry Point

mod config;
mod pipeline;

use config::IngestConfig;
use pipeline::IngestError;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

/// Initialize logging
fn init_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}

#[tokio::main]
async fn main() {
    init_logging();

    info!("=== Fast Move Ingest v{} ===", env!("CARGO_PKG_VERSION"));

    let config = match IngestConfig::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Could not read configuration: {}", e);
            std::process::exit(1);
        }
    };

    match pipeline::run(&config).await {
        Ok(report) => {
            info!(
                "Data inserted successfully: {} rows written ({} scraped)",
                report.rows_written, report.rows_scraped
            );
        }
        Err(IngestError::Fetch(e)) => {
            error!("Failed to fetch {}: {}", config.source_url, e);
            std::process::exit(1);
        }
        Err(IngestError::NoData) => {
            error!("No data scraped. Exiting.");
            std::process::exit(1);
        }
        Err(IngestError::Storage(e)) => {
            error!("Database failure: {}", e);
            std::process::exit(1);
        }
    }
}
