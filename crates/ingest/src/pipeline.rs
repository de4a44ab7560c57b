//! Sequential scrape-and-store pipeline
//!
//! Fetch, extract, sanitize and persist run strictly in order; the
//! first failure moves the run to `Failed` and nothing is retried.

use crate::config::IngestConfig;
use extractor::MoveTableExtractor;
use fetcher::{FetchError, PageClient};
use storage::{MoveRepository, StorageError};
use thiserror::Error;
use tracing::info;

/// Pipeline stages in execution order
///
/// `Done` and `Failed` are terminal; no stage is re-entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    Fetching,
    Extracting,
    Sanitizing,
    Persisting,
    Done,
    Failed,
}

impl PipelineStage {
    /// Next stage on success; terminal stages stay put
    pub fn advance(self) -> Self {
        match self {
            Self::Fetching => Self::Extracting,
            Self::Extracting => Self::Sanitizing,
            Self::Sanitizing => Self::Persisting,
            Self::Persisting => Self::Done,
            terminal => terminal,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Done | Self::Failed)
    }
}

/// A failed run, tagged by the stage that broke
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),

    /// The table was absent or had zero rows; nothing was written
    #[error("no move rows scraped from the page")]
    NoData,

    #[error("database failure: {0}")]
    Storage(#[from] StorageError),
}

/// Outcome of a successful run
#[derive(Debug)]
pub struct IngestReport {
    pub rows_scraped: usize,
    pub rows_written: u64,
}

/// Drive the pipeline from fetch to commit
///
/// Resolves to one of the two terminal stages: `Done` with a report,
/// or `Failed` carrying the stage error.
pub async fn run(config: &IngestConfig) -> Result<IngestReport, IngestError> {
    let result = run_stages(config).await;

    let terminal = if result.is_ok() {
        PipelineStage::Done
    } else {
        PipelineStage::Failed
    };
    debug_assert!(terminal.is_terminal());
    info!("Stage: {:?}", terminal);

    result
}

/// The repository connection is opened only once there is data to
/// write, and released on every exit path.
async fn run_stages(config: &IngestConfig) -> Result<IngestReport, IngestError> {
    let mut stage = PipelineStage::Fetching;
    info!("Stage: {:?}", stage);
    let client = PageClient::new(&config.source_url, config.timeout)?;
    let html = client.fetch_page().await?;

    stage = stage.advance();
    info!("Stage: {:?}", stage);
    let mut records = MoveTableExtractor::new().extract(&html);
    if records.is_empty() {
        return Err(IngestError::NoData);
    }

    stage = stage.advance();
    info!("Stage: {:?}", stage);
    for record in &mut records {
        record.clean_fields();
    }

    stage = stage.advance();
    info!("Stage: {:?}", stage);
    let repository = MoveRepository::connect(&config.db).await?;
    let result = async {
        repository.ensure_schema().await?;
        repository.upsert_batch(&records, &config.actor).await
    }
    .await;
    repository.close().await;
    let rows_written = result?;

    Ok(IngestReport {
        rows_scraped: records.len(),
        rows_written,
    })
}
