//! HTTP client for the move listing page

use crate::error::FetchError;
use reqwest::StatusCode;
use std::time::Duration;
use tracing::{debug, info};

/// Default fetch timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for fetching the move listing page
///
/// Wraps a `reqwest::Client` with the timeout applied to the whole
/// request, so a stalled response aborts the run rather than hanging.
pub struct PageClient {
    url: String,
    client: reqwest::Client,
}

impl PageClient {
    /// Create a client for the given page URL
    pub fn new(url: &str, timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            url: url.to_string(),
            client,
        })
    }

    /// Fetch the page body as text
    ///
    /// Exactly one GET; non-200 statuses are reported as
    /// [`FetchError::HttpStatus`] without reading the body.
    pub async fn fetch_page(&self) -> Result<String, FetchError> {
        info!("Fetching {}", self.url);

        let response = self.client.get(&self.url).send().await?;
        classify_status(response.status())?;

        let body = response.text().await?;
        debug!("Fetched {} bytes", body.len());
        Ok(body)
    }

    /// Page URL this client targets
    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Only a 200 passes; anything else carries its status code out
fn classify_status(status: StatusCode) -> Result<(), FetchError> {
    if status == StatusCode::OK {
        Ok(())
    } else {
        Err(FetchError::HttpStatus(status.as_u16()))
    }
}
