//! Page Fetcher
//!
//! Issues one bounded-timeout HTTP GET against the move listing page.
//! Single attempt, no retry; any failure terminates the pipeline.

mod client;
mod error;

pub use client::{PageClient, DEFAULT_TIMEOUT};
pub use error::FetchError;
