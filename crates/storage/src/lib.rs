//! Storage Layer
//!
//! MySQL persistence for scraped move records: idempotent schema
//! creation and a keyed upsert batch with audit stamping.

mod error;
mod repository;

pub use error::StorageError;
pub use repository::{DbConfig, MoveRepository, SCHEMA_NAME, TABLE_NAME};
