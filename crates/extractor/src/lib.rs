//! Move Table Extraction
//!
//! Parses the fetched HTML, locates the data-view table and reads the
//! seven labeled cells of every row into flat [`MoveRecord`]s.

mod record;
mod table;

pub use record::MoveRecord;
pub use table::MoveTableExtractor;
