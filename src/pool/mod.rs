//! Candidate player pool.
//!
//! - [`Player`], [`Position`]: immutable player records
//! - [`PlayerPool`]: the ordered, index-addressed candidate set the search
//!   enumerates over
//! - [`ingest`]: joins a salary table and a projection table into a pool

pub mod ingest;
mod types;

pub use ingest::{load_pool, read_pool, IngestStats};
pub use types::{Player, PlayerPool, Position};
