//! Crate-wide error type.
//!
//! Degenerate search outcomes (empty slots, no valid lineup, unmatched
//! exclusions) are not errors; they resolve to short or empty results.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LineupError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Unknown position label: {0:?}")]
    UnknownPosition(String),

    #[error("Search space of {combinations} combinations exceeds the limit of {limit}")]
    SearchSpaceTooLarge {
        combinations: CombinationCount,
        limit: u64,
    },
}

/// Size of a cartesian product, which may not fit in `u64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombinationCount {
    Exact(u64),
    Overflow,
}

impl std::fmt::Display for CombinationCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CombinationCount::Exact(n) => write!(f, "{n}"),
            CombinationCount::Overflow => write!(f, "more than {}", u64::MAX),
        }
    }
}

pub type Result<T> = std::result::Result<T, LineupError>;
