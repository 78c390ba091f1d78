//! Exhaustive lineup search.
//!
//! # Key Components
//!
//! - [`CombinationGenerator`]: lazy, batched cartesian product of per-slot
//!   candidate indices
//! - [`ConstraintEvaluator`]: salary totals and repeated-player detection
//! - [`LineupRanker`]: bounded top-K of valid combinations
//! - [`LineupOptimizer`]: runs the whole pipeline on a pool and template
//! - [`SearchConfig`]: budget, exclusions, K, batching and safety limits
//!
//! # Design
//!
//! Generation is purely structural; constraints are checked afterwards and
//! reported as explicit flags. Invalid combinations never reach the ranker,
//! so a legitimately zero-point lineup is never confused with a rejected
//! one. Memory is bounded by one batch plus the K held lineups.

mod config;
mod evaluator;
mod generator;
mod ranker;
mod runner;
mod types;

pub use crate::error::CombinationCount;
pub use config::SearchConfig;
pub use evaluator::{ConstraintEvaluator, Evaluation};
pub use generator::{CombinationBatch, CombinationBatches, CombinationGenerator};
pub use ranker::{LineupRanker, ScoredCombination};
pub use runner::LineupOptimizer;
pub use types::{LineupSlot, RankedLineup, SearchResult, SearchStats};
