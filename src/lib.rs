//! Exhaustive daily-fantasy lineup optimization.
//!
//! Finds the highest-projected lineups from a player pool under a salary
//! budget and a roster template by enumerating every eligible combination:
//!
//! - **Pool** ([`pool`]): immutable player records, and CSV ingestion that
//!   joins a salary table with a projection table.
//! - **Slots** ([`slots`]): roster templates with explicit and flexible
//!   slots, and the per-position need bound derived from them.
//! - **Filters** ([`filter`]): exclusion by name and dominance pruning,
//!   which shrinks the pool without losing any optimal lineup.
//! - **Search** ([`search`]): batched combination enumeration, constraint
//!   evaluation, and top-K ranking.
//!
//! # Architecture
//!
//! The search is exhaustive, not a general integer-programming solver. Its
//! tractability comes from the dominance filter bounding the number of
//! candidates per position; the optimizer refuses search spaces larger than
//! a configured ceiling instead of attempting them.
//!
//! # Example
//!
//! ```
//! use u_lineup::pool::{Player, PlayerPool, Position};
//! use u_lineup::search::{LineupOptimizer, SearchConfig};
//! use u_lineup::slots::{FlexPositions, SlotTemplate};
//!
//! let pool = PlayerPool::new(vec![
//!     Player::new("W1", Position::WR, 5000, 10.0, "A"),
//!     Player::new("W2", Position::WR, 5000, 10.0, "B"),
//!     Player::new("W3", Position::WR, 5000, 8.0, "C"),
//! ]);
//! let template = SlotTemplate::parse(&["WR", "WR"], FlexPositions::default()).unwrap();
//! let config = SearchConfig::new(11_000).with_num_lineups(1);
//!
//! let best = &LineupOptimizer::run(&pool, &template, &config).unwrap()[0];
//! assert_eq!(best.total_salary, 10_000);
//! assert!((best.total_projection - 20.0).abs() < 1e-9);
//! ```

pub mod config;
pub mod error;
pub mod filter;
pub mod logging;
pub mod pool;
pub mod report;
pub mod search;
pub mod slots;

pub use config::RunConfig;
pub use error::{LineupError, Result};
pub use search::{LineupOptimizer, RankedLineup, SearchConfig};
