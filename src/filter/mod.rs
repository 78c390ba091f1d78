//! Pool reduction before enumeration.
//!
//! - [`dominance_filter`]: drops players that cheaper, better players at the
//!   same position can always replace
//! - [`exclude_players`]: drops players by exact name
//!
//! Both return new pools; the input pool is never modified.

mod dominance;
mod exclusion;

pub use dominance::{dominance_filter, dominance_filter_indices};
pub use exclusion::exclude_players;
