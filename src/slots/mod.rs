//! Roster slot requirements.
//!
//! A [`SlotTemplate`] is the ordered list of slots a lineup must fill. Slots
//! name a single [`Position`](crate::pool::Position) or the flexible label,
//! whose eligible positions are given by [`FlexPositions`].
//! [`PositionNeed`] summarizes how many slots each position could occupy.

mod need;
mod template;

pub use need::PositionNeed;
pub use template::{FlexPositions, SlotLabel, SlotTemplate};
