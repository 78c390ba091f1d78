//! Per-position slot counts used to size dominance retention.

use super::template::{SlotLabel, SlotTemplate};
use crate::pool::Position;

/// Upper bound on how many slots of a template a position could fill.
///
/// Explicit slots count once for their position; a flex slot counts once for
/// every flex-eligible position. This over-counts (a flex slot is filled by
/// only one player), which only makes the dominance filter keep more players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PositionNeed {
    counts: [u32; Position::COUNT],
}

impl PositionNeed {
    /// Derives the need counts from a template.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_lineup::slots::{FlexPositions, PositionNeed, SlotTemplate};
    /// use u_lineup::pool::Position;
    ///
    /// let t = SlotTemplate::parse(&["RB", "RB", "WR", "FLEX"], FlexPositions::rb_wr()).unwrap();
    /// let need = PositionNeed::from_template(&t);
    /// assert_eq!(need.get(Position::RB), 3);
    /// assert_eq!(need.get(Position::WR), 2);
    /// assert_eq!(need.get(Position::TE), 0);
    /// ```
    pub fn from_template(template: &SlotTemplate) -> Self {
        let mut need = Self::default();
        for slot in template.slots() {
            match slot {
                SlotLabel::Position(p) => need.counts[p.index()] += 1,
                SlotLabel::Flex => {
                    for p in template.flex().positions() {
                        need.counts[p.index()] += 1;
                    }
                }
            }
        }
        need
    }

    pub fn get(&self, position: Position) -> u32 {
        self.counts[position.index()]
    }

    /// Overrides the count for one position.
    pub fn with(mut self, position: Position, count: u32) -> Self {
        self.counts[position.index()] = count;
        self
    }

    /// Positions the template can use at all.
    pub fn required_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL
            .into_iter()
            .filter(move |p| self.counts[p.index()] > 0)
    }
}
