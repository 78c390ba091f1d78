//! Roster slot templates.

use crate::error::{LineupError, Result};
use crate::pool::Position;
use std::fmt;
use std::str::FromStr;

/// One slot of a roster template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotLabel {
    /// Exactly this position.
    Position(Position),
    /// Any position in the template's [`FlexPositions`].
    Flex,
}

impl fmt::Display for SlotLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotLabel::Position(p) => write!(f, "{p}"),
            SlotLabel::Flex => f.write_str("FLEX"),
        }
    }
}

impl FromStr for SlotLabel {
    type Err = LineupError;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().eq_ignore_ascii_case("FLEX") {
            Ok(SlotLabel::Flex)
        } else {
            s.parse().map(SlotLabel::Position)
        }
    }
}

/// The eligible positions of a flexible slot.
///
/// Deployments differ here (RB/WR only, or RB/WR/TE), so it is always
/// explicit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlexPositions(Vec<Position>);

impl FlexPositions {
    /// Creates a flex set, dropping repeated positions.
    pub fn new(positions: impl IntoIterator<Item = Position>) -> Self {
        let mut set = Vec::new();
        for p in positions {
            if !set.contains(&p) {
                set.push(p);
            }
        }
        Self(set)
    }

    /// RB, WR and TE.
    pub fn rb_wr_te() -> Self {
        Self::new([Position::RB, Position::WR, Position::TE])
    }

    /// RB and WR.
    pub fn rb_wr() -> Self {
        Self::new([Position::RB, Position::WR])
    }

    pub fn positions(&self) -> &[Position] {
        &self.0
    }

    pub fn contains(&self, position: Position) -> bool {
        self.0.contains(&position)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for FlexPositions {
    fn default() -> Self {
        Self::rb_wr_te()
    }
}

/// An ordered sequence of slots plus the flex eligibility set.
///
/// # Examples
///
/// ```
/// use u_lineup::slots::{FlexPositions, SlotLabel, SlotTemplate};
/// use u_lineup::pool::Position;
///
/// let template = SlotTemplate::parse(&["RB", "RB", "WR", "WR", "FLEX"], FlexPositions::rb_wr())
///     .unwrap();
/// assert_eq!(template.len(), 5);
/// assert!(template.accepts(4, Position::WR));
/// assert!(!template.accepts(4, Position::TE));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotTemplate {
    slots: Vec<SlotLabel>,
    flex: FlexPositions,
}

impl SlotTemplate {
    pub fn new(slots: Vec<SlotLabel>, flex: FlexPositions) -> Self {
        Self { slots, flex }
    }

    /// Parses slot labels such as `"QB"` or `"FLEX"`.
    pub fn parse<S: AsRef<str>>(labels: &[S], flex: FlexPositions) -> Result<Self> {
        let slots = labels
            .iter()
            .map(|l| l.as_ref().parse())
            .collect::<Result<Vec<SlotLabel>>>()?;
        Ok(Self::new(slots, flex))
    }

    pub fn slots(&self) -> &[SlotLabel] {
        &self.slots
    }

    pub fn flex(&self) -> &FlexPositions {
        &self.flex
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Positions eligible for slot `slot`.
    pub fn eligible(&self, slot: usize) -> &[Position] {
        match &self.slots[slot] {
            SlotLabel::Position(p) => std::slice::from_ref(p),
            SlotLabel::Flex => self.flex.positions(),
        }
    }

    /// Whether a player at `position` may fill slot `slot`.
    pub fn accepts(&self, slot: usize, position: Position) -> bool {
        self.eligible(slot).contains(&position)
    }

    /// Checks that the template can describe a lineup at all.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.slots.is_empty() {
            return Err("slot template must contain at least one slot".into());
        }
        if self.slots.contains(&SlotLabel::Flex) && self.flex.is_empty() {
            return Err("template has a FLEX slot but no flex-eligible positions".into());
        }
        Ok(())
    }
}
