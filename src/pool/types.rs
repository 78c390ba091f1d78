//! Player records and the candidate pool.

use crate::error::LineupError;
use std::fmt;
use std::str::FromStr;

/// Roster position. The set is closed; every per-position table in the
/// crate is sized by [`Position::COUNT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Position {
    QB,
    RB,
    WR,
    TE,
    DST,
}

impl Position {
    /// Number of positions.
    pub const COUNT: usize = 5;

    /// All positions in declaration order.
    pub const ALL: [Position; Position::COUNT] = [
        Position::QB,
        Position::RB,
        Position::WR,
        Position::TE,
        Position::DST,
    ];

    /// Dense index in `0..COUNT`, used for array-backed maps.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Position::QB => "QB",
            Position::RB => "RB",
            Position::WR => "WR",
            Position::TE => "TE",
            Position::DST => "DST",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = LineupError;

    /// Parses a position label case-insensitively. `D/ST` and `DEF` are
    /// accepted for team defenses.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "QB" => Ok(Position::QB),
            "RB" => Ok(Position::RB),
            "WR" => Ok(Position::WR),
            "TE" => Ok(Position::TE),
            "DST" | "D/ST" | "DEF" => Ok(Position::DST),
            _ => Err(LineupError::UnknownPosition(s.to_string())),
        }
    }
}

/// A candidate player.
///
/// Players are immutable once ingested; the search refers to them by their
/// index in a [`PlayerPool`].
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// Display name. Unique within a pool.
    pub name: String,
    pub position: Position,
    /// Cost against the salary budget.
    pub salary: u32,
    /// Projected fantasy points.
    pub projection: f64,
    pub team: String,
    /// Projected ownership percentage. Carried through, never searched on.
    pub ownership: Option<f64>,
}

impl Player {
    /// Creates a player with no ownership figure.
    pub fn new(
        name: impl Into<String>,
        position: Position,
        salary: u32,
        projection: f64,
        team: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            position,
            salary,
            projection,
            team: team.into(),
            ownership: None,
        }
    }

    /// Sets the ownership percentage.
    pub fn with_ownership(mut self, ownership: f64) -> Self {
        self.ownership = Some(ownership);
        self
    }
}

/// The finalized set of candidate players.
///
/// # Examples
///
/// ```
/// use u_lineup::pool::{Player, PlayerPool, Position};
///
/// let pool = PlayerPool::new(vec![
///     Player::new("A", Position::QB, 5000, 20.0, "KC"),
///     Player::new("B", Position::WR, 4000, 12.5, "KC"),
/// ]);
/// assert_eq!(pool.len(), 2);
/// assert_eq!(pool.indices_for(&[Position::WR]), vec![1]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerPool {
    players: Vec<Player>,
}

impl PlayerPool {
    pub fn new(players: Vec<Player>) -> Self {
        Self { players }
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Player> {
        self.players.iter()
    }

    /// Pool indices of every player whose position is in `positions`, in
    /// pool order.
    pub fn indices_for(&self, positions: &[Position]) -> Vec<usize> {
        self.players
            .iter()
            .enumerate()
            .filter(|(_, p)| positions.contains(&p.position))
            .map(|(i, _)| i)
            .collect()
    }

    /// Builds a new pool from the players at `indices`, in the given order.
    ///
    /// # Panics
    /// Panics if an index is out of bounds.
    pub fn retain_indices(&self, indices: &[usize]) -> PlayerPool {
        PlayerPool {
            players: indices.iter().map(|&i| self.players[i].clone()).collect(),
        }
    }
}

impl std::ops::Index<usize> for PlayerPool {
    type Output = Player;

    fn index(&self, index: usize) -> &Player {
        &self.players[index]
    }
}

impl FromIterator<Player> for PlayerPool {
    fn from_iter<I: IntoIterator<Item = Player>>(iter: I) -> Self {
        Self {
            players: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a PlayerPool {
    type Item = &'a Player;
    type IntoIter = std::slice::Iter<'a, Player>;

    fn into_iter(self) -> Self::IntoIter {
        self.players.iter()
    }
}
