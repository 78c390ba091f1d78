//! Lineup descriptors returned by the optimizer.

use crate::pool::Position;
use crate::slots::SlotLabel;

/// One filled slot of a ranked lineup.
#[derive(Debug, Clone, PartialEq)]
pub struct LineupSlot {
    pub label: SlotLabel,
    pub name: String,
    pub position: Position,
    pub team: String,
    pub salary: u32,
    pub projection: f64,
}

/// A valid lineup, with players in template slot order.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedLineup {
    pub slots: Vec<LineupSlot>,
    pub total_salary: u64,
    pub total_projection: f64,
}

impl RankedLineup {
    /// Player names in slot order.
    pub fn names(&self) -> Vec<&str> {
        self.slots.iter().map(|s| s.name.as_str()).collect()
    }
}

/// Counters describing one optimizer run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Players in the input pool.
    pub pool_size: usize,
    /// Players removed by the exclusion list.
    pub excluded: usize,
    /// Players left after exclusion and dominance pruning.
    pub filtered_pool_size: usize,
    /// Combinations enumerated.
    pub combinations: u64,
    /// Combinations satisfying every constraint.
    pub valid_combinations: u64,
    /// Combinations repeating a player. Counted here even when also over budget.
    pub duplicate_rejections: u64,
    /// Combinations over the salary budget without a repeated player.
    pub salary_rejections: u64,
    /// Wall-clock search time in milliseconds.
    pub elapsed_ms: u64,
}

/// Lineups plus run statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// Best lineups first.
    pub lineups: Vec<RankedLineup>,
    pub stats: SearchStats,
}
