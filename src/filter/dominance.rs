//! Dominance pruning.
//!
//! # Algorithm
//!
//! For each position with a non-zero need `n`:
//!
//! 1. Sort the position's players by salary ascending (ties: projection
//!    descending, then pool order)
//! 2. Sweep in that order, keeping the sorted projections retained so far
//! 3. Retain a player iff fewer than `n` retained players have a strictly
//!    greater projection
//!
//! A discarded player has at least `n` cheaper-or-equal players with higher
//! projection at the same position, so any lineup using it can swap in one of
//! them without raising salary or lowering the score. The salary-ascending
//! order is what makes "already retained" mean "cheaper or equal".
//!
//! Each sweep is O(m log m) for m players at the position.

use crate::pool::{PlayerPool, Position};
use crate::slots::PositionNeed;
use tracing::debug;

/// Returns the pool indices that survive dominance pruning, in pool order.
///
/// Positions with a need of zero are dropped entirely.
pub fn dominance_filter_indices(pool: &PlayerPool, need: &PositionNeed) -> Vec<usize> {
    let mut kept = Vec::new();

    for position in Position::ALL {
        let threshold = need.get(position) as usize;
        let mut candidates = pool.indices_for(&[position]);
        if threshold == 0 {
            if !candidates.is_empty() {
                debug!(%position, dropped = candidates.len(), "Position not in template");
            }
            continue;
        }

        candidates.sort_by(|&a, &b| {
            let (pa, pb) = (&pool[a], &pool[b]);
            pa.salary
                .cmp(&pb.salary)
                .then_with(|| pb.projection.total_cmp(&pa.projection))
                .then_with(|| a.cmp(&b))
        });

        // Ascending projections of retained players.
        let mut retained: Vec<f64> = Vec::with_capacity(candidates.len());
        let before = kept.len();
        for &idx in &candidates {
            let proj = pool[idx].projection;
            let not_greater = retained.partition_point(|&r| r.total_cmp(&proj).is_le());
            let better = retained.len() - not_greater;
            if better < threshold {
                retained.insert(not_greater, proj);
                kept.push(idx);
            }
        }

        debug!(
            %position,
            kept = kept.len() - before,
            dropped = candidates.len() - (kept.len() - before),
            "Dominance filter"
        );
    }

    kept.sort_unstable();
    kept
}

/// Prunes dominated players, returning a new pool in the original order.
///
/// # Examples
///
/// ```
/// use u_lineup::filter::dominance_filter;
/// use u_lineup::pool::{Player, PlayerPool, Position};
/// use u_lineup::slots::PositionNeed;
///
/// let pool = PlayerPool::new(vec![
///     Player::new("cheap-good", Position::WR, 4000, 15.0, "A"),
///     Player::new("pricey-bad", Position::WR, 6000, 10.0, "B"),
/// ]);
/// let need = PositionNeed::default().with(Position::WR, 1);
/// let filtered = dominance_filter(&pool, &need);
/// assert_eq!(filtered.len(), 1);
/// assert_eq!(filtered[0].name, "cheap-good");
/// ```
pub fn dominance_filter(pool: &PlayerPool, need: &PositionNeed) -> PlayerPool {
    pool.retain_indices(&dominance_filter_indices(pool, need))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::Player;

    fn wr(name: &str, salary: u32, projection: f64) -> Player {
        Player::new(name, Position::WR, salary, projection, "T")
    }

    fn names(pool: &PlayerPool) -> Vec<&str> {
        pool.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_need_one_keeps_increasing_frontier() {
        let pool = PlayerPool::new(vec![
            wr("a", 3000, 8.0),
            wr("b", 4000, 7.0),
            wr("c", 5000, 12.0),
            wr("d", 6000, 11.0),
            wr("e", 7000, 15.0),
        ]);
        let need = PositionNeed::default().with(Position::WR, 1);
        assert_eq!(names(&dominance_filter(&pool, &need)), vec!["a", "c", "e"]);
    }

    #[test]
    fn test_need_two_keeps_second_best() {
        let pool = PlayerPool::new(vec![
            wr("a", 3000, 8.0),
            wr("b", 4000, 7.0),
            wr("c", 5000, 12.0),
            wr("d", 6000, 11.0),
            wr("e", 7000, 6.0),
        ]);
        let need = PositionNeed::default().with(Position::WR, 2);
        // b: one better (a) -> kept; d: one better (c) -> kept; e: four better -> dropped
        assert_eq!(
            names(&dominance_filter(&pool, &need)),
            vec!["a", "b", "c", "d"]
        );
    }

    #[test]
    fn test_equal_projection_is_not_dominance() {
        let pool = PlayerPool::new(vec![wr("a", 3000, 10.0), wr("b", 5000, 10.0)]);
        let need = PositionNeed::default().with(Position::WR, 1);
        assert_eq!(names(&dominance_filter(&pool, &need)), vec!["a", "b"]);
    }

    #[test]
    fn test_equal_salary_higher_projection_first() {
        let pool = PlayerPool::new(vec![
            wr("low", 5000, 8.0),
            wr("high1", 5000, 10.0),
            wr("high2", 5000, 10.0),
        ]);
        let need = PositionNeed::default().with(Position::WR, 2);
        assert_eq!(
            names(&dominance_filter(&pool, &need)),
            vec!["high1", "high2"]
        );
    }

    #[test]
    fn test_positions_are_independent() {
        let pool = PlayerPool::new(vec![
            Player::new("rb", Position::RB, 9000, 30.0, "T"),
            wr("wr", 3000, 5.0),
            Player::new("qb", Position::QB, 1000, 1.0, "T"),
        ]);
        let need = PositionNeed::default()
            .with(Position::RB, 1)
            .with(Position::WR, 1);
        assert_eq!(names(&dominance_filter(&pool, &need)), vec!["rb", "wr"]);
    }

    #[test]
    fn test_idempotent() {
        let pool = PlayerPool::new(vec![
            wr("a", 3000, 8.0),
            wr("b", 4000, 9.0),
            wr("c", 4500, 7.0),
            wr("d", 5000, 6.0),
            wr("e", 6000, 12.0),
        ]);
        let need = PositionNeed::default().with(Position::WR, 2);
        let once = dominance_filter(&pool, &need);
        let twice = dominance_filter(&once, &need);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_empty_pool() {
        let need = PositionNeed::default().with(Position::QB, 1);
        assert!(dominance_filter(&PlayerPool::default(), &need).is_empty());
    }
}
