//! Salary and uniqueness checks for generated combinations.

use super::generator::CombinationBatch;
use crate::pool::PlayerPool;

/// Totals and constraint flags of one combination.
///
/// Validity is carried as flags next to the score; an invalid combination
/// keeps its real projection total and is excluded from ranking instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    pub total_salary: u64,
    pub total_projection: f64,
    /// Some pool index appears in more than one slot.
    pub duplicate: bool,
    /// `total_salary` exceeds the budget.
    pub over_budget: bool,
}

impl Evaluation {
    /// Within budget and no repeated player.
    pub fn is_valid(&self) -> bool {
        !self.duplicate && !self.over_budget
    }
}

/// Evaluates combinations against a pool and a budget.
///
/// Holds an occurrence tally sized to the pool, reused across rows, so a
/// single evaluator must not be shared between threads; parallel searches
/// create one per partition.
pub struct ConstraintEvaluator<'a> {
    pool: &'a PlayerPool,
    budget: u64,
    tally: Vec<u8>,
}

impl<'a> ConstraintEvaluator<'a> {
    pub fn new(pool: &'a PlayerPool, budget: u64) -> Self {
        Self {
            pool,
            budget,
            tally: vec![0; pool.len()],
        }
    }

    /// Evaluates one row of pool indices.
    ///
    /// # Panics
    /// Panics if a row references an index outside the pool.
    pub fn evaluate(&mut self, row: &[usize]) -> Evaluation {
        let mut total_salary = 0u64;
        let mut total_projection = 0.0;
        let mut duplicate = false;

        for &idx in row {
            let player = &self.pool[idx];
            total_salary += u64::from(player.salary);
            total_projection += player.projection;
            self.tally[idx] = self.tally[idx].saturating_add(1);
            if self.tally[idx] > 1 {
                duplicate = true;
            }
        }
        for &idx in row {
            self.tally[idx] = 0;
        }

        Evaluation {
            total_salary,
            total_projection,
            duplicate,
            over_budget: total_salary > self.budget,
        }
    }

    /// Evaluates every row of a batch, in row order.
    pub fn evaluate_batch(&mut self, batch: &CombinationBatch) -> Vec<Evaluation> {
        batch.rows().map(|row| self.evaluate(row)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Player, Position};
    use crate::search::CombinationGenerator;

    fn pool() -> PlayerPool {
        PlayerPool::new(vec![
            Player::new("a", Position::RB, 5000, 10.0, "T"),
            Player::new("b", Position::RB, 4000, 8.5, "T"),
            Player::new("c", Position::WR, 3000, 0.0, "T"),
        ])
    }

    #[test]
    fn test_totals() {
        let pool = pool();
        let mut ev = ConstraintEvaluator::new(&pool, 9000);
        let e = ev.evaluate(&[0, 1]);
        assert_eq!(e.total_salary, 9000);
        assert!((e.total_projection - 18.5).abs() < 1e-10);
        assert!(e.is_valid());
    }

    #[test]
    fn test_over_budget() {
        let pool = pool();
        let mut ev = ConstraintEvaluator::new(&pool, 8999);
        let e = ev.evaluate(&[0, 1]);
        assert!(e.over_budget);
        assert!(!e.duplicate);
        assert!(!e.is_valid());
        // projection is still reported, not zeroed
        assert!((e.total_projection - 18.5).abs() < 1e-10);
    }

    #[test]
    fn test_duplicate() {
        let pool = pool();
        let mut ev = ConstraintEvaluator::new(&pool, 100_000);
        let e = ev.evaluate(&[1, 2, 1]);
        assert!(e.duplicate);
        assert!(!e.is_valid());
        // tally is reset between rows
        assert!(!ev.evaluate(&[1, 2]).duplicate);
    }

    #[test]
    fn test_zero_score_valid_lineup() {
        let pool = pool();
        let mut ev = ConstraintEvaluator::new(&pool, 3000);
        let e = ev.evaluate(&[2]);
        assert!(e.is_valid());
        assert_eq!(e.total_projection, 0.0);
    }

    #[test]
    fn test_evaluate_batch() {
        let pool = pool();
        let gen = CombinationGenerator::new(vec![vec![0, 1], vec![0, 1]]);
        let batch = gen.batches(10).next().unwrap();
        let mut ev = ConstraintEvaluator::new(&pool, 9000);
        let evals = ev.evaluate_batch(&batch);
        let valid: Vec<bool> = evals.iter().map(|e| e.is_valid()).collect();
        assert_eq!(valid, vec![false, true, true, false]);
    }
}
