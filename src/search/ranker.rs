//! Bounded top-K selection of valid combinations.
//!
//! Keeps a min-heap of the K best combinations seen so far, so memory stays
//! O(K) regardless of how many combinations are offered. Order is total
//! projection descending; equal projections are ordered by generation
//! ordinal ascending, which makes results reproducible and independent of
//! how the search space was partitioned.

use super::evaluator::Evaluation;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// A valid combination admitted to the ranking.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCombination {
    /// Position of the combination in the generator's enumeration order.
    pub ordinal: u64,
    /// One pool index per slot.
    pub indices: Vec<usize>,
    pub total_salary: u64,
    pub total_projection: f64,
}

impl ScoredCombination {
    /// `Greater` means ranked ahead.
    fn rank_cmp(&self, projection: f64, ordinal: u64) -> Ordering {
        self.total_projection
            .total_cmp(&projection)
            .then_with(|| ordinal.cmp(&self.ordinal))
    }
}

/// Heap entry ordered so that better combinations compare greater.
#[derive(Debug)]
struct Ranked(ScoredCombination);

impl PartialEq for Ranked {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Ranked {}

impl PartialOrd for Ranked {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Ranked {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .rank_cmp(other.0.total_projection, other.0.ordinal)
    }
}

/// Running top-K of valid combinations.
///
/// # Examples
///
/// ```
/// use u_lineup::search::{Evaluation, LineupRanker};
///
/// let mut ranker = LineupRanker::new(1);
/// let eval = |p: f64| Evaluation {
///     total_salary: 100,
///     total_projection: p,
///     duplicate: false,
///     over_budget: false,
/// };
/// ranker.offer(0, &[0], &eval(5.0));
/// ranker.offer(1, &[1], &eval(7.0));
/// let best = ranker.into_sorted();
/// assert_eq!(best.len(), 1);
/// assert_eq!(best[0].indices, vec![1]);
/// ```
#[derive(Debug)]
pub struct LineupRanker {
    capacity: usize,
    heap: BinaryHeap<Reverse<Ranked>>,
}

impl LineupRanker {
    /// Creates a ranker that keeps the best `k` combinations.
    pub fn new(k: usize) -> Self {
        Self {
            capacity: k,
            heap: BinaryHeap::with_capacity(k.saturating_add(1).min(1 << 16)),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of combinations currently held.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Offers an evaluated combination. Invalid combinations are never
    /// admitted. Returns whether the combination is now held.
    pub fn offer(&mut self, ordinal: u64, row: &[usize], evaluation: &Evaluation) -> bool {
        if !evaluation.is_valid() {
            return false;
        }
        if !self.admits(evaluation.total_projection, ordinal) {
            return false;
        }
        self.push(ScoredCombination {
            ordinal,
            indices: row.to_vec(),
            total_salary: evaluation.total_salary,
            total_projection: evaluation.total_projection,
        });
        true
    }

    /// Folds another ranker's holdings into this one (K-way merge of
    /// partition results).
    pub fn merge(&mut self, other: LineupRanker) {
        for Reverse(Ranked(scored)) in other.heap {
            if self.admits(scored.total_projection, scored.ordinal) {
                self.push(scored);
            }
        }
    }

    /// Consumes the ranker, returning holdings best first.
    pub fn into_sorted(self) -> Vec<ScoredCombination> {
        self.heap
            .into_sorted_vec()
            .into_iter()
            .map(|Reverse(Ranked(s))| s)
            .collect()
    }

    fn admits(&self, projection: f64, ordinal: u64) -> bool {
        if self.capacity == 0 {
            return false;
        }
        if self.heap.len() < self.capacity {
            return true;
        }
        match self.heap.peek() {
            Some(Reverse(Ranked(worst))) => worst.rank_cmp(projection, ordinal) == Ordering::Less,
            None => true,
        }
    }

    fn push(&mut self, scored: ScoredCombination) {
        if self.heap.len() >= self.capacity {
            self.heap.pop();
        }
        self.heap.push(Reverse(Ranked(scored)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(projection: f64) -> Evaluation {
        Evaluation {
            total_salary: 1000,
            total_projection: projection,
            duplicate: false,
            over_budget: false,
        }
    }

    fn ordinals(ranker: LineupRanker) -> Vec<u64> {
        ranker.into_sorted().iter().map(|s| s.ordinal).collect()
    }

    #[test]
    fn test_keeps_best_k_descending() {
        let mut ranker = LineupRanker::new(3);
        for (ord, p) in [3.0, 9.0, 1.0, 7.0, 8.0, 2.0].iter().enumerate() {
            ranker.offer(ord as u64, &[ord], &eval(*p));
        }
        let sorted = ranker.into_sorted();
        let projections: Vec<f64> = sorted.iter().map(|s| s.total_projection).collect();
        assert_eq!(projections, vec![9.0, 8.0, 7.0]);
    }

    #[test]
    fn test_invalid_never_admitted() {
        let mut ranker = LineupRanker::new(5);
        let mut dup = eval(100.0);
        dup.duplicate = true;
        let mut pricey = eval(100.0);
        pricey.over_budget = true;
        assert!(!ranker.offer(0, &[0, 0], &dup));
        assert!(!ranker.offer(1, &[1], &pricey));
        assert!(ranker.offer(2, &[2], &eval(0.0)));
        let sorted = ranker.into_sorted();
        assert_eq!(sorted.len(), 1);
        assert_eq!(sorted[0].total_projection, 0.0);
    }

    #[test]
    fn test_tie_break_by_ordinal() {
        let mut ranker = LineupRanker::new(2);
        ranker.offer(5, &[5], &eval(10.0));
        ranker.offer(2, &[2], &eval(10.0));
        ranker.offer(9, &[9], &eval(10.0));
        assert_eq!(ordinals(ranker), vec![2, 5]);
    }

    #[test]
    fn test_fewer_than_k() {
        let mut ranker = LineupRanker::new(10);
        ranker.offer(0, &[0], &eval(1.0));
        ranker.offer(1, &[1], &eval(2.0));
        assert_eq!(ordinals(ranker), vec![1, 0]);
    }

    #[test]
    fn test_merge_equals_single_pass() {
        let values = [4.0, 6.0, 6.0, 1.0, 9.0, 3.0, 6.0, 8.0];

        let mut single = LineupRanker::new(4);
        for (i, p) in values.iter().enumerate() {
            single.offer(i as u64, &[i], &eval(*p));
        }

        let mut left = LineupRanker::new(4);
        let mut right = LineupRanker::new(4);
        for (i, p) in values.iter().enumerate() {
            let target = if i % 2 == 0 { &mut left } else { &mut right };
            target.offer(i as u64, &[i], &eval(*p));
        }
        right.merge(left);

        assert_eq!(ordinals(right), ordinals(single));
    }

    #[test]
    fn test_zero_capacity() {
        let mut ranker = LineupRanker::new(0);
        assert!(!ranker.offer(0, &[0], &eval(1.0)));
        assert!(ranker.is_empty());
    }
}
