//! Cartesian-product enumeration of slot assignments.
//!
//! Combinations are produced lazily in fixed-size batches. The enumeration
//! order is lexicographic over each slot's candidate list, with slot 0 the
//! most significant digit; a combination's *ordinal* is its rank in that
//! order. No inter-slot filtering happens here: a row may repeat a player
//! or exceed the budget, which is the evaluator's concern.

use crate::error::CombinationCount;

/// Enumerates every choice of one candidate per slot.
///
/// # Examples
///
/// ```
/// use u_lineup::search::CombinationGenerator;
///
/// let gen = CombinationGenerator::new(vec![vec![0, 1], vec![2, 3, 4]]);
/// let rows: Vec<Vec<usize>> = gen
///     .batches(4)
///     .flat_map(|b| b.rows().map(|r| r.to_vec()).collect::<Vec<_>>())
///     .collect();
/// assert_eq!(rows.len(), 6);
/// assert_eq!(rows[0], vec![0, 2]);
/// assert_eq!(rows[5], vec![1, 4]);
/// ```
#[derive(Debug, Clone)]
pub struct CombinationGenerator {
    slots: Vec<Vec<usize>>,
    ordinal_offset: u64,
}

impl CombinationGenerator {
    /// Creates a generator from each slot's eligible pool indices.
    pub fn new(slot_candidates: Vec<Vec<usize>>) -> Self {
        Self {
            slots: slot_candidates,
            ordinal_offset: 0,
        }
    }

    /// Number of slots (row width).
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Candidate pool indices of one slot.
    pub fn candidates(&self, slot: usize) -> &[usize] {
        &self.slots[slot]
    }

    /// Number of rows this generator yields.
    ///
    /// Zero if there are no slots or any slot has no candidates.
    pub fn combination_count(&self) -> CombinationCount {
        if self.slots.is_empty() {
            return CombinationCount::Exact(0);
        }
        self.slots
            .iter()
            .try_fold(1u64, |acc, s| acc.checked_mul(s.len() as u64))
            .map_or(CombinationCount::Overflow, CombinationCount::Exact)
    }

    /// Ordinal of this generator's first row in the unpartitioned order.
    pub fn ordinal_offset(&self) -> u64 {
        self.ordinal_offset
    }

    /// Returns the sub-generator whose slot 0 is fixed to its `choice`-th
    /// candidate.
    ///
    /// Ordinals reported by the partition's batches are the ordinals of the
    /// same rows in the full enumeration, so results from separate
    /// partitions can be merged deterministically.
    ///
    /// # Panics
    /// Panics if there are no slots or `choice` is out of range.
    pub fn partition(&self, choice: usize) -> CombinationGenerator {
        let rest: u64 = self.slots[1..]
            .iter()
            .fold(1u64, |acc, s| acc.saturating_mul(s.len() as u64));
        let mut slots = self.slots.clone();
        slots[0] = vec![self.slots[0][choice]];
        CombinationGenerator {
            slots,
            ordinal_offset: self
                .ordinal_offset
                .saturating_add(rest.saturating_mul(choice as u64)),
        }
    }

    /// Starts (or restarts) enumeration, yielding batches of at most
    /// `batch_size` rows.
    ///
    /// # Panics
    /// Panics if `batch_size` is zero.
    pub fn batches(&self, batch_size: usize) -> CombinationBatches<'_> {
        assert!(batch_size > 0, "batch_size must be positive");
        let remaining = match self.combination_count() {
            CombinationCount::Exact(n) => n,
            CombinationCount::Overflow => u64::MAX,
        };
        CombinationBatches {
            slots: &self.slots,
            cursor: vec![0; self.slots.len()],
            next_ordinal: self.ordinal_offset,
            remaining,
            batch_size,
            exhausted: remaining == 0,
        }
    }
}

/// A block of consecutive combinations stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombinationBatch {
    first_ordinal: u64,
    width: usize,
    indices: Vec<usize>,
}

impl CombinationBatch {
    /// Ordinal of the first row.
    pub fn first_ordinal(&self) -> u64 {
        self.first_ordinal
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.indices.len() / self.width
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Iterates rows in order.
    pub fn rows(&self) -> std::slice::ChunksExact<'_, usize> {
        self.indices.chunks_exact(self.width)
    }
}

/// Iterator over the batches of a [`CombinationGenerator`].
pub struct CombinationBatches<'a> {
    slots: &'a [Vec<usize>],
    cursor: Vec<usize>,
    next_ordinal: u64,
    /// Rows not yet yielded.
    remaining: u64,
    batch_size: usize,
    exhausted: bool,
}

impl CombinationBatches<'_> {
    /// Advances the odometer; returns false after the last row.
    fn advance(&mut self) -> bool {
        for slot in (0..self.cursor.len()).rev() {
            self.cursor[slot] += 1;
            if self.cursor[slot] < self.slots[slot].len() {
                return true;
            }
            self.cursor[slot] = 0;
        }
        false
    }
}

impl Iterator for CombinationBatches<'_> {
    type Item = CombinationBatch;

    fn next(&mut self) -> Option<CombinationBatch> {
        if self.exhausted {
            return None;
        }

        let width = self.slots.len();
        let rows_hint = usize::try_from(self.remaining)
            .unwrap_or(usize::MAX)
            .min(self.batch_size);
        let mut indices = Vec::with_capacity(rows_hint.checked_mul(width).unwrap_or(0));
        let first_ordinal = self.next_ordinal;
        let mut rows = 0;

        while rows < self.batch_size {
            indices.extend(
                self.cursor
                    .iter()
                    .zip(self.slots)
                    .map(|(&c, candidates)| candidates[c]),
            );
            rows += 1;
            if !self.advance() {
                self.exhausted = true;
                break;
            }
        }

        self.next_ordinal = self.next_ordinal.saturating_add(rows as u64);
        self.remaining = self.remaining.saturating_sub(rows as u64);
        Some(CombinationBatch {
            first_ordinal,
            width,
            indices,
        })
    }
}
