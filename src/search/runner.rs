//! Lineup search execution.
//!
//! # Pipeline
//!
//! 1. Remove excluded players
//! 2. Derive [`PositionNeed`] from the template and prune dominated players
//! 3. Collect each slot's eligible pool indices
//! 4. Refuse search spaces above `max_combinations`
//! 5. Enumerate combinations in batches, evaluate them, and keep a running
//!    top-K of the valid ones
//! 6. Resolve the survivors into [`RankedLineup`]s
//!
//! With the `parallel` feature, step 5 is split on slot 0's candidates and
//! the per-partition rankers are merged; results are identical to the
//! sequential search.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::time::Instant;
use tracing::{debug, info};

use super::config::SearchConfig;
use super::evaluator::ConstraintEvaluator;
use super::generator::CombinationGenerator;
use super::ranker::{LineupRanker, ScoredCombination};
use super::types::{LineupSlot, RankedLineup, SearchResult, SearchStats};
use crate::error::{CombinationCount, LineupError, Result};
use crate::filter::{dominance_filter, exclude_players};
use crate::pool::PlayerPool;
use crate::slots::{PositionNeed, SlotTemplate};

/// Constraint outcome counts of one partition.
#[derive(Debug, Clone, Copy, Default)]
struct Outcomes {
    valid: u64,
    duplicate: u64,
    over_budget: u64,
}

impl std::ops::Add for Outcomes {
    type Output = Outcomes;

    fn add(self, other: Outcomes) -> Outcomes {
        Outcomes {
            valid: self.valid + other.valid,
            duplicate: self.duplicate + other.duplicate,
            over_budget: self.over_budget + other.over_budget,
        }
    }
}

/// Exhaustive lineup optimizer.
pub struct LineupOptimizer;

impl LineupOptimizer {
    /// Returns up to `config.num_lineups` valid lineups, best first.
    ///
    /// Empty slots or an unsatisfiable budget produce an empty result, not
    /// an error.
    ///
    /// # Errors
    /// [`LineupError::InvalidConfig`] for an invalid config or template, and
    /// [`LineupError::SearchSpaceTooLarge`] when the filtered search space
    /// exceeds `config.max_combinations`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_lineup::pool::{Player, PlayerPool, Position};
    /// use u_lineup::search::{LineupOptimizer, SearchConfig};
    /// use u_lineup::slots::{FlexPositions, SlotTemplate};
    ///
    /// let pool = PlayerPool::new(vec![
    ///     Player::new("A", Position::QB, 5000, 20.0, "KC"),
    ///     Player::new("B", Position::QB, 4000, 18.0, "BUF"),
    /// ]);
    /// let template = SlotTemplate::parse(&["QB"], FlexPositions::default()).unwrap();
    /// let config = SearchConfig::new(6000).with_num_lineups(2);
    ///
    /// let lineups = LineupOptimizer::run(&pool, &template, &config).unwrap();
    /// assert_eq!(lineups[0].names(), vec!["A"]);
    /// assert_eq!(lineups[1].names(), vec!["B"]);
    /// ```
    pub fn run(
        pool: &PlayerPool,
        template: &SlotTemplate,
        config: &SearchConfig,
    ) -> Result<Vec<RankedLineup>> {
        Self::run_with_stats(pool, template, config).map(|r| r.lineups)
    }

    /// Like [`run`](Self::run), also returning run statistics.
    pub fn run_with_stats(
        pool: &PlayerPool,
        template: &SlotTemplate,
        config: &SearchConfig,
    ) -> Result<SearchResult> {
        config.validate().map_err(LineupError::InvalidConfig)?;
        template.validate().map_err(LineupError::InvalidConfig)?;

        let start_time = Instant::now();

        let available = exclude_players(pool, &config.excluded);
        let need = PositionNeed::from_template(template);
        let filtered = dominance_filter(&available, &need);
        debug!(
            pool = pool.len(),
            after_exclusion = available.len(),
            after_dominance = filtered.len(),
            "Pool reduced"
        );

        let slot_candidates: Vec<Vec<usize>> = (0..template.len())
            .map(|slot| filtered.indices_for(template.eligible(slot)))
            .collect();
        for (slot, candidates) in slot_candidates.iter().enumerate() {
            debug!(
                slot,
                label = %template.slots()[slot],
                candidates = candidates.len(),
                "Slot candidates"
            );
        }

        let generator = CombinationGenerator::new(slot_candidates);
        let combinations = match generator.combination_count() {
            CombinationCount::Exact(n) if n <= config.max_combinations => n,
            count => {
                return Err(LineupError::SearchSpaceTooLarge {
                    combinations: count,
                    limit: config.max_combinations,
                })
            }
        };
        info!(combinations, budget = config.budget, "Enumerating lineups");

        let (ranker, outcomes) = if combinations == 0 {
            (LineupRanker::new(config.num_lineups), Outcomes::default())
        } else {
            search_all(&filtered, &generator, config)
        };

        let lineups: Vec<RankedLineup> = ranker
            .into_sorted()
            .into_iter()
            .map(|scored| describe(&filtered, template, &scored))
            .collect();

        let stats = SearchStats {
            pool_size: pool.len(),
            excluded: pool.len() - available.len(),
            filtered_pool_size: filtered.len(),
            combinations,
            valid_combinations: outcomes.valid,
            duplicate_rejections: outcomes.duplicate,
            salary_rejections: outcomes.over_budget,
            elapsed_ms: start_time.elapsed().as_millis() as u64,
        };
        info!(
            valid = stats.valid_combinations,
            returned = lineups.len(),
            elapsed_ms = stats.elapsed_ms,
            "Search finished"
        );

        Ok(SearchResult { lineups, stats })
    }
}

#[cfg(feature = "parallel")]
fn search_all(
    pool: &PlayerPool,
    generator: &CombinationGenerator,
    config: &SearchConfig,
) -> (LineupRanker, Outcomes) {
    if !config.parallel {
        return search_partition(pool, generator, config);
    }
    (0..generator.candidates(0).len())
        .into_par_iter()
        .map(|choice| search_partition(pool, &generator.partition(choice), config))
        .reduce(
            || (LineupRanker::new(config.num_lineups), Outcomes::default()),
            |(mut ranker, a), (other, b)| {
                ranker.merge(other);
                (ranker, a + b)
            },
        )
}

#[cfg(not(feature = "parallel"))]
fn search_all(
    pool: &PlayerPool,
    generator: &CombinationGenerator,
    config: &SearchConfig,
) -> (LineupRanker, Outcomes) {
    search_partition(pool, generator, config)
}

/// Evaluates every combination of `generator` with bounded memory.
fn search_partition(
    pool: &PlayerPool,
    generator: &CombinationGenerator,
    config: &SearchConfig,
) -> (LineupRanker, Outcomes) {
    let mut evaluator = ConstraintEvaluator::new(pool, config.budget);
    let mut ranker = LineupRanker::new(config.num_lineups);
    let mut outcomes = Outcomes::default();

    for batch in generator.batches(config.batch_size) {
        let evaluations = evaluator.evaluate_batch(&batch);
        for (i, (row, evaluation)) in batch.rows().zip(&evaluations).enumerate() {
            if evaluation.duplicate {
                outcomes.duplicate += 1;
            } else if evaluation.over_budget {
                outcomes.over_budget += 1;
            } else {
                outcomes.valid += 1;
                ranker.offer(batch.first_ordinal() + i as u64, row, evaluation);
            }
        }
    }

    (ranker, outcomes)
}

fn describe(
    pool: &PlayerPool,
    template: &SlotTemplate,
    scored: &ScoredCombination,
) -> RankedLineup {
    let slots = scored
        .indices
        .iter()
        .zip(template.slots())
        .map(|(&idx, &label)| {
            let player = &pool[idx];
            LineupSlot {
                label,
                name: player.name.clone(),
                position: player.position,
                team: player.team.clone(),
                salary: player.salary,
                projection: player.projection,
            }
        })
        .collect();

    RankedLineup {
        slots,
        total_salary: scored.total_salary,
        total_projection: scored.total_projection,
    }
}
