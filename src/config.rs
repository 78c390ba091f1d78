//! Run configuration loaded from TOML.
//!
//! ```toml
//! salaries = "wk16_salaries.csv"
//! projections = "wk16_projections.csv"
//! slots = ["RB", "RB", "WR", "WR", "FLEX"]
//! flex = ["RB", "WR", "TE"]
//! budget = 33600
//! lineups = 100
//! exclude = ["Amari Cooper", "Ezekiel Elliott"]
//!
//! [search]
//! batch_size = 65536
//! max_combinations = 50000000
//! parallel = true
//! ```

use crate::error::{LineupError, Result};
use crate::pool::Position;
use crate::search::SearchConfig;
use crate::slots::{FlexPositions, SlotTemplate};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Salary table (CSV).
    pub salaries: PathBuf,
    /// Projection table (CSV).
    pub projections: PathBuf,
    /// Slot labels in roster order; `FLEX` marks a flexible slot.
    pub slots: Vec<String>,
    /// Positions eligible for `FLEX` slots.
    #[serde(default = "default_flex")]
    pub flex: Vec<String>,
    pub budget: u64,
    #[serde(default = "default_lineups")]
    pub lineups: usize,
    #[serde(default)]
    pub exclude: Vec<String>,
    #[serde(default)]
    pub search: SearchSection,
}

/// Optional `[search]` table; unset keys keep [`SearchConfig`] defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchSection {
    pub batch_size: Option<usize>,
    pub max_combinations: Option<u64>,
    pub parallel: Option<bool>,
}

fn default_flex() -> Vec<String> {
    vec!["RB".into(), "WR".into(), "TE".into()]
}

fn default_lineups() -> usize {
    10
}

impl RunConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: RunConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Parses the slot labels and flex set.
    pub fn template(&self) -> Result<SlotTemplate> {
        let flex = self
            .flex
            .iter()
            .map(|p| p.parse::<Position>())
            .collect::<Result<Vec<_>>>()?;
        SlotTemplate::parse(&self.slots, FlexPositions::new(flex))
    }

    /// Search parameters, with unset `[search]` keys left at their defaults.
    pub fn search_config(&self) -> SearchConfig {
        let defaults = SearchConfig::default();
        SearchConfig::new(self.budget)
            .with_num_lineups(self.lineups)
            .with_excluded(self.exclude.iter().cloned())
            .with_batch_size(self.search.batch_size.unwrap_or(defaults.batch_size))
            .with_max_combinations(
                self.search
                    .max_combinations
                    .unwrap_or(defaults.max_combinations),
            )
            .with_parallel(self.search.parallel.unwrap_or(defaults.parallel))
    }

    /// Checks that the template parses and the search parameters are usable.
    pub fn validate(&self) -> Result<()> {
        let template = self.template()?;
        template.validate().map_err(LineupError::InvalidConfig)?;
        self.search_config()
            .validate()
            .map_err(LineupError::InvalidConfig)?;
        Ok(())
    }
}
