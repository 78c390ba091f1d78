//! Search configuration.

/// Parameters of a lineup search.
///
/// # Examples
///
/// ```
/// use u_lineup::search::SearchConfig;
///
/// let config = SearchConfig::new(50_000)
///     .with_num_lineups(20)
///     .with_excluded(["Amari Cooper"])
///     .with_batch_size(4096);
/// assert_eq!(config.budget, 50_000);
/// assert_eq!(config.num_lineups, 20);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Salary budget; a lineup is valid only if its total salary is at most this.
    pub budget: u64,

    /// Player names removed from the pool before searching.
    pub excluded: Vec<String>,

    /// Number of lineups to return (K).
    pub num_lineups: usize,

    /// Combinations generated and evaluated per batch.
    ///
    /// Bounds the working memory of the search to
    /// `batch_size * slot_count` indices per worker.
    pub batch_size: usize,

    /// Largest search space the optimizer will enumerate.
    ///
    /// Checked before any combination is generated.
    pub max_combinations: u64,

    /// Whether to evaluate partitions of the search space in parallel.
    ///
    /// Only has an effect with the `parallel` feature.
    pub parallel: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            budget: 50_000,
            excluded: Vec::new(),
            num_lineups: 10,
            batch_size: 65_536,
            max_combinations: 50_000_000,
            parallel: true,
        }
    }
}

impl SearchConfig {
    /// Creates a configuration with the given budget and default settings.
    pub fn new(budget: u64) -> Self {
        Self {
            budget,
            ..Self::default()
        }
    }

    /// Sets the salary budget.
    pub fn with_budget(mut self, budget: u64) -> Self {
        self.budget = budget;
        self
    }

    /// Sets the names to exclude.
    pub fn with_excluded<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded = names.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the number of lineups to return.
    pub fn with_num_lineups(mut self, k: usize) -> Self {
        self.num_lineups = k;
        self
    }

    /// Sets the batch size.
    pub fn with_batch_size(mut self, n: usize) -> Self {
        self.batch_size = n;
        self
    }

    /// Sets the combination ceiling.
    pub fn with_max_combinations(mut self, n: u64) -> Self {
        self.max_combinations = n;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.num_lineups == 0 {
            return Err("num_lineups must be at least 1".into());
        }
        if self.batch_size == 0 {
            return Err("batch_size must be at least 1".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.num_lineups, 10);
        assert_eq!(config.max_combinations, 50_000_000);
        assert!(config.excluded.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = SearchConfig::new(33_600)
            .with_budget(40_000)
            .with_excluded(vec!["a".to_string(), "b".to_string()])
            .with_max_combinations(1_000)
            .with_parallel(false);
        assert_eq!(config.budget, 40_000);
        assert_eq!(config.excluded, vec!["a", "b"]);
        assert_eq!(config.max_combinations, 1_000);
        assert!(!config.parallel);
    }

    #[test]
    fn test_invalid() {
        assert!(SearchConfig::default()
            .with_num_lineups(0)
            .validate()
            .is_err());
        assert!(SearchConfig::default()
            .with_batch_size(0)
            .validate()
            .is_err());
    }
}
