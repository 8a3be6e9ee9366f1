use log::info;

use crate::combination::Combination;
use crate::modifier::ModifierSet;
use crate::solver::constants::DEFAULT_MAX_LENGTH;
use crate::solver::errors::SolverError;
use crate::solver::estimate::estimate;
use crate::solver::expand::expand;
use crate::solver::progress::{LogReporter, SearchReporter};
use crate::solver::seed::seed_candidates;

/// Configuration for the combination search
pub struct SolverConfig {
    /// Longest combination the search will try before giving up
    pub max_length: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_MAX_LENGTH,
        }
    }
}

/// Main solver for finding modifier combinations that sum to a target
pub struct ModifierSolver {
    modifiers: ModifierSet,
    config: SolverConfig,
    reporter: Box<dyn SearchReporter>,
}

impl ModifierSolver {
    /// Create a solver over the given modifier set with default configuration
    pub fn new(modifiers: ModifierSet) -> Self {
        Self::with_config(modifiers, SolverConfig::default())
    }

    pub fn with_config(modifiers: ModifierSet, config: SolverConfig) -> Self {
        Self {
            modifiers,
            config,
            reporter: Box::new(LogReporter),
        }
    }

    /// Replace the progress reporter
    pub fn with_reporter(mut self, reporter: Box<dyn SearchReporter>) -> Self {
        self.reporter = reporter;
        self
    }

    /// Get a reference to the solver configuration
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Find a combination of allowed modifiers that sums to the target
    ///
    /// The answer is the required modifiers followed by the first matching
    /// combination in lexicographic scan order, so `answer.iter().sum()`
    /// equals the original target.
    ///
    /// # Errors
    ///
    /// Returns an error if a required modifier is outside the allowed set,
    /// or if no combination within the configured length cap reaches the
    /// target.
    pub fn solve(&self, target: i64, required: &[i64]) -> Result<Vec<i64>, SolverError> {
        self.modifiers.validate_required(required)?;

        let adjusted = target - required.iter().sum::<i64>();
        info!(
            "Searching for combinations summing to {} ({} modifiers required)",
            adjusted,
            required.len()
        );

        let mut candidates = seed_candidates(&estimate(adjusted, &self.modifiers), &self.modifiers);
        let mut examined: u64 = 0;

        loop {
            for combination in &candidates {
                examined += 1;
                if combination.sum() == adjusted {
                    let mut answer = required.to_vec();
                    answer.extend_from_slice(combination.values());
                    self.reporter
                        .on_match(target, &answer, candidates.len(), examined);
                    return Ok(answer);
                }
            }

            // Every combination in a round has the same length.
            let length = candidates.iter().next().map_or(0, Combination::len);
            self.reporter.on_round(length, candidates.len(), examined);

            if length >= self.config.max_length {
                return Err(SolverError::LengthLimitExceeded {
                    target: adjusted,
                    max_length: self.config.max_length,
                });
            }

            candidates = expand(&candidates, &self.modifiers);
        }
    }
}

impl Default for ModifierSolver {
    fn default() -> Self {
        Self::new(ModifierSet::default())
    }
}
