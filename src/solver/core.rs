use log::{debug, info};
use rayon::prelude::*;

use crate::choices::choices;
use crate::expression::{Expression, Number};
use crate::solver::config::SolverConfig;
use crate::solver::results::results;

/// Main solver for finding every expression that hits a target
#[derive(Debug, Clone, Default)]
pub struct CountdownSolver {
    config: SolverConfig,
}

impl CountdownSolver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Get a reference to the solver configuration
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Lazily yield every expression over `numbers` whose value is `target`.
    ///
    /// Each sequence is searched in full before its matches are yielded.
    /// Dropping the iterator early leaves nothing behind.
    pub fn solutions<'a>(
        &self,
        numbers: &'a [Number],
        target: Number,
    ) -> impl Iterator<Item = Expression> + 'a {
        choices(numbers).flat_map(move |seq| {
            results(&seq)
                .into_iter()
                .filter(move |candidate| candidate.value == target)
                .map(|candidate| candidate.expression)
        })
    }

    /// Collect the solutions, honouring the configured limit and parallelism
    pub fn find_all(&self, numbers: &[Number], target: Number) -> Vec<Expression> {
        info!(
            "Searching for expressions using {:?} that equal {}",
            numbers, target
        );

        let found = if self.config.parallel {
            self.find_all_parallel(numbers, target)
        } else {
            match self.config.limit {
                Some(limit) => self.solutions(numbers, target).take(limit).collect(),
                None => self.solutions(numbers, target).collect(),
            }
        };

        info!("Found {} solutions", found.len());
        found
    }

    /// The first solution in search order, if any
    pub fn find_first(&self, numbers: &[Number], target: Number) -> Option<Expression> {
        self.solutions(numbers, target).next()
    }

    /// Number of solutions, ignoring the configured limit
    pub fn count(&self, numbers: &[Number], target: Number) -> usize {
        self.solutions(numbers, target).count()
    }

    fn find_all_parallel(&self, numbers: &[Number], target: Number) -> Vec<Expression> {
        let sequences: Vec<Vec<Number>> = choices(numbers).collect();
        debug!("Fanning out over {} sequences", sequences.len());

        // collect keeps search order, so the limit cuts the same prefix
        let mut found: Vec<Expression> = sequences
            .par_iter()
            .flat_map_iter(|seq| {
                results(seq)
                    .into_iter()
                    .filter(|candidate| candidate.value == target)
                    .map(|candidate| candidate.expression)
            })
            .collect();

        if let Some(limit) = self.config.limit {
            found.truncate(limit);
        }
        found
    }
}
