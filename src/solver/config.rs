/// Configuration for the solver
#[derive(Debug, Clone, Default)]
pub struct SolverConfig {
    /// Fan the search out across sequences with rayon
    pub parallel: bool,
    /// Stop after this many solutions
    pub limit: Option<usize>,
}

impl SolverConfig {
    pub fn parallel() -> Self {
        Self {
            parallel: true,
            ..Self::default()
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}
