//! Solver configuration.

/// Default upper bound on the number of counters tried per search.
pub const DEFAULT_MAX_ITERATIONS: u64 = 1_000_000_000;

/// Tunable parameters for a [`Solver`](crate::Solver).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SolverConfig {
    /// Counters `0..max_iterations` are tried before giving up.
    pub max_iterations: u64,
}

impl SolverConfig {
    /// Create a config with the default iteration ceiling.
    pub fn new() -> Self {
        SolverConfig {
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }

    /// Set the iteration ceiling.
    pub fn with_max_iterations(mut self, max_iterations: u64) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self::new()
    }
}
