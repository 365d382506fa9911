//! Bounded search for the lowest counter meeting a difficulty.

use tracing::{debug, warn};

use crate::config::SolverConfig;
use crate::difficulty::{meets_difficulty, validate_difficulty};
use crate::error::{Result, SolveError};
use crate::hash::{sha256, DIGEST_LEN};
use crate::message::MessageBuffer;

/// A found proof of work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Solution {
    /// The lowest counter whose digest meets the difficulty.
    pub counter: u64,
    /// SHA256 of `nonce || counter`.
    pub digest: [u8; DIGEST_LEN],
    /// Candidates hashed, including the winning one.
    pub attempts: u64,
}

/// Proof-of-work solver.
///
/// Holds only configuration, so a single solver can be shared freely
/// between threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    /// Create a solver with the given configuration.
    pub fn new(config: SolverConfig) -> Self {
        Solver { config }
    }

    /// The solver's configuration.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Find the lowest counter such that `sha256(nonce || counter)` has at
    /// least `difficulty` leading zero bits.
    pub fn solve(&self, nonce: &str, difficulty: u32) -> Result<u64> {
        self.solve_bytes(nonce.as_bytes(), difficulty)
    }

    /// [`Solver::solve`] for a nonce given as raw bytes.
    pub fn solve_bytes(&self, nonce: &[u8], difficulty: u32) -> Result<u64> {
        self.solve_detailed(nonce, difficulty)
            .map(|solution| solution.counter)
    }

    /// Like [`Solver::solve_bytes`], also returning the winning digest.
    ///
    /// # Arguments
    /// * `nonce` - Prefix of every candidate message
    /// * `difficulty` - Required leading zero bits, `1..=256`
    ///
    /// # Errors
    /// * [`SolveError::DifficultyOutOfRange`] before any hashing
    /// * [`SolveError::MessageOverflow`] as soon as a candidate no longer fits
    ///   the message buffer; the search is abandoned
    /// * [`SolveError::Exhausted`] when no counter below the ceiling matches
    pub fn solve_detailed(&self, nonce: &[u8], difficulty: u32) -> Result<Solution> {
        validate_difficulty(difficulty)?;

        let max_iterations = self.config.max_iterations;
        debug!(
            difficulty,
            max_iterations,
            nonce_len = nonce.len(),
            "starting proof-of-work search"
        );

        let mut buffer = MessageBuffer::new();

        for counter in 0..max_iterations {
            let message = match buffer.render(nonce, counter) {
                Ok(message) => message,
                Err(err) => {
                    warn!(counter, nonce_len = nonce.len(), "candidate message overflowed buffer");
                    return Err(err);
                }
            };

            let digest = sha256(message);
            if meets_difficulty(&digest, difficulty) {
                debug!(counter, difficulty, "proof-of-work solution found");
                return Ok(Solution {
                    counter,
                    digest,
                    attempts: counter + 1,
                });
            }
        }

        debug!(max_iterations, difficulty, "proof-of-work search exhausted");
        Err(SolveError::Exhausted {
            iterations: max_iterations,
        })
    }
}

/// Solve with the default configuration.
pub fn solve(nonce: &str, difficulty: u32) -> Result<u64> {
    Solver::default().solve(nonce, difficulty)
}
