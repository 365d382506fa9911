//! Solver error and status types.

use thiserror::Error;

/// Reasons a search can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SolveError {
    /// No nonce was supplied.
    #[error("nonce is missing")]
    NonceMissing,

    /// Difficulty outside `1..=256`.
    #[error("difficulty {difficulty} is out of range (1..=256)")]
    DifficultyOutOfRange {
        /// The rejected difficulty.
        difficulty: u32,
    },

    /// Rendering `nonce || counter` would not fit the message buffer.
    #[error("message for counter {counter} does not fit in {capacity} bytes")]
    MessageOverflow {
        /// Counter whose rendering overflowed.
        counter: u64,
        /// Buffer capacity in bytes.
        capacity: usize,
    },

    /// Every counter below the ceiling was tried without success.
    #[error("no solution within {iterations} iterations")]
    Exhausted {
        /// The iteration ceiling that was searched.
        iterations: u64,
    },
}

impl SolveError {
    /// True for caller mistakes, false for a search that simply ran out.
    pub fn is_invalid_input(&self) -> bool {
        !matches!(self, SolveError::Exhausted { .. })
    }
}

/// Convenience result type for solver operations.
pub type Result<T> = core::result::Result<T, SolveError>;

/// Binary status code for callers that only distinguish success from failure.
///
/// Invalid input and exhaustion both map to [`SolveStatus::Failed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum SolveStatus {
    /// A counter was found.
    Found = 0,
    /// Invalid input or no solution.
    Failed = 1,
}

impl SolveStatus {
    /// Numeric code (`0` or `1`).
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl<T> From<&Result<T>> for SolveStatus {
    fn from(result: &Result<T>) -> Self {
        match result {
            Ok(_) => SolveStatus::Found,
            Err(_) => SolveStatus::Failed,
        }
    }
}
