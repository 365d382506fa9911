//! Core proof-of-work solver.
//!
//! This crate provides pure Rust implementations of:
//! - SHA256 hashing of `nonce || counter` candidate messages
//! - Leading-zero-bit difficulty checking, including non-byte-aligned targets
//! - Allocation-free rendering of candidates into a capped buffer
//! - A bounded, deterministic search for the lowest satisfying counter
//!
//! ```rust
//! use pow_core::{Solver, SolverConfig};
//!
//! let solver = Solver::new(SolverConfig::default().with_max_iterations(1_000));
//! let counter = solver.solve("test", 1).unwrap();
//! assert!(counter < 1_000);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod config;
pub mod difficulty;
pub mod error;
pub mod hash;
pub mod message;
pub mod solver;

#[cfg(feature = "std")]
pub mod ffi;

pub use config::{SolverConfig, DEFAULT_MAX_ITERATIONS};
pub use difficulty::{expected_attempts, meets_difficulty, validate_difficulty, MAX_DIFFICULTY};
pub use error::{Result, SolveError, SolveStatus};
pub use hash::{digest_to_hex, leading_zero_bits, sha256, DIGEST_LEN};
pub use message::{MessageBuffer, MAX_COUNTER_DIGITS, MESSAGE_CAPACITY};
pub use solver::{solve, Solution, Solver};
