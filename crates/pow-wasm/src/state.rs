//! Serializable reports handed back to JavaScript.

use pow_core::{digest_to_hex, leading_zero_bits, Solution};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// Outcome of one `solve` call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SolveReport {
    /// Whether a counter was found.
    pub found: bool,
    /// The winning counter (if found).
    pub counter: Option<u64>,
    /// Hex digest of `nonce || counter` (if found).
    pub digest: Option<String>,
    /// Leading zero bits of the winning digest.
    pub leading_zeros: u32,
    /// Requested difficulty.
    pub difficulty: u32,
    /// Candidates hashed.
    pub attempts: u64,
    /// Elapsed time in milliseconds.
    pub elapsed_ms: f64,
    /// Hashes per second over the whole call.
    pub hash_rate: f64,
}

impl SolveReport {
    /// Report for a found solution.
    pub fn found(solution: &Solution, difficulty: u32, elapsed_ms: f64) -> Self {
        let mut report = SolveReport {
            found: true,
            counter: Some(solution.counter),
            digest: Some(digest_to_hex(&solution.digest)),
            leading_zeros: leading_zero_bits(&solution.digest),
            difficulty,
            attempts: solution.attempts,
            elapsed_ms,
            hash_rate: 0.0,
        };
        report.update_hash_rate();
        report
    }

    /// Report for a search that ran through its whole ceiling.
    pub fn exhausted(iterations: u64, difficulty: u32, elapsed_ms: f64) -> Self {
        let mut report = SolveReport {
            difficulty,
            attempts: iterations,
            elapsed_ms,
            ..Default::default()
        };
        report.update_hash_rate();
        report
    }

    fn update_hash_rate(&mut self) {
        if self.elapsed_ms > 0.0 {
            self.hash_rate = (self.attempts as f64) / (self.elapsed_ms / 1000.0);
        }
    }

    /// Format hash rate for display.
    pub fn format_hash_rate(&self) -> String {
        if self.hash_rate >= 1_000_000.0 {
            format!("{:.2} MH/s", self.hash_rate / 1_000_000.0)
        } else if self.hash_rate >= 1_000.0 {
            format!("{:.2} KH/s", self.hash_rate / 1_000.0)
        } else {
            format!("{:.2} H/s", self.hash_rate)
        }
    }

    /// Convert to JS value.
    pub fn to_js(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {:?}", e)))
    }
}
