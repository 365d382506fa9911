//! Solver handle exposed to JavaScript.

use pow_core::{expected_attempts, SolveError, Solver, SolverConfig};
use wasm_bindgen::prelude::*;

use crate::state::SolveReport;

/// A configured proof-of-work solver.
#[wasm_bindgen]
pub struct PowSolver {
    solver: Solver,
}

#[wasm_bindgen]
impl PowSolver {
    /// Create a solver.
    ///
    /// # Arguments
    /// * `config` - Optional `{ max_iterations }` object; omitted fields use defaults
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<PowSolver, JsValue> {
        let config = if config.is_undefined() || config.is_null() {
            SolverConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)
                .map_err(|e| JsValue::from_str(&format!("Invalid config: {}", e)))?
        };

        Ok(PowSolver {
            solver: Solver::new(config),
        })
    }

    /// Search for the lowest counter meeting `difficulty`.
    ///
    /// Resolves to a report for both found and exhausted searches; invalid
    /// input is thrown as an error string.
    #[wasm_bindgen]
    pub fn solve(&self, nonce: &str, difficulty: u32) -> Result<JsValue, JsValue> {
        let start = now_ms();
        let outcome = self.solver.solve_detailed(nonce.as_bytes(), difficulty);
        let elapsed_ms = now_ms() - start;

        let report = match outcome {
            Ok(solution) => SolveReport::found(&solution, difficulty, elapsed_ms),
            Err(SolveError::Exhausted { iterations }) => {
                SolveReport::exhausted(iterations, difficulty, elapsed_ms)
            }
            Err(e) => return Err(JsValue::from_str(&e.to_string())),
        };

        report.to_js()
    }

    /// Get the configured iteration ceiling.
    #[wasm_bindgen(getter)]
    pub fn max_iterations(&self) -> u64 {
        self.solver.config().max_iterations
    }

    /// Average number of candidates needed for a difficulty.
    #[wasm_bindgen]
    pub fn expected_attempts(difficulty: u32) -> f64 {
        expected_attempts(difficulty)
    }
}

fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

/// Log to the browser console.
#[wasm_bindgen]
pub fn console_log(message: &str) {
    web_sys::console::log_1(&JsValue::from_str(message));
}
