//! WebAssembly bindings for the proof-of-work solver.
//!
//! This crate provides JavaScript-accessible APIs for:
//! - Configuring an iteration ceiling
//! - Solving `(nonce, difficulty)` challenges in the browser
//! - Reporting the winning digest and hash rate

use wasm_bindgen::prelude::*;

pub mod solver;
pub mod state;

// Re-export main types for JS access
pub use solver::PowSolver;

/// Initialize the WASM module with better panic messages.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
