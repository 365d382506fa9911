//! C ABI for hosts that load the solver as a shared library.
//!
//! Both entry points return `0` when a counter was found and `1` otherwise;
//! invalid input and exhaustion are not distinguished here.

use core::ffi::{c_char, c_int, CStr};

use crate::config::{SolverConfig, DEFAULT_MAX_ITERATIONS};
use crate::error::{Result, SolveError, SolveStatus};
use crate::solver::Solver;

/// Solve with the default iteration ceiling.
/// - nonce: NUL-terminated string
/// - difficulty: required leading zero bits (1..=256)
/// - result: receives the counter on success, untouched on failure
///
/// # Safety
/// `nonce` must be null or point to a NUL-terminated string, and `result`
/// must be null or valid for a `u64` write.
#[no_mangle]
pub unsafe extern "C" fn pow_solve(
    nonce: *const c_char,
    difficulty: c_int,
    result: *mut u64,
) -> c_int {
    pow_solve_with_limit(nonce, difficulty, DEFAULT_MAX_ITERATIONS, result)
}

/// Solve trying at most `max_iterations` counters.
///
/// # Safety
/// Same requirements as [`pow_solve`].
#[no_mangle]
pub unsafe extern "C" fn pow_solve_with_limit(
    nonce: *const c_char,
    difficulty: c_int,
    max_iterations: u64,
    result: *mut u64,
) -> c_int {
    if result.is_null() {
        return SolveStatus::Failed.code();
    }

    let outcome = solve_raw(nonce, difficulty, max_iterations);
    if let Ok(counter) = outcome {
        *result = counter;
    }

    SolveStatus::from(&outcome).code()
}

unsafe fn solve_raw(nonce: *const c_char, difficulty: c_int, max_iterations: u64) -> Result<u64> {
    if nonce.is_null() {
        return Err(SolveError::NonceMissing);
    }
    // negative values are reported as difficulty 0; the 0/1 status is unaffected
    let difficulty = u32::try_from(difficulty).unwrap_or(0);
    let nonce = CStr::from_ptr(nonce).to_bytes();

    Solver::new(SolverConfig::new().with_max_iterations(max_iterations))
        .solve_bytes(nonce, difficulty)
}
