//! Validation helpers for optimize-mode options.
//!
//! This module centralizes the per-option checks used by
//! [`OptimizeArgs::new`](crate::optimize::OptimizeArgs::new):
//!
//! - **Integers**: [`verify_seed`], [`verify_iter`], [`verify_history_size`]
//!   range-check raw `i64` input and narrow it to CmdStan's `u32`.
//! - **Floats**: [`verify_init_alpha`], [`verify_tolerance`] require finite,
//!   non-negative values.
//! - **Names and paths**: [`verify_algorithm`], [`verify_path`].
//! - **Compatibility**: [`require_quasi_newton`], [`require_lbfgs`] reject
//!   options set for an algorithm that does not use them.
//!
//! Every helper accepts `None` (option unset) and returns the narrowed value
//! on success, so the constructor reads as a straight sequence of `?` calls.
use std::path::PathBuf;

use crate::optimize::{
    algorithm::OptimizeAlgorithm,
    errors::{OptimizeError, OptimizeResult},
};

/// Validate the random seed.
///
/// # Errors
/// Returns [`OptimizeError::InvalidSeed`] if the seed is negative or larger
/// than `u32::MAX`.
pub fn verify_seed(seed: Option<i64>) -> OptimizeResult<Option<u32>> {
    match seed {
        None => Ok(None),
        Some(seed) if seed < 0 => {
            Err(OptimizeError::InvalidSeed { seed, reason: "Seed must be non-negative." })
        }
        Some(seed) => u32::try_from(seed).map(Some).map_err(|_| OptimizeError::InvalidSeed {
            seed,
            reason: "Seed must not exceed 4294967295.",
        }),
    }
}

/// Parse the optional algorithm name.
///
/// # Errors
/// Propagates [`OptimizeError::InvalidAlgorithm`] from `FromStr`.
pub fn verify_algorithm(name: Option<&str>) -> OptimizeResult<Option<OptimizeAlgorithm>> {
    name.map(str::parse).transpose()
}

/// Validate the initial line-search step size.
///
/// # Errors
/// Returns [`OptimizeError::InvalidInitAlpha`] if the value is non-finite or
/// negative.
pub fn verify_init_alpha(init_alpha: Option<f64>) -> OptimizeResult<Option<f64>> {
    if let Some(value) = init_alpha {
        if !value.is_finite() {
            return Err(OptimizeError::InvalidInitAlpha {
                value,
                reason: "init_alpha must be finite.",
            });
        }
        if value < 0.0 {
            return Err(OptimizeError::InvalidInitAlpha {
                value,
                reason: "init_alpha must be non-negative.",
            });
        }
    }
    // `-0.0 + 0.0` is `+0.0`; keeps `init_alpha=-0` off the command line.
    Ok(init_alpha.map(|value| value + 0.0))
}

/// Validate the iteration bound.
///
/// # Errors
/// Returns [`OptimizeError::InvalidIter`] if the value is negative or larger
/// than `u32::MAX`.
pub fn verify_iter(iter: Option<i64>) -> OptimizeResult<Option<u32>> {
    match iter {
        None => Ok(None),
        Some(iter) if iter < 0 => {
            Err(OptimizeError::InvalidIter { iter, reason: "iter must be non-negative." })
        }
        Some(iter) => u32::try_from(iter).map(Some).map_err(|_| OptimizeError::InvalidIter {
            iter,
            reason: "iter must not exceed 4294967295.",
        }),
    }
}

/// Validate a convergence tolerance named `option`.
///
/// # Errors
/// Returns [`OptimizeError::InvalidTolerance`] if the value is non-finite or
/// negative.
pub fn verify_tolerance(option: &'static str, tol: Option<f64>) -> OptimizeResult<Option<f64>> {
    if let Some(value) = tol {
        if !value.is_finite() {
            return Err(OptimizeError::InvalidTolerance {
                option,
                value,
                reason: "Tolerance must be finite.",
            });
        }
        if value < 0.0 {
            return Err(OptimizeError::InvalidTolerance {
                option,
                value,
                reason: "Tolerance must be non-negative.",
            });
        }
    }
    Ok(tol.map(|value| value + 0.0))
}

/// Validate the L-BFGS history size.
///
/// # Errors
/// Returns [`OptimizeError::InvalidHistorySize`] if the value is below 1 or
/// larger than `u32::MAX`.
pub fn verify_history_size(size: Option<i64>) -> OptimizeResult<Option<u32>> {
    match size {
        None => Ok(None),
        Some(size) if size < 1 => Err(OptimizeError::InvalidHistorySize {
            size,
            reason: "history_size must be greater than zero.",
        }),
        Some(size) => u32::try_from(size).map(Some).map_err(|_| {
            OptimizeError::InvalidHistorySize {
                size,
                reason: "history_size must not exceed 4294967295.",
            }
        }),
    }
}

/// Validate a single file path named `option`.
///
/// # Errors
/// Returns [`OptimizeError::EmptyPath`] if the path is empty.
pub fn verify_path(option: &'static str, path: Option<PathBuf>) -> OptimizeResult<Option<PathBuf>> {
    match path {
        Some(p) if p.as_os_str().is_empty() => Err(OptimizeError::EmptyPath { option }),
        other => Ok(other),
    }
}

/// Reject `option` when it is set and `algorithm` is not BFGS or LBFGS.
///
/// # Errors
/// Returns [`OptimizeError::RequiresQuasiNewton`].
pub fn require_quasi_newton(
    option: &'static str, is_set: bool, algorithm: OptimizeAlgorithm,
) -> OptimizeResult<()> {
    if is_set && !algorithm.is_quasi_newton() {
        return Err(OptimizeError::RequiresQuasiNewton { option, algorithm });
    }
    Ok(())
}

/// Reject `option` when it is set and `algorithm` is not LBFGS.
///
/// # Errors
/// Returns [`OptimizeError::RequiresLbfgs`].
pub fn require_lbfgs(
    option: &'static str, is_set: bool, algorithm: OptimizeAlgorithm,
) -> OptimizeResult<()> {
    if is_set && algorithm != OptimizeAlgorithm::LBFGS {
        return Err(OptimizeError::RequiresLbfgs { option, algorithm });
    }
    Ok(())
}
