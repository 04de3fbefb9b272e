//! optimize::errors — validation errors for optimize-mode run configurations.
//!
//! Purpose
//! -------
//! Provide the single error enum returned while turning raw option values
//! into a validated [`OptimizeArgs`], and the bridge into Python exceptions
//! used by the PyO3 bindings.
//!
//! Key behaviors
//! -------------
//! - Every variant names the offending option, available through
//!   [`OptimizeError::option`].
//! - `Display` messages are phrased as domain constraints
//!   ("iter must be non-negative") rather than low-level details.
//! - `From<OptimizeError> for PyErr` maps every variant to `ValueError`.
//!
//! Invariants & assumptions
//! ------------------------
//! - Errors are raised only at construction time; command composition on a
//!   validated configuration is infallible.
//!
//! Testing notes
//! -------------
//! - Unit tests check that messages embed their payloads and that
//!   `option()` reports the right name for each variant.
//!
//! [`OptimizeArgs`]: crate::optimize::OptimizeArgs

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

use crate::optimize::algorithm::OptimizeAlgorithm;

/// Result alias for optimize-mode configuration.
pub type OptimizeResult<T> = Result<T, OptimizeError>;

#[derive(Debug, Clone, PartialEq)]
pub enum OptimizeError {
    // ---- Scalar options ----
    /// Seed must fit CmdStan's unsigned 32-bit seed.
    InvalidSeed {
        seed: i64,
        reason: &'static str,
    },
    /// Unknown optimization algorithm name.
    InvalidAlgorithm {
        name: String,
        reason: &'static str,
    },
    /// Line-search step size must be finite and non-negative.
    InvalidInitAlpha {
        value: f64,
        reason: &'static str,
    },
    /// Iteration bound must be non-negative.
    InvalidIter {
        iter: i64,
        reason: &'static str,
    },
    /// Convergence tolerance must be finite and non-negative.
    InvalidTolerance {
        option: &'static str,
        value: f64,
        reason: &'static str,
    },
    /// L-BFGS history must be at least 1.
    InvalidHistorySize {
        size: i64,
        reason: &'static str,
    },

    // ---- Algorithm compatibility ----
    /// Option only applies to BFGS and LBFGS.
    RequiresQuasiNewton {
        option: &'static str,
        algorithm: OptimizeAlgorithm,
    },
    /// Option only applies to LBFGS.
    RequiresLbfgs {
        option: &'static str,
        algorithm: OptimizeAlgorithm,
    },

    // ---- Paths ----
    /// Path option given as an empty string.
    EmptyPath {
        option: &'static str,
    },
    /// A list of values was given where this mode accepts exactly one.
    SequenceNotSupported {
        option: &'static str,
        reason: &'static str,
    },
}

impl OptimizeError {
    /// Name of the option that failed validation.
    pub fn option(&self) -> &'static str {
        match self {
            OptimizeError::InvalidSeed { .. } => "seed",
            OptimizeError::InvalidAlgorithm { .. } => "algorithm",
            OptimizeError::InvalidInitAlpha { .. } => "init_alpha",
            OptimizeError::InvalidIter { .. } => "iter",
            OptimizeError::InvalidHistorySize { .. } => "history_size",
            OptimizeError::InvalidTolerance { option, .. }
            | OptimizeError::RequiresQuasiNewton { option, .. }
            | OptimizeError::RequiresLbfgs { option, .. }
            | OptimizeError::EmptyPath { option }
            | OptimizeError::SequenceNotSupported { option, .. } => *option,
        }
    }
}

impl std::error::Error for OptimizeError {}

impl std::fmt::Display for OptimizeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Scalar options ----
            OptimizeError::InvalidSeed { seed, reason } => {
                write!(f, "Invalid seed {seed}: {reason}")
            }
            OptimizeError::InvalidAlgorithm { name, reason } => {
                write!(f, "Invalid algorithm '{name}': {reason}")
            }
            OptimizeError::InvalidInitAlpha { value, reason } => {
                write!(f, "Invalid init_alpha {value}: {reason}")
            }
            OptimizeError::InvalidIter { iter, reason } => {
                write!(f, "Invalid iter {iter}: {reason}")
            }
            OptimizeError::InvalidTolerance { option, value, reason } => {
                write!(f, "Invalid {option} {value}: {reason}")
            }
            OptimizeError::InvalidHistorySize { size, reason } => {
                write!(f, "Invalid history_size {size}: {reason}")
            }

            // ---- Algorithm compatibility ----
            OptimizeError::RequiresQuasiNewton { option, algorithm } => {
                write!(
                    f,
                    "{option} requires a quasi-Newton algorithm (bfgs or lbfgs), got '{algorithm}'"
                )
            }
            OptimizeError::RequiresLbfgs { option, algorithm } => {
                write!(f, "{option} requires algorithm 'lbfgs', got '{algorithm}'")
            }

            // ---- Paths ----
            OptimizeError::EmptyPath { option } => {
                write!(f, "{option} must be a non-empty path")
            }
            OptimizeError::SequenceNotSupported { option, reason } => {
                write!(f, "{option} must be a single value: {reason}")
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<OptimizeError> for PyErr {
    fn from(err: OptimizeError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - `Display` formatting and payload embedding.
    // - `OptimizeError::option` for field-specific and shared variants.
    //
    // They intentionally DO NOT cover:
    // - The `From<OptimizeError> for PyErr` conversion, which needs the
    //   Python C API and is exercised from Python.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that `InvalidIter` reports the offending value and option.
    //
    // Given
    // -----
    // - `InvalidIter { iter: -1, .. }`.
    //
    // Expect
    // ------
    // - Message contains "-1" and "iter"; `option()` is "iter".
    fn invalid_iter_includes_payload_and_option() {
        // Arrange
        let err = OptimizeError::InvalidIter { iter: -1, reason: "iter must be non-negative." };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(msg.contains("-1"), "Got: {msg}");
        assert!(msg.contains("iter"), "Got: {msg}");
        assert_eq!(err.option(), "iter");
    }

    #[test]
    // Purpose
    // -------
    // Ensure shared variants report the option they were raised for.
    //
    // Given
    // -----
    // - A `RequiresQuasiNewton` raised for `tol_grad` under Newton.
    // - An `EmptyPath` raised for `inits`.
    //
    // Expect
    // ------
    // - `option()` echoes the stored option name.
    // - The quasi-Newton message names the rejected algorithm in lowercase.
    fn shared_variants_report_their_option() {
        // Arrange
        let compat = OptimizeError::RequiresQuasiNewton {
            option: "tol_grad",
            algorithm: OptimizeAlgorithm::Newton,
        };
        let path = OptimizeError::EmptyPath { option: "inits" };

        // Act
        let msg = compat.to_string();

        // Assert
        assert_eq!(compat.option(), "tol_grad");
        assert_eq!(path.option(), "inits");
        assert!(msg.contains("'newton'"), "Got: {msg}");
    }

    #[test]
    // Purpose
    // -------
    // Verify the sequence rejection message names the option.
    fn sequence_not_supported_names_option() {
        let err = OptimizeError::SequenceNotSupported {
            option: "seed",
            reason: "optimize accepts one seed, not one per chain.",
        };
        let msg = err.to_string();
        assert!(msg.starts_with("seed must be a single value"), "Got: {msg}");
    }
}
