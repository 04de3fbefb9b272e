//! model::errors — validation errors for Stan model references.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias returned when a [`Model`] is
//! constructed from a Stan program path and a compiled executable path,
//! together with the conversion into Python exceptions used by the PyO3
//! bindings.
//!
//! Conventions
//! -----------
//! - Paths are carried as display strings so the error stays cheap to clone
//!   and compare in tests.
//! - At the Python boundary every [`ModelError`] becomes a `ValueError`.
//!
//! [`Model`]: crate::model::Model

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

/// Result alias for model construction.
pub type ModelResult<T> = Result<T, ModelError>;

/// ModelError — invalid Stan program or executable reference.
///
/// Variants
/// --------
/// - `EmptyStanFile`
///   The Stan program path was empty.
/// - `InvalidStanFile { path, reason }`
///   The Stan program path does not name a `.stan` file.
/// - `EmptyExeFile`
///   The executable path was empty.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelError {
    EmptyStanFile,
    InvalidStanFile { path: String, reason: &'static str },
    EmptyExeFile,
}

impl std::error::Error for ModelError {}

impl std::fmt::Display for ModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelError::EmptyStanFile => write!(f, "Stan program path must not be empty."),
            ModelError::InvalidStanFile { path, reason } => {
                write!(f, "Invalid Stan program '{path}': {reason}")
            }
            ModelError::EmptyExeFile => write!(f, "Executable path must not be empty."),
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<ModelError> for PyErr {
    fn from(err: ModelError) -> PyErr {
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
    // - `Display` formatting for each ModelError variant.
    //
    // They intentionally DO NOT cover:
    // - The `From<ModelError> for PyErr` conversion, which needs the Python
    //   C API.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that `InvalidStanFile` embeds the offending path and reason.
    //
    // Given
    // -----
    // - An `InvalidStanFile` for "bernoulli.txt".
    //
    // Expect
    // ------
    // - The message contains both the path and the reason text.
    fn invalid_stan_file_includes_path_and_reason() {
        // Arrange
        let err = ModelError::InvalidStanFile {
            path: "bernoulli.txt".to_string(),
            reason: "Expected a '.stan' extension.",
        };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(msg.contains("bernoulli.txt"), "Got: {msg}");
        assert!(msg.contains(".stan"), "Got: {msg}");
    }

    #[test]
    // Purpose
    // -------
    // Ensure the unit variants produce non-empty messages.
    fn empty_path_variants_have_nonempty_messages() {
        for err in [ModelError::EmptyStanFile, ModelError::EmptyExeFile] {
            assert!(!err.to_string().trim().is_empty(), "Empty message for {err:?}");
        }
    }
}
