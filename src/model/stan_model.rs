//! model::stan_model — reference to a Stan program and its compiled executable.
//!
//! Purpose
//! -------
//! Represent the pairing of a Stan program file and the CmdStan executable
//! built from it. A [`Model`] is the anchor every run configuration is tied
//! to: the executable is the program that gets invoked, and the Stan file
//! provides the model name.
//!
//! Invariants & assumptions
//! ------------------------
//! - `stan_file` is non-empty and carries a `.stan` extension.
//! - `exe_file` is non-empty.
//! - No filesystem checks are performed; the paths are taken as given and
//!   only their string form is validated.
//!
//! Testing notes
//! -------------
//! - Unit tests cover accepted paths, rejected extensions, and name
//!   derivation from the Stan file stem.
use std::path::{Path, PathBuf};

use crate::model::errors::{ModelError, ModelResult};

/// Model — an immutable Stan program / executable pair.
///
/// Fields
/// ------
/// - `name`: stem of the Stan file (e.g. `bernoulli` for `bernoulli.stan`).
/// - `stan_file`: path to the Stan program.
/// - `exe_file`: path to the compiled CmdStan executable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model {
    name: String,
    stan_file: PathBuf,
    exe_file: PathBuf,
}

impl Model {
    /// Construct a validated [`Model`].
    ///
    /// # Errors
    /// - [`ModelError::EmptyExeFile`] if `exe_file` is empty.
    /// - [`ModelError::EmptyStanFile`] if `stan_file` is empty.
    /// - [`ModelError::InvalidStanFile`] if `stan_file` has no `.stan`
    ///   extension or no usable file stem.
    pub fn new(exe_file: impl Into<PathBuf>, stan_file: impl Into<PathBuf>) -> ModelResult<Self> {
        let exe_file = exe_file.into();
        let stan_file = stan_file.into();
        if exe_file.as_os_str().is_empty() {
            return Err(ModelError::EmptyExeFile);
        }
        if stan_file.as_os_str().is_empty() {
            return Err(ModelError::EmptyStanFile);
        }
        if stan_file.extension().and_then(|e| e.to_str()) != Some("stan") {
            return Err(ModelError::InvalidStanFile {
                path: stan_file.display().to_string(),
                reason: "Expected a '.stan' extension.",
            });
        }
        let name = match stan_file.file_stem().and_then(|s| s.to_str()) {
            Some(stem) if !stem.is_empty() => stem.to_string(),
            _ => {
                return Err(ModelError::InvalidStanFile {
                    path: stan_file.display().to_string(),
                    reason: "Could not derive a model name from the file stem.",
                });
            }
        };
        Ok(Self { name, stan_file, exe_file })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stan_file(&self) -> &Path {
        &self.stan_file
    }

    pub fn exe_file(&self) -> &Path {
        &self.exe_file
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Model(name={}, stan_file={}, exe_file={})",
            self.name,
            self.stan_file.display(),
            self.exe_file.display()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Successful construction and name derivation.
    // - Rejection of empty paths and non-`.stan` program files.
    //
    // They intentionally DO NOT cover:
    // - Filesystem existence of either path; `Model` never touches disk.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that a well-formed pair is accepted and the name comes from the
    // Stan file stem.
    //
    // Given
    // -----
    // - `exe_file = test/data/bernoulli`, `stan_file = test/data/bernoulli.stan`.
    //
    // Expect
    // ------
    // - `Ok(model)` with `name() == "bernoulli"` and paths preserved.
    fn new_accepts_stan_file_and_derives_name() {
        // Arrange
        let exe = Path::new("test").join("data").join("bernoulli");
        let stan = Path::new("test").join("data").join("bernoulli.stan");

        // Act
        let model = Model::new(&exe, &stan).expect("Model should be valid");

        // Assert
        assert_eq!(model.name(), "bernoulli");
        assert_eq!(model.exe_file(), exe.as_path());
        assert_eq!(model.stan_file(), stan.as_path());
    }

    #[test]
    // Purpose
    // -------
    // Ensure a program file without the `.stan` extension is rejected.
    //
    // Given
    // -----
    // - `stan_file = bernoulli.txt`.
    //
    // Expect
    // ------
    // - `Err(ModelError::InvalidStanFile { .. })`.
    fn new_rejects_non_stan_extension() {
        // Act
        let err = Model::new("bernoulli", "bernoulli.txt").unwrap_err();

        // Assert
        assert!(
            matches!(err, ModelError::InvalidStanFile { ref path, .. } if path == "bernoulli.txt"),
            "Unexpected error: {err:?}"
        );
    }

    #[test]
    // Purpose
    // -------
    // Ensure empty paths are rejected with the matching variant.
    fn new_rejects_empty_paths() {
        assert_eq!(Model::new("", "bernoulli.stan").unwrap_err(), ModelError::EmptyExeFile);
        assert_eq!(Model::new("bernoulli", "").unwrap_err(), ModelError::EmptyStanFile);
    }

    #[test]
    // Purpose
    // -------
    // Verify that a bare `.stan` file name with no stem is rejected.
    fn new_rejects_missing_stem() {
        let err = Model::new("bernoulli", ".stan").unwrap_err();
        assert!(matches!(err, ModelError::InvalidStanFile { .. }), "Unexpected error: {err:?}");
    }
}
