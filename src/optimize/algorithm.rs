//! optimize::algorithm — CmdStan optimization algorithm choice.
use std::str::FromStr;

use crate::optimize::errors::OptimizeError;

/// Algorithm CmdStan uses when `algorithm=` is not passed.
pub const DEFAULT_ALGORITHM: OptimizeAlgorithm = OptimizeAlgorithm::LBFGS;

/// Optimization algorithm run by the CmdStan executable.
///
/// Variants:
/// - `Newton`: Newton's method.
/// - `BFGS`: quasi-Newton with a dense Hessian approximation.
/// - `LBFGS`: limited-memory quasi-Newton (CmdStan's default).
///
/// Parsing:
/// This enum implements `FromStr` and accepts case-insensitive names
/// (`"Newton"`, `"BFGS"`, `"LBFGS"`). Unknown names return
/// `OptimizeError::InvalidAlgorithm`.
///
/// Display renders the lowercase token CmdStan expects on its command line.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptimizeAlgorithm {
    Newton,
    BFGS,
    LBFGS,
}

impl OptimizeAlgorithm {
    /// Token passed as `algorithm=<token>`.
    pub fn as_str(&self) -> &'static str {
        match self {
            OptimizeAlgorithm::Newton => "newton",
            OptimizeAlgorithm::BFGS => "bfgs",
            OptimizeAlgorithm::LBFGS => "lbfgs",
        }
    }

    /// `true` for BFGS and LBFGS, the algorithms that run a line search.
    pub fn is_quasi_newton(&self) -> bool {
        matches!(self, OptimizeAlgorithm::BFGS | OptimizeAlgorithm::LBFGS)
    }
}

impl FromStr for OptimizeAlgorithm {
    type Err = OptimizeError;

    /// Parse an algorithm name (case-insensitive).
    ///
    /// Accepts `"Newton"`, `"BFGS"`, `"LBFGS"` in any case. Any other value
    /// returns `OptimizeError::InvalidAlgorithm`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "newton" => Ok(OptimizeAlgorithm::Newton),
            "bfgs" => Ok(OptimizeAlgorithm::BFGS),
            "lbfgs" => Ok(OptimizeAlgorithm::LBFGS),
            _ => Err(OptimizeError::InvalidAlgorithm {
                name: s.to_string(),
                reason: "Valid options are case insensitive 'Newton', 'BFGS' or 'LBFGS'.",
            }),
        }
    }
}

impl std::fmt::Display for OptimizeAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
