//! optimize::options — raw, unvalidated option values for an optimize run.
//!
//! Purpose
//! -------
//! Collect every knob a caller can set for a CmdStan optimize invocation in a
//! single plain-data struct. Nothing here is checked; the only way to turn an
//! [`OptimizeOptions`] into something composable is
//! [`OptimizeArgs::new`](crate::optimize::OptimizeArgs::new).
//!
//! Conventions
//! -----------
//! - Integers are taken as `i64` so that negative input reaches validation
//!   and is reported as a domain error instead of being unrepresentable at
//!   the call site. Values are narrowed to `u32` once accepted.
//! - `seed`, `data` and `inits` are scalar fields: optimize runs a single
//!   chain, so there is no per-chain variant of these options.
//! - `Default` leaves every option unset; CmdStan then applies its own
//!   defaults.
use std::path::PathBuf;

/// OptimizeOptions — caller-supplied values for an optimize run.
///
/// Fields
/// ------
/// - `seed`: random seed, `0..=u32::MAX`.
/// - `algorithm`: `"newton"`, `"bfgs"` or `"lbfgs"` in any case.
/// - `init_alpha`: first line-search step size (BFGS / LBFGS only).
/// - `iter`: maximum number of iterations.
/// - `tol_obj`, `tol_rel_obj`, `tol_grad`, `tol_rel_grad`, `tol_param`:
///   convergence tolerances (BFGS / LBFGS only).
/// - `history_size`: L-BFGS history length (LBFGS only).
/// - `save_iterations`: write intermediate iterates to the output file.
/// - `data`: data file path.
/// - `inits`: initial-values file path.
/// - `output_file`: destination CSV used by [`OptimizeArgs::command`].
/// - `verbose`: log composed commands (requires the `obs_slog` feature).
///
/// [`OptimizeArgs::command`]: crate::optimize::OptimizeArgs::command
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OptimizeOptions {
    pub seed: Option<i64>,
    pub algorithm: Option<String>,
    pub init_alpha: Option<f64>,
    pub iter: Option<i64>,
    pub tol_obj: Option<f64>,
    pub tol_rel_obj: Option<f64>,
    pub tol_grad: Option<f64>,
    pub tol_rel_grad: Option<f64>,
    pub tol_param: Option<f64>,
    pub history_size: Option<i64>,
    pub save_iterations: Option<bool>,
    pub data: Option<PathBuf>,
    pub inits: Option<PathBuf>,
    pub output_file: Option<PathBuf>,
    pub verbose: bool,
}
