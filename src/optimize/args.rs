//! optimize::args — validated configuration for a CmdStan optimize run.
//!
//! Purpose
//! -------
//! Turn caller-supplied [`OptimizeOptions`] into an [`OptimizeArgs`] that is
//! guaranteed to be internally consistent, so that composing the command line
//! afterwards cannot fail.
//!
//! Key behaviors
//! -------------
//! - Range-check and narrow each scalar option (seed, iter, history_size).
//! - Parse the algorithm name case-insensitively.
//! - Reject options that the chosen algorithm does not use: `init_alpha` and
//!   the tolerances need BFGS or LBFGS, `history_size` needs LBFGS. When no
//!   algorithm is given the checks use CmdStan's default, LBFGS.
//! - Reject empty data, inits and output paths.
//!
//! Invariants & assumptions
//! ------------------------
//! - A constructed [`OptimizeArgs`] never holds an invalid combination; the
//!   first violation aborts construction and nothing partial is returned.
//! - The model is copied in, so the args outlive the caller's `Model`.
//!
//! Downstream usage
//! ----------------
//! - Build once per run, then call `compose_command`, `compose_args` or
//!   `command` (see `command.rs`).
//!
//! Testing notes
//! -------------
//! - Unit tests here cover the cross-field rules. Per-option range checks
//!   live with the helpers in `validation.rs`, and end-to-end scenarios in
//!   `tests/integration_optimize_args.rs`.
use std::path::{Path, PathBuf};

use crate::{
    model::Model,
    optimize::{
        algorithm::{DEFAULT_ALGORITHM, OptimizeAlgorithm},
        errors::OptimizeResult,
        options::OptimizeOptions,
        tolerances::Tolerances,
        validation::{
            require_lbfgs, require_quasi_newton, verify_algorithm, verify_history_size,
            verify_init_alpha, verify_iter, verify_path, verify_seed,
        },
    },
};

/// OptimizeArgs — validated optimize-mode configuration tied to a [`Model`].
///
/// Fields
/// ------
/// - `model`: the Stan model whose executable is invoked.
/// - `seed`, `iter`, `history_size`: narrowed to CmdStan's `u32`.
/// - `algorithm`: parsed algorithm, `None` to use CmdStan's default.
/// - `init_alpha`, `tols`: quasi-Newton line-search and convergence settings.
/// - `save_iterations`: optional flag forwarded verbatim.
/// - `data`, `inits`, `output_file`: single file paths.
/// - `verbose`: log composed commands when the `obs_slog` feature is on.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizeArgs {
    pub(crate) model: Model,
    pub(crate) seed: Option<u32>,
    pub(crate) algorithm: Option<OptimizeAlgorithm>,
    pub(crate) init_alpha: Option<f64>,
    pub(crate) iter: Option<u32>,
    pub(crate) tols: Tolerances,
    pub(crate) history_size: Option<u32>,
    pub(crate) save_iterations: Option<bool>,
    pub(crate) data: Option<PathBuf>,
    pub(crate) inits: Option<PathBuf>,
    pub(crate) output_file: Option<PathBuf>,
    pub(crate) verbose: bool,
}

impl OptimizeArgs {
    /// Validate `opts` against `model` and build the run configuration.
    ///
    /// # Errors
    /// Returns the first [`OptimizeError`] encountered, checked in this
    /// order: seed, algorithm, init_alpha, iter, tolerances, history_size,
    /// algorithm compatibility, then data / inits / output_file paths.
    ///
    /// [`OptimizeError`]: crate::optimize::OptimizeError
    pub fn new(model: &Model, opts: OptimizeOptions) -> OptimizeResult<Self> {
        let seed = verify_seed(opts.seed)?;
        let algorithm = verify_algorithm(opts.algorithm.as_deref())?;
        let init_alpha = verify_init_alpha(opts.init_alpha)?;
        let iter = verify_iter(opts.iter)?;
        let tols = Tolerances::new(
            opts.tol_obj,
            opts.tol_rel_obj,
            opts.tol_grad,
            opts.tol_rel_grad,
            opts.tol_param,
        )?;
        let history_size = verify_history_size(opts.history_size)?;

        let effective = algorithm.unwrap_or(DEFAULT_ALGORITHM);
        require_quasi_newton("init_alpha", init_alpha.is_some(), effective)?;
        if let Some(option) = tols.first_set() {
            require_quasi_newton(option, true, effective)?;
        }
        require_lbfgs("history_size", history_size.is_some(), effective)?;

        let data = verify_path("data", opts.data)?;
        let inits = verify_path("inits", opts.inits)?;
        let output_file = verify_path("output_file", opts.output_file)?;

        Ok(Self {
            model: model.clone(),
            seed,
            algorithm,
            init_alpha,
            iter,
            tols,
            history_size,
            save_iterations: opts.save_iterations,
            data,
            inits,
            output_file,
            verbose: opts.verbose,
        })
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn seed(&self) -> Option<u32> {
        self.seed
    }

    pub fn algorithm(&self) -> Option<OptimizeAlgorithm> {
        self.algorithm
    }

    /// Algorithm CmdStan will actually run.
    pub fn effective_algorithm(&self) -> OptimizeAlgorithm {
        self.algorithm.unwrap_or(DEFAULT_ALGORITHM)
    }

    pub fn init_alpha(&self) -> Option<f64> {
        self.init_alpha
    }

    pub fn iter(&self) -> Option<u32> {
        self.iter
    }

    pub fn tolerances(&self) -> &Tolerances {
        &self.tols
    }

    pub fn history_size(&self) -> Option<u32> {
        self.history_size
    }

    pub fn save_iterations(&self) -> Option<bool> {
        self.save_iterations
    }

    pub fn data(&self) -> Option<&Path> {
        self.data.as_deref()
    }

    pub fn inits(&self) -> Option<&Path> {
        self.inits.as_deref()
    }

    pub fn output_file(&self) -> Option<&Path> {
        self.output_file.as_deref()
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }
}
