//! rust_cmdstan — validated CmdStan optimize invocations with Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that exposes
//! the run-configuration types to Python via the `_rust_cmdstan` extension
//! module. When the `python-bindings` feature is enabled, this module defines
//! the Python-facing `Model` and `OptimizeArgs` classes under
//! `rust_cmdstan.lib`.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust modules (`model` and `optimize`) as the public
//!   crate surface.
//! - Define `#[pyclass]` wrappers and the `#[pymodule]` initializer for the
//!   `_rust_cmdstan` Python extension.
//! - Register the `lib` submodule in `sys.modules` so that
//!   `from rust_cmdstan.lib import Model, OptimizeArgs` works.
//!
//! Invariants & assumptions
//! ------------------------
//! - All validation lives in the inner Rust modules; this file performs only
//!   FFI glue and error mapping.
//! - Every validation failure surfaces in Python as `ValueError`, including
//!   list-valued `seed`, `data` and `inits`.
//! - The crate never spawns the CmdStan executable; it only composes the
//!   command that would run it.
//!
//! Conventions
//! -----------
//! - Python keyword names match the Rust option names (`seed`, `algorithm`,
//!   `init_alpha`, `iter`, `data`, `inits`, `output_file`, ...).
//! - Paths accept `str` or `os.PathLike` on the Python side and are rendered
//!   with `Path::display` on the command line.
//!
//! Downstream usage
//! ----------------
//! - Rust code builds a [`model::Model`], fills an
//!   [`optimize::OptimizeOptions`], and calls [`optimize::OptimizeArgs::new`]
//!   followed by `compose_command` or `command`.
//! - Python code calls `OptimizeArgs(model, ...)` and
//!   `args.compose_command(output)`.
//!
//! Testing notes
//! -------------
//! - Validation and composition are covered by unit tests in the inner
//!   modules and by `tests/integration_optimize_args.rs`.
//! - With `python-bindings` enabled (without `extension-module`, so libpython
//!   is linked), the tests below drive the Python classes through an embedded
//!   interpreter and check that malformed keywords raise `ValueError`.

#[cfg(feature = "obs_slog")]
pub mod logging;
pub mod model;
pub mod optimize;
pub mod utils;

#[cfg(feature = "python-bindings")]
use std::path::PathBuf;

#[cfg(feature = "python-bindings")]
use pyo3::{prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    model::Model,
    optimize::OptimizeArgs,
    utils::build_optimize_args,
};

/// PyModel — Python-facing wrapper for [`Model`].
///
/// Constructed from Python via `Model(exe_file, stan_file)`. Raises
/// `ValueError` if either path is empty or `stan_file` is not a `.stan` file.
#[cfg(feature = "python-bindings")]
#[pyclass(name = "Model", module = "rust_cmdstan.lib")]
pub struct PyModel {
    inner: Model,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl PyModel {
    #[new]
    #[pyo3(signature = (exe_file, stan_file), text_signature = "(exe_file, stan_file)")]
    pub fn new(exe_file: PathBuf, stan_file: PathBuf) -> PyResult<Self> {
        Ok(PyModel { inner: Model::new(exe_file, stan_file)? })
    }

    #[getter]
    pub fn name(&self) -> String {
        self.inner.name().to_string()
    }

    #[getter]
    pub fn stan_file(&self) -> String {
        self.inner.stan_file().display().to_string()
    }

    #[getter]
    pub fn exe_file(&self) -> String {
        self.inner.exe_file().display().to_string()
    }

    pub fn __repr__(&self) -> String {
        self.inner.to_string()
    }
}

/// PyOptimizeArgs — Python-facing wrapper for [`OptimizeArgs`].
///
/// Purpose
/// -------
/// Validate optimize-mode options passed as Python keywords and compose the
/// CmdStan command line.
///
/// Parameters
/// ----------
/// Constructed from Python via
/// `OptimizeArgs(model, seed=None, data=None, inits=None, output_file=None,
/// algorithm=None, init_alpha=None, iter=None, ...)`:
/// - `seed`: a single `int`; lists and tuples raise `ValueError`.
/// - `data`, `inits`, `output_file`: a single `str` / `os.PathLike`; lists and
///   tuples raise `ValueError`.
/// - Remaining options map one-to-one onto [`crate::optimize::OptimizeOptions`].
/// - Every option is taken as a raw object and narrowed in [`crate::utils`],
///   so a wrong type, a `bool` where a number is expected, or an integer
///   beyond `i64` raises `ValueError` like any other invalid value.
///
/// Notes
/// -----
/// - Native Rust code should use [`OptimizeArgs`] directly.
#[cfg(feature = "python-bindings")]
#[pyclass(name = "OptimizeArgs", module = "rust_cmdstan.lib")]
pub struct PyOptimizeArgs {
    inner: OptimizeArgs,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl PyOptimizeArgs {
    #[new]
    #[pyo3(
        signature = (
            model,
            seed = None,
            data = None,
            inits = None,
            output_file = None,
            algorithm = None,
            init_alpha = None,
            iter = None,
            tol_obj = None,
            tol_rel_obj = None,
            tol_grad = None,
            tol_rel_grad = None,
            tol_param = None,
            history_size = None,
            save_iterations = None,
            verbose = None,
        ),
        text_signature = "(model, /, seed=None, data=None, inits=None, output_file=None, \
                          algorithm=None, init_alpha=None, iter=None, tol_obj=None, \
                          tol_rel_obj=None, tol_grad=None, tol_rel_grad=None, tol_param=None, \
                          history_size=None, save_iterations=None, verbose=None)"
    )]
    #[allow(clippy::too_many_arguments)]
    pub fn new<'py>(
        model: PyRef<'py, PyModel>, seed: Option<&Bound<'py, PyAny>>,
        data: Option<&Bound<'py, PyAny>>, inits: Option<&Bound<'py, PyAny>>,
        output_file: Option<&Bound<'py, PyAny>>, algorithm: Option<&Bound<'py, PyAny>>,
        init_alpha: Option<&Bound<'py, PyAny>>, iter: Option<&Bound<'py, PyAny>>,
        tol_obj: Option<&Bound<'py, PyAny>>, tol_rel_obj: Option<&Bound<'py, PyAny>>,
        tol_grad: Option<&Bound<'py, PyAny>>, tol_rel_grad: Option<&Bound<'py, PyAny>>,
        tol_param: Option<&Bound<'py, PyAny>>, history_size: Option<&Bound<'py, PyAny>>,
        save_iterations: Option<&Bound<'py, PyAny>>, verbose: Option<&Bound<'py, PyAny>>,
    ) -> PyResult<Self> {
        let inner = build_optimize_args(
            &model.inner,
            seed,
            data,
            inits,
            output_file,
            algorithm,
            init_alpha,
            iter,
            tol_obj,
            tol_rel_obj,
            tol_grad,
            tol_rel_grad,
            tol_param,
            history_size,
            save_iterations,
            verbose,
        )?;
        Ok(PyOptimizeArgs { inner })
    }

    /// Compose the full command line writing results to `output`.
    ///
    /// Paths are joined unquoted; use `compose_args()` to get the tokens.
    pub fn compose_command(&self, output: PathBuf) -> String {
        self.inner.compose_command(output)
    }

    /// Argument tokens after the executable, using the configured
    /// `output_file` if any.
    pub fn compose_args(&self) -> Vec<String> {
        self.inner.compose_args(self.inner.output_file())
    }

    #[getter]
    pub fn seed(&self) -> Option<u32> {
        self.inner.seed()
    }

    #[getter]
    pub fn algorithm(&self) -> Option<String> {
        self.inner.algorithm().map(|a| a.to_string())
    }

    #[getter]
    pub fn init_alpha(&self) -> Option<f64> {
        self.inner.init_alpha()
    }

    #[getter]
    pub fn iter(&self) -> Option<u32> {
        self.inner.iter()
    }

    #[getter]
    pub fn data(&self) -> Option<String> {
        self.inner.data().map(|p| p.display().to_string())
    }

    #[getter]
    pub fn inits(&self) -> Option<String> {
        self.inner.inits().map(|p| p.display().to_string())
    }

    #[getter]
    pub fn output_file(&self) -> Option<String> {
        self.inner.output_file().map(|p| p.display().to_string())
    }
}

/// _rust_cmdstan — PyO3 module initializer for the Python extension.
///
/// Creates the `lib` submodule, attaches it to the parent module, and
/// registers it in `sys.modules` as `rust_cmdstan.lib` so dotted imports
/// resolve.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _rust_cmdstan<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    let lib_mod = PyModule::new(_py, "lib")?;
    lib(_py, m, &lib_mod)?;

    // Manually add the submodule into sys.modules to allow for dot notation.
    _py.import("sys")?.getattr("modules")?.set_item("rust_cmdstan.lib", lib_mod)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn lib<'py>(
    _py: Python, rust_cmdstan: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_class::<PyModel>()?;
    m.add_class::<PyOptimizeArgs>()?;
    rust_cmdstan.add_submodule(m)?;
    Ok(())
}

#[cfg(all(test, feature = "python-bindings"))]
mod tests {
    use std::ffi::CStr;

    use pyo3::{exceptions::PyValueError, prelude::*, types::PyDict};

    use super::{PyModel, PyOptimizeArgs};

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - `OptimizeArgs(model, **kwargs)` called through an embedded interpreter.
    // - List/tuple rejection for `seed`, `data` and `inits`.
    // - Wrong-typed, `bool` and out-of-range keywords surfacing as `ValueError`.
    //
    // They intentionally DO NOT cover:
    // - Range rules already tested on the Rust side (`optimize::validation`).
    // - Importing the built extension module.
    // -------------------------------------------------------------------------

    /// Call `OptimizeArgs(Model("bernoulli", "bernoulli.stan"), **{key: eval(expr)})`.
    fn construct<'py>(py: Python<'py>, key: &str, expr: &CStr) -> PyResult<Bound<'py, PyAny>> {
        let model = py.get_type::<PyModel>().call1(("bernoulli", "bernoulli.stan"))?;
        let kwargs = PyDict::new(py);
        kwargs.set_item(key, py.eval(expr, None, None)?)?;
        py.get_type::<PyOptimizeArgs>().call((model,), Some(&kwargs))
    }

    fn assert_value_error(key: &str, expr: &CStr) {
        pyo3::prepare_freethreaded_python();
        Python::with_gil(|py| {
            let err = match construct(py, key, expr) {
                Ok(_) => panic!("{key}={expr:?} should be rejected"),
                Err(err) => err,
            };
            assert!(err.is_instance_of::<PyValueError>(py), "{key}={expr:?} raised {err}");
        });
    }

    #[test]
    // Purpose
    // -------
    // Per-chain sequences are rejected for single-chain options.
    //
    // Given
    // -----
    // - `seed=[123]`, `inits=["i.json"]`, `data=("d.json",)`.
    //
    // Expect
    // ------
    // - Each raises `ValueError`.
    fn sequence_keywords_raise_value_error() {
        assert_value_error("seed", c"[123]");
        assert_value_error("inits", c"['i.json']");
        assert_value_error("data", c"('d.json',)");
    }

    #[test]
    // Purpose
    // -------
    // Keywords of the wrong Python type raise `ValueError`, not `TypeError`
    // or `OverflowError`.
    //
    // Given
    // -----
    // - `seed=True`, `iter=1.5`, `iter=2**70`, `history_size=False`,
    //   `init_alpha='x'`, `tol_obj=True`, `algorithm=3`,
    //   `save_iterations=1`, `data=3`.
    //
    // Expect
    // ------
    // - Each raises `ValueError`.
    fn wrong_typed_keywords_raise_value_error() {
        assert_value_error("seed", c"True");
        assert_value_error("iter", c"1.5");
        assert_value_error("iter", c"2**70");
        assert_value_error("history_size", c"False");
        assert_value_error("init_alpha", c"'x'");
        assert_value_error("tol_obj", c"True");
        assert_value_error("algorithm", c"3");
        assert_value_error("save_iterations", c"1");
        assert_value_error("data", c"3");
    }

    #[test]
    // Purpose
    // -------
    // Well-typed keywords pass through to the composed command.
    //
    // Given
    // -----
    // - `data='d.json'`, `inits='i.json'`, `seed=123`, `init_alpha=1` (an int
    //   accepted as a float).
    //
    // Expect
    // ------
    // - `compose_command("output")` contains "init_alpha=1",
    //   "data file=d.json init=i.json" and "random seed=123".
    fn valid_keywords_compose_command() {
        pyo3::prepare_freethreaded_python();
        Python::with_gil(|py| -> PyResult<()> {
            // Arrange
            let model = py.get_type::<PyModel>().call1(("bernoulli", "bernoulli.stan"))?;
            let kwargs = PyDict::new(py);
            kwargs.set_item("data", "d.json")?;
            kwargs.set_item("inits", "i.json")?;
            kwargs.set_item("seed", 123)?;
            kwargs.set_item("init_alpha", 1)?;

            // Act
            let args = py.get_type::<PyOptimizeArgs>().call((model,), Some(&kwargs))?;
            let cmd: String = args.call_method1("compose_command", ("output",))?.extract()?;

            // Assert
            assert!(cmd.contains("init_alpha=1"), "Got: {cmd}");
            assert!(cmd.contains("data file=d.json init=i.json"), "Got: {cmd}");
            assert!(cmd.contains("random seed=123"), "Got: {cmd}");
            Ok(())
        })
        .expect("valid keywords should be accepted");
    }
}
