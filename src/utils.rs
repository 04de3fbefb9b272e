//! utils — Python argument extraction for the PyO3 bindings.
//!
//! Every keyword passed to `OptimizeArgs(...)` arrives as a raw Python object
//! and is narrowed here, so that any malformed input (wrong type, overflow,
//! list where one value is expected) surfaces as `ValueError` rather than
//! PyO3's own `TypeError` / `OverflowError`. `bool` is rejected wherever an
//! integer or float is expected, even though Python treats it as an `int`.

#[cfg(feature = "python-bindings")]
use std::path::PathBuf;

#[cfg(feature = "python-bindings")]
use pyo3::{
    exceptions::PyValueError,
    prelude::*,
    types::{PyAny, PyBool, PyList, PyString, PyTuple},
};

#[cfg(feature = "python-bindings")]
use crate::{
    model::Model,
    optimize::{OptimizeArgs, OptimizeError, OptimizeOptions},
};

#[cfg(feature = "python-bindings")]
const SINGLE_VALUE_REASON: &str = "optimize runs one chain and accepts a single value.";

/// Reject list and tuple input for options that take exactly one value.
#[cfg(feature = "python-bindings")]
pub fn reject_sequence(
    value: &Bound<'_, PyAny>, option: &'static str, reason: &'static str,
) -> PyResult<()> {
    if value.is_instance_of::<PyList>() || value.is_instance_of::<PyTuple>() {
        return Err(OptimizeError::SequenceNotSupported { option, reason }.into());
    }
    Ok(())
}

#[cfg(feature = "python-bindings")]
#[inline]
pub fn extract_seed(seed: Option<&Bound<'_, PyAny>>) -> PyResult<Option<i64>> {
    if let Some(obj) = seed {
        reject_sequence(obj, "seed", "optimize takes one seed, not one per chain.")?;
    }
    extract_int(seed, "seed")
}

/// Extract an optional `int` (not `bool`) that fits in `i64`.
#[cfg(feature = "python-bindings")]
pub fn extract_int(
    value: Option<&Bound<'_, PyAny>>, option: &'static str,
) -> PyResult<Option<i64>> {
    value
        .map(|obj| {
            reject_sequence(obj, option, SINGLE_VALUE_REASON)?;
            if obj.is_instance_of::<PyBool>() {
                return Err(PyValueError::new_err(format!("{option} must be an integer, not bool")));
            }
            obj.extract::<i64>().map_err(|_| {
                PyValueError::new_err(format!("{option} must be an integer within the i64 range"))
            })
        })
        .transpose()
}

/// Extract an optional `float` (ints accepted, `bool` and strings rejected).
#[cfg(feature = "python-bindings")]
pub fn extract_float(
    value: Option<&Bound<'_, PyAny>>, option: &'static str,
) -> PyResult<Option<f64>> {
    value
        .map(|obj| {
            reject_sequence(obj, option, SINGLE_VALUE_REASON)?;
            if obj.is_instance_of::<PyBool>() || obj.is_instance_of::<PyString>() {
                return Err(PyValueError::new_err(format!("{option} must be a number")));
            }
            obj.extract::<f64>()
                .map_err(|_| PyValueError::new_err(format!("{option} must be a number")))
        })
        .transpose()
}

/// Extract an optional `str`.
#[cfg(feature = "python-bindings")]
pub fn extract_name(
    value: Option<&Bound<'_, PyAny>>, option: &'static str,
) -> PyResult<Option<String>> {
    value
        .map(|obj| {
            reject_sequence(obj, option, SINGLE_VALUE_REASON)?;
            obj.extract::<String>()
                .map_err(|_| PyValueError::new_err(format!("{option} must be a str")))
        })
        .transpose()
}

/// Extract an optional `bool`; integers are not coerced.
#[cfg(feature = "python-bindings")]
pub fn extract_flag(
    value: Option<&Bound<'_, PyAny>>, option: &'static str,
) -> PyResult<Option<bool>> {
    value
        .map(|obj| {
            if !obj.is_instance_of::<PyBool>() {
                return Err(PyValueError::new_err(format!("{option} must be a bool")));
            }
            obj.extract::<bool>()
                .map_err(|_| PyValueError::new_err(format!("{option} must be a bool")))
        })
        .transpose()
}

#[cfg(feature = "python-bindings")]
#[inline]
pub fn extract_path(
    value: Option<&Bound<'_, PyAny>>, option: &'static str,
) -> PyResult<Option<PathBuf>> {
    value
        .map(|obj| {
            reject_sequence(obj, option, "optimize accepts a single file, not one per chain.")?;
            obj.extract::<PathBuf>().map_err(|_| {
                PyValueError::new_err(format!("{option} must be a str or os.PathLike path"))
            })
        })
        .transpose()
}

#[cfg(feature = "python-bindings")]
#[allow(clippy::too_many_arguments)]
pub fn build_optimize_args<'py>(
    model: &Model, seed: Option<&Bound<'py, PyAny>>, data: Option<&Bound<'py, PyAny>>,
    inits: Option<&Bound<'py, PyAny>>, output_file: Option<&Bound<'py, PyAny>>,
    algorithm: Option<&Bound<'py, PyAny>>, init_alpha: Option<&Bound<'py, PyAny>>,
    iter: Option<&Bound<'py, PyAny>>, tol_obj: Option<&Bound<'py, PyAny>>,
    tol_rel_obj: Option<&Bound<'py, PyAny>>, tol_grad: Option<&Bound<'py, PyAny>>,
    tol_rel_grad: Option<&Bound<'py, PyAny>>, tol_param: Option<&Bound<'py, PyAny>>,
    history_size: Option<&Bound<'py, PyAny>>, save_iterations: Option<&Bound<'py, PyAny>>,
    verbose: Option<&Bound<'py, PyAny>>,
) -> PyResult<OptimizeArgs> {
    let opts = OptimizeOptions {
        seed: extract_seed(seed)?,
        algorithm: extract_name(algorithm, "algorithm")?,
        init_alpha: extract_float(init_alpha, "init_alpha")?,
        iter: extract_int(iter, "iter")?,
        tol_obj: extract_float(tol_obj, "tol_obj")?,
        tol_rel_obj: extract_float(tol_rel_obj, "tol_rel_obj")?,
        tol_grad: extract_float(tol_grad, "tol_grad")?,
        tol_rel_grad: extract_float(tol_rel_grad, "tol_rel_grad")?,
        tol_param: extract_float(tol_param, "tol_param")?,
        history_size: extract_int(history_size, "history_size")?,
        save_iterations: extract_flag(save_iterations, "save_iterations")?,
        data: extract_path(data, "data")?,
        inits: extract_path(inits, "inits")?,
        output_file: extract_path(output_file, "output_file")?,
        verbose: extract_flag(verbose, "verbose")?.unwrap_or(false),
    };
    Ok(OptimizeArgs::new(model, opts)?)
}
