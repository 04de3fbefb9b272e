//! optimize::tolerances — quasi-Newton convergence tolerances.
use crate::optimize::{errors::OptimizeResult, validation::verify_tolerance};

/// Convergence tolerances understood by CmdStan's BFGS and LBFGS.
///
/// - `tol_obj`: absolute change in the objective.
/// - `tol_rel_obj`: relative change in the objective.
/// - `tol_grad`: gradient norm.
/// - `tol_rel_grad`: relative gradient magnitude.
/// - `tol_param`: change in parameter values.
///
/// Every field is optional; unset fields are left to CmdStan's defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Tolerances {
    pub tol_obj: Option<f64>,
    pub tol_rel_obj: Option<f64>,
    pub tol_grad: Option<f64>,
    pub tol_rel_grad: Option<f64>,
    pub tol_param: Option<f64>,
}

impl Tolerances {
    /// Construct validated tolerances.
    ///
    /// # Errors
    /// - [`OptimizeError::InvalidTolerance`] for the first non-finite or
    ///   negative value, checked in field order.
    ///
    /// [`OptimizeError::InvalidTolerance`]: crate::optimize::OptimizeError::InvalidTolerance
    pub fn new(
        tol_obj: Option<f64>, tol_rel_obj: Option<f64>, tol_grad: Option<f64>,
        tol_rel_grad: Option<f64>, tol_param: Option<f64>,
    ) -> OptimizeResult<Self> {
        Ok(Self {
            tol_obj: verify_tolerance("tol_obj", tol_obj)?,
            tol_rel_obj: verify_tolerance("tol_rel_obj", tol_rel_obj)?,
            tol_grad: verify_tolerance("tol_grad", tol_grad)?,
            tol_rel_grad: verify_tolerance("tol_rel_grad", tol_rel_grad)?,
            tol_param: verify_tolerance("tol_param", tol_param)?,
        })
    }

    /// Name/value pairs in command-line order.
    pub fn entries(&self) -> [(&'static str, Option<f64>); 5] {
        [
            ("tol_obj", self.tol_obj),
            ("tol_rel_obj", self.tol_rel_obj),
            ("tol_grad", self.tol_grad),
            ("tol_rel_grad", self.tol_rel_grad),
            ("tol_param", self.tol_param),
        ]
    }

    /// Name of the first tolerance that is set, if any.
    pub fn first_set(&self) -> Option<&'static str> {
        self.entries().into_iter().find(|(_, v)| v.is_some()).map(|(name, _)| name)
    }
}
