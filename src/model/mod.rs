//! model — Stan program / executable references.
//!
//! Purpose
//! -------
//! Hold the [`Model`] type that ties a Stan program file to the CmdStan
//! executable compiled from it, plus its error surface. Run configurations
//! in [`crate::optimize`] take a `&Model` and copy what they need.
//!
//! Downstream usage
//! ----------------
//! - Build a model once with [`Model::new`] and reuse it for any number of
//!   run configurations.

pub mod errors;
pub mod stan_model;

pub use self::errors::{ModelError, ModelResult};
pub use self::stan_model::Model;
