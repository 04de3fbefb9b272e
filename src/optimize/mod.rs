//! optimize — validated CmdStan optimize-mode run configuration.
//!
//! Purpose
//! -------
//! Turn loosely-typed caller input into a configuration that CmdStan will
//! accept, and render it as a command line. Validation happens once, at
//! construction; composing the command afterwards cannot fail.
//!
//! Key behaviors
//! -------------
//! - [`OptimizeOptions`] carries raw values; [`OptimizeArgs::new`] validates
//!   them against a [`Model`](crate::model::Model).
//! - [`OptimizeAlgorithm`] parses `Newton` / `BFGS` / `LBFGS`
//!   case-insensitively and renders the lowercase CmdStan token.
//! - `compose_args`, `compose_command` and `command` produce the token list,
//!   the joined command line, and an un-spawned `std::process::Command`.
//! - All failures are reported as [`OptimizeError`] naming the offending
//!   option.
//!
//! Invariants & assumptions
//! ------------------------
//! - Optimize runs one chain: `seed`, `data` and `inits` are single values.
//! - Options that only affect quasi-Newton line searches (`init_alpha`,
//!   tolerances) or L-BFGS (`history_size`) are rejected for algorithms that
//!   ignore them rather than silently dropped.
//! - No filesystem access: paths are only checked for emptiness.
//!
//! Testing notes
//! -------------
//! - Each submodule carries unit tests for its own concern; the scenarios a
//!   caller would run end to end live in `tests/integration_optimize_args.rs`.

pub mod algorithm;
pub mod args;
pub mod command;
pub mod errors;
pub mod options;
pub mod tolerances;
pub mod validation;

pub use self::algorithm::{DEFAULT_ALGORITHM, OptimizeAlgorithm};
pub use self::args::OptimizeArgs;
pub use self::errors::{OptimizeError, OptimizeResult};
pub use self::options::OptimizeOptions;
pub use self::tolerances::Tolerances;

pub mod prelude {
    pub use super::{
        OptimizeAlgorithm, OptimizeArgs, OptimizeError, OptimizeOptions, OptimizeResult,
        Tolerances,
    };
}
