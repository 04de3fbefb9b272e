//! optimize::command — render validated args as a CmdStan command line.
//!
//! Purpose
//! -------
//! Serialize an [`OptimizeArgs`] into the argument tokens CmdStan's
//! hierarchical parser expects, either as a token list, a single
//! space-joined string, or an un-spawned [`std::process::Command`].
//!
//! Conventions
//! -----------
//! Tokens are emitted in a fixed order, each only when its option is set:
//!
//! ```text
//! method=optimize
//! algorithm=<name> init_alpha=<f> tol_obj=<f> tol_rel_obj=<f> tol_grad=<f>
//! tol_rel_grad=<f> tol_param=<f> history_size=<n>
//! iter=<n> save_iterations=<0|1>
//! data file=<path> init=<path>
//! random seed=<n>
//! output file=<path>
//! ```
//!
//! - Algorithm sub-arguments follow `algorithm=` directly; CmdStan then
//!   walks back up to the optimize level for `iter` and `save_iterations`.
//! - `init=` always follows `data file=` when both are set.
//! - Floats use Rust's shortest round-trip `Display`, so `2e-4` renders as
//!   `0.0002`.
//! - Composition is infallible and deterministic for a given configuration.
use std::{path::Path, process::Command};

use crate::optimize::args::OptimizeArgs;

impl OptimizeArgs {
    /// Argument tokens following the executable, ending with
    /// `output file=<output>` when `output` is given.
    pub fn compose_args(&self, output: Option<&Path>) -> Vec<String> {
        let mut args = vec!["method=optimize".to_string()];
        if let Some(algorithm) = self.algorithm {
            args.push(format!("algorithm={algorithm}"));
        }
        if let Some(init_alpha) = self.init_alpha {
            args.push(format!("init_alpha={init_alpha}"));
        }
        for (name, value) in self.tols.entries() {
            if let Some(value) = value {
                args.push(format!("{name}={value}"));
            }
        }
        if let Some(history_size) = self.history_size {
            args.push(format!("history_size={history_size}"));
        }
        if let Some(iter) = self.iter {
            args.push(format!("iter={iter}"));
        }
        if let Some(save) = self.save_iterations {
            args.push(format!("save_iterations={}", u8::from(save)));
        }
        if let Some(data) = &self.data {
            args.push("data".to_string());
            args.push(format!("file={}", data.display()));
        }
        if let Some(inits) = &self.inits {
            args.push(format!("init={}", inits.display()));
        }
        if let Some(seed) = self.seed {
            args.push("random".to_string());
            args.push(format!("seed={seed}"));
        }
        if let Some(output) = output {
            args.push("output".to_string());
            args.push(format!("file={}", output.display()));
        }
        args
    }

    /// Full command line: executable path, then [`compose_args`] tokens,
    /// joined by single spaces.
    ///
    /// The result is for display and logging only. Paths are not quoted or
    /// escaped, so a path containing whitespace cannot be split back into
    /// its tokens. To run CmdStan use [`command`], or pass the
    /// [`compose_args`] tokens to a process builder.
    ///
    /// [`compose_args`]: OptimizeArgs::compose_args
    /// [`command`]: OptimizeArgs::command
    pub fn compose_command(&self, output: impl AsRef<Path>) -> String {
        let mut line = self.model.exe_file().display().to_string();
        for token in self.compose_args(Some(output.as_ref())) {
            line.push(' ');
            line.push_str(&token);
        }
        line
    }

    /// Build (but do not spawn) the process invocation, writing to
    /// `output_file` when one was configured.
    pub fn command(&self) -> Command {
        let args = self.compose_args(self.output_file.as_deref());
        #[cfg(feature = "obs_slog")]
        if self.verbose {
            crate::logging::log_command(
                &crate::logging::term_logger(),
                self.model.exe_file(),
                &args,
            );
        }
        let mut cmd = Command::new(self.model.exe_file());
        cmd.args(&args);
        cmd
    }
}
