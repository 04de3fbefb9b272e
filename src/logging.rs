//! logging — optional terminal logging of composed CmdStan invocations.
//!
//! Compiled only with the `obs_slog` feature. The library itself stays
//! silent; logging happens when a caller opts in via `verbose` on the run
//! options.
use std::{path::Path, sync::Mutex};

use slog::{Drain, Logger, info, o};

/// Root logger writing full-format records to the terminal.
pub fn term_logger() -> Logger {
    let decorator = slog_term::TermDecorator::new().build();
    let drain = slog_term::FullFormat::new(decorator).build().fuse();
    Logger::root(Mutex::new(drain).fuse(), o!("component" => "rust_cmdstan"))
}

/// Log one composed invocation at info level.
pub fn log_command(logger: &Logger, exe: &Path, args: &[String]) {
    info!(logger, "composed cmdstan command";
        "exe" => %exe.display(),
        "args" => args.join(" ")
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // Purpose
    // -------
    // Smoke-test that logging to a discard drain does not panic.
    fn log_command_accepts_discard_logger() {
        let logger = Logger::root(slog::Discard, o!());
        log_command(&logger, Path::new("bernoulli"), &["method=optimize".to_string()]);
    }
}
