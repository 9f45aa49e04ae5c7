//! External process port definition.

use std::path::Path;

use crate::domain::AppError;

/// Port for running external command-line tools (git, mvn, unzip, scripts).
pub trait ProcessRunner {
    /// Run `program` with `args` inside `cwd`.
    ///
    /// Returns the combined stdout and stderr on a zero exit status. A non-zero
    /// exit or a spawn failure is an `AppError::Process` carrying that output.
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> Result<String, AppError>;
}
