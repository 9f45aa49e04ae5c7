//! Git operations expressed as `git` command invocations.

use std::path::Path;

use crate::domain::{AppError, CommitterIdentity};
use crate::ports::ProcessRunner;

/// Thin git client over a process runner.
///
/// Identity is supplied per commit through `-c` overrides; this client never
/// writes to any git configuration file.
#[derive(Debug, Clone, Copy)]
pub struct GitCli<'r, R: ProcessRunner + ?Sized> {
    runner: &'r R,
}

impl<'r, R: ProcessRunner + ?Sized> GitCli<'r, R> {
    pub fn new(runner: &'r R) -> Self {
        Self { runner }
    }

    fn git(&self, args: &[&str], cwd: &Path) -> Result<String, AppError> {
        self.runner.run("git", args, cwd)
    }

    /// Clone `url` directly into `dir`, which must be empty.
    pub fn clone_into(&self, url: &str, dir: &Path) -> Result<(), AppError> {
        self.git(&["clone", url, "."], dir).map(|_| ())
    }

    pub fn init(&self, dir: &Path) -> Result<(), AppError> {
        self.git(&["init"], dir).map(|_| ())
    }

    /// Stage everything under `dir` and commit it as `identity`.
    pub fn commit_all(
        &self,
        dir: &Path,
        message: &str,
        identity: &CommitterIdentity,
    ) -> Result<(), AppError> {
        self.git(&["add", "."], dir)?;

        let name = format!("user.name={}", identity.name);
        let email = format!("user.email={}", identity.email);
        self.git(&["-c", &name, "-c", &email, "commit", "-m", message], dir).map(|_| ())
    }

    pub fn add_remote(&self, dir: &Path, name: &str, url: &str) -> Result<(), AppError> {
        self.git(&["remote", "add", name, url], dir).map(|_| ())
    }

    /// Push the current branch to `url` under the same branch name.
    pub fn push(&self, dir: &Path, url: &str) -> Result<(), AppError> {
        self.git(&["push", url, "HEAD"], dir).map(|_| ())
    }
}
