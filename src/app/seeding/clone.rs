//! Seed from an existing reference repository.

use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::adapters::GitCli;
use crate::domain::AppError;
use crate::ports::ProcessRunner;

/// Clone `reference` into `workdir` and return the workdir as content root.
pub fn clone_reference<R>(runner: &R, reference: &str, workdir: &Path) -> Result<PathBuf, AppError>
where
    R: ProcessRunner + ?Sized,
{
    info!("cloning {}", reference);
    GitCli::new(runner).clone_into(reference, workdir)?;
    Ok(workdir.to_path_buf())
}

/// Remove any version-control metadata so the tree is plain content.
pub fn strip_history(content_root: &Path) -> Result<(), AppError> {
    let metadata = content_root.join(".git");
    if metadata.exists() {
        info!("removing .git directory in {}", content_root.display());
        fs::remove_dir_all(&metadata)?;
    }
    Ok(())
}
