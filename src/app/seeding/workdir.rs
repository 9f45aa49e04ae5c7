//! Scoped working directories for seeding runs.

use std::path::{Path, PathBuf};

use log::{debug, info};
use tempfile::TempDir;

use crate::domain::{AppError, WorkdirRetention};

/// Uniquely named scratch directory owned by one seeding run.
///
/// Dropping it removes the directory, unless the retention is
/// `WorkdirRetention::Keep`, in which case it is left on disk and its path is
/// logged. Both hold on every exit path, including errors.
#[derive(Debug)]
pub struct WorkingDirectory {
    dir: Option<TempDir>,
    path: PathBuf,
    retention: WorkdirRetention,
}

impl WorkingDirectory {
    pub fn create(label: &str, retention: WorkdirRetention) -> Result<Self, AppError> {
        let dir = tempfile::Builder::new().prefix(&format!("grid-init-{}-", label)).tempdir()?;
        let path = dir.path().to_path_buf();
        debug!("created working directory {}", path.display());
        Ok(Self { dir: Some(dir), path, retention })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Release the directory now, surfacing any removal error.
    pub fn release(mut self) -> Result<(), AppError> {
        match (self.dir.take(), self.retention) {
            (Some(dir), WorkdirRetention::Remove) => {
                dir.close()?;
                debug!("removed working directory {}", self.path.display());
                Ok(())
            }
            (Some(dir), WorkdirRetention::Keep) => {
                keep(dir);
                Ok(())
            }
            (None, _) => Ok(()),
        }
    }
}

impl Drop for WorkingDirectory {
    fn drop(&mut self) {
        if let Some(dir) = self.dir.take() {
            match self.retention {
                WorkdirRetention::Keep => keep(dir),
                WorkdirRetention::Remove => drop(dir),
            }
        }
    }
}

fn keep(dir: TempDir) {
    let path = dir.keep();
    info!("kept working directory {}", path.display());
}

/// A working directory together with the subdirectory holding the content.
#[derive(Debug)]
pub struct PopulatedDirectory {
    workdir: WorkingDirectory,
    content_root: PathBuf,
}

impl PopulatedDirectory {
    pub fn new(workdir: WorkingDirectory, content_root: PathBuf) -> Self {
        Self { workdir, content_root }
    }

    pub fn content_root(&self) -> &Path {
        &self.content_root
    }

    pub fn release(self) -> Result<(), AppError> {
        self.workdir.release()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn removed_on_drop_by_default() {
        let workdir = WorkingDirectory::create("demo", WorkdirRetention::Remove).unwrap();
        let path = workdir.path().to_path_buf();
        fs::write(path.join("file.txt"), "x").unwrap();
        assert!(path.exists());
        drop(workdir);
        assert!(!path.exists());
    }

    #[test]
    fn kept_on_drop_when_requested() {
        let workdir = WorkingDirectory::create("demo", WorkdirRetention::Keep).unwrap();
        let path = workdir.path().to_path_buf();
        drop(workdir);
        assert!(path.exists());
        fs::remove_dir_all(path).unwrap();
    }

    #[test]
    fn names_are_unique_and_labelled() {
        let a = WorkingDirectory::create("demo", WorkdirRetention::Remove).unwrap();
        let b = WorkingDirectory::create("demo", WorkdirRetention::Remove).unwrap();
        assert_ne!(a.path(), b.path());
        let name = a.path().file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("grid-init-demo-"));
    }

    #[test]
    fn release_removes_directory() {
        let workdir = WorkingDirectory::create("demo", WorkdirRetention::Remove).unwrap();
        let path = workdir.path().to_path_buf();
        let populated = PopulatedDirectory::new(workdir, path.join("content"));
        assert_eq!(populated.content_root(), path.join("content"));
        populated.release().unwrap();
        assert!(!path.exists());
    }
}
