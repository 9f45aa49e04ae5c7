use std::path::Path;

use crate::domain::AppError;

/// Port for fetching a remote artifact onto local disk.
pub trait ArtifactDownloader {
    /// Download `url` into the file at `destination`, returning the byte count.
    fn download(&self, url: &str, destination: &Path) -> Result<u64, AppError>;
}
