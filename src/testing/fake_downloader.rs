use std::fs;
use std::path::Path;
use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::ArtifactDownloader;

/// Writes a fixed payload instead of fetching anything.
#[derive(Default)]
pub struct FakeDownloader {
    payload: Vec<u8>,
    urls: Mutex<Vec<String>>,
    fail: bool,
}

impl FakeDownloader {
    pub fn new(payload: &[u8]) -> Self {
        Self { payload: payload.to_vec(), ..Self::default() }
    }

    pub fn failing() -> Self {
        Self { fail: true, ..Self::default() }
    }

    pub fn urls(&self) -> Vec<String> {
        self.urls.lock().unwrap().clone()
    }
}

impl ArtifactDownloader for FakeDownloader {
    fn download(&self, url: &str, destination: &Path) -> Result<u64, AppError> {
        self.urls.lock().unwrap().push(url.to_string());
        if self.fail {
            return Err(AppError::HttpTransport {
                url: url.to_string(),
                details: "connection refused".to_string(),
            });
        }
        fs::write(destination, &self.payload)?;
        Ok(self.payload.len() as u64)
    }
}
