//! Plain HTTP artifact download.

use std::fs::File;
use std::path::Path;
use std::time::Duration;

use reqwest::blocking::Client;

use crate::domain::AppError;
use crate::ports::ArtifactDownloader;

/// Downloads unauthenticated artifacts. Only connecting is time-bounded;
/// archives can take arbitrarily long to stream.
#[derive(Debug, Clone)]
pub struct HttpDownloader {
    client: Client,
}

impl HttpDownloader {
    pub fn new(connect_timeout: Duration) -> Result<Self, AppError> {
        let client = Client::builder()
            .connect_timeout(connect_timeout)
            .timeout(None)
            .build()
            .map_err(|e| AppError::config_error(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self { client })
    }
}

impl ArtifactDownloader for HttpDownloader {
    fn download(&self, url: &str, destination: &Path) -> Result<u64, AppError> {
        let transport = |details: String| AppError::HttpTransport { url: url.to_string(), details };

        let mut response = self.client.get(url).send().map_err(|e| transport(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(AppError::ResourceRejected {
                resource: format!("download of {}", url),
                status: status.as_u16(),
                body: response.text().unwrap_or_default(),
            });
        }

        let mut output = File::create(destination)?;
        response.copy_to(&mut output).map_err(|e| transport(e.to_string()))
    }
}
