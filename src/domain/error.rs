use std::io;
use std::time::Duration;

use thiserror::Error;

/// Library-wide error type for grid-init operations.
///
/// Every variant is fatal to the run that produced it. Failures that the
/// orchestrator tolerates are recorded in a `RunReport` instead.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration document could not be read or parsed.
    #[error("Failed to read config file '{path}': {details}")]
    ConfigRead { path: String, details: String },

    /// Configuration document violated a validation rule.
    #[error("Invalid config: {0}")]
    Validation(String),

    /// Command-line or environment parameter is unusable.
    #[error("{0}")]
    Configuration(String),

    /// Target never reported ready before the deadline.
    #[error("Timeout reached waiting for {target} after {} attempt(s) in {}s", attempts, waited.as_secs())]
    ReadinessTimeout { target: String, attempts: u32, waited: Duration },

    /// Request never produced an HTTP response.
    #[error("HTTP request to {url} failed: {details}")]
    HttpTransport { url: String, details: String },

    /// Target answered, but not with its success contract.
    #[error("Error creating {resource} (status {status}): {body}")]
    ResourceRejected { resource: String, status: u16, body: String },

    /// External tool exited non-zero or could not be spawned.
    #[error("Command '{command}' failed: {details}")]
    Process { command: String, details: String },

    /// JSON serialization or deserialization failure.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },
}

impl AppError {
    pub fn validation<S: Into<String>>(message: S) -> Self {
        AppError::Validation(message.into())
    }

    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
