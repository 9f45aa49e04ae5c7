//! Run outcome and per-stage failure handling.

use log::{info, warn};

use crate::domain::AppError;

/// A resource that failed under `FailurePolicy::LogAndContinue`.
#[derive(Debug)]
pub struct SoftFailure {
    pub resource: String,
    pub error: AppError,
}

/// What a completed run did.
#[derive(Debug, Default)]
pub struct RunReport {
    pub created: Vec<String>,
    pub soft_failures: Vec<SoftFailure>,
}

impl RunReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_clean(&self) -> bool {
        self.soft_failures.is_empty()
    }

    pub fn log_summary(&self) {
        if self.is_clean() {
            info!("the job has finished successfully! ({} resource(s) created)", self.created.len());
            return;
        }
        warn!(
            "finished with {} resource(s) created and {} failure(s):",
            self.created.len(),
            self.soft_failures.len()
        );
        for failure in &self.soft_failures {
            warn!("  {}: {}", failure.resource, failure.error);
        }
    }
}

/// How a stage reacts when creating one of its resources fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Abort the run with the error.
    Fatal,
    /// Log the error, record it in the report and move on.
    LogAndContinue,
}

impl FailurePolicy {
    pub fn apply(
        self,
        report: &mut RunReport,
        resource: String,
        outcome: Result<(), AppError>,
    ) -> Result<(), AppError> {
        match (outcome, self) {
            (Ok(()), _) => {
                info!("{} created", resource);
                report.created.push(resource);
                Ok(())
            }
            (Err(error), FailurePolicy::Fatal) => Err(error),
            (Err(error), FailurePolicy::LogAndContinue) => {
                warn!("{}", error);
                report.soft_failures.push(SoftFailure { resource, error });
                Ok(())
            }
        }
    }
}
