use std::time::Duration;

/// Port for a single readiness probe against a target.
pub trait ReadinessProbe {
    /// Issue one GET against `path` that returns within `budget`. Any
    /// transport failure, timeout or non-success status is reported as `false`.
    fn probe(&self, path: &str, budget: Duration) -> bool;

    /// Absolute URL for `path`, used in log lines and timeout errors.
    fn endpoint(&self, path: &str) -> String;
}
