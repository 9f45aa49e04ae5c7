//! Readiness polling parameters.

use std::time::Duration;

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(3);
pub const DEFAULT_READY_DEADLINE: Duration = Duration::from_secs(60);

/// Loop parameters for one readiness wait.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadinessCheck {
    /// Endpoint path relative to the target's base URL.
    pub path: String,
    pub interval: Duration,
    pub deadline: Duration,
}

impl ReadinessCheck {
    pub fn new(path: impl Into<String>, timing: &PollTiming) -> Self {
        Self { path: path.into(), interval: timing.interval, deadline: timing.deadline }
    }
}

/// Shared interval/deadline pair applied to every readiness wait of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollTiming {
    pub interval: Duration,
    pub deadline: Duration,
}

impl Default for PollTiming {
    fn default() -> Self {
        Self { interval: DEFAULT_POLL_INTERVAL, deadline: DEFAULT_READY_DEADLINE }
    }
}

/// Successful readiness wait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ready {
    pub attempts: u32,
    pub waited: Duration,
}
