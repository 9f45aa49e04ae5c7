//! Bootstrap sequence for the Nexus artifact registry.

use log::info;

use crate::app::orchestrator::report::{FailurePolicy, RunReport};
use crate::app::readiness::await_ready;
use crate::domain::registry::PING_PATH;
use crate::domain::{AppError, PollTiming, ReadinessCheck, RegistryConfig, RegistryEntry};
use crate::ports::{Clock, RegistryApi};

const ENTRY_POLICY: FailurePolicy = FailurePolicy::LogAndContinue;

pub struct RegistryOrchestrator<'a, A: ?Sized, C: ?Sized> {
    api: &'a A,
    clock: &'a C,
    timing: PollTiming,
}

impl<'a, A, C> RegistryOrchestrator<'a, A, C>
where
    A: RegistryApi + ?Sized,
    C: Clock + ?Sized,
{
    pub fn new(api: &'a A, clock: &'a C, timing: PollTiming) -> Self {
        Self { api, clock, timing }
    }

    /// Wait for the registry, then create hosted, proxy and group entries in
    /// that order. A failing entry is recorded and the run moves on.
    pub fn run(&self, config: &RegistryConfig) -> Result<RunReport, AppError> {
        config.validate()?;
        await_ready(&ReadinessCheck::new(PING_PATH, &self.timing), self.api, self.clock)?;

        let mut report = RunReport::new();
        let entries = config.entries_in_creation_order();
        for kind in ["hosted", "proxy", "group"] {
            let stage: Vec<&RegistryEntry> = entries.iter().filter(|e| e.kind() == kind).collect();
            info!("installing ({}) {} repositories", stage.len(), kind);
            for entry in stage {
                ENTRY_POLICY.apply(
                    &mut report,
                    format!("{} repository '{}'", entry.kind(), entry.name()),
                    self.api.create_entry(entry),
                )?;
            }
        }

        Ok(report)
    }
}
