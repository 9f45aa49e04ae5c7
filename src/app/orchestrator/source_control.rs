//! Bootstrap sequence for the Gogs source-control server.

use log::info;

use crate::app::orchestrator::report::{FailurePolicy, RunReport};
use crate::app::readiness::await_ready;
use crate::domain::source_control::{HEALTHCHECK_PATH, ROOT_PATH};
use crate::domain::{AppError, PollTiming, ReadinessCheck, SourceControlConfig};
use crate::ports::{Clock, RepositorySeeder, SourceControlApi};

const RESOURCE_POLICY: FailurePolicy = FailurePolicy::Fatal;

pub struct SourceControlOrchestrator<'a, A: ?Sized, S: ?Sized, C: ?Sized> {
    api: &'a A,
    seeder: &'a S,
    clock: &'a C,
    timing: PollTiming,
}

impl<'a, A, S, C> SourceControlOrchestrator<'a, A, S, C>
where
    A: SourceControlApi + ?Sized,
    S: RepositorySeeder + ?Sized,
    C: Clock + ?Sized,
{
    pub fn new(api: &'a A, seeder: &'a S, clock: &'a C, timing: PollTiming) -> Self {
        Self { api, seeder, clock, timing }
    }

    /// Bring a fresh server to the configured state.
    ///
    /// Order: validate, wait for `/`, install, wait for `/healthcheck`,
    /// organizations, then repositories (each seeded right after creation when
    /// its content is not server-initialized). The first failure ends the run.
    pub fn run(&self, config: &SourceControlConfig) -> Result<RunReport, AppError> {
        config.validate()?;
        let init_data = &config.init_data;
        let admin = init_data.admin_name.as_str();
        let mut report = RunReport::new();

        await_ready(&ReadinessCheck::new(ROOT_PATH, &self.timing), self.api, self.clock)?;

        info!("installing gogs");
        RESOURCE_POLICY.apply(
            &mut report,
            "initial configuration".to_string(),
            self.api.install(init_data),
        )?;

        await_ready(&ReadinessCheck::new(HEALTHCHECK_PATH, &self.timing), self.api, self.clock)?;

        info!("creating ({}) organizations", config.organizations.len());
        for organization in &config.organizations {
            RESOURCE_POLICY.apply(
                &mut report,
                format!("organization '{}'", organization.username),
                self.api.create_organization(admin, organization),
            )?;
        }

        info!("creating ({}) repositories", config.repositories.len());
        for entry in &config.repositories {
            let repository = entry.resolve(admin)?;
            RESOURCE_POLICY.apply(
                &mut report,
                format!("repository '{}/{}'", repository.owner, repository.name),
                self.api.create_repository(&repository.owner, &repository.create_request()),
            )?;

            if !repository.content.auto_init() {
                let resource = format!(
                    "{} content for '{}/{}'",
                    repository.content.tag(),
                    repository.owner,
                    repository.name
                );
                RESOURCE_POLICY.apply(
                    &mut report,
                    resource,
                    self.seeder.seed_and_publish(&repository),
                )?;
            }
        }

        Ok(report)
    }
}
