//! Entry points wiring the real adapters into the orchestrators.

use std::path::{Path, PathBuf};
use std::time::Duration;

use log::info;

use crate::adapters::{
    CommandRunner, GogsHttpApi, HttpDownloader, HttpResourceClient, NexusHttpApi, SystemClock,
};
use crate::app::config::{load_registry_config, load_source_control_config};
use crate::app::orchestrator::{RegistryOrchestrator, RunReport, SourceControlOrchestrator};
use crate::app::seeding::{ContentSeedingPipeline, SeedingOptions};
use crate::domain::{
    AppError, CommitterIdentity, Credentials, PollTiming, ServiceTarget, WorkdirRetention,
};

#[derive(Debug, Clone)]
pub struct GogsOptions {
    pub config_path: PathBuf,
    pub host: String,
    /// Repository cloned for `danta-aem-demo` entries.
    pub demo_repo_url: String,
    pub retention: WorkdirRetention,
    pub timing: PollTiming,
    pub request_timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct NexusOptions {
    pub config_path: PathBuf,
    pub host: String,
    pub credentials: Credentials,
    pub timing: PollTiming,
    pub request_timeout: Duration,
}

/// Which configuration document a path holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKind {
    Gogs,
    Nexus,
}

/// Bring up a Gogs server from its configuration document.
pub fn bootstrap_gogs(options: &GogsOptions) -> Result<RunReport, AppError> {
    let config = load_source_control_config(&options.config_path)?;
    config.validate()?;
    let init_data = &config.init_data;

    let target = ServiceTarget::parse(&options.host, Some(init_data.admin_credentials()))?;
    info!("check and wait for gogs on host: {}", target.host());
    let api = GogsHttpApi::new(HttpResourceClient::new(target.clone(), options.request_timeout)?);

    let runner = CommandRunner::new();
    let downloader = HttpDownloader::new(options.request_timeout)?;
    let identity = CommitterIdentity {
        name: init_data.admin_name.clone(),
        email: init_data.admin_email.clone(),
    };
    let seeder = ContentSeedingPipeline::new(
        &runner,
        &downloader,
        identity,
        init_data.admin_credentials(),
        SeedingOptions {
            reference_repo_url: options.demo_repo_url.clone(),
            retention: options.retention,
            api_host: target.host(),
            app_url: init_data.app_url.clone(),
        },
    );

    let clock = SystemClock;
    SourceControlOrchestrator::new(&api, &seeder, &clock, options.timing).run(&config)
}

/// Bring up a Nexus registry from its configuration document.
pub fn bootstrap_nexus(options: &NexusOptions) -> Result<RunReport, AppError> {
    let config = load_registry_config(&options.config_path)?;
    config.validate()?;

    let target = ServiceTarget::parse(&options.host, Some(options.credentials.clone()))?;
    info!("check and wait for nexus on host: {}", target.host());
    let api = NexusHttpApi::new(HttpResourceClient::new(target, options.request_timeout)?);

    let clock = SystemClock;
    RegistryOrchestrator::new(&api, &clock, options.timing).run(&config)
}

/// Load and validate a configuration document without any network access.
pub fn validate_config(kind: ConfigKind, path: &Path) -> Result<(), AppError> {
    match kind {
        ConfigKind::Gogs => load_source_control_config(path)?.validate(),
        ConfigKind::Nexus => load_registry_config(path)?.validate(),
    }
}
