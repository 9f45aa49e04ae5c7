//! grid-init: declarative first-time bootstrap for Gogs and Nexus servers.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    ConfigKind, GogsOptions, NexusOptions, bootstrap_gogs, bootstrap_nexus, validate_config,
};
pub use app::orchestrator::{FailurePolicy, RunReport, SoftFailure};
pub use domain::AppError;
