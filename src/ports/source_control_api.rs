//! Source-control server API port definition.

use crate::domain::{AppError, CreateRepositoryRequest, InitData, Organization};
use crate::ports::ReadinessProbe;

/// Port for the Gogs HTTP API.
///
/// Resource calls succeed only on HTTP 201; anything else is returned as
/// `AppError::ResourceRejected`. Implementations never retry.
pub trait SourceControlApi: ReadinessProbe {
    /// Submit the one-time installation form.
    fn install(&self, init_data: &InitData) -> Result<(), AppError>;

    /// Create an organization owned by `admin`.
    fn create_organization(
        &self,
        admin: &str,
        organization: &Organization,
    ) -> Result<(), AppError>;

    /// Create a repository under `owner`.
    fn create_repository(
        &self,
        owner: &str,
        request: &CreateRepositoryRequest,
    ) -> Result<(), AppError>;
}
