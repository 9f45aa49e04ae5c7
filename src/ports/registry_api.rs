//! Artifact registry API port definition.

use crate::domain::{AppError, RegistryEntry};
use crate::ports::ReadinessProbe;

/// Port for the Nexus repository-management API.
pub trait RegistryApi: ReadinessProbe {
    /// Create one repository definition. A 200 reply whose body does not
    /// carry `result.success == true` is an error.
    fn create_entry(&self, entry: &RegistryEntry) -> Result<(), AppError>;
}
