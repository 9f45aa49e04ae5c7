//! Nexus API client implementation.

use std::time::Duration;

use crate::adapters::http_resource_client::{HttpResourceClient, SuccessContract};
use crate::domain::{AppError, RegistryEntry};
use crate::ports::{ReadinessProbe, RegistryApi};

const EXT_DIRECT_PATH: &str = "/service/extdirect";

#[derive(Debug, Clone)]
pub struct NexusHttpApi {
    http: HttpResourceClient,
}

impl NexusHttpApi {
    pub fn new(http: HttpResourceClient) -> Self {
        Self { http }
    }
}

impl ReadinessProbe for NexusHttpApi {
    fn probe(&self, path: &str, budget: Duration) -> bool {
        self.http.get_ok_authenticated(path, budget)
    }

    fn endpoint(&self, path: &str) -> String {
        self.http.target().endpoint(path)
    }
}

impl RegistryApi for NexusHttpApi {
    fn create_entry(&self, entry: &RegistryEntry) -> Result<(), AppError> {
        self.http.create(
            EXT_DIRECT_PATH,
            &format!("{} repository '{}'", entry.kind(), entry.name()),
            &entry.envelope(),
            SuccessContract::ExtDirectFlag,
        )
    }
}
