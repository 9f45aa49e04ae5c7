use std::collections::HashSet;
use std::sync::Mutex;
use std::time::Duration;

use crate::domain::{AppError, RegistryEntry};
use crate::ports::{ReadinessProbe, RegistryApi};

/// In-memory Nexus recording `kind:name` for every create call.
#[derive(Default)]
pub struct FakeRegistry {
    created: Mutex<Vec<String>>,
    failing: HashSet<String>,
    never_ready: bool,
}

impl FakeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reply 200 with `success: false` for the named entry.
    pub fn failing(mut self, name: &str) -> Self {
        self.failing.insert(name.to_string());
        self
    }

    pub fn never_ready(mut self) -> Self {
        self.never_ready = true;
        self
    }

    pub fn attempted(&self) -> Vec<String> {
        self.created.lock().unwrap().clone()
    }
}

impl ReadinessProbe for FakeRegistry {
    fn probe(&self, _path: &str, _budget: Duration) -> bool {
        !self.never_ready
    }

    fn endpoint(&self, path: &str) -> String {
        format!("http://nexus.test{}", path)
    }
}

impl RegistryApi for FakeRegistry {
    fn create_entry(&self, entry: &RegistryEntry) -> Result<(), AppError> {
        self.created.lock().unwrap().push(format!("{}:{}", entry.kind(), entry.name()));
        if self.failing.contains(entry.name()) {
            return Err(AppError::ResourceRejected {
                resource: entry.name().to_string(),
                status: 200,
                body: r#"{"result":{"success":false}}"#.to_string(),
            });
        }
        Ok(())
    }
}
