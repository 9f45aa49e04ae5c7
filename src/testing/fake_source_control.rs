use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::time::Duration;

use crate::domain::{AppError, CreateRepositoryRequest, InitData, Organization};
use crate::ports::{ReadinessProbe, SourceControlApi};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GogsCall {
    Probe(String),
    Install,
    Organization { admin: String, username: String },
    Repository { owner: String, request: CreateRepositoryRequest },
}

/// In-memory Gogs. Every probe succeeds unless a path is scripted otherwise.
#[derive(Default)]
pub struct FakeSourceControl {
    calls: Mutex<Vec<GogsCall>>,
    ready_after: HashMap<String, u32>,
    probe_counts: Mutex<HashMap<String, u32>>,
    fail_install: bool,
    failing_orgs: HashSet<String>,
    failing_repos: HashSet<String>,
}

impl FakeSourceControl {
    pub fn new() -> Self {
        Self::default()
    }

    /// `path` answers ready on the `attempt`-th probe; 0 means never.
    pub fn ready_on(mut self, path: &str, attempt: u32) -> Self {
        self.ready_after.insert(path.to_string(), attempt);
        self
    }

    pub fn failing_install(mut self) -> Self {
        self.fail_install = true;
        self
    }

    pub fn failing_org(mut self, username: &str) -> Self {
        self.failing_orgs.insert(username.to_string());
        self
    }

    pub fn failing_repo(mut self, name: &str) -> Self {
        self.failing_repos.insert(name.to_string());
        self
    }

    pub fn calls(&self) -> Vec<GogsCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn resource_calls(&self) -> Vec<GogsCall> {
        self.calls().into_iter().filter(|c| !matches!(c, GogsCall::Probe(_))).collect()
    }

    pub fn repository_requests(&self) -> Vec<(String, CreateRepositoryRequest)> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                GogsCall::Repository { owner, request } => Some((owner, request)),
                _ => None,
            })
            .collect()
    }

    fn rejection(resource: String) -> AppError {
        AppError::ResourceRejected { resource, status: 500, body: "simulated".to_string() }
    }
}

impl ReadinessProbe for FakeSourceControl {
    fn probe(&self, path: &str, _budget: Duration) -> bool {
        self.calls.lock().unwrap().push(GogsCall::Probe(path.to_string()));
        let mut counts = self.probe_counts.lock().unwrap();
        let count = counts.entry(path.to_string()).or_insert(0);
        *count += 1;
        match self.ready_after.get(path) {
            Some(0) => false,
            Some(attempt) => *count >= *attempt,
            None => true,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("http://gogs.test{}", path)
    }
}

impl SourceControlApi for FakeSourceControl {
    fn install(&self, _init_data: &InitData) -> Result<(), AppError> {
        self.calls.lock().unwrap().push(GogsCall::Install);
        if self.fail_install {
            return Err(Self::rejection("initial configuration".to_string()));
        }
        Ok(())
    }

    fn create_organization(&self, admin: &str, organization: &Organization) -> Result<(), AppError> {
        self.calls.lock().unwrap().push(GogsCall::Organization {
            admin: admin.to_string(),
            username: organization.username.clone(),
        });
        if self.failing_orgs.contains(&organization.username) {
            return Err(Self::rejection(format!("organization '{}'", organization.username)));
        }
        Ok(())
    }

    fn create_repository(&self, owner: &str, request: &CreateRepositoryRequest) -> Result<(), AppError> {
        self.calls
            .lock()
            .unwrap()
            .push(GogsCall::Repository { owner: owner.to_string(), request: request.clone() });
        if self.failing_repos.contains(&request.name) {
            return Err(Self::rejection(format!("repository '{}'", request.name)));
        }
        Ok(())
    }
}
