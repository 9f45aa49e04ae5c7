//! Gogs API client implementation.

use std::time::Duration;

use reqwest::StatusCode;

use crate::adapters::http_resource_client::{HttpResourceClient, SuccessContract};
use crate::domain::{AppError, CreateRepositoryRequest, InitData, Organization};
use crate::ports::{ReadinessProbe, SourceControlApi};

const INSTALL_PATH: &str = "/install";

#[derive(Debug, Clone)]
pub struct GogsHttpApi {
    http: HttpResourceClient,
}

impl GogsHttpApi {
    pub fn new(http: HttpResourceClient) -> Self {
        Self { http }
    }
}

impl ReadinessProbe for GogsHttpApi {
    // the admin account does not exist until install succeeds
    fn probe(&self, path: &str, budget: Duration) -> bool {
        self.http.get_ok(path, budget)
    }

    fn endpoint(&self, path: &str) -> String {
        self.http.target().endpoint(path)
    }
}

impl SourceControlApi for GogsHttpApi {
    fn install(&self, init_data: &InitData) -> Result<(), AppError> {
        self.http.post_form(
            INSTALL_PATH,
            "initial configuration",
            &init_data.install_form(),
            StatusCode::OK,
        )
    }

    fn create_organization(
        &self,
        admin: &str,
        organization: &Organization,
    ) -> Result<(), AppError> {
        self.http.create(
            &format!("/api/v1/admin/users/{}/orgs", admin),
            &format!("organization '{}'", organization.username),
            organization,
            SuccessContract::Status(StatusCode::CREATED),
        )
    }

    fn create_repository(
        &self,
        owner: &str,
        request: &CreateRepositoryRequest,
    ) -> Result<(), AppError> {
        self.http.create(
            &format!("/api/v1/admin/users/{}/repos", owner),
            &format!("repository '{}/{}'", owner, request.name),
            request,
            SuccessContract::Status(StatusCode::CREATED),
        )
    }
}
