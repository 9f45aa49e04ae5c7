//! HTTP transport shared by the Gogs and Nexus adapters.

use std::time::Duration;

use log::debug;
use reqwest::StatusCode;
use reqwest::blocking::{Client, RequestBuilder};
use serde::Serialize;

use crate::domain::registry::ExtDirectResponse;
use crate::domain::{AppError, ServiceTarget};

/// How a target signals that a resource was created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuccessContract {
    /// The reply status alone decides.
    Status(StatusCode),
    /// HTTP 200 plus `result.success == true` in the JSON body.
    ExtDirectFlag,
}

/// HTTP transport bound to one service target.
///
/// This client performs a single request per call; it never retries. Only
/// `create` and `get_ok_authenticated` send the target's credentials.
#[derive(Clone)]
pub struct HttpResourceClient {
    target: ServiceTarget,
    client: Client,
    timeout: Duration,
}

impl std::fmt::Debug for HttpResourceClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpResourceClient")
            .field("base_url", &self.target.base_url().as_str())
            .field("credentials", &self.target.credentials().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl HttpResourceClient {
    /// Create a client whose every call is bounded by `timeout`.
    pub fn new(target: ServiceTarget, timeout: Duration) -> Result<Self, AppError> {
        let client = Client::builder().timeout(timeout).build().map_err(|e| {
            AppError::config_error(format!("Failed to create HTTP client: {}", e))
        })?;

        Ok(Self { target, client, timeout })
    }

    pub fn target(&self) -> &ServiceTarget {
        &self.target
    }

    fn authenticated(&self, request: RequestBuilder) -> RequestBuilder {
        match self.target.credentials() {
            Some(creds) => request.basic_auth(&creds.username, Some(&creds.password)),
            None => request,
        }
    }

    /// One anonymous GET against `path`, cut off after `budget` when that is
    /// shorter than the client timeout; true only for a 2xx reply.
    pub fn get_ok(&self, path: &str, budget: Duration) -> bool {
        let url = self.target.endpoint(path);
        self.answers_ok(self.client.get(&url), &url, budget)
    }

    /// Same as `get_ok`, with the target's credentials attached.
    pub fn get_ok_authenticated(&self, path: &str, budget: Duration) -> bool {
        let url = self.target.endpoint(path);
        self.answers_ok(self.authenticated(self.client.get(&url)), &url, budget)
    }

    fn answers_ok(&self, request: RequestBuilder, url: &str, budget: Duration) -> bool {
        match request.timeout(self.timeout.min(budget)).send() {
            Ok(response) => {
                let status = response.status();
                debug!("GET {} -> {}", url, status);
                status.is_success()
            }
            Err(e) => {
                debug!("GET {} failed: {}", url, e);
                false
            }
        }
    }

    /// POST `payload` as JSON and check the reply against `contract`.
    pub fn create<T: Serialize + ?Sized>(
        &self,
        path: &str,
        resource: &str,
        payload: &T,
        contract: SuccessContract,
    ) -> Result<(), AppError> {
        let url = self.target.endpoint(path);
        let request = self.authenticated(self.client.post(&url)).json(payload);
        let (status, body) = send(request, &url)?;

        match contract {
            SuccessContract::Status(expected) if status == expected => Ok(()),
            SuccessContract::Status(_) => Err(rejected(resource, status, body)),
            SuccessContract::ExtDirectFlag => {
                if status != StatusCode::OK {
                    return Err(rejected(resource, status, body));
                }
                let reply: ExtDirectResponse =
                    serde_json::from_str(&body).map_err(|e| AppError::ParseError {
                        what: format!("reply from {} for {}", url, resource),
                        details: format!("{} (body: {})", e, body),
                    })?;
                if reply.succeeded() { Ok(()) } else { Err(rejected(resource, status, body)) }
            }
        }
    }

    /// POST form-encoded `fields` anonymously and expect exactly `expected`.
    pub fn post_form(
        &self,
        path: &str,
        resource: &str,
        fields: &[(&str, String)],
        expected: StatusCode,
    ) -> Result<(), AppError> {
        let url = self.target.endpoint(path);
        let request = self.client.post(&url).form(fields);
        let (status, body) = send(request, &url)?;

        if status == expected { Ok(()) } else { Err(rejected(resource, status, body)) }
    }
}

fn send(request: RequestBuilder, url: &str) -> Result<(StatusCode, String), AppError> {
    let response = request
        .send()
        .map_err(|e| AppError::HttpTransport { url: url.to_string(), details: e.to_string() })?;
    let status = response.status();
    let body = response.text().unwrap_or_default();
    debug!("POST {} -> {}", url, status);
    Ok((status, body))
}

fn rejected(resource: &str, status: StatusCode, body: String) -> AppError {
    let body = if body.trim().is_empty() {
        status.canonical_reason().unwrap_or("no response body").to_string()
    } else {
        body
    };
    AppError::ResourceRejected { resource: resource.to_string(), status: status.as_u16(), body }
}
