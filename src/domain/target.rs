//! Service target identification.

use std::fmt;

use url::Url;

use crate::domain::AppError;

/// Basic-auth credential pair.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self { username: username.into(), password: password.into() }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Backend instance to configure: a base URL plus optional credentials.
#[derive(Debug, Clone)]
pub struct ServiceTarget {
    base_url: Url,
    credentials: Option<Credentials>,
}

impl ServiceTarget {
    /// Parse `host` into a target. Trailing slashes are dropped so that
    /// endpoint paths can be appended verbatim.
    pub fn parse(host: &str, credentials: Option<Credentials>) -> Result<Self, AppError> {
        let trimmed = host.trim().trim_end_matches('/');
        let base_url = Url::parse(trimmed)
            .map_err(|e| AppError::config_error(format!("Invalid host '{}': {}", host, e)))?;
        if !base_url.has_host() {
            return Err(AppError::config_error(format!("Invalid host '{}': missing host", host)));
        }
        Ok(Self { base_url, credentials })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    /// Base URL without a trailing slash, as used for string concatenation.
    pub fn host(&self) -> String {
        self.base_url.as_str().trim_end_matches('/').to_string()
    }

    /// Absolute URL for an endpoint path such as `/healthcheck`.
    pub fn endpoint(&self, path: &str) -> String {
        if path.is_empty() || path == "/" {
            return format!("{}/", self.host());
        }
        format!("{}/{}", self.host(), path.trim_start_matches('/'))
    }
}
