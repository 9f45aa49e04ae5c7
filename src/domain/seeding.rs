//! Value types shared by the seeding pipeline and the publisher.

use url::Url;

use crate::domain::{AppError, Credentials};

pub const INITIAL_COMMIT_MESSAGE: &str = "Initial code";
pub const REMOTE_NAME: &str = "origin";

/// Author/committer identity applied to the initial commit only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitterIdentity {
    pub name: String,
    pub email: String,
}

/// What happens to a working directory once its repository is done.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WorkdirRetention {
    #[default]
    Remove,
    /// Leave the directory on disk for post-mortem inspection.
    Keep,
}

/// Where a seeded repository is registered and pushed.
#[derive(Debug, Clone)]
pub struct RemoteCoordinates {
    /// `{host}/{owner}/{name}`, registered as the `origin` remote.
    pub remote_url: String,
    /// `app_url` with path `{owner}/{name}`; credentials are added at push time.
    pub push_url: Url,
}

impl RemoteCoordinates {
    pub fn new(host: &str, app_url: &str, owner: &str, name: &str) -> Result<Self, AppError> {
        let remote_url = format!("{}/{}/{}", host.trim_end_matches('/'), owner, name);
        let mut push_url = Url::parse(app_url).map_err(|e| {
            AppError::config_error(format!("Invalid app_url '{}': {}", app_url, e))
        })?;
        push_url.set_path(&format!("{}/{}", owner, name));
        Ok(Self { remote_url, push_url })
    }

    /// Push URL with credentials embedded as user-info.
    pub fn authenticated_push_url(&self, credentials: &Credentials) -> Result<Url, AppError> {
        let mut url = self.push_url.clone();
        url.set_username(&credentials.username).map_err(|_| {
            AppError::config_error(format!("Cannot embed credentials in '{}'", self.push_url))
        })?;
        url.set_password(Some(&credentials.password)).map_err(|_| {
            AppError::config_error(format!("Cannot embed credentials in '{}'", self.push_url))
        })?;
        Ok(url)
    }
}
