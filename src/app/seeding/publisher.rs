//! Turns a plain directory into a repository and pushes it.

use std::path::Path;

use log::info;

use crate::adapters::GitCli;
use crate::domain::seeding::{INITIAL_COMMIT_MESSAGE, REMOTE_NAME};
use crate::domain::{AppError, CommitterIdentity, Credentials, RemoteCoordinates};
use crate::ports::ProcessRunner;

pub struct RepositoryPublisher<'r, R: ProcessRunner + ?Sized> {
    git: GitCli<'r, R>,
    identity: CommitterIdentity,
    credentials: Credentials,
}

impl<'r, R: ProcessRunner + ?Sized> RepositoryPublisher<'r, R> {
    pub fn new(runner: &'r R, identity: CommitterIdentity, credentials: Credentials) -> Self {
        Self { git: GitCli::new(runner), identity, credentials }
    }

    /// Init, commit everything, register `origin` and push.
    ///
    /// Every step is fatal and nothing is rolled back. A zero exit status from
    /// the push is taken as success.
    pub fn publish(&self, dir: &Path, remote: &RemoteCoordinates) -> Result<(), AppError> {
        info!("initializing new repository");
        self.git.init(dir)?;

        info!("commit files");
        self.git.commit_all(dir, INITIAL_COMMIT_MESSAGE, &self.identity)?;

        info!("adding remote {}", remote.remote_url);
        self.git.add_remote(dir, REMOTE_NAME, &remote.remote_url)?;

        info!("pushing to {}", remote.push_url);
        let push_url = remote.authenticated_push_url(&self.credentials)?;
        self.git.push(dir, push_url.as_str())
    }
}
