//! Shared testing utilities for grid-init CLI tests.

use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::prelude::*;
use serde_json::{Value, json};
use std::path::PathBuf;

/// Isolated working directory holding the configuration documents of a test.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    pub fn new() -> Self {
        Self { root: TempDir::new().expect("Failed to create temp directory for tests") }
    }

    /// Write `document` as `name` and return its path.
    pub fn write_config(&self, name: &str, document: &Value) -> PathBuf {
        let file = self.root.child(name);
        file.write_str(&serde_json::to_string_pretty(document).unwrap())
            .expect("Failed to write config");
        file.path().to_path_buf()
    }

    /// Build a command for the compiled `grid-init` binary with fast timings
    /// and no inherited configuration from the environment.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("grid-init").expect("Failed to locate grid-init binary");
        cmd.current_dir(self.root.path())
            .env_remove("GOGS_CONFIG_FILE")
            .env_remove("GOGS_HOST")
            .env_remove("NEXUS_CONFIG_FILE")
            .env_remove("NEXUS_HOST")
            .env_remove("NEXUS_USER")
            .env_remove("NEXUS_PASS")
            .env_remove("GRID_INIT_KEEP_WORKDIRS")
            .env("GRID_INIT_TIMEOUT", "2")
            .env("GRID_INIT_POLL_INTERVAL", "1")
            .env("GRID_INIT_REQUEST_TIMEOUT", "2")
            .env("RUST_LOG", "info");
        cmd
    }
}

/// A complete `init_data` section for administrator `root`.
#[allow(dead_code)]
pub fn init_data() -> Value {
    json!({
        "domain": "git.example.com",
        "http_port": "3000",
        "app_url": "http://git.example.com:3000/",
        "admin_name": "root",
        "admin_passwd": "s3cret",
        "admin_confirm_passwd": "s3cret",
        "admin_email": "root@example.com",
        "repo_root_path": "/data/git/repositories",
        "log_root_path": "/app/gogs/log"
    })
}
