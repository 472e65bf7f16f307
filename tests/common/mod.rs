//! Shared testing utilities for mlgms CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated config, session directory and a mock portal API.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    config_path: PathBuf,
    pub server: mockito::ServerGuard,
}

#[allow(dead_code)]
impl TestContext {
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let server = mockito::Server::new();
        let sessions = root.path().join("sessions");
        let config_path = root.path().join("config.toml");
        fs::write(
            &config_path,
            format!(
                "[api]\nbase_url = \"{}/api\"\ntimeout_secs = 5\n\n[session]\ndir = \"{}\"\n",
                server.url(),
                sessions.display().to_string().replace('\\', "/")
            ),
        )
        .expect("Failed to write test config");

        Self { root, config_path, server }
    }

    pub fn session_dir(&self) -> PathBuf {
        self.root.path().join("sessions")
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Build a command for the compiled `mlgms` binary wired to this context.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("mlgms").expect("Failed to locate mlgms binary");
        cmd.current_dir(self.root.path())
            .env_remove("MLGMS_CONFIG")
            .env_remove("MLGMS_API_URL")
            .env_remove("MLGMS_LOG")
            .arg("--config")
            .arg(&self.config_path);
        cmd
    }

    /// Log a worker in through the CLI. The login mocks are removed again on return.
    pub fn login_worker(&mut self) {
        let _login = self
            .server
            .mock("POST", "/api/login")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"success": true, "session_id": "sess-7",
                    "worker": {"id": 7, "migrant_id": "MIG00007", "name": "Ravi Kumar", "skill": "mason"}}"#,
            )
            .create();
        let _dashboard = self
            .server
            .mock("GET", "/api/dashboard/current")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"success": true,
                    "worker": {"id": 7, "migrant_id": "MIG00007", "name": "Ravi Kumar", "status": "active"},
                    "stats": {"total": 0, "pending": 0, "resolved": 0, "in_progress": 0},
                    "recent_complaints": []}"#,
            )
            .create();

        self.cli()
            .args(["worker", "login", "--migrant-id", "MIG00007", "--phone", "9876543210"])
            .assert()
            .success()
            .stdout(predicates::str::contains("Welcome, Ravi Kumar"));
    }
}
