//! Common utilities for integration tests

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A `codeql-runner` command with an empty environment
pub fn codeql_runner_command() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_codeql-runner"));
    cmd.env_clear();
    cmd
}

/// Run a command off the async runtime so a mock server can answer it
pub async fn output_of(mut cmd: Command) -> std::process::Output {
    tokio::task::spawn_blocking(move || cmd.output().unwrap())
        .await
        .unwrap()
}

/// Scratch directory with the runner files a GitHub Actions step receives
pub struct TestContext {
    pub temp: TempDir,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            temp: TempDir::new().unwrap(),
        }
    }

    pub fn github_output(&self) -> PathBuf {
        self.temp.path().join("github_output")
    }

    pub fn github_env(&self) -> PathBuf {
        self.temp.path().join("github_env")
    }

    /// Write a file into the scratch directory
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.temp.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    /// Contents of a runner file, empty if never written
    pub fn read(path: &Path) -> String {
        std::fs::read_to_string(path).unwrap_or_default()
    }

    /// A command set up like an Actions step
    pub fn action_command(&self) -> Command {
        let mut cmd = codeql_runner_command();
        cmd.env("GITHUB_OUTPUT", self.github_output())
            .env("GITHUB_ENV", self.github_env())
            .current_dir(self.temp.path());
        cmd
    }
}
