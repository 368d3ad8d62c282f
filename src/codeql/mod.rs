//! The external CodeQL CLI
//!
//! Only the pieces the orchestration core needs: the CLI version and where
//! databases live. Everything else is the CLI's business.

use crate::core::version::version_at_least;
use crate::core::{ActionError, ActionResult};
use crate::di::CodeQlCli;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::process::Command;

/// Executable name looked up on `PATH` when no path is configured
pub const DEFAULT_CODEQL_COMMAND: &str = "codeql";

/// A CodeQL CLI installation
#[derive(Debug, Clone)]
pub struct CodeQl {
    cmd: PathBuf,
}

impl CodeQl {
    pub fn new(cmd: impl Into<PathBuf>) -> Self {
        Self { cmd: cmd.into() }
    }

    /// Use a configured path, or `codeql` from `PATH`
    pub fn from_path(path: Option<&str>) -> Self {
        Self::new(path.filter(|p| !p.is_empty()).unwrap_or(DEFAULT_CODEQL_COMMAND))
    }

    pub fn path(&self) -> &Path {
        &self.cmd
    }
}

#[async_trait]
impl CodeQlCli for CodeQl {
    async fn get_version(&self) -> ActionResult<String> {
        let output = Command::new(&self.cmd)
            .args(["version", "--format=terse"])
            .output()
            .await
            .map_err(|e| {
                ActionError::CodeQl(format!(
                    "Failed to run {}: {}",
                    self.cmd.display(),
                    e
                ))
            })?;

        if !output.status.success() {
            return Err(ActionError::CodeQl(format!(
                "{} version exited with {}: {}",
                self.cmd.display(),
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

/// Whether the CLI is at least `required_version`
pub async fn codeql_version_above(
    codeql: &dyn CodeQlCli,
    required_version: &str,
) -> ActionResult<bool> {
    version_at_least(&codeql.get_version().await?, required_version)
}

/// Absolute path of the database for `language` under `db_location`
pub fn database_path(db_location: &Path, language: &str) -> ActionResult<PathBuf> {
    let base = if db_location.is_absolute() {
        db_location.to_path_buf()
    } else {
        std::env::current_dir()?.join(db_location)
    };
    Ok(base.join(language))
}
