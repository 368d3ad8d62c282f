//! Trait definitions for dependency injection

use crate::core::ActionResult;
use crate::github::types::GitHubApiDetails;
use async_trait::async_trait;
use std::collections::HashMap;

/// Trait for environment variable storage
///
/// Run mode, tool version and feature flags are persisted as environment
/// variables so that child processes and later workflow steps can read them.
/// Tests substitute an in-memory map.
pub trait EnvStore: Send + Sync {
    /// Read a variable. Unset variables return `None`.
    fn get(&self, name: &str) -> Option<String>;

    /// Set a variable for the current process and its children.
    fn set(&self, name: &str, value: &str) -> ActionResult<()>;

    /// Set a variable and persist it for later steps of the same job.
    ///
    /// Outside of GitHub Actions this is the same as [`EnvStore::set`].
    fn export(&self, name: &str, value: &str) -> ActionResult<()> {
        self.set(name, value)
    }
}

/// Trait for user-facing log output
///
/// Advisories (clamped settings, insecure auth, version mismatches) go
/// through this trait rather than straight to `tracing` so they can be
/// asserted in tests and rendered as workflow commands in Actions.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);

    fn warning(&self, message: &str);
}

/// Trait for host machine facts used to derive resource flags
pub trait SystemResources: Send + Sync {
    /// Total physical memory in bytes
    fn total_memory_bytes(&self) -> u64;

    /// Number of logical CPUs
    fn logical_cpus(&self) -> usize;
}

/// Trait for the GitHub metadata request
///
/// Only the response headers matter; any authenticated endpoint would do,
/// `/meta` is the cheapest.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MetaClient: Send + Sync {
    /// Fetch response headers of the meta endpoint, keyed by lowercase name.
    async fn fetch_meta_headers(
        &self,
        details: &GitHubApiDetails,
    ) -> ActionResult<HashMap<String, String>>;
}

/// Trait for the external CodeQL CLI
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CodeQlCli: Send + Sync {
    /// Version string reported by `codeql version`
    async fn get_version(&self) -> ActionResult<String>;
}

/// Trait for runner configuration access
///
/// Provides read-only access to settings that may come from a config file
/// or the command line.
pub trait ConfigProvider: Send + Sync {
    /// GitHub URL, either github.com or a GitHub Enterprise instance
    fn github_url(&self) -> Option<&str>;

    /// Memory for CodeQL in megabytes, as entered by the user
    fn ram(&self) -> Option<&str>;

    /// Number of threads for CodeQL, as entered by the user
    fn threads(&self) -> Option<&str>;

    /// Whether SARIF output should include code snippets
    fn add_snippets(&self) -> bool;

    /// Directory holding CodeQL databases
    fn db_location(&self) -> Option<&str>;

    /// Path to the CodeQL executable
    fn codeql_path(&self) -> Option<&str>;
}
