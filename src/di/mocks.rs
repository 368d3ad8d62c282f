//! Mock implementations of service traits for testing

use super::traits::{ConfigProvider, EnvStore, Logger, MetaClient, SystemResources};
use crate::core::{ActionError, ActionResult};
use crate::github::types::GitHubApiDetails;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// In-memory environment for testing
///
/// Clones share the same storage, so a test can keep one handle while the
/// code under test owns another.
///
/// # Example
///
/// ```
/// use codeql_action::di::mocks::MockEnvStore;
/// use codeql_action::di::EnvStore;
///
/// let env = MockEnvStore::new();
/// env.insert("GITHUB_TOKEN", "abc");
/// env.export("CODEQL_ACTION_RUN_MODE", "Action").unwrap();
///
/// assert_eq!(env.get("GITHUB_TOKEN").as_deref(), Some("abc"));
/// assert_eq!(env.exported(), vec!["CODEQL_ACTION_RUN_MODE".to_string()]);
/// ```
#[derive(Clone, Default)]
pub struct MockEnvStore {
    vars: Arc<Mutex<HashMap<String, String>>>,
    exported: Arc<Mutex<Vec<String>>>,
}

impl MockEnvStore {
    /// Create an empty environment
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a variable without recording it as exported
    pub fn insert(&self, name: &str, value: &str) {
        self.vars
            .lock()
            .unwrap()
            .insert(name.to_string(), value.to_string());
    }

    /// Current value of a variable
    pub fn value(&self, name: &str) -> Option<String> {
        self.vars.lock().unwrap().get(name).cloned()
    }

    /// Names passed to `export`, in call order
    pub fn exported(&self) -> Vec<String> {
        self.exported.lock().unwrap().clone()
    }
}

impl EnvStore for MockEnvStore {
    fn get(&self, name: &str) -> Option<String> {
        self.value(name)
    }

    fn set(&self, name: &str, value: &str) -> ActionResult<()> {
        self.insert(name, value);
        Ok(())
    }

    fn export(&self, name: &str, value: &str) -> ActionResult<()> {
        self.insert(name, value);
        self.exported.lock().unwrap().push(name.to_string());
        Ok(())
    }
}

/// Severity of a recorded log message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warning,
}

/// Logger that records every message
#[derive(Clone, Default)]
pub struct MockLogger {
    messages: Arc<Mutex<Vec<(LogLevel, String)>>>,
}

impl MockLogger {
    /// Create a logger with no messages
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded messages, in order
    pub fn messages(&self) -> Vec<(LogLevel, String)> {
        self.messages.lock().unwrap().clone()
    }

    /// Recorded messages of one level
    pub fn messages_at(&self, level: LogLevel) -> Vec<String> {
        self.messages
            .lock()
            .unwrap()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }
}

impl Logger for MockLogger {
    fn info(&self, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push((LogLevel::Info, message.to_string()));
    }

    fn warning(&self, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push((LogLevel::Warning, message.to_string()));
    }
}

/// Fixed machine facts
#[derive(Debug, Clone, Copy)]
pub struct MockSystemResources {
    pub total_memory_bytes: u64,
    pub logical_cpus: usize,
}

impl Default for MockSystemResources {
    fn default() -> Self {
        Self {
            total_memory_bytes: 8 * 1024 * 1024 * 1024,
            logical_cpus: 8,
        }
    }
}

impl SystemResources for MockSystemResources {
    fn total_memory_bytes(&self) -> u64 {
        self.total_memory_bytes
    }

    fn logical_cpus(&self) -> usize {
        self.logical_cpus
    }
}

/// Meta client answering every request with the same headers
///
/// # Example
///
/// ```
/// use codeql_action::di::mocks::StaticMetaClient;
///
/// let client = StaticMetaClient::ghes("3.1.0");
/// assert_eq!(client.calls(), 0);
/// ```
#[derive(Clone, Default)]
pub struct StaticMetaClient {
    headers: HashMap<String, String>,
    calls: Arc<AtomicUsize>,
    fail_with_status: Option<u16>,
}

impl StaticMetaClient {
    /// Respond without an enterprise version header
    pub fn new() -> Self {
        Self::default()
    }

    /// Respond as a GHES instance of `version`
    pub fn ghes(version: &str) -> Self {
        Self::new().with_header(
            crate::github::version::GITHUB_ENTERPRISE_VERSION_HEADER,
            version,
        )
    }

    /// Add a response header
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers
            .insert(name.to_ascii_lowercase(), value.to_string());
        self
    }

    /// Fail every request with an HTTP status
    pub fn failing(status: u16) -> Self {
        Self {
            fail_with_status: Some(status),
            ..Self::default()
        }
    }

    /// Number of requests made so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MetaClient for StaticMetaClient {
    async fn fetch_meta_headers(
        &self,
        _details: &GitHubApiDetails,
    ) -> ActionResult<HashMap<String, String>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.fail_with_status {
            Some(status) => Err(ActionError::HttpStatus {
                status,
                message: format!("Request failed with status {}", status),
            }),
            None => Ok(self.headers.clone()),
        }
    }
}

/// Mock configuration provider for testing
#[derive(Clone, Default)]
pub struct MockConfigProvider {
    pub github_url: Option<String>,
    pub ram: Option<String>,
    pub threads: Option<String>,
    pub add_snippets: bool,
    pub db_location: Option<String>,
    pub codeql_path: Option<String>,
}

impl ConfigProvider for MockConfigProvider {
    fn github_url(&self) -> Option<&str> {
        self.github_url.as_deref()
    }

    fn ram(&self) -> Option<&str> {
        self.ram.as_deref()
    }

    fn threads(&self) -> Option<&str> {
        self.threads.as_deref()
    }

    fn add_snippets(&self) -> bool {
        self.add_snippets
    }

    fn db_location(&self) -> Option<&str> {
        self.db_location.as_deref()
    }

    fn codeql_path(&self) -> Option<&str> {
        self.codeql_path.as_deref()
    }
}
