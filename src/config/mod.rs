//! Settings for a CodeQL run
//!
//! Runner mode reads an optional YAML file and lets command-line arguments
//! override it. Action mode reads the step's inputs (see [`inputs`]).

pub mod inputs;

pub use inputs::ActionInputs;

use crate::core::{ActionError, ActionResult};
use crate::di::ConfigProvider;
use serde::{de, Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// URL of the GitHub instance, github.com or GHES
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,

    /// Memory for CodeQL in MB
    ///
    /// Kept as text so validation errors can quote what the user wrote.
    /// Both `ram: 4096` and `ram: "4096"` are accepted.
    #[serde(default, deserialize_with = "string_or_number")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ram: Option<String>,

    /// Threads for CodeQL; negative values leave that many cores free
    #[serde(default, deserialize_with = "string_or_number")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threads: Option<String>,

    /// Include code snippets in SARIF output
    #[serde(default)]
    pub add_snippets: bool,

    /// Directory for CodeQL databases
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_location: Option<String>,

    /// Path to the CodeQL executable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codeql_path: Option<String>,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<serde_yaml::Value>::deserialize(deserializer)? {
        None | Some(serde_yaml::Value::Null) => Ok(None),
        Some(serde_yaml::Value::String(s)) => Ok(Some(s)),
        Some(serde_yaml::Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(de::Error::custom(format!(
            "expected a string or number, found {:?}",
            other
        ))),
    }
}

impl RunnerConfig {
    /// Load config from a YAML file
    pub fn load(path: &Path) -> ActionResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            ActionError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_yaml(&content)
    }

    /// Parse config from YAML text. An empty document is the default config.
    pub fn from_yaml(content: &str) -> ActionResult<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
            .map_err(|e| ActionError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Load `path` if given, otherwise start from defaults
    pub fn load_optional(path: Option<&Path>) -> ActionResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Layer `overrides` on top of this config. Set values win.
    pub fn merge(self, overrides: RunnerConfig) -> Self {
        Self {
            github_url: overrides.github_url.or(self.github_url),
            ram: overrides.ram.or(self.ram),
            threads: overrides.threads.or(self.threads),
            add_snippets: overrides.add_snippets || self.add_snippets,
            db_location: overrides.db_location.or(self.db_location),
            codeql_path: overrides.codeql_path.or(self.codeql_path),
        }
    }
}

impl ConfigProvider for RunnerConfig {
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
