pub mod action_init;
pub mod flags;
pub mod init;

use codeql_action::config::RunnerConfig;
use codeql_action::core::ActionResult;
use std::path::PathBuf;

/// Flag settings shared by the runner subcommands
#[derive(Debug, Clone, Default)]
pub struct FlagOptions {
    pub ram: Option<String>,
    pub threads: Option<String>,
    pub add_snippets: bool,
    pub config_file: Option<PathBuf>,
}

impl FlagOptions {
    /// Config file values with command-line values layered on top
    pub fn resolve(&self, github_url: Option<String>) -> ActionResult<RunnerConfig> {
        let file = RunnerConfig::load_optional(self.config_file.as_deref())?;
        Ok(file.merge(RunnerConfig {
            github_url,
            ram: self.ram.clone(),
            threads: self.threads.clone(),
            add_snippets: self.add_snippets,
            ..Default::default()
        }))
    }
}
