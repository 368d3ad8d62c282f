//! Process environment backed [`EnvStore`]

use crate::actions::{append_file_command, GITHUB_ENV};
use crate::core::ActionResult;
use crate::di::EnvStore;
use std::path::Path;

/// Reads and writes the real process environment.
///
/// `export` additionally appends to the `GITHUB_ENV` file when one is
/// configured, which is how a step hands variables to the steps after it.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl ProcessEnv {
    pub fn new() -> Self {
        Self
    }
}

impl EnvStore for ProcessEnv {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }

    fn set(&self, name: &str, value: &str) -> ActionResult<()> {
        tracing::debug!("Setting environment variable {}", name);
        std::env::set_var(name, value);
        Ok(())
    }

    fn export(&self, name: &str, value: &str) -> ActionResult<()> {
        self.set(name, value)?;
        if let Some(path) = self.get(GITHUB_ENV).filter(|p| !p.is_empty()) {
            append_file_command(Path::new(&path), name, value)?;
        }
        Ok(())
    }
}
