//! Run mode and environment state shared with child processes
//!
//! The mode the tool runs in (GitHub Action or standalone runner) is written
//! to the environment once at start-up so that the CodeQL CLI and later
//! workflow steps can observe it. [`RunContext`] owns that state for the
//! lifetime of the process.

pub mod context;
pub mod store;

pub use context::RunContext;
pub use store::ProcessEnv;

use crate::core::{ActionError, ActionResult};
use crate::di::EnvStore;
use std::fmt;
use std::str::FromStr;

/// Which front end started the process
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Actions,
    Runner,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Actions => "Action",
            Mode::Runner => "Runner",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = ActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Action" => Ok(Mode::Actions),
            "Runner" => Ok(Mode::Runner),
            other => Err(ActionError::UnknownMode(other.to_string())),
        }
    }
}

/// Environment variables set by this tool and read by the CodeQL CLI.
/// Relevant to both the action and the runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvVar {
    /// The mode of the tool, either `Action` or `Runner`
    RunMode,
    /// Version of this tool
    Version,
    /// If truthy, SARIF from several `interpret-results` runs for the same
    /// language may be combined
    FeatureSarifCombine,
    /// If `"true"`, this tool uploads SARIF rather than the CLI
    FeatureWillUpload,
    /// Set once a GHES version warning has been shown in this job
    WarnedAboutVersion,
}

impl EnvVar {
    pub const fn name(&self) -> &'static str {
        match self {
            EnvVar::RunMode => "CODEQL_ACTION_RUN_MODE",
            EnvVar::Version => "CODEQL_ACTION_VERSION",
            EnvVar::FeatureSarifCombine => "CODEQL_ACTION_FEATURE_SARIF_COMBINE",
            EnvVar::FeatureWillUpload => "CODEQL_ACTION_FEATURE_WILL_UPLOAD",
            EnvVar::WarnedAboutVersion => "CODEQL_ACTION_WARNED_ABOUT_VERSION",
        }
    }
}

/// Get an environment parameter, failing if it is unset or empty
pub fn get_required_env_param(env: &dyn EnvStore, name: &str) -> ActionResult<String> {
    env.get(name)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| ActionError::MissingRequiredEnvVar(name.to_string()))
}
