//! Settings taken from the inputs of a workflow step

use crate::actions::{get_optional_input, get_required_input};
use crate::core::ActionResult;
use crate::di::{ConfigProvider, EnvStore};
use crate::flags::BoolInput;

/// Variable GitHub Actions sets to the server the workflow runs on
pub const GITHUB_SERVER_URL_ENV_VAR: &str = "GITHUB_SERVER_URL";

/// Snapshot of the action inputs relevant to a run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActionInputs {
    pub token: String,
    pub github_url: Option<String>,
    pub ram: Option<String>,
    pub threads: Option<String>,
    pub add_snippets: bool,
    pub db_location: Option<String>,
}

impl ActionInputs {
    /// Read inputs from `INPUT_*` variables. `token` is required.
    pub fn from_env(env: &dyn EnvStore) -> ActionResult<Self> {
        let add_snippets = get_optional_input(env, "add-snippets");

        Ok(Self {
            token: get_required_input(env, "token")?,
            github_url: env
                .get(GITHUB_SERVER_URL_ENV_VAR)
                .filter(|url| !url.is_empty()),
            ram: get_optional_input(env, "ram"),
            threads: get_optional_input(env, "threads"),
            add_snippets: BoolInput::from(add_snippets.as_deref()).is_true(),
            db_location: get_optional_input(env, "db-location"),
        })
    }
}

impl ConfigProvider for ActionInputs {
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
        None
    }
}
