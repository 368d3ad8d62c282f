//! Process-wide run state

use super::{get_required_env_param, EnvVar, Mode};
use crate::core::ActionResult;
use crate::di::{EnvStore, Logger};
use crate::github::types::GitHubVersion;
use crate::github::version::{
    api_version_in_range, incompatibility_message, CompatibilityRange, API_COMPATIBILITY,
};
use std::sync::Arc;

/// State that lives for the whole process: the environment the run mode is
/// persisted in, the logger, and whether the GHES version warning has
/// already been shown.
///
/// Build one at start-up and pass it to everything that needs it.
pub struct RunContext {
    env: Arc<dyn EnvStore>,
    logger: Arc<dyn Logger>,
    compatibility: CompatibilityRange,
    warned_about_version: bool,
}

impl RunContext {
    /// Create a context over `env`.
    ///
    /// A warning exported by an earlier step of the same job counts as
    /// already shown.
    pub fn new(env: Arc<dyn EnvStore>, logger: Arc<dyn Logger>) -> Self {
        let warned_about_version = env
            .get(EnvVar::WarnedAboutVersion.name())
            .is_some_and(|value| value == "true");

        Self {
            env,
            logger,
            compatibility: API_COMPATIBILITY,
            warned_about_version,
        }
    }

    /// Use a different supported GHES range than the bundled one
    pub fn with_compatibility(mut self, compatibility: CompatibilityRange) -> Self {
        self.compatibility = compatibility;
        self
    }

    pub fn env(&self) -> &dyn EnvStore {
        self.env.as_ref()
    }

    pub fn logger(&self) -> &dyn Logger {
        self.logger.as_ref()
    }

    pub fn has_warned_about_version(&self) -> bool {
        self.warned_about_version
    }

    /// Record the run mode, tool version and feature flags.
    ///
    /// In Actions mode the variables are exported so later steps of the job
    /// see them too.
    pub fn initialize_environment(&self, mode: Mode, version: &str) -> ActionResult<()> {
        let export = |var: EnvVar, value: &str| match mode {
            Mode::Actions => self.env.export(var.name(), value),
            Mode::Runner => self.env.set(var.name(), value),
        };

        export(EnvVar::RunMode, mode.as_str())?;
        export(EnvVar::Version, version)?;
        export(EnvVar::FeatureSarifCombine, "true")?;
        export(EnvVar::FeatureWillUpload, "true")?;

        tracing::debug!("Initialized {} environment for version {}", mode, version);
        Ok(())
    }

    /// The run mode recorded by [`RunContext::initialize_environment`].
    ///
    /// Fails if the mode was never recorded, which means start-up skipped
    /// initialization.
    pub fn mode(&self) -> ActionResult<Mode> {
        get_required_env_param(self.env.as_ref(), EnvVar::RunMode.name())?.parse()
    }

    pub fn is_actions(&self) -> ActionResult<bool> {
        Ok(self.mode()? == Mode::Actions)
    }

    /// Warn, at most once per process, when a GHES version is outside the
    /// range this release supports.
    ///
    /// Incompatibility is advisory and never fails the run. `tool_name` only
    /// appears in the message.
    pub fn check_github_version_in_range(
        &mut self,
        version: &GitHubVersion,
        tool_name: &str,
    ) -> ActionResult<()> {
        if self.warned_about_version {
            return Ok(());
        }

        let ghes_version = match version {
            GitHubVersion::Ghes { version } => version,
            GitHubVersion::Dotcom | GitHubVersion::Ghae => return Ok(()),
        };

        let reason = api_version_in_range(
            ghes_version,
            self.compatibility.minimum_version,
            self.compatibility.maximum_version,
        )?;

        if let Some(reason) = reason {
            self.logger
                .warning(&incompatibility_message(reason, ghes_version, tool_name));
        }

        self.warned_about_version = true;
        if self.is_actions()? {
            self.env
                .export(EnvVar::WarnedAboutVersion.name(), "true")?;
        }

        Ok(())
    }
}
