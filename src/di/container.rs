//! Service container for dependency injection

use super::traits::{EnvStore, Logger, MetaClient, SystemResources};
use crate::core::ActionResult;
use crate::environment::{Mode, ProcessEnv};
use crate::flags::HostSystem;
use crate::github::GitHubMetaClient;
use crate::logging::{ActionsLogger, TracingLogger};
use std::sync::Arc;

/// Service container for dependency injection
///
/// Holds the process environment, logger, machine facts and the GitHub
/// metadata client as trait objects, so tests can swap any of them.
///
/// # Example (Testing)
///
/// ```
/// use codeql_action::di::{ServiceContainer, mocks::*};
/// use std::sync::Arc;
///
/// let container = ServiceContainer::with_providers(
///     Arc::new(MockEnvStore::new()),
///     Arc::new(MockLogger::new()),
///     Arc::new(MockSystemResources::default()),
///     Arc::new(StaticMetaClient::ghes("3.1.0")),
/// );
/// assert_eq!(container.system().logical_cpus(), 8);
/// ```
#[derive(Clone)]
pub struct ServiceContainer {
    pub env: Arc<dyn EnvStore>,
    pub logger: Arc<dyn Logger>,
    pub system: Arc<dyn SystemResources>,
    pub meta_client: Arc<dyn MetaClient>,
}

impl ServiceContainer {
    /// Create a service container with production implementations
    ///
    /// Actions mode renders advisories as workflow commands; runner mode
    /// sends them through `tracing`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(mode: Mode) -> ActionResult<Self> {
        let logger: Arc<dyn Logger> = match mode {
            Mode::Actions => Arc::new(ActionsLogger),
            Mode::Runner => Arc::new(TracingLogger),
        };

        Ok(Self {
            env: Arc::new(ProcessEnv::new()),
            logger,
            system: Arc::new(HostSystem::new()),
            meta_client: Arc::new(GitHubMetaClient::new()?),
        })
    }

    /// Create a service container with custom provider implementations
    pub fn with_providers(
        env: Arc<dyn EnvStore>,
        logger: Arc<dyn Logger>,
        system: Arc<dyn SystemResources>,
        meta_client: Arc<dyn MetaClient>,
    ) -> Self {
        Self {
            env,
            logger,
            system,
            meta_client,
        }
    }

    /// Get the environment store
    pub fn env(&self) -> &dyn EnvStore {
        self.env.as_ref()
    }

    /// Get the logger
    pub fn logger(&self) -> &dyn Logger {
        self.logger.as_ref()
    }

    /// Get the machine facts
    pub fn system(&self) -> &dyn SystemResources {
        self.system.as_ref()
    }

    /// Get the GitHub metadata client
    pub fn meta_client(&self) -> &dyn MetaClient {
        self.meta_client.as_ref()
    }
}
