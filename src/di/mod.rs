//! Dependency injection infrastructure
//!
//! Everything the core touches outside of pure computation (process
//! environment, log output, machine facts, the GitHub API, the CodeQL CLI)
//! sits behind a trait so tests can substitute in-memory versions.
//!
//! # Example (Testing)
//! ```
//! use codeql_action::di::{ServiceContainer, mocks::*};
//! use std::sync::Arc;
//!
//! let container = ServiceContainer::with_providers(
//!     Arc::new(MockEnvStore::new()),
//!     Arc::new(MockLogger::new()),
//!     Arc::new(MockSystemResources::default()),
//!     Arc::new(StaticMetaClient::new()),
//! );
//! ```

pub mod container;
pub mod mocks;
pub mod traits;

// Re-export key types
pub use container::ServiceContainer;
pub use traits::{CodeQlCli, ConfigProvider, EnvStore, Logger, MetaClient, SystemResources};
