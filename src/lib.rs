//! CodeQL action orchestration
//!
//! This crate holds the decisions a CodeQL run makes before any analysis
//! starts: which GitHub it talks to and whether that GitHub is supported,
//! which token to use, what the run mode is, and which resource flags to pass
//! to the `codeql` binary. Error and version primitives live in
//! `codeql-action-core`.

pub use codeql_action_core::{ActionError, ActionResult};

/// Core module re-exported from codeql-action-core.
pub mod core {
    pub use codeql_action_core::core::*;
    pub use codeql_action_core::*;
}

/// GitHub Actions inputs, outputs and workflow commands.
pub mod actions;

/// GitHub token resolution.
pub mod auth;

/// The external CodeQL CLI.
pub mod codeql;

/// Runner config files and action inputs.
pub mod config;

/// Dependency injection infrastructure.
pub mod di;

/// Run mode and process-wide state.
pub mod environment;

/// CodeQL resource and output flags.
pub mod flags;

/// GitHub URL, variant and version handling.
pub mod github;

/// Logger implementations.
pub mod logging;

/// SARIF helpers.
pub mod sarif;
