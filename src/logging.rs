//! Logger implementations
//!
//! Diagnostics use `tracing` directly. Advisories that the user should see
//! go through [`Logger`], which in GitHub Actions renders warnings as
//! workflow commands so they show up as annotations.

use crate::actions::escape_data;
use crate::di::Logger;

/// Logger forwarding to `tracing` events
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        tracing::info!("{}", message);
    }

    fn warning(&self, message: &str) {
        tracing::warn!("{}", message);
    }
}

/// Logger writing GitHub Actions workflow commands to stdout
#[derive(Debug, Default, Clone, Copy)]
pub struct ActionsLogger;

impl ActionsLogger {
    /// Render a warning annotation
    pub fn warning_command(message: &str) -> String {
        format!("::warning::{}", escape_data(message))
    }

    /// Render an error annotation
    pub fn error_command(message: &str) -> String {
        format!("::error::{}", escape_data(message))
    }
}

impl Logger for ActionsLogger {
    fn info(&self, message: &str) {
        println!("{}", message);
    }

    fn warning(&self, message: &str) {
        println!("{}", Self::warning_command(message));
    }
}
