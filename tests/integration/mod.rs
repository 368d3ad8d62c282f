//! Integration tests module
//!
//! This module contains all integration tests for codeql-runner commands.

pub mod action_init;
pub mod common;
pub mod flags;
pub mod init;
