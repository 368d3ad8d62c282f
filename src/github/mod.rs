//! GitHub instance handling
//!
//! This module provides functionality for:
//! - Canonicalising user-supplied GitHub URLs
//! - Detecting github.com, GHES and GitHub AE from the meta endpoint
//! - Checking a GHES version against the supported range

pub mod client;
pub mod types;
pub mod url;
pub mod version;

pub use client::GitHubMetaClient;
pub use types::{GitHubApiDetails, GitHubVariant, GitHubVersion};
pub use url::{parse_github_url, GITHUB_DOTCOM_URL};
pub use version::{
    api_version_in_range, get_github_version, CompatibilityRange, DisallowedApiVersionReason,
    API_COMPATIBILITY,
};
