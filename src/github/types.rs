//! GitHub API type definitions

use std::fmt;

/// Connection details for the GitHub instance the run reports to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitHubApiDetails {
    /// Server URL as supplied by the user or `GITHUB_SERVER_URL`
    pub url: String,
    /// Token used for API requests
    pub auth: String,
    /// Token used to fetch queries from external repositories
    pub external_repo_auth: Option<String>,
}

impl GitHubApiDetails {
    pub fn new(url: impl Into<String>, auth: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            auth: auth.into(),
            external_repo_auth: None,
        }
    }
}

/// GitHub product variant, without version information
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GitHubVariant {
    Dotcom,
    Ghes,
    Ghae,
}

impl fmt::Display for GitHubVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GitHubVariant::Dotcom => write!(f, "GitHub.com"),
            GitHubVariant::Ghes => write!(f, "GitHub Enterprise Server"),
            GitHubVariant::Ghae => write!(f, "GitHub AE"),
        }
    }
}

/// GitHub product variant, with the installed version for GHES
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitHubVersion {
    Dotcom,
    Ghae,
    Ghes { version: String },
}

impl GitHubVersion {
    pub fn variant(&self) -> GitHubVariant {
        match self {
            GitHubVersion::Dotcom => GitHubVariant::Dotcom,
            GitHubVersion::Ghae => GitHubVariant::Ghae,
            GitHubVersion::Ghes { .. } => GitHubVariant::Ghes,
        }
    }
}

impl fmt::Display for GitHubVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GitHubVersion::Ghes { version } => write!(f, "GitHub Enterprise Server {}", version),
            other => write!(f, "{}", other.variant()),
        }
    }
}
