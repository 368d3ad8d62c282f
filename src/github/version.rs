//! GitHub product variant detection and GHES compatibility checks

use crate::core::version::satisfies;
use crate::core::ActionResult;
use crate::di::MetaClient;
use crate::github::types::{GitHubApiDetails, GitHubVersion};
use crate::github::url::{parse_github_url, GITHUB_DOTCOM_URL};

/// Response header carrying the GHES version
pub const GITHUB_ENTERPRISE_VERSION_HEADER: &str = "x-github-enterprise-version";

/// Value of [`GITHUB_ENTERPRISE_VERSION_HEADER`] sent by GitHub AE
pub const GITHUB_AE_SENTINEL: &str = "GitHub AE";

/// Inclusive range of GHES versions a release of this tool supports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompatibilityRange {
    pub minimum_version: &'static str,
    pub maximum_version: &'static str,
}

/// GHES versions supported by this release
pub const API_COMPATIBILITY: CompatibilityRange = CompatibilityRange {
    minimum_version: "2.22",
    maximum_version: "3.2",
};

/// Why a GHES version falls outside the supported range.
///
/// Named from the point of view of this tool, not the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisallowedApiVersionReason {
    /// The server is newer than the maximum supported version
    ActionTooOld,
    /// The server is older than the minimum supported version
    ActionTooNew,
}

/// Determine which GitHub product the run talks to.
///
/// github.com is recognised from the URL alone and never costs a request.
/// Everything else is decided by the enterprise version header on the meta
/// endpoint; a missing header means the server behaves like github.com.
pub async fn get_github_version(
    details: &GitHubApiDetails,
    client: &dyn MetaClient,
) -> ActionResult<GitHubVersion> {
    if parse_github_url(&details.url)? == GITHUB_DOTCOM_URL {
        return Ok(GitHubVersion::Dotcom);
    }

    let headers = client.fetch_meta_headers(details).await?;

    let version = match headers.get(GITHUB_ENTERPRISE_VERSION_HEADER) {
        None => GitHubVersion::Dotcom,
        Some(value) if value == GITHUB_AE_SENTINEL => GitHubVersion::Ghae,
        Some(value) => GitHubVersion::Ghes {
            version: value.clone(),
        },
    };
    tracing::debug!("Detected {}", version);

    Ok(version)
}

/// Check `version` against `[minimum_version, maximum_version]`.
///
/// Returns `None` when the version is supported. A version that cannot be
/// parsed fails the lower bound.
pub fn api_version_in_range(
    version: &str,
    minimum_version: &str,
    maximum_version: &str,
) -> ActionResult<Option<DisallowedApiVersionReason>> {
    // Partial versions such as "3.1" are coerced to "3.1.0" and checked like
    // any other. A strict semver check would treat them as invalid and report
    // ActionTooNew instead.
    if !satisfies(version, &format!(">={}", minimum_version))? {
        return Ok(Some(DisallowedApiVersionReason::ActionTooNew));
    }
    if !satisfies(version, &format!("<={}", maximum_version))? {
        return Ok(Some(DisallowedApiVersionReason::ActionTooOld));
    }
    Ok(None)
}

/// Warning text for an unsupported GHES version, `tool_name` being a display
/// label such as `Action` or `Runner`.
pub fn incompatibility_message(
    reason: DisallowedApiVersionReason,
    ghes_version: &str,
    tool_name: &str,
) -> String {
    match reason {
        DisallowedApiVersionReason::ActionTooOld => format!(
            "The CodeQL {tool} version you are using is too old to be compatible with GitHub Enterprise {ghes}. \
             If you experience issues, please upgrade to a more recent version of the CodeQL {tool}.",
            tool = tool_name,
            ghes = ghes_version
        ),
        DisallowedApiVersionReason::ActionTooNew => format!(
            "GitHub Enterprise {ghes} is too old to be compatible with this version of the CodeQL {tool}. \
             If you experience issues, please upgrade to a more recent version of GitHub Enterprise \
             or use an older version of the CodeQL {tool}.",
            tool = tool_name,
            ghes = ghes_version
        ),
    }
}
