//! Canonical forms of user-supplied GitHub URLs

use crate::core::{ActionError, ActionResult};
use url::Url;

/// The URL for github.com
pub const GITHUB_DOTCOM_URL: &str = "https://github.com";

/// The REST API root for github.com
pub const GITHUB_DOTCOM_API_URL: &str = "https://api.github.com";

/// Parses user input of a github.com or GHES URL to a canonical form.
///
/// Any API prefix (`api.` subdomain) or suffix (`/api/v3` path) is removed,
/// and the path always ends with a slash. Anything pointing at github.com
/// collapses to [`GITHUB_DOTCOM_URL`].
pub fn parse_github_url(input: &str) -> ActionResult<String> {
    let with_scheme = if input.contains("://") {
        input.to_string()
    } else {
        format!("https://{}", input)
    };

    if !with_scheme.starts_with("http://") && !with_scheme.starts_with("https://") {
        return Err(ActionError::InvalidUrl(format!(
            "\"{}\" is not a http or https URL",
            input
        )));
    }

    let mut url = Url::parse(&with_scheme)
        .map_err(|_| ActionError::InvalidUrl(format!("\"{}\" is not a valid URL", input)))?;

    let host = url.host_str().unwrap_or_default().to_string();
    if host == "github.com" || host == "api.github.com" {
        return Ok(GITHUB_DOTCOM_URL.to_string());
    }

    if let Some(index) = url.path().find("/api/v3") {
        let trimmed = url.path()[..index].to_string();
        url.set_path(&trimmed);
    }

    // Subdomain isolation on GHES puts the API on api.<host>
    if let Some(stripped) = host.strip_prefix("api.") {
        url.set_host(Some(stripped))
            .map_err(|_| ActionError::InvalidUrl(format!("\"{}\" is not a valid URL", input)))?;
    }

    if !url.path().ends_with('/') {
        let with_slash = format!("{}/", url.path());
        url.set_path(&with_slash);
    }

    Ok(url.to_string())
}

/// Whether `input` canonicalizes to github.com
pub fn is_dotcom(input: &str) -> ActionResult<bool> {
    Ok(parse_github_url(input)? == GITHUB_DOTCOM_URL)
}

/// REST API root for a canonical GitHub URL
///
/// github.com serves its API from a separate host; GHES serves it under
/// `/api/v3` on the instance itself.
pub fn api_url_for(canonical_url: &str) -> String {
    if canonical_url == GITHUB_DOTCOM_URL {
        GITHUB_DOTCOM_API_URL.to_string()
    } else {
        format!("{}api/v3", canonical_url)
    }
}
