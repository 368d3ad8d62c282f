//! GitHub token resolution
//!
//! A token may come from the `--github-auth` argument, from standard input
//! (`--github-auth-stdin`), or from the `GITHUB_TOKEN` environment variable,
//! in that order of precedence.

use crate::core::{ActionError, ActionResult};
use crate::di::{EnvStore, Logger};
use tokio::io::{AsyncRead, AsyncReadExt};

/// Environment variable consulted when no token is passed explicitly
pub const GITHUB_TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";

const INSECURE_AUTH_WARNING: &str =
    "Using `--github-auth` via the CLI is insecure. Use `--github-auth-stdin` instead.";

/// Resolve the GitHub token from the supplied sources.
///
/// Passing both an explicit token and `from_stdin` is an error. An explicit
/// token is accepted with a warning, since it is visible in the process list.
/// When reading `readable`, the first whitespace-delimited word is the token.
pub async fn get_github_auth<R>(
    logger: &dyn Logger,
    github_auth: Option<&str>,
    from_stdin: bool,
    mut readable: R,
    env: &dyn EnvStore,
) -> ActionResult<String>
where
    R: AsyncRead + Unpin,
{
    let github_auth = github_auth.filter(|token| !token.is_empty());

    if github_auth.is_some() && from_stdin {
        return Err(ActionError::ConflictingAuthSources);
    }

    if let Some(token) = github_auth {
        logger.warning(INSECURE_AUTH_WARNING);
        return Ok(token.to_string());
    }

    if from_stdin {
        let mut buffer = Vec::new();
        readable.read_to_end(&mut buffer).await?;
        let input = String::from_utf8_lossy(&buffer);
        return match input.split_whitespace().next() {
            Some(token) => Ok(token.to_string()),
            None => Err(ActionError::EmptyInput),
        };
    }

    match env.get(GITHUB_TOKEN_ENV_VAR) {
        Some(token) if !token.is_empty() => Ok(token),
        _ => Err(ActionError::NoAuthProvided),
    }
}
