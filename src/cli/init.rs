use super::FlagOptions;
use codeql_action::auth::get_github_auth;
use codeql_action::codeql::CodeQl;
use codeql_action::core::{ActionError, ActionResult};
use codeql_action::di::{CodeQlCli, ConfigProvider, ServiceContainer};
use codeql_action::environment::{Mode, RunContext};
use codeql_action::flags::CodeQlFlags;
use codeql_action::github::{get_github_version, parse_github_url, GitHubApiDetails, GitHubVersion};
use tokio::io::AsyncRead;

/// Label used in compatibility warnings
const TOOL_NAME: &str = "Runner";

pub struct InitOptions {
    pub github_url: Option<String>,
    pub github_auth: Option<String>,
    pub github_auth_stdin: bool,
    pub flags: FlagOptions,
}

/// What a successful init determined
#[derive(Debug)]
pub struct InitOutcome {
    pub github_version: GitHubVersion,
    pub flags: CodeQlFlags,
}

pub async fn run(options: InitOptions) -> ActionResult<()> {
    let container = ServiceContainer::new(Mode::Runner)?;
    let config = options.flags.resolve(options.github_url.clone())?;

    let outcome = run_with(&container, &options, &config, tokio::io::stdin()).await?;

    if let Some(path) = config.codeql_path() {
        let version = CodeQl::from_path(Some(path)).get_version().await?;
        container.logger().info(&format!("Using CodeQL {}", version));
    }

    container
        .logger()
        .info(&format!("Detected {}", outcome.github_version));
    for flag in outcome.flags.args() {
        println!("{}", flag);
    }

    Ok(())
}

/// Runner-mode start-up against the given services
pub async fn run_with<R>(
    container: &ServiceContainer,
    options: &InitOptions,
    config: &dyn ConfigProvider,
    stdin: R,
) -> ActionResult<InitOutcome>
where
    R: AsyncRead + Unpin,
{
    let mut context = RunContext::new(container.env.clone(), container.logger.clone());
    context.initialize_environment(Mode::Runner, env!("CARGO_PKG_VERSION"))?;

    let github_url = config
        .github_url()
        .ok_or_else(|| ActionError::Config("--github-url must be specified".to_string()))?;
    let github_url = parse_github_url(github_url)?;

    let auth = get_github_auth(
        container.logger(),
        options.github_auth.as_deref(),
        options.github_auth_stdin,
        stdin,
        container.env(),
    )
    .await?;

    let details = GitHubApiDetails::new(github_url, auth);
    let github_version = get_github_version(&details, container.meta_client()).await?;
    context.check_github_version_in_range(&github_version, TOOL_NAME)?;

    let flags = CodeQlFlags::derive(config, container.env(), container.logger(), container.system())?;

    Ok(InitOutcome {
        github_version,
        flags,
    })
}
