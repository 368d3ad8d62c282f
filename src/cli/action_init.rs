use codeql_action::actions::set_output;
use codeql_action::config::ActionInputs;
use codeql_action::core::ActionResult;
use codeql_action::di::{ConfigProvider, ServiceContainer};
use codeql_action::environment::{Mode, RunContext};
use codeql_action::flags::CodeQlFlags;
use codeql_action::github::{get_github_version, GitHubApiDetails, GITHUB_DOTCOM_URL};

/// Label used in compatibility warnings
const TOOL_NAME: &str = "Action";

pub async fn run() -> ActionResult<()> {
    let container = ServiceContainer::new(Mode::Actions)?;
    run_with(&container).await
}

/// Actions-mode start-up: read the step inputs, check the server and
/// publish the derived flags as step outputs.
pub async fn run_with(container: &ServiceContainer) -> ActionResult<()> {
    let mut context = RunContext::new(container.env.clone(), container.logger.clone());
    context.initialize_environment(Mode::Actions, env!("CARGO_PKG_VERSION"))?;

    let inputs = ActionInputs::from_env(container.env())?;
    let github_url = inputs.github_url().unwrap_or(GITHUB_DOTCOM_URL);

    let details = GitHubApiDetails::new(github_url, inputs.token.as_str());
    let github_version = get_github_version(&details, container.meta_client()).await?;
    context.check_github_version_in_range(&github_version, TOOL_NAME)?;

    let flags = CodeQlFlags::derive(&inputs, container.env(), container.logger(), container.system())?;

    let env = container.env();
    set_output(env, "ram", &flags.ram)?;
    set_output(env, "threads", &flags.threads)?;
    set_output(env, "add-snippets", &flags.add_snippets)?;
    set_output(env, "extra-options", &flags.extra_options.to_string())?;
    set_output(env, "github-variant", &github_version.variant().to_string())?;

    Ok(())
}
