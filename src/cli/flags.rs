use super::FlagOptions;
use codeql_action::core::{ActionError, ActionResult};
use codeql_action::di::ServiceContainer;
use codeql_action::environment::Mode;
use codeql_action::flags::CodeQlFlags;

pub fn run(options: FlagOptions, json: bool) -> ActionResult<()> {
    let container = ServiceContainer::new(Mode::Runner)?;
    let config = options.resolve(None)?;

    let flags = CodeQlFlags::derive(&config, container.env(), container.logger(), container.system())?;
    println!("{}", render(&flags, json)?);

    Ok(())
}

/// Flags one per line, or the full set as JSON
pub fn render(flags: &CodeQlFlags, json: bool) -> ActionResult<String> {
    if json {
        return serde_json::to_string_pretty(flags).map_err(ActionError::from);
    }
    Ok(flags.args().join("\n"))
}
