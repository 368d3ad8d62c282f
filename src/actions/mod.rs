//! GitHub Actions runner protocol: inputs, outputs and exported variables
//!
//! Inputs arrive as `INPUT_<NAME>` environment variables. Outputs and
//! exported variables are appended to the files named by `GITHUB_OUTPUT`
//! and `GITHUB_ENV` using the multi-line `name<<DELIMITER` syntax.

use crate::core::{ActionError, ActionResult};
use crate::di::EnvStore;
use std::io::Write;
use std::path::Path;

/// Delimiter for multi-line file command entries
const FILE_COMMAND_DELIMITER: &str = "CODEQL_ACTION_EOF";

/// Environment variable naming the file that collects exported variables
pub const GITHUB_ENV: &str = "GITHUB_ENV";

/// Environment variable naming the file that collects step outputs
pub const GITHUB_OUTPUT: &str = "GITHUB_OUTPUT";

fn input_env_name(name: &str) -> String {
    format!("INPUT_{}", name.replace(' ', "_").to_uppercase())
}

/// Read an action input. Unset or blank inputs are `None`.
pub fn get_optional_input(env: &dyn EnvStore, name: &str) -> Option<String> {
    env.get(&input_env_name(name))
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Read an action input that the workflow must supply
pub fn get_required_input(env: &dyn EnvStore, name: &str) -> ActionResult<String> {
    get_optional_input(env, name).ok_or_else(|| ActionError::MissingInput(name.to_string()))
}

/// Append `name<<DELIM\nvalue\nDELIM` to a runner file command file
pub fn append_file_command(path: &Path, name: &str, value: &str) -> ActionResult<()> {
    if name.contains(FILE_COMMAND_DELIMITER) || value.contains(FILE_COMMAND_DELIMITER) {
        return Err(ActionError::InvalidInput(format!(
            "Unexpected input: name or value contains the delimiter {}",
            FILE_COMMAND_DELIMITER
        )));
    }

    let mut file = std::fs::OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)?;

    writeln!(file, "{}<<{}", name, FILE_COMMAND_DELIMITER)?;
    writeln!(file, "{}", value)?;
    writeln!(file, "{}", FILE_COMMAND_DELIMITER)?;

    Ok(())
}

/// Set a step output, falling back to the legacy stdout command when
/// `GITHUB_OUTPUT` is not available.
pub fn set_output(env: &dyn EnvStore, name: &str, value: &str) -> ActionResult<()> {
    match env.get(GITHUB_OUTPUT).filter(|p| !p.is_empty()) {
        Some(path) => append_file_command(Path::new(&path), name, value),
        None => {
            println!("::set-output name={}::{}", name, escape_data(value));
            Ok(())
        }
    }
}

/// Escape a message for use in a `::command::` line
pub fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}
