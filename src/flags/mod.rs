//! CodeQL CLI flags derived from user settings
//!
//! Each function validates one setting and renders one flag. Settings come
//! in as the raw strings the user typed (action inputs or command-line
//! arguments), so validation errors quote them back.

pub mod system;

pub use system::HostSystem;

use crate::core::{ActionError, ActionResult};
use crate::di::{ConfigProvider, EnvStore, Logger, SystemResources};
use serde::Serialize;
use serde_json::Value;
use std::num::IntErrorKind;

/// Environment variable holding extra CodeQL options as JSON
pub const EXTRA_OPTIONS_ENV_VAR: &str = "CODEQL_ACTION_EXTRA_OPTIONS";

/// Memory in MB held back for the OS when `--ram` is derived
const BASE_RESERVED_MEMORY_MB: f64 = 1024.0;

/// Memory (MB) to reserve for OS processes when the user gives no setting.
///
/// Windows needs more. Committing all memory to CodeQL risks the OOM
/// killer (exit code 137).
pub fn system_reserved_memory_megabytes(windows: bool) -> f64 {
    BASE_RESERVED_MEMORY_MB * if windows { 1.5 } else { 1.0 }
}

/// Get the `--ram` flag for a user setting in megabytes.
///
/// Without a setting, all physical memory minus the OS reservation is used.
pub fn get_memory_flag(
    user_input: Option<&str>,
    system: &dyn SystemResources,
) -> ActionResult<String> {
    let megabytes = match user_input.filter(|input| !input.is_empty()) {
        Some(input) => {
            let invalid =
                || ActionError::InvalidInput(format!("Invalid RAM setting \"{}\", specified.", input));
            let value: f64 = input.trim().parse().map_err(|_| invalid())?;
            if !value.is_finite() || value <= 0.0 {
                return Err(invalid());
            }
            value
        }
        None => {
            let total_megabytes = system.total_memory_bytes() as f64 / (1024.0 * 1024.0);
            total_megabytes - system_reserved_memory_megabytes(cfg!(windows))
        }
    };

    Ok(format!("--ram={}", megabytes.floor() as i64))
}

/// Get the `--threads` flag for a user setting.
///
/// The value is clamped to the number of logical CPUs. Negative values
/// leave that many CPUs free and are clamped the same way. Without a
/// setting all CPUs are used.
pub fn get_threads_flag(
    user_input: Option<&str>,
    logger: &dyn Logger,
    system: &dyn SystemResources,
) -> ActionResult<String> {
    let max_threads = system.logical_cpus() as i64;

    let threads = match user_input.filter(|input| !input.is_empty()) {
        Some(input) => {
            let mut threads = parse_thread_count(input.trim()).ok_or_else(|| {
                ActionError::InvalidInput(format!("Invalid threads setting \"{}\", specified.", input))
            })?;

            if threads > max_threads {
                logger.info(&format!(
                    "Clamping desired number of threads ({}) to max available ({}).",
                    threads, max_threads
                ));
                threads = max_threads;
            }

            let min_threads = -max_threads;
            if threads < min_threads {
                logger.info(&format!(
                    "Clamping desired number of free threads ({}) to max available ({}).",
                    threads, min_threads
                ));
                threads = min_threads;
            }

            threads
        }
        None => max_threads,
    };

    Ok(format!("--threads={}", threads))
}

/// Parse a thread count. Out-of-range integers saturate so they clamp like any
/// other large value. Whole numbers in float notation (`1e3`) are accepted.
fn parse_thread_count(input: &str) -> Option<i64> {
    match input.parse::<i64>() {
        Ok(threads) => Some(threads),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _ => {
                let value: f64 = input.parse().ok()?;
                // `as` saturates at the i64 bounds
                (value.is_finite() && value.fract() == 0.0).then_some(value as i64)
            }
        },
    }
}

/// A setting that may be a real boolean or the text of an input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoolInput<'a> {
    Bool(bool),
    Str(&'a str),
}

impl BoolInput<'_> {
    /// Only the text `true` (any case) counts as true
    pub fn is_true(&self) -> bool {
        match self {
            BoolInput::Bool(value) => *value,
            BoolInput::Str(text) => text.eq_ignore_ascii_case("true"),
        }
    }
}

impl From<bool> for BoolInput<'_> {
    fn from(value: bool) -> Self {
        BoolInput::Bool(value)
    }
}

impl<'a> From<&'a str> for BoolInput<'a> {
    fn from(value: &'a str) -> Self {
        BoolInput::Str(value)
    }
}

impl<'a> From<Option<&'a str>> for BoolInput<'a> {
    fn from(value: Option<&'a str>) -> Self {
        value.map_or(BoolInput::Bool(false), BoolInput::Str)
    }
}

/// Get the flag controlling code snippets in SARIF output
pub fn get_add_snippets_flag<'a>(user_input: impl Into<BoolInput<'a>>) -> &'static str {
    if user_input.into().is_true() {
        "--sarif-add-snippets"
    } else {
        "--no-sarif-add-snippets"
    }
}

/// Get the extra options for CodeQL commands from
/// `CODEQL_ACTION_EXTRA_OPTIONS`. Unset or empty means no extra options.
pub fn get_extra_options_env_param(env: &dyn EnvStore) -> ActionResult<Value> {
    let raw = match env.get(EXTRA_OPTIONS_ENV_VAR) {
        Some(raw) if !raw.is_empty() => raw,
        _ => return Ok(Value::Object(serde_json::Map::new())),
    };

    serde_json::from_str(&raw).map_err(|e| {
        ActionError::ConfigParse(format!(
            "{} environment variable is set, but does not contain valid JSON: {}",
            EXTRA_OPTIONS_ENV_VAR, e
        ))
    })
}

/// Every flag derived for one CodeQL invocation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CodeQlFlags {
    pub ram: String,
    pub threads: String,
    pub add_snippets: String,
    pub extra_options: Value,
}

impl CodeQlFlags {
    /// Derive all flags from a configuration source
    pub fn derive(
        config: &dyn ConfigProvider,
        env: &dyn EnvStore,
        logger: &dyn Logger,
        system: &dyn SystemResources,
    ) -> ActionResult<Self> {
        Ok(Self {
            ram: get_memory_flag(config.ram(), system)?,
            threads: get_threads_flag(config.threads(), logger, system)?,
            add_snippets: get_add_snippets_flag(config.add_snippets()).to_string(),
            extra_options: get_extra_options_env_param(env)?,
        })
    }

    /// The command-line flags, in the order CodeQL receives them
    pub fn args(&self) -> Vec<&str> {
        vec![
            self.ram.as_str(),
            self.threads.as_str(),
            self.add_snippets.as_str(),
        ]
    }
}
