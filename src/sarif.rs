//! Tool names in SARIF output

use crate::core::ActionResult;
use serde_json::Value;

/// Unique names of the tools that produced a SARIF log, in first-seen order.
///
/// Runs without a non-empty `tool.driver.name` are skipped.
pub fn get_tool_names(sarif_contents: &str) -> ActionResult<Vec<String>> {
    let sarif: Value = serde_json::from_str(sarif_contents)?;

    let mut names: Vec<String> = Vec::new();
    let runs = sarif
        .get("runs")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();

    for run in runs {
        let name = run
            .pointer("/tool/driver/name")
            .and_then(Value::as_str)
            .filter(|name| !name.is_empty());
        if let Some(name) = name {
            if !names.iter().any(|n| n == name) {
                names.push(name.to_string());
            }
        }
    }

    Ok(names)
}
