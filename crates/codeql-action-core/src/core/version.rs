use crate::core::error::{ActionError, ActionResult};
use semver::{Version, VersionReq};

/// Parse a version string, filling in a missing minor or patch component.
///
/// GitHub Enterprise reports versions such as `3.1.0`, but short forms like
/// `3.1` show up in configuration and are treated as `3.1.0`. A leading `v`
/// or `=` is ignored. Returns `None` for anything that is not a dotted
/// numeric version or a full semantic version.
pub fn coerce_version(input: &str) -> Option<Version> {
    let trimmed = input.trim().trim_start_matches(['v', '=']);

    if let Ok(version) = Version::parse(trimmed) {
        return Some(version);
    }

    let mut parts = trimmed.split('.');
    let major = parts.next()?.parse().ok()?;
    let minor = match parts.next() {
        Some(part) => part.parse().ok()?,
        None => 0,
    };
    let patch = match parts.next() {
        Some(part) => part.parse().ok()?,
        None => 0,
    };
    if parts.next().is_some() {
        return None;
    }

    Some(Version::new(major, minor, patch))
}

/// Parse a version requirement such as `>=2.22` or `<=3.2`.
///
/// Partial bounds follow the usual semver rules: `<=3.2` admits every `3.2.x`.
pub fn parse_requirement(requirement: &str) -> ActionResult<VersionReq> {
    VersionReq::parse(requirement).map_err(|e| {
        ActionError::Version(format!(
            "Invalid version requirement '{}': {}",
            requirement, e
        ))
    })
}

/// Check whether `version` satisfies `requirement`.
///
/// A version that cannot be coerced never satisfies anything.
pub fn satisfies(version: &str, requirement: &str) -> ActionResult<bool> {
    let requirement = parse_requirement(requirement)?;
    Ok(coerce_version(version).is_some_and(|v| requirement.matches(&v)))
}

/// `version >= minimum`, both parsed leniently.
pub fn version_at_least(version: &str, minimum: &str) -> ActionResult<bool> {
    let version = coerce_version(version)
        .ok_or_else(|| ActionError::Version(format!("Invalid version '{}'", version)))?;
    let minimum = coerce_version(minimum)
        .ok_or_else(|| ActionError::Version(format!("Invalid version '{}'", minimum)))?;
    Ok(version >= minimum)
}
