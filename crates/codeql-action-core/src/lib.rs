//! Core types shared by the CodeQL action runner: the error taxonomy and
//! lenient semantic-version helpers.

pub mod core;

pub use core::error::{ActionError, ActionResult};
pub use core::version::{coerce_version, satisfies, version_at_least};
