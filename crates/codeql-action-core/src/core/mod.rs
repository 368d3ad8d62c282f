pub mod error;
pub mod version;

pub use error::{ActionError, ActionResult};
