//! Buildx builder arguments
//!
//! - `args`: version-gated argv for create, append and inspect
//! - `identity`: builder name resolution

mod args;
mod identity;

pub use args::{ArgsBuilder, DEFAULT_BUILDKITD_FLAGS};
pub use identity::{resolve_builder_name, BUILDER_NAME_PREFIX};
