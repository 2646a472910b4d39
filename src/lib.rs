//! buildx-setup - multi-node buildx builder arguments
//!
//! Turns declarative builder inputs into the `docker buildx` argument lists
//! for `create`, `create --append` and `inspect`, gating flags on the
//! installed buildx version, and rewrites buildkitd configs so a local
//! registry is trusted over plain HTTP.

pub mod buildkitd;
pub mod builder;
pub mod cli;
pub mod config;
pub mod error;
pub mod inputs;
pub mod toolkit;
pub mod version;

pub use error::{SetupError, SetupResult};
