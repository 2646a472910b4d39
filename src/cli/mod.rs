//! Command-line interface

pub mod args;
pub mod commands;
mod context;

pub use args::{AppendArgs, Cli, Commands, InputArgs, OutputFormat};
pub use context::Context;
