//! CLI command implementations

pub mod append;
pub mod config;
pub mod create;
pub mod inspect;
pub mod name;
pub mod version;

pub use append::execute as append;
pub use config::execute as config;
pub use create::execute as create;
pub use inspect::execute as inspect;
pub use name::execute as name;
pub use version::execute as version;
