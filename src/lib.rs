// gitpod-extensions - Loads and summarizes Gitpod extension configurations
//
// This is the library crate containing the loaders and data structures.
// The binary crate (main.rs) prints the summary report.

pub mod config;
pub mod logging;
pub mod models;
pub mod services;

// Re-export commonly used types for convenience
pub use config::{ConfigLoader, ConfigSource, LoadError, LoadOutcome, LoaderSettings};
pub use models::{ExtensionList, JetBrainsConfig};
pub use services::Summary;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
