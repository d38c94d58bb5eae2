//! Data models for the extension loader.
//!
//! - [`ExtensionList`]: VS Code extension identifiers from the `extensions` key of `vscode.yml`
//! - [`JetBrainsConfig`]: per-product IDE settings from the `jetbrains` key of `jetbrains.yml`
//!
//! Both are read fresh from disk on every run and never written back.

pub mod extensions;
pub mod jetbrains;

pub use extensions::ExtensionList;
pub use jetbrains::{INTELLIJ, JetBrainsConfig};
