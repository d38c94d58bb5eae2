use crate::config::ConfigLoader;
use anyhow::{Context, Result};
use std::fmt;
use std::io::Write;

/// First line of every report
pub const STARTUP_NOTICE: &str = "Loading extension configurations...";

/// Counts derived from the loaded configurations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub extension_count: usize,
    pub plugin_count: usize,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Loaded {} VS Code extensions", self.extension_count)?;
        write!(
            f,
            "Loaded JetBrains configuration with {} plugins",
            self.plugin_count
        )
    }
}

/// Load both configurations and write the report to `out`.
///
/// Missing files are reported inline as warnings and counted as empty. Any
/// other load failure stops the report and is returned to the caller.
pub fn run<W: Write>(loader: &ConfigLoader, out: &mut W) -> Result<Summary> {
    writeln!(out, "{STARTUP_NOTICE}")?;

    let extensions = loader
        .load_vscode_extensions()
        .context("Failed to load VS Code extensions")?;
    if let Some(warning) = extensions.warning() {
        writeln!(out, "{warning}")?;
    }

    let jetbrains = loader
        .load_jetbrains_config()
        .context("Failed to load JetBrains configuration")?;
    if let Some(warning) = jetbrains.warning() {
        writeln!(out, "{warning}")?;
    }

    let summary = Summary {
        extension_count: extensions.value().len(),
        plugin_count: jetbrains.value().intellij_plugin_count(),
    };
    tracing::info!(
        "Loaded {} extensions and {} IntelliJ plugins",
        summary.extension_count,
        summary.plugin_count
    );

    writeln!(out, "{summary}")?;
    out.flush()?;
    Ok(summary)
}
