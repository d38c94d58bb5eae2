//! load-extensions - verifies the Gitpod extension configurations load.
//!
//! Reads `.gitpod/extensions/vscode.yml` and `.gitpod/extensions/jetbrains.yml`
//! relative to the current directory and prints:
//!
//! ```text
//! Loading extension configurations...
//! Loaded 12 VS Code extensions
//! Loaded JetBrains configuration with 4 plugins
//! ```
//!
//! A missing file is reported with a warning line and counted as empty. A file
//! that exists but cannot be parsed, or lacks its top-level key, ends the run
//! with a non-zero exit code.

use anyhow::Result;
use gitpod_extensions::logging::{LogSettings, setup_logging};
use gitpod_extensions::{APP_NAME, ConfigLoader, VERSION, services};
use std::io;

fn main() -> Result<()> {
    let _guard = setup_logging(&LogSettings::default())?;

    tracing::info!("Starting {} v{}", APP_NAME, VERSION);

    let loader = ConfigLoader::default();
    let mut stdout = io::stdout().lock();
    services::run(&loader, &mut stdout)?;

    Ok(())
}
