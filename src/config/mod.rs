use crate::models::{ExtensionList, JetBrainsConfig};
use camino::{Utf8Path, Utf8PathBuf};
use serde::de::DeserializeOwned;
use serde_yaml_ng::Value;
use std::fs;
use std::io;
use thiserror::Error;

/// Default location of the VS Code extension list, relative to the workspace root
pub const VSCODE_FILE: &str = ".gitpod/extensions/vscode.yml";

/// Default location of the JetBrains configuration, relative to the workspace root
pub const JETBRAINS_FILE: &str = ".gitpod/extensions/jetbrains.yml";

/// Errors that can occur while loading a configuration section.
///
/// A missing file is not an error; see [`LoadOutcome::Defaulted`].
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read {path}")]
    Read {
        path: Utf8PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse YAML in {path}")]
    Parse {
        path: Utf8PathBuf,
        #[source]
        source: serde_yaml_ng::Error,
    },

    #[error("Top level of {path} is not a mapping")]
    NotAMapping { path: Utf8PathBuf },

    #[error("Key `{key}` not found in {path}")]
    MissingKey { path: Utf8PathBuf, key: &'static str },

    #[error("Unexpected value for `{key}` in {path}")]
    InvalidSection {
        path: Utf8PathBuf,
        key: &'static str,
        #[source]
        source: serde_yaml_ng::Error,
    },
}

/// Result of a successful load: either the section read from disk, or the
/// default that stood in for a missing file.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome<T> {
    Loaded(T),
    Defaulted { value: T, warning: String },
}

impl<T> LoadOutcome<T> {
    pub fn value(&self) -> &T {
        match self {
            Self::Loaded(value) | Self::Defaulted { value, .. } => value,
        }
    }

    pub fn into_value(self) -> T {
        match self {
            Self::Loaded(value) | Self::Defaulted { value, .. } => value,
        }
    }

    /// Warning to show the user, present only when the file was missing
    pub fn warning(&self) -> Option<&str> {
        match self {
            Self::Loaded(_) => None,
            Self::Defaulted { warning, .. } => Some(warning),
        }
    }

    pub fn is_defaulted(&self) -> bool {
        matches!(self, Self::Defaulted { .. })
    }
}

/// One optional YAML file and the top-level key to pull out of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigSource {
    pub path: Utf8PathBuf,
    pub key: &'static str,
    /// Human-readable name used in the missing-file warning
    pub label: &'static str,
}

impl ConfigSource {
    pub fn new<P: AsRef<Utf8Path>>(path: P, key: &'static str, label: &'static str) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            key,
            label,
        }
    }

    pub fn missing_warning(&self) -> String {
        format!("Warning: {} file not found", self.label)
    }

    /// Load the section stored under `self.key`, or `T::default()` if the file does not exist.
    ///
    /// # Errors
    /// Any I/O failure other than not-found, invalid YAML, a non-mapping document,
    /// a missing key, or a section that does not deserialize into `T`.
    pub fn load<T>(&self) -> Result<LoadOutcome<T>, LoadError>
    where
        T: DeserializeOwned + Default,
    {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::warn!("{} file not found at {}, using defaults", self.label, self.path);
                return Ok(LoadOutcome::Defaulted {
                    value: T::default(),
                    warning: self.missing_warning(),
                });
            }
            Err(source) => {
                return Err(LoadError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let document: Value =
            serde_yaml_ng::from_str(&contents).map_err(|source| LoadError::Parse {
                path: self.path.clone(),
                source,
            })?;

        let section = document
            .as_mapping()
            .ok_or_else(|| LoadError::NotAMapping {
                path: self.path.clone(),
            })?
            .get(self.key)
            .ok_or_else(|| LoadError::MissingKey {
                path: self.path.clone(),
                key: self.key,
            })?;

        let value = serde_yaml_ng::from_value(section.clone()).map_err(|source| {
            LoadError::InvalidSection {
                path: self.path.clone(),
                key: self.key,
                source,
            }
        })?;

        tracing::debug!("Loaded `{}` from {}", self.key, self.path);
        Ok(LoadOutcome::Loaded(value))
    }
}

/// Where to find the two configuration fragments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderSettings {
    /// Directory the file paths are resolved against
    pub root: Utf8PathBuf,
    pub vscode_file: Utf8PathBuf,
    pub jetbrains_file: Utf8PathBuf,
}

impl Default for LoaderSettings {
    fn default() -> Self {
        Self {
            root: Utf8PathBuf::from("."),
            vscode_file: Utf8PathBuf::from(VSCODE_FILE),
            jetbrains_file: Utf8PathBuf::from(JETBRAINS_FILE),
        }
    }
}

/// Loads the VS Code and JetBrains extension configurations.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    vscode: ConfigSource,
    jetbrains: ConfigSource,
}

impl ConfigLoader {
    pub fn new(settings: &LoaderSettings) -> Self {
        Self {
            vscode: ConfigSource::new(
                settings.root.join(&settings.vscode_file),
                "extensions",
                "VS Code extensions",
            ),
            jetbrains: ConfigSource::new(
                settings.root.join(&settings.jetbrains_file),
                "jetbrains",
                "JetBrains configuration",
            ),
        }
    }

    /// Loader using the default file locations under `root`
    pub fn with_root<P: AsRef<Utf8Path>>(root: P) -> Self {
        Self::new(&LoaderSettings {
            root: root.as_ref().to_path_buf(),
            ..LoaderSettings::default()
        })
    }

    /// Load the VS Code extension list.
    ///
    /// # Returns
    /// The `extensions` list, or an empty list if the file doesn't exist
    pub fn load_vscode_extensions(&self) -> Result<LoadOutcome<ExtensionList>, LoadError> {
        self.vscode.load()
    }

    /// Load the JetBrains configuration.
    ///
    /// # Returns
    /// The `jetbrains` mapping, or an empty mapping if the file doesn't exist
    pub fn load_jetbrains_config(&self) -> Result<LoadOutcome<JetBrainsConfig>, LoadError> {
        self.jetbrains.load()
    }

    pub fn vscode_source(&self) -> &ConfigSource {
        &self.vscode
    }

    pub fn jetbrains_source(&self) -> &ConfigSource {
        &self.jetbrains
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new(&LoaderSettings::default())
    }
}
