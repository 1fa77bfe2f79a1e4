//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};

use crate::files::{DEFAULT_EXTENSION, DEFAULT_NAMESPACE};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub processing: ProcessingConfig,
}

/// Where transcripts are read from and written to
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Root directory that transcript keys are resolved against
    #[serde(default = "default_root")]
    pub root: String,
}

pub fn default_root() -> String {
    "~/session_logs".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
        }
    }
}

/// Naming of processed output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Top-level namespace that processed records are written under
    #[serde(default = "default_namespace")]
    pub namespace: String,
    /// File extension for processed records (without the dot)
    #[serde(default = "default_extension")]
    pub extension: String,
}

pub fn default_namespace() -> String {
    DEFAULT_NAMESPACE.to_string()
}

pub fn default_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            namespace: default_namespace(),
            extension: default_extension(),
        }
    }
}

impl OutputConfig {
    /// Validate configuration values.
    ///
    /// Returns the first invalid value found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.namespace.trim().is_empty() {
            return Err(ConfigError::EmptyNamespace);
        }
        if self.namespace.starts_with('/') || self.namespace.ends_with('/') {
            return Err(ConfigError::InvalidNamespace {
                namespace: self.namespace.clone(),
            });
        }
        if self.extension.trim().is_empty() {
            return Err(ConfigError::EmptyExtension);
        }
        if self.extension.starts_with('.') || self.extension.contains('/') {
            return Err(ConfigError::InvalidExtension {
                extension: self.extension.clone(),
            });
        }
        Ok(())
    }
}

/// Batch processing settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProcessingConfig {
    /// Number of parallel workers (None = one per CPU)
    #[serde(default)]
    pub workers: Option<usize>,
}

impl ProcessingConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(0) = self.workers {
            return Err(ConfigError::ZeroWorkers);
        }
        Ok(())
    }
}

/// Invalid configuration values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("output.namespace must not be empty")]
    EmptyNamespace,

    #[error("output.namespace must not start or end with '/' (got: {namespace:?})")]
    InvalidNamespace { namespace: String },

    #[error("output.extension must not be empty")]
    EmptyExtension,

    #[error("output.extension must not start with '.' or contain '/' (got: {extension:?})")]
    InvalidExtension { extension: String },

    #[error("processing.workers must be > 0")]
    ZeroWorkers,
}
