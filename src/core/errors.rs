//! Shared error types for the application

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for gidl operations
///
/// Only failures that stop a run end up here. Problems with individual
/// declarations are collected as warnings on the model instead.
#[derive(Debug, Error)]
pub enum Error {
    /// The frontend could not load or resolve the requested package
    #[error("failed to load package {package}: {source}")]
    PackageLoad {
        package: String,
        #[source]
        source: FrontendError,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// TOML errors
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

/// Errors raised by a [`Frontend`](crate::frontend::Frontend) while loading a package
#[derive(Debug, Error)]
pub enum FrontendError {
    #[error("no resolved package document found (searched {})", display_paths(.searched))]
    NotFound { searched: Vec<PathBuf> },

    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid package document {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid package document {}: {source}", .path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("document describes package {found}, expected {expected}")]
    PackageMismatch { expected: String, found: String },
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl Error {
    /// Create a configuration error with path context
    pub fn config(message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::Config {
            message: message.into(),
            path,
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
