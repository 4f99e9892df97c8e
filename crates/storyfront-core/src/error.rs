//! Error types for the Storyfront core library.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using `CoreError`.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error types for Storyfront.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration loading or parsing error.
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Route table violates the catch-all invariant.
    #[error("Invalid route table: {0}")]
    RouteTable(String),

    /// A content block references a component that was never registered.
    #[error("Unknown component: {name}")]
    UnknownComponent { name: String },

    /// Mount attempted before the CMS plugin was installed.
    #[error("CMS plugin must be installed before mounting the application")]
    CmsNotInstalled,

    /// Mount anchor selector is not of the form `#id`.
    #[error("Invalid mount anchor: {0}")]
    InvalidAnchor(String),

    /// No element with the anchor id exists in the host document.
    #[error("Mount anchor not found in document: {0}")]
    AnchorNotFound(String),

    /// Configuration file missing on disk.
    #[error("Configuration file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    /// File system I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Generic configuration crate error.
    #[error("Config crate error: {0}")]
    ConfigCrate(#[from] config::ConfigError),
}

impl CoreError {
    /// Create a new configuration error with a message.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
        }
    }

    /// Create a new configuration error with source.
    pub fn config_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new route table error.
    pub fn route_table(message: impl Into<String>) -> Self {
        Self::RouteTable(message.into())
    }

    /// Create a new unknown component error.
    pub fn unknown_component(name: impl Into<String>) -> Self {
        Self::UnknownComponent { name: name.into() }
    }
}
