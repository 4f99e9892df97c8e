//! Application and CMS configuration.

use std::{fmt, path::Path, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Main configuration structure for Storyfront.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Application shell settings.
    #[serde(default)]
    pub app: AppSettings,

    /// CMS plugin settings.
    #[serde(default)]
    pub cms: CmsConfig,

    /// Static server settings.
    #[serde(default)]
    pub server: ServerSettings,
}

/// Application shell configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    /// Document title.
    #[serde(default = "default_title")]
    pub title: String,

    /// Selector of the element the application mounts into.
    #[serde(default = "default_anchor")]
    pub anchor: String,

    /// Whether the client-side router is installed.
    #[serde(default = "default_true")]
    pub routing: bool,
}

/// CMS plugin configuration.
///
/// Built once at startup and never mutated afterwards.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CmsConfig {
    /// Content delivery access token. May be empty.
    #[serde(default)]
    pub access_token: String,

    /// Enabled plugin extensions.
    #[serde(rename = "use", default = "default_extensions")]
    pub extensions: Vec<Extension>,

    /// Options forwarded to the content API client.
    #[serde(default)]
    pub api_options: ApiOptions,

    /// Honour the visual editor preview mode.
    #[serde(default = "default_true")]
    pub bridge: bool,
}

/// Options for the content API client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiOptions {
    /// Geographic endpoint of the content API.
    #[serde(default)]
    pub region: Region,
}

/// Capability extensions the CMS plugin can enable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Extension {
    /// Content delivery API (story fetching).
    Api,
}

/// Content API region.
///
/// Parsed case-insensitively, so `"US"` and `"us"` both select [`Region::Us`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Region {
    #[default]
    Eu,
    Us,
    Ap,
    Ca,
    Cn,
}

/// Static server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Socket address to listen on.
    #[serde(default = "default_addr")]
    pub addr: String,

    /// Directory holding the compiled site.
    #[serde(default = "default_site_root")]
    pub site_root: String,
}

// Default value functions
fn default_title() -> String {
    "Storyfront".to_string()
}

fn default_anchor() -> String {
    "#app".to_string()
}

fn default_true() -> bool {
    true
}

fn default_extensions() -> Vec<Extension> {
    vec![Extension::Api]
}

fn default_addr() -> String {
    "127.0.0.1:3000".to_string()
}

fn default_site_root() -> String {
    "target/site".to_string()
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            title: default_title(),
            anchor: default_anchor(),
            routing: true,
        }
    }
}

impl Default for CmsConfig {
    fn default() -> Self {
        Self {
            access_token: String::new(),
            extensions: default_extensions(),
            api_options: ApiOptions::default(),
            bridge: true,
        }
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            addr: default_addr(),
            site_root: default_site_root(),
        }
    }
}

impl fmt::Debug for CmsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = if self.access_token.is_empty() {
            "<empty>"
        } else {
            "<redacted>"
        };
        f.debug_struct("CmsConfig")
            .field("access_token", &token)
            .field("extensions", &self.extensions)
            .field("api_options", &self.api_options)
            .field("bridge", &self.bridge)
            .finish()
    }
}

impl CmsConfig {
    /// Create a configuration with the given token and region.
    pub fn new(access_token: impl Into<String>, region: Region) -> Self {
        Self {
            access_token: access_token.into(),
            api_options: ApiOptions { region },
            ..Self::default()
        }
    }

    /// Replace the access token when an override is present.
    pub fn with_access_token(mut self, token: Option<&str>) -> Self {
        if let Some(token) = token {
            self.access_token = token.to_string();
        }
        self
    }

    /// Check whether an extension is enabled.
    pub fn has_extension(&self, extension: Extension) -> bool {
        self.extensions.contains(&extension)
    }

    /// Configured region.
    pub fn region(&self) -> Region {
        self.api_options.region
    }
}

impl Region {
    /// Short code used in configuration files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Eu => "eu",
            Region::Us => "us",
            Region::Ap => "ap",
            Region::Ca => "ca",
            Region::Cn => "cn",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Region {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "eu" => Ok(Region::Eu),
            "us" => Ok(Region::Us),
            "ap" => Ok(Region::Ap),
            "ca" => Ok(Region::Ca),
            "cn" => Ok(Region::Cn),
            other => Err(CoreError::config(format!("unknown region: {other}"))),
        }
    }
}

impl TryFrom<String> for Region {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Region> for String {
    fn from(region: Region) -> Self {
        region.as_str().to_string()
    }
}

impl Settings {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| CoreError::config_with_source("Failed to parse configuration", e))
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::ConfigNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Load configuration from a file layered with `STORYFRONT__*` environment variables.
    pub fn load_with_env(path: &Path) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path).required(false))
            .add_source(config::Environment::with_prefix("STORYFRONT").separator("__"))
            .build()?;

        let settings: Settings = settings.try_deserialize()?;
        tracing::debug!(cms = ?settings.cms, "Loaded settings");
        Ok(settings)
    }
}
