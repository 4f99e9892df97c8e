//! Check command - validate configuration and the built site

use std::path::Path;

use color_eyre::eyre::{Result, bail};
use storyfront_core::{Extension, MountAnchor, Settings};

use crate::server::INDEX_FILE;

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    fn add_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Validate loaded settings.
///
/// A missing token is only a warning: the application still starts and the
/// CMS rejects the first content request.
pub fn validate(settings: &Settings) -> ValidationResult {
    let mut result = ValidationResult::default();

    if let Err(e) = MountAnchor::parse(&settings.app.anchor) {
        result.add_error(e.to_string());
    }

    if settings.cms.access_token.is_empty() {
        result.add_warning("cms.access_token is empty; set STORYBLOK_API_KEY when building");
    }

    if !settings.cms.has_extension(Extension::Api) {
        result.add_warning("cms.use does not enable \"api\"; pages cannot load content");
    }

    if !Path::new(&settings.server.site_root).join(INDEX_FILE).exists() {
        result.add_warning(format!(
            "{} has no {INDEX_FILE}; build the frontend first",
            settings.server.site_root
        ));
    }

    result
}

/// Run the check command.
pub fn run(config_path: &Path, strict: bool) -> Result<()> {
    tracing::info!(?config_path, strict, "Checking configuration");

    println!("Checking configuration...");
    let settings = match Settings::load_with_env(config_path) {
        Ok(s) => {
            println!("  ✓ Configuration valid");
            s
        }
        Err(e) => {
            println!("  ✗ Configuration invalid: {e}");
            bail!("Validation failed: {e}");
        }
    };

    let result = validate(&settings);

    println!();
    println!("Summary:");
    println!("  Errors:   {}", result.errors.len());
    println!("  Warnings: {}", result.warnings.len());

    for err in &result.errors {
        println!("  ✗ {err}");
    }
    for warn in &result.warnings {
        println!("  ⚠ {warn}");
    }

    if result.has_errors() {
        bail!("Validation failed with {} error(s)", result.errors.len());
    }

    if strict && result.has_warnings() {
        bail!(
            "Validation failed with {} warning(s) (strict mode)",
            result.warnings.len()
        );
    }

    println!();
    println!("✓ All checks passed");

    Ok(())
}

#[cfg(test)]
mod tests {
    use storyfront_core::{CmsConfig, Region};

    use super::*;

    #[test]
    fn test_valid_settings() {
        let dir = tempfile::tempdir().expect("create temp dir");
        std::fs::write(dir.path().join(INDEX_FILE), "<div id=\"app\"></div>").expect("write");

        let mut settings = Settings {
            cms: CmsConfig::new("token", Region::Us),
            ..Settings::default()
        };
        settings.server.site_root = dir.path().display().to_string();

        let result = validate(&settings);
        assert!(!result.has_errors());
        assert!(!result.has_warnings(), "{:?}", result.warnings);
    }

    #[test]
    fn test_empty_token_is_warning() {
        let result = validate(&Settings::default());
        assert!(!result.has_errors());
        assert!(result.warnings.iter().any(|w| w.contains("access_token")));
    }

    #[test]
    fn test_bad_anchor_is_error() {
        let mut settings = Settings::default();
        settings.app.anchor = "app".to_string();

        let result = validate(&settings);
        assert!(result.has_errors());
    }
}
