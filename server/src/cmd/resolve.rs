//! Resolve command - show how a path is routed and which story it requests

use color_eyre::eyre::Result;
use storyfront_api::{StoryParams, Version, base_url, story_url};
use storyfront_core::{
    HOME_VIEW, ROOT_SLUG, Resolution, RouteTable, Settings, routes::normalize_path,
};

/// Placeholder printed instead of the access token.
const TOKEN_PLACEHOLDER: &str = "<token>";

/// Routing outcome for a path.
#[derive(Debug)]
pub struct ResolveReport {
    pub resolution: Resolution,
    /// Content API request the page would make.
    pub request_url: String,
}

/// Resolve `path` against the application's route table.
///
/// Without a router every path renders the root story.
pub fn resolve(settings: &Settings, path: &str, draft: bool) -> ResolveReport {
    let resolution = if settings.app.routing {
        RouteTable::catch_all(HOME_VIEW).resolve(path)
    } else {
        Resolution {
            view: HOME_VIEW.to_string(),
            path: normalize_path(path),
            slug: ROOT_SLUG.to_string(),
        }
    };
    let version = if draft {
        Version::Draft
    } else {
        Version::Published
    };
    let request_url = story_url(
        base_url(settings.cms.region()),
        TOKEN_PLACEHOLDER,
        &resolution.slug,
        &StoryParams::new(version),
    );

    ResolveReport {
        resolution,
        request_url,
    }
}

/// Run the resolve command.
pub fn run(settings: &Settings, path: &str, draft: bool) -> Result<()> {
    let report = resolve(settings, path, draft);

    println!("Path:    {}", report.resolution.path);
    println!("View:    {}", report.resolution.view);
    println!("Slug:    {}", report.resolution.slug);
    println!("Request: {}", report.request_url);

    Ok(())
}

#[cfg(test)]
mod tests {
    use storyfront_core::{CmsConfig, Region};

    use super::*;

    fn settings() -> Settings {
        Settings {
            cms: CmsConfig::new("secret", Region::Us),
            ..Settings::default()
        }
    }

    #[test]
    fn test_resolve_deep_path() {
        let report = resolve(&settings(), "/about/team", false);

        assert_eq!(report.resolution.view, HOME_VIEW);
        assert_eq!(report.resolution.slug, "about/team");
        assert!(report.request_url.starts_with(
            "https://api-us.storyblok.com/v2/cdn/stories/about/team?token=%3Ctoken%3E"
        ));
        assert!(!report.request_url.contains("secret"));
    }

    #[test]
    fn test_resolve_root_draft() {
        let report = resolve(&settings(), "/", true);

        assert_eq!(report.resolution.slug, "home");
        assert!(report.request_url.ends_with("version=draft"));
    }

    #[test]
    fn test_resolve_without_router() {
        let mut settings = settings();
        settings.app.routing = false;

        let report = resolve(&settings, "/about/team", false);
        assert_eq!(report.resolution.view, HOME_VIEW);
        assert_eq!(report.resolution.path, "/about/team");
        assert_eq!(report.resolution.slug, "home");
        assert!(report.request_url.contains("/v2/cdn/stories/home?"));
    }
}
