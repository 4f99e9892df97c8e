//! Content delivery endpoints and request parameters.

use std::fmt;

use storyfront_core::Region;

/// Query parameter the visual editor appends when previewing a page.
pub const EDITOR_PARAM: &str = "_storyblok";

/// Content version to request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Version {
    #[default]
    Published,
    Draft,
}

impl Version {
    pub fn as_str(&self) -> &'static str {
        match self {
            Version::Published => "published",
            Version::Draft => "draft",
        }
    }

    /// Version for a page, given its query string.
    ///
    /// Draft content is requested only inside the visual editor with the
    /// bridge enabled.
    pub fn for_page(query: &str, bridge: bool) -> Self {
        if bridge && is_editor_preview(query) {
            Version::Draft
        } else {
            Version::Published
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters of a story request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct StoryParams {
    pub version: Version,
    pub language: Option<String>,
}

impl StoryParams {
    pub fn new(version: Version) -> Self {
        Self {
            version,
            language: None,
        }
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }
}

/// Base URL of the content API for a region.
pub fn base_url(region: Region) -> &'static str {
    match region {
        Region::Eu => "https://api.storyblok.com",
        Region::Us => "https://api-us.storyblok.com",
        Region::Ap => "https://api-ap.storyblok.com",
        Region::Ca => "https://api-ca.storyblok.com",
        Region::Cn => "https://app.storyblokchina.cn",
    }
}

/// Whether a query string carries the visual editor marker.
pub fn is_editor_preview(query: &str) -> bool {
    query
        .trim_start_matches('?')
        .split('&')
        .any(|pair| pair.split('=').next() == Some(EDITOR_PARAM))
}

/// URL of a single story.
pub fn story_url(base: &str, token: &str, slug: &str, params: &StoryParams) -> String {
    let path = slug
        .trim_matches('/')
        .split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/");

    let mut url = format!(
        "{}/v2/cdn/stories/{path}?token={}&version={}",
        base.trim_end_matches('/'),
        urlencoding::encode(token),
        params.version
    );

    if let Some(language) = &params.language {
        url.push_str("&language=");
        url.push_str(&urlencoding::encode(language));
    }

    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_urls() {
        assert_eq!(base_url(Region::Us), "https://api-us.storyblok.com");
        assert_eq!(base_url(Region::Eu), "https://api.storyblok.com");
        assert_eq!(base_url(Region::Cn), "https://app.storyblokchina.cn");
    }

    #[test]
    fn test_story_url() {
        let url = story_url(
            "https://api-us.storyblok.com/",
            "abc",
            "/about/team/",
            &StoryParams::default(),
        );
        assert_eq!(
            url,
            "https://api-us.storyblok.com/v2/cdn/stories/about/team?token=abc&version=published"
        );
    }

    #[test]
    fn test_story_url_encodes_segments_and_language() {
        let params = StoryParams::new(Version::Draft).with_language("de");
        let url = story_url("https://api.storyblok.com", "t&k", "blog/hello world", &params);

        assert!(url.contains("/stories/blog/hello%20world?"));
        assert!(url.contains("token=t%26k"));
        assert!(url.ends_with("&version=draft&language=de"));
    }

    #[test]
    fn test_editor_preview_detection() {
        assert!(is_editor_preview("?_storyblok=123&_storyblok_tk[space_id]=1"));
        assert!(is_editor_preview("_storyblok"));
        assert!(!is_editor_preview("?page=2"));
        assert!(!is_editor_preview(""));
        assert!(!is_editor_preview("?_storyblok_c=grid"));
    }

    #[test]
    fn test_version_for_page() {
        assert_eq!(Version::for_page("?_storyblok=1", true), Version::Draft);
        assert_eq!(Version::for_page("?_storyblok=1", false), Version::Published);
        assert_eq!(Version::for_page("", true), Version::Published);
    }
}
