//! HTTP client for the content delivery API.
//!
//! Published stories are cached in memory per request URL so navigating back
//! to a page does not refetch it. Draft content is always fetched fresh.

use std::sync::Arc;

use gloo_net::http::Request;
use scc::HashMap;
use storyfront_core::{CmsConfig, Extension, Story, StoryResponse};

use crate::{
    endpoint::{StoryParams, Version, base_url, story_url},
    error::{ApiError, Result},
};

/// Placeholder shown instead of the access token.
const REDACTED_TOKEN: &str = "redacted";

/// Content API client.
#[derive(Clone)]
pub struct ApiClient {
    /// API origin, without trailing slash.
    base_url: String,

    access_token: String,

    /// Cache of published stories: request URL -> story.
    cache: Arc<HashMap<String, Story>>,
}

impl ApiClient {
    /// Create a client for the configured region.
    ///
    /// Returns `None` when the API extension is not enabled.
    pub fn from_config(config: &CmsConfig) -> Option<Self> {
        if !config.has_extension(Extension::Api) {
            tracing::info!("Content API extension disabled, no client created");
            return None;
        }

        Some(Self::with_base_url(
            base_url(config.region()),
            &config.access_token,
        ))
    }

    /// Create a client against an explicit origin.
    pub fn with_base_url(base_url: &str, access_token: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            access_token: access_token.to_string(),
            cache: Arc::new(HashMap::new()),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Request URL for a story.
    pub fn story_url(&self, slug: &str, params: &StoryParams) -> String {
        story_url(&self.base_url, &self.access_token, slug, params)
    }

    /// Fetch a story by slug.
    pub async fn fetch_story(&self, slug: &str, params: &StoryParams) -> Result<Story> {
        let url = self.story_url(slug, params);
        let cacheable = params.version == Version::Published;

        if cacheable {
            if let Some(entry) = self.cache.get_async(&url).await {
                tracing::trace!(slug, "Story cache hit");
                return Ok(entry.get().clone());
            }
        }

        tracing::debug!(slug, version = %params.version, "Fetching story");

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            let err =
                ApiError::from_status(response.status(), slug, &self.redacted_url(slug, params));
            tracing::warn!(slug, error = %err, "Story request failed");
            return Err(err);
        }

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let story = parse_story(&body)?;

        if cacheable {
            let _ = self.cache.insert_async(url, story.clone()).await;
        }

        Ok(story)
    }

    /// Number of cached stories.
    pub fn cached_story_count(&self) -> usize {
        self.cache.len()
    }

    /// Drop all cached stories.
    pub fn clear_cache(&self) {
        self.cache.clear_sync();
    }

    /// Request URL with the token replaced by a placeholder, for error text.
    fn redacted_url(&self, slug: &str, params: &StoryParams) -> String {
        story_url(&self.base_url, REDACTED_TOKEN, slug, params)
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("cached", &self.cache.len())
            .finish()
    }
}

/// Decode the single story envelope.
pub fn parse_story(body: &str) -> Result<Story> {
    serde_json::from_str::<StoryResponse>(body)
        .map(|response| response.story)
        .map_err(|e| ApiError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use storyfront_core::Region;

    use super::*;

    #[test]
    fn test_client_from_config() {
        let config = CmsConfig::new("token", Region::Us);
        let client = ApiClient::from_config(&config).expect("api enabled");

        assert_eq!(client.base_url(), "https://api-us.storyblok.com");
        assert_eq!(client.cached_story_count(), 0);
        assert!(
            client
                .story_url("home", &StoryParams::default())
                .starts_with("https://api-us.storyblok.com/v2/cdn/stories/home?token=token")
        );
    }

    #[test]
    fn test_client_requires_api_extension() {
        let mut config = CmsConfig::new("token", Region::Us);
        config.extensions.clear();
        assert!(ApiClient::from_config(&config).is_none());
    }

    #[test]
    fn test_empty_token_client() {
        let client = ApiClient::from_config(&CmsConfig::default()).expect("api enabled");
        assert!(
            client
                .story_url("home", &StoryParams::default())
                .contains("token=&version=published")
        );
    }

    #[test]
    fn test_redacted_url() {
        let client = ApiClient::with_base_url("https://api.storyblok.com", "secret");
        let redacted = client.redacted_url("home", &StoryParams::default());
        assert!(!redacted.contains("secret"));
        assert!(redacted.contains("token=redacted"));
    }

    #[test]
    fn test_redacted_url_with_short_token() {
        let client = ApiClient::with_base_url("https://api-us.storyblok.com", "s");
        let redacted = client.redacted_url("stories", &StoryParams::default());
        assert_eq!(
            redacted,
            "https://api-us.storyblok.com/v2/cdn/stories/stories?token=redacted&version=published"
        );

        let err = ApiError::from_status(500, "stories", &redacted);
        assert!(err.to_string().contains("https://api-us.storyblok.com/v2/cdn/stories/stories"));
    }

    #[test]
    fn test_parse_story() {
        let body = r#"{"story":{"id":1,"name":"Home","slug":"home","content":{"component":"page","_uid":"p"}}}"#;
        let story = parse_story(body).expect("parse");
        assert_eq!(story.slug, "home");
        assert_eq!(story.content.component, "page");

        let err = parse_story("{\"stories\":[]}").unwrap_err();
        assert!(matches!(err, ApiError::Parse(_)));
    }
}
