//! The single page view.
//!
//! Every route lands here. Home asks the CMS for the story at its slug and
//! renders the story's content tree; a slug with no story is reported by the
//! CMS as not found and shown as such.

use leptos::prelude::*;
use storyfront_api::{ApiError, StoryParams, Version};
use storyfront_core::Story;

use crate::{blok::BlokComponent, context::CmsContext};

/// Page view that renders the story at `slug`.
#[component]
pub fn Home(
    /// CMS slug of the story.
    #[prop(into)]
    slug: Signal<String>,
) -> impl IntoView {
    let cms = use_context::<CmsContext>();

    let story = LocalResource::new(move || {
        let cms = cms.clone();
        let slug = slug.get();
        async move { load_story(cms, slug).await }
    });

    view! {
      <div class="storyfront-home">
        {move || match story.get() {
          None => view! { <p class="storyfront-loading">"Loading..."</p> }.into_any(),
          Some(Ok(story)) => view! { <BlokComponent blok=story.content /> }.into_any(),
          Some(Err(error)) => view! { <ContentError error=error /> }.into_any(),
        }}
      </div>
    }
}

/// Message shown when content cannot be loaded.
#[component]
fn ContentError(error: ApiError) -> impl IntoView {
    view! {
      <div class="storyfront-error" role="alert">
        <p>{error_message(&error)}</p>
      </div>
    }
}

async fn load_story(cms: Option<CmsContext>, slug: String) -> Result<Story, ApiError> {
    let cms = cms.ok_or(ApiError::ApiDisabled)?;
    let client = cms.client.ok_or(ApiError::ApiDisabled)?;

    let query = window().location().search().unwrap_or_default();
    let params = StoryParams::new(Version::for_page(&query, cms.bridge));

    client.fetch_story(&slug, &params).await
}

/// User-facing text for a content error.
pub fn error_message(error: &ApiError) -> String {
    match error {
        ApiError::NotFound(slug) => format!("No content found at /{slug}."),
        ApiError::Unauthorized => "Content could not be loaded: access denied.".to_string(),
        ApiError::ApiDisabled => "Content API is not enabled.".to_string(),
        other => format!("Content could not be loaded: {other}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            error_message(&ApiError::NotFound("about/team".into())),
            "No content found at /about/team."
        );
        assert!(error_message(&ApiError::Unauthorized).contains("access denied"));
        assert!(error_message(&ApiError::Network("offline".into())).contains("offline"));
    }
}
