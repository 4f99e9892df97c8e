//! Storyfront Content API
//!
//! Browser-side client for the CMS content delivery API.
//!
//! # Example
//!
//! ```ignore
//! use storyfront_api::{ApiClient, StoryParams};
//! use storyfront_core::{CmsConfig, Region};
//!
//! let client = ApiClient::from_config(&CmsConfig::new("token", Region::Us)).unwrap();
//! let story = client.fetch_story("about/team", &StoryParams::default()).await?;
//! ```

pub mod client;
pub mod endpoint;
pub mod error;

pub use client::{ApiClient, parse_story};
pub use endpoint::{EDITOR_PARAM, StoryParams, Version, base_url, is_editor_preview, story_url};
pub use error::{ApiError, Result};
