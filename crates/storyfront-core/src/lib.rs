//! Storyfront Core Library
//!
//! Application bootstrap, catch-all routing, component registry, content model
//! and configuration for the Storyfront single-page application.

pub mod app;
pub mod config;
pub mod error;
pub mod registry;
pub mod routes;
pub mod story;

pub use app::{App, MountAnchor, MountedApp, StartupStep};
pub use config::{ApiOptions, AppSettings, CmsConfig, Extension, Region, ServerSettings, Settings};
pub use error::{CoreError, Result};
pub use registry::{ComponentRegistry, Factory};
pub use routes::{HOME_VIEW, PathPattern, ROOT_SLUG, Resolution, RouteDef, RouteTable};
pub use story::{Blok, EditableAttrs, Story, StoryResponse};
