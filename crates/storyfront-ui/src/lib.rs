//! Storyfront UI Components
//!
//! Leptos components that render CMS content.
//!
//! # Components
//!
//! ## Content
//! - [`Page`] - Page root with `body` blocks
//! - [`Grid`] - Grid of `columns` blocks
//! - [`Teaser`] - Headline teaser
//! - [`Feature`] - Feature tile
//!
//! ## Rendering
//! - [`BlokComponent`] - Renders a block by its component name
//! - [`Home`] - Fetches and renders the story for a slug
//!
//! # Example
//!
//! ```ignore
//! use leptos::prelude::*;
//! use storyfront_core::{App, CmsConfig};
//! use storyfront_ui::register_components;
//!
//! let mounted = register_components(App::new("App"))
//!     .use_cms(CmsConfig::default())
//!     .mount("#app")?;
//! ```

pub mod blok;
pub mod components;
pub mod context;
pub mod home;

pub use blok::{BlokComponent, Bloks, Editable};
pub use components::{
    COMPONENT_NAMES, FEATURE, Feature, GRID, Grid, PAGE, Page, TEASER, Teaser, register_components,
};
pub use context::{CmsContext, ViewRegistry, provide_cms};
pub use home::{Home, error_message};
