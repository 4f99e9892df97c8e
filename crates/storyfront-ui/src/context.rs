//! Reactive context shared by the content components.

use leptos::prelude::*;
use storyfront_api::ApiClient;
use storyfront_core::{CmsConfig, ComponentRegistry};

/// Registry whose factories produce Leptos views.
pub type ViewRegistry = ComponentRegistry<AnyView>;

/// Installed CMS plugin.
#[derive(Clone, Debug)]
pub struct CmsContext {
    /// Content API client, absent when the API extension is disabled.
    pub client: Option<ApiClient>,

    /// Honour the visual editor preview mode.
    pub bridge: bool,
}

impl CmsContext {
    pub fn new(config: &CmsConfig) -> Self {
        Self {
            client: ApiClient::from_config(config),
            bridge: config.bridge,
        }
    }
}

/// Provide the CMS plugin and the component registry to descendants.
pub fn provide_cms(cms: CmsContext, registry: ViewRegistry) {
    provide_context(cms);
    provide_context(registry);
}
