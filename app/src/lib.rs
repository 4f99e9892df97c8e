use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment, WildcardSegment,
    components::{Route, Router, Routes},
    hooks::use_location,
};
use storyfront_core::{App, HOME_VIEW, MountedApp, ROOT_SLUG, RouteTable, Settings};
use storyfront_ui::{CmsContext, Home, ViewRegistry, provide_cms, register_components};

/// Name of the root component.
pub const ROOT_COMPONENT: &str = "App";

/// Configuration shipped with the bundle.
const EMBEDDED_SETTINGS: &str = include_str!("../../storyfront.toml");

/// Load the embedded settings, letting `STORYBLOK_API_KEY` at compile time
/// override the access token.
pub fn load_settings() -> storyfront_core::Result<Settings> {
    let mut settings = Settings::from_toml_str(EMBEDDED_SETTINGS)?;
    settings.cms = settings
        .cms
        .with_access_token(option_env!("STORYBLOK_API_KEY"));
    Ok(settings)
}

/// Compose the application: router (optional), CMS plugin, components, mount.
pub fn bootstrap(settings: &Settings) -> storyfront_core::Result<MountedApp<AnyView>> {
    let mut app = App::new(ROOT_COMPONENT);
    if settings.app.routing {
        app = app.use_router(RouteTable::catch_all(HOME_VIEW));
    }
    let app = app.use_cms(settings.cms.clone());
    register_components(app).mount(&settings.app.anchor)
}

#[component]
pub fn Root(
    /// Document title.
    title: String,
    /// Route table; `None` renders the root story without a router.
    routes: Option<RouteTable>,
    /// Installed CMS plugin.
    cms: CmsContext,
    /// Registered content components.
    registry: ViewRegistry,
) -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_cms(cms, registry);

    let body = match routes {
        Some(routes) => {
            provide_context(routes);
            view! { <Routed /> }.into_any()
        }
        None => view! { <Home slug=ROOT_SLUG.to_string() /> }.into_any(),
    };

    view! {
      <Title text=title />
      {body}
    }
}

/// Router with the root and catch-all routes bound to the same view.
#[component]
fn Routed() -> impl IntoView {
    view! {
      <Router>
        <Routes fallback=|| "Page not found.".into_view()>
          <Route path=StaticSegment("") view=ResolvedView />
          <Route path=WildcardSegment("any") view=ResolvedView />
        </Routes>
      </Router>
    }
}

/// Resolves the current location through the route table.
#[component]
fn ResolvedView() -> impl IntoView {
    let routes = use_context::<RouteTable>().unwrap_or_default();
    let location = use_location();

    let resolution = Memo::new(move |_| routes.resolve(&location.pathname.get()));
    let view_name = Memo::new(move |_| resolution.with(|r| r.view.clone()));
    let slug = Signal::derive(move || resolution.with(|r| r.slug.clone()));

    move || match view_name.get().as_str() {
        HOME_VIEW => view! { <Home slug=slug /> }.into_any(),
        other => {
            tracing::error!(view = other, "Route resolved to an unknown view");
            view! { <p class="storyfront-error">{format!("Unknown view: {other}")}</p> }
                .into_any()
        }
    }
}

#[cfg(test)]
mod tests {
    use storyfront_core::{Region, StartupStep};

    use super::*;

    #[test]
    fn test_embedded_settings_load() {
        let settings = load_settings().expect("embedded settings parse");
        assert_eq!(settings.app.anchor, "#app");
        assert!(settings.app.routing);
        assert_eq!(settings.cms.region(), Region::Us);
    }

    #[test]
    fn test_bootstrap_with_router() {
        let settings = load_settings().expect("settings");
        let mounted = bootstrap(&settings).expect("mount");

        let steps = mounted.startup_sequence();
        assert_eq!(steps[0], StartupStep::RouterInstalled);
        assert_eq!(steps[1], StartupStep::CmsInstalled);
        assert_eq!(steps.last(), Some(&StartupStep::Mounted("#app".into())));

        let routes = mounted.router().expect("router");
        for path in ["", "/", "/about/team", "/blog/post?preview=1"] {
            assert_eq!(routes.resolve(path).view, HOME_VIEW);
        }
    }

    #[test]
    fn test_bootstrap_without_router() {
        let mut settings = load_settings().expect("settings");
        settings.app.routing = false;
        settings.cms.access_token.clear();

        let mounted = bootstrap(&settings).expect("mount without token or router");
        assert!(mounted.router().is_none());
        assert_eq!(mounted.registry().len(), 4);
    }
}
