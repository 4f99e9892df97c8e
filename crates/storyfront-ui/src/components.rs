//! Presentational components referenced by CMS content.
//!
//! The registered names are the contract with content authors: a block whose
//! `component` is `grid` or `Grid` renders [`Grid`], and so on.

use leptos::prelude::*;
use storyfront_core::{App, Blok};

use crate::blok::{Bloks, Editable};

pub const GRID: &str = "Grid";
pub const PAGE: &str = "Page";
pub const TEASER: &str = "Teaser";
pub const FEATURE: &str = "Feature";

/// Names registered by [`register_components`].
pub const COMPONENT_NAMES: [&str; 4] = [GRID, PAGE, TEASER, FEATURE];

/// Register the presentational components on an application.
pub fn register_components(app: App<AnyView>) -> App<AnyView> {
    app.component(GRID, |blok| view! { <Grid blok=blok /> }.into_any())
        .component(PAGE, |blok| view! { <Page blok=blok /> }.into_any())
        .component(TEASER, |blok| view! { <Teaser blok=blok /> }.into_any())
        .component(FEATURE, |blok| view! { <Feature blok=blok /> }.into_any())
}

/// Page root: renders its `body` blocks.
#[component]
pub fn Page(blok: Blok) -> impl IntoView {
    let editable = Editable::from_blok(&blok);
    let class = editable.class("storyfront-page");
    let body = blok.children("body");

    view! {
      <main
        class=class
        data-blok-c=editable.options
        data-blok-uid=editable.uid
      >
        <Bloks bloks=body />
      </main>
    }
}

/// Grid of `columns` blocks.
#[component]
pub fn Grid(blok: Blok) -> impl IntoView {
    let editable = Editable::from_blok(&blok);
    let class = editable.class("storyfront-grid");
    let columns = blok.children("columns");

    view! {
      <ul
        class=class
        data-blok-c=editable.options
        data-blok-uid=editable.uid
      >
        {columns
          .into_iter()
          .map(|column| {
            view! {
              <li class="storyfront-grid-item">
                <Bloks bloks=vec![column] />
              </li>
            }
          })
          .collect_view()}
      </ul>
    }
}

/// Headline teaser.
#[component]
pub fn Teaser(blok: Blok) -> impl IntoView {
    let editable = Editable::from_blok(&blok);
    let class = editable.class("storyfront-teaser");
    let headline = blok.text("headline").unwrap_or_default().to_string();

    view! {
      <div
        class=class
        data-blok-c=editable.options
        data-blok-uid=editable.uid
      >
        <h2 class="storyfront-teaser-headline">{headline}</h2>
      </div>
    }
}

/// Single feature tile.
#[component]
pub fn Feature(blok: Blok) -> impl IntoView {
    let editable = Editable::from_blok(&blok);
    let class = editable.class("storyfront-feature");
    let name = blok.text("name").unwrap_or_default().to_string();

    view! {
      <div
        class=class
        data-blok-c=editable.options
        data-blok-uid=editable.uid
      >
        <h3 class="storyfront-feature-name">{name}</h3>
      </div>
    }
}

#[cfg(test)]
mod tests {
    use storyfront_core::{CmsConfig, StartupStep};

    use super::*;

    #[test]
    fn test_register_components() {
        let mounted = register_components(App::new("App"))
            .use_cms(CmsConfig::default())
            .mount("#app")
            .expect("mount");

        assert_eq!(mounted.registry().names(), vec!["Feature", "Grid", "Page", "Teaser"]);
        for name in ["grid", "page", "teaser", "feature"] {
            assert!(mounted.registry().contains(name), "{name} should resolve");
        }

        let registrations = mounted
            .startup_sequence()
            .iter()
            .filter(|s| matches!(s, StartupStep::ComponentRegistered(_)))
            .count();
        assert_eq!(registrations, COMPONENT_NAMES.len());
    }
}
