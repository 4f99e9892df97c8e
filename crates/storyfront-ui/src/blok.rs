//! Dynamic rendering of content blocks by component name.

use leptos::prelude::*;
use storyfront_core::{Blok, CoreError};

use crate::context::ViewRegistry;

/// Visual editor attributes for a block's root element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Editable {
    /// `data-blok-c`
    pub options: Option<String>,
    /// `data-blok-uid`
    pub uid: Option<String>,
    outline: Option<&'static str>,
}

impl Editable {
    pub fn from_blok(blok: &Blok) -> Self {
        match blok.editable_attrs() {
            Some(attrs) => Self {
                options: Some(attrs.options),
                uid: Some(attrs.uid),
                outline: Some(attrs.class),
            },
            None => Self::default(),
        }
    }

    /// `base` plus the editor outline class when editable.
    pub fn class(&self, base: &str) -> String {
        match self.outline {
            Some(outline) => format!("{base} {outline}"),
            None => base.to_string(),
        }
    }
}

/// Render a block with the component registered under its name.
///
/// Unregistered names render a visible error instead of nothing.
#[component]
pub fn BlokComponent(
    /// The block to render.
    blok: Blok,
) -> impl IntoView {
    let Some(registry) = use_context::<ViewRegistry>() else {
        tracing::error!(component = %blok.component, "No component registry in context");
        return view! { <UnknownComponent name=blok.component /> }.into_any();
    };

    match registry.render(blok) {
        Ok(view) => view,
        Err(CoreError::UnknownComponent { name }) => {
            tracing::error!(%name, "Content references an unregistered component");
            view! { <UnknownComponent name=name /> }.into_any()
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to render block");
            view! { <p class="storyfront-error">{e.to_string()}</p> }.into_any()
        }
    }
}

/// Render a list of blocks in order.
#[component]
pub fn Bloks(
    /// Blocks to render.
    bloks: Vec<Blok>,
) -> impl IntoView {
    bloks
        .into_iter()
        .map(|blok| view! { <BlokComponent blok=blok /> })
        .collect_view()
}

/// Placeholder for a block whose component is not registered.
#[component]
fn UnknownComponent(name: String) -> impl IntoView {
    view! {
      <div class="storyfront-unknown-component" role="alert">
        "Component " <code>{name}</code> " is not registered."
      </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editable_published_block() {
        let editable = Editable::from_blok(&Blok::new("teaser", "t1"));
        assert_eq!(editable, Editable::default());
        assert_eq!(editable.class("storyfront-teaser"), "storyfront-teaser");
    }

    #[test]
    fn test_editable_draft_block() {
        let mut blok = Blok::new("teaser", "t1");
        blok.editable = Some(
            r#"<!--#storyblok#{"name": "teaser", "space": "7", "uid": "t1", "id": 9}-->"#
                .to_string(),
        );

        let editable = Editable::from_blok(&blok);
        assert_eq!(editable.uid.as_deref(), Some("9-t1"));
        assert!(editable.options.is_some());
        assert_eq!(
            editable.class("storyfront-teaser"),
            "storyfront-teaser storyblok__outline"
        );
    }
}
