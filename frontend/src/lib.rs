//! Browser entry point.
//!
//! Bootstraps the application once when the wasm module starts. Failures are
//! logged to the console; nothing here panics.

use app::{Root, bootstrap, load_settings};
use leptos::prelude::*;
use storyfront_core::{CoreError, MountAnchor, Settings, routes::slug_for_path};
use storyfront_ui::CmsContext;
use wasm_bindgen::{JsCast, prelude::wasm_bindgen};
use web_sys::{Element, HtmlElement};

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    let result = load_settings().and_then(start);
    if let Err(e) = result {
        log::error!("Failed to start application: {e}");
    }
}

/// Compose the application and attach it to its anchor element.
fn start(settings: Settings) -> Result<(), CoreError> {
    let mounted = bootstrap(&settings)?;
    let anchor = mounted.anchor().clone();

    let element = anchor_element(&anchor, document().get_element_by_id(anchor.id()))?;

    let pathname = window().location().pathname().unwrap_or_default();
    log::info!(
        "Mounting at {anchor}, initial slug `{}`",
        slug_for_path(&pathname)
    );

    let title = settings.app.title;
    let (routes, cms, registry) = mounted.into_parts();
    let cms = CmsContext::new(&cms);

    // The page owns the application for its whole lifetime.
    leptos::mount::mount_to(element, move || {
        view! { <Root title=title routes=routes cms=cms registry=registry /> }
    })
    .forget();

    Ok(())
}

/// The element found for `anchor`, if it is an HTML element.
fn anchor_element(
    anchor: &MountAnchor,
    element: Option<Element>,
) -> Result<HtmlElement, CoreError> {
    element
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .ok_or_else(|| CoreError::AnchorNotFound(anchor.to_string()))
}
