//! Static file router for the compiled site.
//!
//! Paths that name a file are served as-is. Every other path gets
//! `index.html`, so deep links reach the client-side catch-all route.

use std::path::Path;

use axum::Router;
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

/// Entry document of the single-page application.
pub const INDEX_FILE: &str = "index.html";

/// Create the router serving `site_root`.
pub fn create_router(site_root: &Path) -> Router {
    let index = ServeFile::new(site_root.join(INDEX_FILE));

    Router::new()
        .fallback_service(ServeDir::new(site_root).fallback(index))
        .layer(TraceLayer::new_for_http())
}
