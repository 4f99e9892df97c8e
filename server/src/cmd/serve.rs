//! Serve command - static server for the compiled site

use std::path::{Path, PathBuf};

use color_eyre::eyre::{Result, WrapErr};
use storyfront_core::Settings;
use tokio::net::TcpListener;

use crate::server::{INDEX_FILE, create_router};

/// Run the serve command.
///
/// CLI flags take precedence over the configuration file and environment.
pub async fn run(config_path: &Path, addr: Option<&str>, site_root: Option<&Path>) -> Result<()> {
    let settings =
        Settings::load_with_env(config_path).wrap_err("Failed to load configuration")?;

    let addr = addr.unwrap_or(&settings.server.addr).to_string();
    let site_root = site_root
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(&settings.server.site_root));

    tracing::info!(%addr, site_root = %site_root.display(), "Starting server");

    if !site_root.join(INDEX_FILE).exists() {
        tracing::warn!(
            site_root = %site_root.display(),
            "No {INDEX_FILE} in site root, every request will return 404"
        );
    }

    let listener = TcpListener::bind(&addr)
        .await
        .wrap_err_with(|| format!("Failed to bind {addr}"))?;

    println!("  Serving {} at http://{addr}", site_root.display());

    axum::serve(listener, create_router(&site_root))
        .await
        .wrap_err("Server error")?;

    Ok(())
}
