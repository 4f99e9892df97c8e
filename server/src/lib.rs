//! Storyfront Server Library
//!
//! Serves the compiled single-page application and provides the CLI commands.
//!
//! # Modules
//!
//! - [`cmd`] - Command implementations (serve, resolve, check)
//! - [`server`] - Static file router with the SPA fallback

pub mod cmd;
pub mod server;

pub use storyfront_core::Settings;

/// Initialize tracing with the specified verbosity level.
///
/// # Arguments
///
/// * `verbose` - Verbosity level (0 = WARN, 1 = INFO, 2 = DEBUG, 3+ = TRACE)
pub fn init_tracing(verbose: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}
