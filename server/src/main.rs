//! Storyfront CLI
//!
//! Serves the compiled single-page application and inspects its configuration.
//!
//! This is the binary entry point. The library functionality is in `lib.rs`.

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use storyfront_core::Settings;

/// Command-line interface for Storyfront.
#[derive(Parser)]
#[command(
    name = "storyfront",
    version,
    about = "Static server and tooling for the Storyfront app"
)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "storyfront.toml")]
    config: std::path::PathBuf,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(clap::Subcommand)]
enum Commands {
    /// Serve the compiled site
    Serve {
        /// Address to listen on (e.g., 127.0.0.1:3000)
        #[arg(short, long)]
        addr: Option<String>,
        /// Directory holding the compiled site
        #[arg(long)]
        site_root: Option<std::path::PathBuf>,
    },
    /// Show the view and story a path resolves to
    Resolve {
        /// URL path (e.g., /about/team)
        path: String,
        /// Request draft content
        #[arg(long)]
        draft: bool,
    },
    /// Validate configuration
    Check {
        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    storyfront_server::init_tracing(cli.verbose);

    match cli.command {
        Commands::Serve { addr, site_root } => {
            storyfront_server::cmd::serve::run(&cli.config, addr.as_deref(), site_root.as_deref())
                .await?;
        }
        Commands::Resolve { path, draft } => {
            let settings =
                Settings::load_with_env(&cli.config).wrap_err("Failed to load configuration")?;
            storyfront_server::cmd::resolve::run(&settings, &path, draft)?;
        }
        Commands::Check { strict } => {
            storyfront_server::cmd::check::run(&cli.config, strict)?;
        }
    }

    Ok(())
}
