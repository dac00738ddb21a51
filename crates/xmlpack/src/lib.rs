//! # xmlpack
//!
//! **CLI Binary**
//!
//! Entry point for the `xmlpack` command-line application.
//!
//! ## Responsibilities
//! * Parse command line arguments
//! * Load the user config and resolve the active profile
//! * Install the log subscriber
//! * Dispatch commands to their handlers
//! * Format errors with hints and set the exit code
//!
//! Analysis and rendering live in `xmlpack-core`; this crate only moves bytes
//! between files, stdin/stdout and the library.

mod commands;
mod config;
mod error_hints;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;
use xmlpack_config::Cli;

pub use config::{ResolvedInput, resolve_input, resolve_profile, resolve_template};

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.global.verbose);

    let user_config = config::load_config()?;
    let profile = resolve_profile(user_config.as_ref(), cli.profile.as_deref());
    if let (Some(name), None) = (&cli.profile, profile) {
        tracing::warn!(profile = %name, "profile not found in config; using built-in defaults");
    }

    commands::dispatch(cli.command, profile)
}

pub fn format_error(err: &anyhow::Error) -> String {
    error_hints::format(err)
}

/// `RUST_LOG` wins; otherwise verbosity picks the level. Output goes to
/// stderr so stdout stays clean for XML and JSON.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}
