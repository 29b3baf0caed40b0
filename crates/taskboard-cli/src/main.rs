//! Taskboard CLI entry point.

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use taskboard_cli::cli::Cli;
use taskboard_cli::commands;

fn main() {
    // Load .env.local if it exists (base URL, CSRF token)
    let _ = dotenvy::from_filename(".env.local");

    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level().to_string()));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
