//! Portal CLI - documentation portal configuration.
//!
//! Provides commands for:
//! - `config`: Print the configuration handed to the site generator
//! - `check`: Validate the configuration and report authoring warnings
//! - `render`: Render a markdown page with the configured pipeline
//! - `last-updated`: Format a page timestamp
//! - `sidebar`: Show which sidebar a route gets

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, ConfigArgs, LastUpdatedArgs, RenderArgs, SidebarArgs};
use output::Output;

/// Portal - documentation portal configuration.
#[derive(Parser)]
#[command(name = "portal", version, about)]
struct Cli {
    /// Enable verbose output (show configuration loading logs).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the site generator configuration as JSON.
    Config(ConfigArgs),
    /// Validate the configuration and report warnings.
    Check(CheckArgs),
    /// Render a markdown file to HTML.
    Render(RenderArgs),
    /// Format a last-updated timestamp (milliseconds since epoch).
    LastUpdated(LastUpdatedArgs),
    /// Show the sidebar section bound to a route.
    Sidebar(SidebarArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables DEBUG level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Config(args) => args.execute(),
        Commands::Check(args) => args.execute(),
        Commands::Render(args) => args.execute(),
        Commands::LastUpdated(args) => args.execute(),
        Commands::Sidebar(args) => args.execute(),
    };

    if let Err(err) = result {
        output.fail(&err.to_string());
        std::process::exit(1);
    }
}
