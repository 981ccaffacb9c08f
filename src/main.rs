//! pagehead - static landing pages with pre-rendered SEO head metadata.

mod cli;
mod config;
mod generator;
mod head;
mod logger;
mod meta;
mod page;
mod render;
mod schema;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = SiteConfig::load(&cli)?;

    match &cli.command {
        Commands::Init { .. } => cli::init::new_site(&config),
        Commands::Build { .. } => cli::build::build_site(&config),
        Commands::Inspect { args } => cli::inspect::inspect_pages(args, &config),
        Commands::Validate { args } => cli::validate::validate_site(args, &config),
    }
}
