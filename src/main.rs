//! linkgen - canonical, localized links for content objects.

mod cli;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands, common::Workspace};
use linkgen::logger;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    match &cli.command {
        Commands::Link { args } => cli::link::run_link(args, &Workspace::load(&cli)?),
        Commands::List { args } => cli::list::run_list(args, &Workspace::load(&cli)?),
        // Slugs need no content; without a config file the defaults apply
        Commands::Slug { text } => cli::slug::run_slug(text, &cli::common::load_config(&cli, true)?),
    }
}
