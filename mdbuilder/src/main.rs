//! mdbuilder - Markdown and Mermaid document builder
//!
//! A CLI wrapper around the mdbuilder library: generates directory
//! indexes and writes sample documents for each builder.

#![deny(unsafe_code)]
#![cfg_attr(all(not(debug_assertions), not(test)), deny(clippy::all))]
#![cfg_attr(all(not(debug_assertions), not(test)), deny(clippy::pedantic))]
#![cfg_attr(all(not(debug_assertions), not(test)), deny(missing_docs))]
// Allow some pedantic lints that are too strict for this project
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::needless_pass_by_value)]

mod cli;
mod config;
mod demo;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands, DemoKind};
use config::IndexConfig;
use mdbuilder::{generate_index, generate_index_to, IndexOptions, LineFeed};
use std::fs::{self, File};
use std::io::{self, BufWriter};
use std::path::PathBuf;

/// Main entry point for the mdbuilder CLI application
fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:?}", e);
        std::process::exit(1);
    }
}

/// Run the CLI application
fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Index {
            dir,
            title,
            description,
            output,
            config,
            verbose,
        } => {
            init_logging(verbose);
            handle_index_command(dir, title, description, output, config)?;
        }

        Commands::Demo {
            kind,
            output,
            verbose,
        } => {
            init_logging(verbose);
            handle_demo_command(kind, output)?;
        }
    }

    Ok(())
}

/// Initialize logging; `--verbose` raises the level to info
fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if verbose {
        builder.filter_level(log::LevelFilter::Info);
    }
    builder.init();
}

/// Handle the index command
fn handle_index_command(
    dir: PathBuf,
    title: Option<String>,
    description: Vec<String>,
    output: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let file_config = match config_path {
        Some(path) => Some(
            IndexConfig::load(&path)
                .with_context(|| format!("Failed to load configuration {}", path.display()))?,
        ),
        None => IndexConfig::discover(&dir)
            .with_context(|| format!("Failed to load configuration from {}", dir.display()))?,
    };
    let config = file_config
        .unwrap_or_default()
        .merge(title, description, output);

    let options = IndexOptions {
        title: config.title,
        description: config.description,
        line_feed: LineFeed::native(),
    };

    let written = match config.output {
        Some(path) => {
            // Render first so the output file is not part of the walk
            let mut buffer = Vec::new();
            generate_index_to(&dir, &options, &mut buffer)
                .with_context(|| format!("Failed to generate index for {}", dir.display()))?;
            fs::write(&path, buffer)
                .with_context(|| format!("Failed to write index {}", path.display()))?;
            path
        }
        None => generate_index(&dir, &options)
            .with_context(|| format!("Failed to generate index for {}", dir.display()))?,
    };

    println!("✓ Wrote index: {}", written.display());
    Ok(())
}

/// Handle the demo command
fn handle_demo_command(kind: DemoKind, output: Option<PathBuf>) -> Result<()> {
    let line_feed = LineFeed::native();

    match output {
        Some(path) => {
            let file = File::create(&path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            demo::write_demo(kind, BufWriter::new(file), line_feed)
                .with_context(|| format!("Failed to write demo to {}", path.display()))?;
            println!("✓ Wrote demo: {}", path.display());
        }
        None => {
            demo::write_demo(kind, io::stdout().lock(), line_feed)
                .context("Failed to write demo to stdout")?;
        }
    }

    Ok(())
}
