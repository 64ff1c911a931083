//! Markdown from Java - Command-line tool for generating API documentation.
//!
//! Scans a directory tree for Java sources, extracts the public types and
//! members with their doc-comments, and prints a Markdown document grouped by
//! package.
//!
//! # Usage
//!
//! ```bash
//! markdown-from-java [OPTIONS]
//! ```
//!
//! # Examples
//!
//! Document the current directory:
//! ```bash
//! markdown-from-java > API.md
//! ```
//!
//! Document a source root into a file:
//! ```bash
//! markdown-from-java --dir src/main/java -o docs/API.md
//! ```
//!
//! Enable verbose logging:
//! ```bash
//! markdown-from-java --dir src/main/java -v
//! ```

use anyhow::Result;
use clap::Parser;
use log::info;
use markdown_from_java::cli;

fn main() -> Result<()> {
    let args = cli::CliArgs::parse();

    // Initialize logger based on verbose flag
    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .init();

    info!("Markdown from Java starting...");

    let args = cli::parse_args_from_parsed(args)?;
    cli::run(args)?;

    Ok(())
}
