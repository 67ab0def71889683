// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use cmd::commands::generate_command;
use cmd::common::ConfigOverrides;
use diagnostics::LogLevel;

/// Generate llms.txt, llms.md and llms-index.html from an article catalog
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(name = "llms-index")]
struct Cli {
    /// Site config (YAML); falls back to LLMS_INDEX_CONFIG, then built-in defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Catalog JSON to read
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Directory to write the three index files into
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Site origin used for article, sitemap and canonical links
    #[arg(long)]
    domain: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    diagnostics::init_with_override(cli.verbose.then_some(LogLevel::Debug));

    let overrides = ConfigOverrides {
        config: cli.config,
        input: cli.input,
        output_dir: cli.output_dir,
        domain: cli.domain,
    };
    let today = chrono::Local::now().date_naive();

    generate_command(&overrides, today, |line| println!("{}", line))?;
    Ok(())
}
