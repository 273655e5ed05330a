// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;
use refine::{derive_facets, filter_results, load_response};
use serde::Serialize;

mod cli;
use cli::logging::init_logging;
use cli::{display, Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Facets { file, json } => {
            let response = load_response(&file)?;
            let domain = derive_facets(&response.response);
            tracing::info!(results = response.response.len(), "derived facets");

            if json {
                print_json(&domain)?;
            } else {
                display::print_domain(&domain, response.response.len());
            }
        }
        Commands::Filter {
            file,
            selection,
            json,
        } => {
            let response = load_response(&file)?;
            let domain = derive_facets(&response.response);
            let selection = selection.to_selection(&domain);
            let visible = filter_results(&response.response, &selection);
            tracing::info!(
                total = response.response.len(),
                visible = visible.len(),
                "filtered results"
            );

            if json {
                print_json(&visible)?;
            } else {
                display::print_results(&visible, response.response.len(), &selection);
            }
        }
    }
    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let out = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    println!("{}", out);
    Ok(())
}
