// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the refine command-line interface.
//!
//! Two subcommands, both over a saved search response: `facets` prints what a
//! result set offers to filter on, `filter` applies a selection and prints
//! what survives. Handy for checking a backend response without a browser.

pub mod display;
pub mod logging;

use clap::{ArgAction, Args, Parser, Subcommand};
use refine::{CategoryFilter, FacetDomain, FilterSelection, YearRange};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "refine",
    about = "Derive facets from and filter saved search responses",
    version
)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the facet domain of a search response
    Facets {
        /// Search response JSON (envelope or bare array of articles)
        file: PathBuf,

        /// Emit JSON instead of a formatted table
        #[arg(long)]
        json: bool,
    },

    /// Filter a search response and show the visible results
    Filter {
        /// Search response JSON (envelope or bare array of articles)
        file: PathBuf,

        #[command(flatten)]
        selection: SelectionArgs,

        /// Emit JSON instead of a formatted list
        #[arg(long)]
        json: bool,
    },
}

/// Filter criteria. Repeat a flag to select several values; omit it to leave
/// that facet unrestricted.
#[derive(Args, Debug, Default)]
pub struct SelectionArgs {
    /// Earliest publication year (inclusive)
    #[arg(long = "from", value_name = "YEAR")]
    pub year_from: Option<i32>,

    /// Latest publication year (inclusive)
    #[arg(long = "to", value_name = "YEAR")]
    pub year_to: Option<i32>,

    /// Keep results with this author (exact match)
    #[arg(long = "author", value_name = "NAME")]
    pub authors: Vec<String>,

    /// Keep results from this journal (exact match)
    #[arg(long = "journal", value_name = "NAME")]
    pub journals: Vec<String>,

    /// Keep results from this source (exact match)
    #[arg(long = "source", value_name = "NAME")]
    pub sources: Vec<String>,
}

impl SelectionArgs {
    /// Turn the flags into a selection over `domain`.
    ///
    /// Missing year ends default to the domain's bounds. Values that don't
    /// occur in the domain are kept (they simply match nothing) but logged,
    /// since they are usually typos.
    pub fn to_selection(&self, domain: &FacetDomain) -> FilterSelection {
        let mut selection = FilterSelection::unrestricted(domain);
        if self.year_from.is_some() || self.year_to.is_some() {
            let range = selection.year_range;
            selection.year_range = YearRange::new(
                self.year_from.unwrap_or(range.lo),
                self.year_to.unwrap_or(range.hi),
            );
        }

        for (facet, wanted, known) in [
            ("author", &self.authors, &domain.authors),
            ("journal", &self.journals, &domain.journals),
            ("source", &self.sources, &domain.sources),
        ] {
            for value in wanted.iter().filter(|v| !known.contains(*v)) {
                tracing::warn!(facet, value = %value, "value does not occur in these results");
            }
        }

        selection.authors = CategoryFilter::from_values(self.authors.iter().cloned());
        selection.journals = CategoryFilter::from_values(self.journals.iter().cloned());
        selection.sources = CategoryFilter::from_values(self.sources.iter().cloned());
        selection
    }
}
