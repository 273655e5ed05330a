// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display for the refine CLI.
//!
//! Boxed sections for the facet domain, a numbered list for visible results.
//! Colors only when stdout is a TTY and `NO_COLOR` is unset, so piping into
//! `less` or a file gives clean text.

use refine::{Article, FacetDomain, FilterSelection, YearBounds};
use std::collections::BTreeSet;

// Width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 80;

/// Facet values listed per section before eliding the rest.
const MAX_LISTED: usize = 12;

// ═══════════════════════════════════════════════════════════════════════════
// COLORS
// ═══════════════════════════════════════════════════════════════════════════

pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const CYAN: &str = "\x1b[38;2;86;182;194m"; // #56b6c2
    pub const GREEN: &str = "\x1b[38;2;152;195;121m"; // #98c379
    pub const YELLOW: &str = "\x1b[38;2;229;192;123m"; // #e5c07b
    pub const GRAY: &str = "\x1b[38;2;92;99;112m"; // #5c6370
}

use colors::*;

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    // Respect NO_COLOR standard
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply styles if colors are on, otherwise return plain text
pub fn paint(styles: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}", styles.join(""), text, RESET)
    } else {
        text.to_string()
    }
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Cut `s` to at most `max` characters, marking the cut with an ellipsis.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let kept: String = s.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", kept)
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

fn border(s: &str) -> String {
    paint(&[GRAY], s)
}

/// │ content          │
fn row(content: &str) {
    let content = truncate_visible(content, BOX_WIDTH);
    let pad = BOX_WIDTH.saturating_sub(visible_len(&content));
    println!("{}{}{}{}", border("│"), content, " ".repeat(pad), border("│"));
}

/// Cut `content` to `width` visible characters. Escape sequences are kept
/// intact and a trailing reset closes any style left open by the cut.
fn truncate_visible(content: &str, width: usize) -> String {
    if visible_len(content) <= width {
        return content.to_string();
    }

    let keep = width.saturating_sub(1);
    let mut out = String::with_capacity(content.len());
    let mut visible = 0;
    let mut in_escape = false;
    let mut styled = false;
    for c in content.chars() {
        if c == '\x1b' {
            in_escape = true;
            styled = true;
            out.push(c);
        } else if in_escape {
            out.push(c);
            in_escape = c != 'm';
        } else if visible < keep {
            out.push(c);
            visible += 1;
        } else {
            break;
        }
    }
    out.push('…');
    if styled {
        out.push_str(RESET);
    }
    out
}

/// ┌─ LABEL ──────────┐
fn section_top(label: &str) {
    let label_part = format!("─ {} ", paint(&[CYAN, BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}{}{}",
        border("┌"),
        label_part,
        border(&format!("{}┐", "─".repeat(remaining)))
    );
}

/// ├─ LABEL ──────────┤
fn section_mid(label: &str) {
    let label_part = format!("─ {} ", paint(&[CYAN, BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}{}{}",
        border("├"),
        label_part,
        border(&format!("{}┤", "─".repeat(remaining)))
    );
}

/// └──────────────────┘
fn section_bot() {
    println!("{}", border(&format!("└{}┘", "─".repeat(BOX_WIDTH))));
}

// ═══════════════════════════════════════════════════════════════════════════
// FACETS
// ═══════════════════════════════════════════════════════════════════════════

fn describe_years(bounds: &YearBounds) -> String {
    if bounds.is_usable() {
        format!("{} – {}", bounds.min, bounds.max)
    } else {
        "no dated results".to_string()
    }
}

fn value_rows(values: &BTreeSet<String>) {
    if values.is_empty() {
        row(&format!("  {}", paint(&[DIM], "(none)")));
        return;
    }
    for value in values.iter().take(MAX_LISTED) {
        row(&format!("  {}", value));
    }
    if values.len() > MAX_LISTED {
        row(&format!(
            "  {}",
            paint(&[DIM], &format!("… and {} more", values.len() - MAX_LISTED))
        ));
    }
}

/// Print the facet domain of a result set.
pub fn print_domain(domain: &FacetDomain, result_count: usize) {
    section_top("RESULTS");
    row(&format!("  {} results", paint(&[BOLD], &result_count.to_string())));
    section_mid("YEARS");
    row(&format!("  {}", describe_years(&domain.year_bounds)));
    section_mid(&format!("AUTHORS ({})", domain.authors.len()));
    value_rows(&domain.authors);
    section_mid(&format!("JOURNALS ({})", domain.journals.len()));
    value_rows(&domain.journals);
    section_mid(&format!("SOURCES ({})", domain.sources.len()));
    value_rows(&domain.sources);
    section_bot();
}

// ═══════════════════════════════════════════════════════════════════════════
// RESULTS
// ═══════════════════════════════════════════════════════════════════════════

fn describe_selection(selection: &FilterSelection) -> Vec<String> {
    let mut parts = Vec::new();
    let range = selection.year_range;
    if range != refine::YearRange::ANY {
        parts.push(format!("years {}–{}", range.lo, range.hi));
    }
    for (label, filter) in [
        ("author", &selection.authors),
        ("journal", &selection.journals),
        ("source", &selection.sources),
    ] {
        let values: Vec<_> = filter.selected().collect();
        if !values.is_empty() {
            parts.push(format!("{} ∈ {{{}}}", label, values.join(", ")));
        }
    }
    parts
}

fn byline(article: &Article) -> String {
    let mut parts = Vec::new();
    let authors: Vec<_> = article
        .authors
        .iter()
        .filter(|a| !a.is_empty())
        .map(String::as_str)
        .collect();
    if !authors.is_empty() {
        parts.push(authors.join("; "));
    }
    if let Some(journal) = article.journal.as_deref().filter(|j| !j.is_empty()) {
        parts.push(journal.to_string());
    }
    if let Some(year) = article.year() {
        parts.push(format!("({})", year));
    }
    parts.join(" · ")
}

/// Print the visible subset of a result set.
pub fn print_results(visible: &[Article], total: usize, selection: &FilterSelection) {
    let header = format!(
        "{} of {} results",
        paint(&[GREEN, BOLD], &visible.len().to_string()),
        total
    );
    println!("{}", header);
    for part in describe_selection(selection) {
        println!("  {}", paint(&[DIM], &part));
    }
    println!();

    if visible.is_empty() {
        println!("{}", paint(&[YELLOW], "No results found"));
        return;
    }

    for (i, article) in visible.iter().enumerate() {
        let title = if article.title.is_empty() {
            article.id.as_str()
        } else {
            article.title.as_str()
        };
        println!("{:>3}. {}", i + 1, paint(&[BOLD], title));
        let byline = byline(article);
        if !byline.is_empty() {
            println!("     {}", paint(&[GRAY], &truncate(&byline, BOX_WIDTH - 5)));
        }
        if let Some(source) = article.source.as_deref().filter(|s| !s.is_empty()) {
            println!("     {}", paint(&[DIM], source));
        }
    }
}
