// Copyright 2025-present Lector Contributors
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the lector CLI.
//!
//! Small ANSI helpers plus a per-tier badge. Colors are suppressed when
//! stdout is not a TTY or `NO_COLOR` is set, so piped output stays clean.

use std::sync::OnceLock;

use lector::MatchTier;

/// Cached color decision for the lifetime of the process.
static USE_COLOR: OnceLock<bool> = OnceLock::new();

fn use_color() -> bool {
    *USE_COLOR.get_or_init(|| {
        std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout)
    })
}

fn paint(code: &str, text: &str) -> String {
    if use_color() {
        format!("\x1b[{code}m{text}\x1b[0m")
    } else {
        text.to_string()
    }
}

pub fn bold(text: &str) -> String {
    paint("1", text)
}

pub fn dim(text: &str) -> String {
    paint("2", text)
}

/// Colored `[tier]` badge: green for exact, yellow for substring/prefix,
/// magenta for fuzzy.
pub fn tier_badge(tier: MatchTier) -> String {
    let code = match tier {
        MatchTier::Exact => "32",
        MatchTier::Prefix | MatchTier::Substring => "33",
        MatchTier::Fuzzy => "35",
    };
    paint(code, &format!("[{}]", tier.label()))
}

/// One catalog record on one line: name, university, department, dim id.
pub fn record_line(record: &lector::CatalogRecord) -> String {
    let mut line = bold(&record.name);
    if !record.university.is_empty() {
        line.push_str(&format!(" — {}", record.university));
    }
    if !record.department.is_empty() {
        line.push_str(&format!(" — {}", record.department));
    }
    if !record.id.is_empty() {
        line.push_str(&format!("  {}", dim(&format!("({})", record.id))));
    }
    line
}
