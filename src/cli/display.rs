// Copyright 2025-present fouille contributors
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the fouille CLI.
//!
//! OneDark colors on dark terminals, One Light on light ones. Detection tries
//! `FOUILLE_THEME` first, then `COLORFGBG`, then defaults to dark. Color is
//! off entirely when `NO_COLOR` is set or stdout isn't a TTY, so piping into
//! `jq` or a file gets plain text.

use std::sync::OnceLock;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();
static USE_COLORS: OnceLock<bool> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("FOUILLE_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; backgrounds 7 and up (except 8) are light
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(Ok(bg)) = colorfgbg.split(';').next_back().map(str::parse::<u8>) {
            if bg >= 7 && bg != 8 {
                return Theme::Light;
            }
        }
    }

    Theme::Dark
}

/// Get the current theme (cached)
pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

/// Should output be colored? (cached)
pub fn use_colors() -> bool {
    *USE_COLORS.get_or_init(|| {
        std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout)
    })
}

// ═══════════════════════════════════════════════════════════════════════════
// COLORS
// ═══════════════════════════════════════════════════════════════════════════

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

/// Palette roles used by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Match,
    Weak,
    Accent,
    Muted,
}

impl Role {
    fn rgb(self, theme: Theme) -> (u8, u8, u8) {
        match (theme, self) {
            (Theme::Dark, Role::Match) => (152, 195, 121),  // #98c379
            (Theme::Dark, Role::Weak) => (229, 192, 123),   // #e5c07b
            (Theme::Dark, Role::Accent) => (86, 182, 194),  // #56b6c2
            (Theme::Dark, Role::Muted) => (92, 99, 112),    // #5c6370
            (Theme::Light, Role::Match) => (80, 161, 79),   // #50a14f
            (Theme::Light, Role::Weak) => (193, 132, 1),    // #c18401
            (Theme::Light, Role::Accent) => (1, 132, 188),  // #0184bc
            (Theme::Light, Role::Muted) => (160, 161, 167), // #a0a1a7
        }
    }
}

/// Wrap `text` in a role color, or return it untouched without color.
pub fn paint(role: Role, text: &str) -> String {
    paint_with(use_colors(), theme(), role, text)
}

fn paint_with(enabled: bool, theme: Theme, role: Role, text: &str) -> String {
    if !enabled {
        return text.to_string();
    }
    let (r, g, b) = role.rgb(theme);
    format!("\x1b[38;2;{};{};{}m{}{}", r, g, b, text, RESET)
}

/// Bold, when colors are on.
pub fn bold(text: &str) -> String {
    if use_colors() {
        format!("{}{}{}", BOLD, text, RESET)
    } else {
        text.to_string()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Shorten `text` to at most `max` characters, ending in `…` when cut.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", kept)
}

/// Fixed-width weight column, colored by whether anything matched.
pub fn format_weight(weight: f64) -> String {
    let text = format!("{:>8.4}", weight);
    if weight > 0.0 {
        paint(Role::Match, &text)
    } else {
        paint(Role::Muted, &text)
    }
}

/// One ranked line: `  1. [weight] text`.
pub fn format_ranked_line(rank: usize, weight: Option<f64>, text: &str) -> String {
    let position = paint(Role::Accent, &format!("{:>3}.", rank));
    let line = truncate(&text.replace(['\n', '\r', '\t'], " "), 100);
    match weight {
        Some(w) => format!("{} {} {}", position, format_weight(w), line),
        None => format!("{} {}", position, line),
    }
}

/// Query header for a block of results.
pub fn format_query_header(query: &str, tokens: &[String]) -> String {
    format!(
        "{} {}  {}",
        bold("query:"),
        query,
        paint(Role::Muted, &format!("[{}]", tokens.join(", ")))
    )
}

/// Similarity verdict for `fouille similarity`.
pub fn format_verdict(is_match: bool) -> String {
    if is_match {
        paint(Role::Match, "match")
    } else {
        paint(Role::Weak, "no match")
    }
}
