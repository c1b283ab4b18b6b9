//! Small formatting helpers shared by the renderers.

use std::fmt::Write;

use chrono::NaiveDate;

use crate::utils::date::is_valid_date_format;

const FALLBACK_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a hex color string to an RGB triple.
///
/// Accepts `#RRGGBB`, `RRGGBB` and the `#RGB` short form.
pub fn parse_color(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim().trim_start_matches('#');
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    match hex.len() {
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some((r, g, b))
        }
        3 => {
            let digit = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
            Some((digit(0)?, digit(1)?, digit(2)?))
        }
        _ => None,
    }
}

/// Format a date, falling back to ISO when `format` is unusable (including
/// formats asking for a time of day, which a date cannot provide).
pub fn format_date(date: NaiveDate, format: &str) -> String {
    if is_valid_date_format(format) {
        let mut out = String::new();
        if write!(out, "{}", date.format(format)).is_ok() {
            return out;
        }
    }
    date.format(FALLBACK_DATE_FORMAT).to_string()
}

/// Cut `text` to at most `width` characters, marking the cut with `…`.
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut cut: String = text.chars().take(width - 1).collect();
    cut.push('…');
    cut
}

/// `text` truncated and left-aligned in exactly `width` characters.
pub fn fit(text: &str, width: usize) -> String {
    format!("{:<width$}", truncate(text, width), width = width)
}
