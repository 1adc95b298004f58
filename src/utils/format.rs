//! Format - Formatting Utilities

use chrono::{DateTime, Local};

/// Format a location as "lat, lng" with four decimals
pub fn format_coord(lat: f64, lng: f64) -> String {
    format!("{lat:.4}, {lng:.4}")
}

/// Format an imagery value with two decimals
pub fn format_value(value: f64) -> String {
    format!("{value:.2}")
}

/// Format just the time portion
pub fn format_time(dt: &DateTime<Local>) -> String {
    dt.format("%H:%M:%S").to_string()
}

/// Truncate a string to max characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{head}...")
    }
}

/// Format a count with thousand separators
pub fn format_count(n: u64) -> String {
    let s = n.to_string();
    let len = s.len();
    let mut result = String::with_capacity(len + len / 3);

    for (i, c) in s.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    result
}
