// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Display formatting for dashboard figures.

use chrono::{DateTime, Utc};

/// Escape text for use inside HTML element content or a quoted attribute
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// `1234.5` → `$1,234.50`; negative amounts keep a leading minus
pub fn format_currency(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}${}.{:02}", group_thousands(cents / 100), cents % 100)
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// `950` → `950`, `1260` → `1.3K`, `2_400_000` → `2.4M`
pub fn format_compact(value: u64) -> String {
    const UNITS: [(u64, &str); 3] = [(1_000, "K"), (1_000_000, "M"), (1_000_000_000, "B")];
    let tenths = |scale: u64| (value as f64 / scale as f64 * 10.0).round();

    let Some(mut unit) = UNITS.iter().rposition(|&(scale, _)| value >= scale) else {
        return value.to_string();
    };
    // 999_950 rounds up to 1000.0K
    if tenths(UNITS[unit].0) >= 10_000.0 && unit + 1 < UNITS.len() {
        unit += 1;
    }

    let (scale, suffix) = UNITS[unit];
    let text = format!("{:.1}", tenths(scale) / 10.0);
    let text = text.strip_suffix(".0").unwrap_or(&text);
    format!("{text}{suffix}")
}

/// Signed percentage with one decimal: `12.34` → `+12.3%`
pub fn format_change(percent: f64) -> String {
    if percent > 0.0 {
        format!("+{percent:.1}%")
    } else {
        format!("{percent:.1}%")
    }
}

/// Coarse "time ago" text relative to `now`
pub fn relative_time(at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(at);
    let minutes = elapsed.num_minutes();
    if minutes < 1 {
        "just now".to_string()
    } else if minutes < 60 {
        format!("{minutes}m ago")
    } else if elapsed.num_hours() < 24 {
        format!("{}h ago", elapsed.num_hours())
    } else if elapsed.num_days() < 7 {
        format!("{}d ago", elapsed.num_days())
    } else {
        at.format("%b %-d, %Y").to_string()
    }
}
