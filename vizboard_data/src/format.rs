// Copyright 2025 the Vizboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Number and date labels.

use chrono::NaiveDate;

/// Formats `value` as a whole number with thousands separators (`1234.5` → `1,235`).
///
/// Halves round away from zero.
pub fn format_number(value: f64) -> String {
    format_grouped(value, 0)
}

/// Formats `value` in fixed point with `decimals` digits and thousands separators.
pub fn format_grouped(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let rounded = if decimals == 0 { value.round() } else { value };
    let fixed = format!("{:.*}", decimals, rounded.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    let mut out = String::with_capacity(fixed.len() + fixed.len() / 3 + 1);
    // No sign on values that round to zero.
    if value < 0.0 && fixed.bytes().any(|b| matches!(b, b'1'..=b'9')) {
        out.push('-');
    }
    let len = int_part.len();
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Formats a date as `M/D/YYYY`.
pub fn format_short_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}
