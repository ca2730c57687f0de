//! Currency formatting.
//!
//! Scales dollar amounts into abbreviated strings (`$1.25B`, `$32.3M`,
//! `$17,000`, `$0.100`). The verbose style is used for body rows; the compact
//! style trades precision for width on the share card.

use serde::{Deserialize, Serialize};

use crate::utils::constants::*;

// ═══════════════════════════════════════════════════════════════════════════════
// FORMAT STYLE
// ═══════════════════════════════════════════════════════════════════════════════

/// Currency rendering style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatStyle {
    /// Body rows: more decimals, adaptive sub-dollar precision
    #[default]
    Verbose,
    /// Share card: fewer decimals, fixed sub-dollar precision
    Compact,
}

impl FormatStyle {
    fn billion_decimals(self) -> usize {
        match self {
            FormatStyle::Verbose => 2,
            FormatStyle::Compact => 1,
        }
    }

    fn zero(self) -> &'static str {
        match self {
            FormatStyle::Verbose => "$0.00",
            FormatStyle::Compact => "$0",
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════════

/// Format a dollar amount.
///
/// Negative amounts are formatted by magnitude with a leading `-`.
/// Non-finite values render as `N/A`.
pub fn format_usd(value: f64, style: FormatStyle) -> String {
    if !value.is_finite() {
        return NOT_AVAILABLE.to_string();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let v = value.abs();

    let body = if v >= BILLION {
        format!("{}B", group_thousands(v / BILLION, style.billion_decimals()))
    } else if v >= MILLION {
        format!("{}M", group_thousands(v / MILLION, 1))
    } else if v >= THOUSAND {
        group_thousands(v, 0)
    } else if v >= 1.0 {
        group_thousands(v, 2)
    } else if v == 0.0 {
        return style.zero().to_string();
    } else {
        match style {
            FormatStyle::Verbose => group_thousands(v, subunit_decimals(v)),
            FormatStyle::Compact => format!("{:.*}", COMPACT_SUBUNIT_DECIMALS, v),
        }
    };

    format!("{}${}", sign, body)
}

/// Verbose-style shorthand
pub fn fmt(value: f64) -> String {
    format_usd(value, FormatStyle::Verbose)
}

/// Compact-style shorthand
pub fn fmt_card(value: f64) -> String {
    format_usd(value, FormatStyle::Compact)
}

/// Decimal places for a sub-dollar magnitude.
///
/// Starts at 2 and adds one place per decade until the probe reaches 1 or
/// the cap is hit, so `0.1` gets 3 places and `0.0004` gets 6.
fn subunit_decimals(v: f64) -> usize {
    let mut decimals = MIN_SUBUNIT_DECIMALS;
    let mut probe = v;
    while probe < 1.0 && decimals < MAX_SUBUNIT_DECIMALS {
        probe *= 10.0;
        decimals += 1;
    }
    decimals
}

/// Signed percentage with one decimal, e.g. `+426.3%` or `-47.4%`
pub fn format_percent_signed(value: f64) -> String {
    if !value.is_finite() {
        return NOT_AVAILABLE.to_string();
    }
    let sign = if value < 0.0 { "-" } else { "+" };
    format!("{}{}%", sign, group_thousands(value.abs(), 1))
}

/// Multiplier with one decimal, e.g. `1.3x`
pub fn format_multiplier(value: f64) -> String {
    if !value.is_finite() {
        return NOT_AVAILABLE.to_string();
    }
    format!("{:.1}x", value)
}

/// Whole-number count with thousands separators, e.g. `170,000`
pub fn format_points(value: f64) -> String {
    if !value.is_finite() {
        return NOT_AVAILABLE.to_string();
    }
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}{}", sign, group_thousands(value.abs(), 0))
}

/// Per-unit price with four decimals, e.g. `0.1900`
pub fn format_unit_price(value: f64) -> String {
    if !value.is_finite() {
        return NOT_AVAILABLE.to_string();
    }
    format!("{:.4}", value)
}

/// Render a non-negative value with fixed decimals and `,` thousands separators
fn group_thousands(value: f64, decimals: usize) -> String {
    let rendered = format!("{:.*}", decimals, value);
    let (int_part, frac_part) = match rendered.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (rendered.as_str(), None),
    };

    let mut grouped = String::with_capacity(rendered.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if let Some(frac) = frac_part {
        grouped.push('.');
        grouped.push_str(frac);
    }
    grouped
}

// ═══════════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════════
