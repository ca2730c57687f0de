//! Static valuation presets.
//!
//! The FDV presets, the scenario table FDVs and the comparable-protocol
//! list are fixed tables known at compile time.

use serde::Serialize;

use crate::error::{Error, Result};

// ═══════════════════════════════════════════════════════════════════════════════
// FDV PRESETS
// ═══════════════════════════════════════════════════════════════════════════════

/// A named FDV scenario
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FdvPreset {
    /// Display label, e.g. `$100M — Bearish`
    pub label: &'static str,
    /// Fully diluted valuation in dollars
    pub value: f64,
}

impl FdvPreset {
    const fn new(label: &'static str, value: f64) -> Self {
        Self { label, value }
    }

    /// Label text before the em-dash, e.g. `$100M`
    pub fn short_label(&self) -> &'static str {
        match self.label.split_once('\u{2014}') {
            Some((head, _)) => head.trim(),
            None => self.label.trim(),
        }
    }
}

/// FDV scenarios offered for selection, ordered by value
pub const FDV_PRESETS: [FdvPreset; 12] = [
    FdvPreset::new("$50M \u{2014} Dead on Arrival", 50_000_000.0),
    FdvPreset::new("$100M \u{2014} Bearish", 100_000_000.0),
    FdvPreset::new("$200M \u{2014} Conservative", 200_000_000.0),
    FdvPreset::new("$300M \u{2014} Moderate", 300_000_000.0),
    FdvPreset::new("$500M \u{2014} Optimistic", 500_000_000.0),
    FdvPreset::new("$750M \u{2014} Strong Launch", 750_000_000.0),
    FdvPreset::new("$1B \u{2014} Bullish", 1_000_000_000.0),
    FdvPreset::new("$1.5B \u{2014} Very Bullish", 1_500_000_000.0),
    FdvPreset::new("$2B \u{2014} Mega Bull", 2_000_000_000.0),
    FdvPreset::new("$3B \u{2014} Euphoria", 3_000_000_000.0),
    FdvPreset::new("$5B \u{2014} Full Degen", 5_000_000_000.0),
    FdvPreset::new("$10B \u{2014} Hyperliquid Territory", 10_000_000_000.0),
];

/// FDVs shown in the profit-across-scenarios table
pub const SCENARIO_FDVS: [f64; 7] = [
    50_000_000.0,
    200_000_000.0,
    500_000_000.0,
    1_000_000_000.0,
    2_000_000_000.0,
    5_000_000_000.0,
    10_000_000_000.0,
];

/// Resolve a preset by full label, short label or 0-based index.
///
/// Matching is case-insensitive and the leading `$` of a short label is
/// optional, so `"$1B"`, `"1b"` and `"6"` all resolve to the same preset.
pub fn find_preset(query: &str) -> Result<&'static FdvPreset> {
    let needle = query.trim();

    if let Ok(index) = needle.parse::<usize>() {
        return FDV_PRESETS
            .get(index)
            .ok_or_else(|| Error::UnknownPreset(query.to_string()));
    }

    let bare = needle.trim_start_matches('$');
    FDV_PRESETS
        .iter()
        .find(|preset| {
            preset.label.eq_ignore_ascii_case(needle)
                || preset.short_label().trim_start_matches('$').eq_ignore_ascii_case(bare)
        })
        .ok_or_else(|| Error::UnknownPreset(query.to_string()))
}

/// Preset at a fixed index, used for built-in defaults
pub fn preset_at(index: usize) -> Result<&'static FdvPreset> {
    FDV_PRESETS
        .get(index)
        .ok_or_else(|| Error::UnknownPreset(index.to_string()))
}

// ═══════════════════════════════════════════════════════════════════════════════
// COMPARABLE PROTOCOLS
// ═══════════════════════════════════════════════════════════════════════════════

/// Informational valuation of a comparable protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComparableProtocol {
    /// Protocol name
    pub name: &'static str,
    /// Valuation as displayed (not computed)
    pub valuation: &'static str,
}

/// Comparable perp DEX FDVs
pub const COMPARABLE_PROTOCOLS: [ComparableProtocol; 5] = [
    ComparableProtocol { name: "Hyperliquid", valuation: "$25B" },
    ComparableProtocol { name: "Drift", valuation: "$800M" },
    ComparableProtocol { name: "dYdX", valuation: "$600M" },
    ComparableProtocol { name: "Vertex", valuation: "$120M" },
    ComparableProtocol { name: "Aevo", valuation: "$100M" },
];
