//! Presentation-facing output.
//!
//! - `currency`: abbreviated currency strings and numeric helpers
//! - `card`: share card summary
//! - `report`: breakdown, scenario table and head-to-head rows

pub mod card;
pub mod currency;
pub mod report;

pub use card::*;
pub use currency::*;
pub use report::*;

use serde::Serialize;

/// Colour hint for a signed value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    /// Green
    Positive,
    /// Red
    Negative,
}

impl Tone {
    /// Break-even counts as positive
    pub fn of_profit(net_profit: f64) -> Self {
        if net_profit >= 0.0 {
            Tone::Positive
        } else {
            Tone::Negative
        }
    }

    /// Only a strictly positive return counts as positive
    pub fn of_roi(roi: f64) -> Self {
        if roi > 0.0 {
            Tone::Positive
        } else {
            Tone::Negative
        }
    }
}
