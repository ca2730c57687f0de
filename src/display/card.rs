//! Share card summary.
//!
//! The compact numbers behind the shareable results card. Image capture and
//! layout belong to whoever renders the card; this only decides what it says.

use serde::Serialize;

use crate::core::valuation::ValuationResult;
use crate::core::verdict::{Tier, Verdict};
use crate::display::currency::{fmt_card, format_percent_signed};
use crate::display::Tone;

/// Compact result summary for the share card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareCard {
    /// Verdict badge
    pub badge: Verdict,
    /// Badge text
    pub badge_text: String,
    /// Badge colour tier
    pub tier: Tier,
    /// Net profit, compact
    pub net_profit: String,
    /// Net profit colour
    pub net_profit_tone: Tone,
    /// Total spent, compact
    pub invested: String,
    /// Gross value, compact
    pub gross: String,
    /// Signed ROI
    pub roi: String,
    /// ROI colour
    pub roi_tone: Tone,
    /// FDV short label, e.g. `$1B`
    pub fdv_label: String,
}

impl ShareCard {
    /// Build the card from an evaluation
    pub fn new(result: &ValuationResult, verdict: Verdict, fdv_label: impl Into<String>) -> Self {
        Self {
            badge: verdict,
            badge_text: verdict.label().to_string(),
            tier: verdict.tier(),
            net_profit: fmt_card(result.net_profit),
            net_profit_tone: Tone::of_profit(result.net_profit),
            invested: fmt_card(result.total_spent),
            gross: fmt_card(result.gross_value),
            roi: format_percent_signed(result.roi),
            roi_tone: Tone::of_roi(result.roi),
            fdv_label: fdv_label.into(),
        }
    }

    /// Plain-text rendering, one field per line
    pub fn lines(&self) -> Vec<String> {
        vec![
            format!("[{}]", self.badge_text),
            format!("Net Profit  {}", self.net_profit),
            format!("Invested    {}", self.invested),
            format!("Gross       {}", self.gross),
            format!("ROI         {}", self.roi),
            format!("FDV         {}", self.fdv_label),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::valuation::evaluate;

    #[test]
    fn test_bullish_card() {
        let result = evaluate(170_000.0, 0.19, 1e9, 1e9, 150_000.0).unwrap();
        let verdict = Verdict::classify(170_000.0, result.net_profit, 150_000.0);
        let card = ShareCard::new(&result, verdict, "$1B");

        assert_eq!(card.badge, Verdict::Profit);
        assert_eq!(card.badge_text, "PROFIT");
        assert_eq!(card.tier, Tier::Success);
        assert_eq!(card.net_profit, "$137,700");
        assert_eq!(card.invested, "$32,300");
        assert_eq!(card.gross, "$170,000");
        assert_eq!(card.roi, "+426.3%");
        assert_eq!(card.roi_tone, Tone::Positive);
        assert_eq!(card.fdv_label, "$1B");
    }

    #[test]
    fn test_empty_card() {
        let result = evaluate(0.0, 0.19, 1e9, 1e8, 150_000.0).unwrap();
        let card = ShareCard::new(&result, Verdict::classify(0.0, result.net_profit, 150_000.0), "$100M");

        assert_eq!(card.badge_text, "NO DATA");
        assert_eq!(card.net_profit, "$0");
        assert_eq!(card.net_profit_tone, Tone::Positive);
        assert_eq!(card.roi, "+0.0%");
        assert_eq!(card.roi_tone, Tone::Negative);
        assert_eq!(card.lines().len(), 6);
    }
}
