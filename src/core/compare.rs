//! Head-to-head comparison of two projects.

use serde::Serialize;
use tracing::debug;

use crate::core::valuation::{ProjectInputs, ValuationResult};
use crate::error::Result;
use crate::utils::constants::DEFAULT_COMPARE_LABEL;

// ═══════════════════════════════════════════════════════════════════════════════
// WINNER
// ═══════════════════════════════════════════════════════════════════════════════

/// Project with the higher net profit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Winner {
    /// Labelled project made strictly more
    Project(String),
    /// Both made exactly the same
    Tie,
}

impl Winner {
    /// Display label
    pub fn label(&self) -> &str {
        match self {
            Winner::Project(label) => label,
            Winner::Tie => "Tie",
        }
    }
}

impl std::fmt::Display for Winner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Pick the project with strictly greater net profit.
///
/// Equality is exact: two net profits that differ only in the last bit are
/// not a tie.
pub fn compare(a: &ValuationResult, b: &ValuationResult, label_a: &str, label_b: &str) -> Winner {
    if a.net_profit > b.net_profit {
        Winner::Project(label_a.to_string())
    } else if b.net_profit > a.net_profit {
        Winner::Project(label_b.to_string())
    } else {
        Winner::Tie
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// COMPARISON
// ═══════════════════════════════════════════════════════════════════════════════

/// Display label of the comparison project, falling back when unnamed
pub fn compare_label(name: &str) -> String {
    let name = name.trim();
    if name.is_empty() {
        DEFAULT_COMPARE_LABEL.to_string()
    } else {
        name.to_string()
    }
}

/// Evaluated comparison between the primary project and project B
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    /// Label of the primary project
    pub label_a: String,
    /// Label of project B
    pub label_b: String,
    /// Primary project metrics
    pub a: ValuationResult,
    /// Project B metrics
    pub b: ValuationResult,
    /// Winner by net profit
    pub winner: Winner,
}

/// State of comparison mode
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ComparisonState {
    /// Project B has no points or no cost yet
    Pending {
        /// Label of project B
        label_b: String,
    },
    /// Both projects evaluated
    Ready(Comparison),
}

impl ComparisonState {
    /// Evaluate project B against the primary result.
    ///
    /// B is only evaluated once it has both points and a cost per point;
    /// until then the comparison stays pending.
    pub fn evaluate(
        a: &ValuationResult,
        label_a: &str,
        b_inputs: &ProjectInputs,
        b_name: &str,
        goal: f64,
    ) -> Result<Self> {
        let label_b = compare_label(b_name);

        if b_inputs.points <= 0.0 || b_inputs.cost_per_point <= 0.0 {
            debug!(label_b = %label_b, "comparison pending");
            return Ok(ComparisonState::Pending { label_b });
        }

        let b = b_inputs.evaluate(goal)?;
        let winner = compare(a, &b, label_a, &label_b);
        debug!(winner = %winner, "comparison evaluated");

        Ok(ComparisonState::Ready(Comparison {
            label_a: label_a.to_string(),
            label_b,
            a: *a,
            b,
            winner,
        }))
    }

    /// Prompt shown while the comparison is pending
    pub fn prompt(&self) -> Option<String> {
        match self {
            ComparisonState::Pending { label_b } => {
                Some(format!("Fill in {} details above to compare.", label_b))
            }
            ComparisonState::Ready(_) => None,
        }
    }

    /// Check if both sides were evaluated
    pub fn is_ready(&self) -> bool {
        matches!(self, ComparisonState::Ready(_))
    }
}
