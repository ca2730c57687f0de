//! Valuation engine.
//!
//! Turns a point position and an FDV scenario into token price, cost basis,
//! gross value, net profit, ROI, venture multiplier and the FDV needed to
//! reach a profit goal. Every function here is pure: the same inputs always
//! give the same result bundle.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::presets::SCENARIO_FDVS;
use crate::error::Result;
use crate::utils::constants::{BASELINE_FDV, PERCENT};
use crate::utils::validation::{validate_finite, validate_supply, validate_valuation_inputs};

// ═══════════════════════════════════════════════════════════════════════════════
// INPUTS
// ═══════════════════════════════════════════════════════════════════════════════

/// Point position of a single project under one FDV scenario
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectInputs {
    /// Accrued points (converted 1:1 into tokens at listing)
    pub points: f64,
    /// Average price paid per point
    pub cost_per_point: f64,
    /// Total token supply at listing
    pub supply: f64,
    /// Fully diluted valuation scenario
    pub fdv: f64,
}

impl ProjectInputs {
    /// Create new project inputs
    pub fn new(points: f64, cost_per_point: f64, supply: f64, fdv: f64) -> Self {
        Self {
            points,
            cost_per_point,
            supply,
            fdv,
        }
    }

    /// Same position under a different FDV
    pub fn with_fdv(mut self, fdv: f64) -> Self {
        self.fdv = fdv;
        self
    }

    /// Evaluate against a profit goal
    pub fn evaluate(&self, goal: f64) -> Result<ValuationResult> {
        evaluate(self.points, self.cost_per_point, self.supply, self.fdv, goal)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// RESULT
// ═══════════════════════════════════════════════════════════════════════════════

/// Derived metrics of one evaluation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ValuationResult {
    /// FDV / supply
    pub token_price: f64,
    /// Points × cost per point
    pub total_spent: f64,
    /// Points × token price
    pub gross_value: f64,
    /// Gross value − total spent
    pub net_profit: f64,
    /// Net profit as a percentage of total spent, 0 when nothing was spent
    pub roi: f64,
    /// FDV relative to the seed baseline
    pub venture_multiplier: f64,
    /// FDV at which net profit equals the goal, `+inf` without points
    pub required_fdv: f64,
}

impl ValuationResult {
    /// True when the goal can be reached at some finite FDV
    pub fn goal_reachable(&self) -> bool {
        self.required_fdv.is_finite()
    }

    /// Reject results whose products overflowed. `required_fdv` is exempt.
    fn ensure_finite(self) -> Result<Self> {
        validate_finite(self.token_price, "token_price")?;
        validate_finite(self.total_spent, "total_spent")?;
        validate_finite(self.gross_value, "gross_value")?;
        validate_finite(self.net_profit, "net_profit")?;
        validate_finite(self.roi, "roi")?;
        Ok(self)
    }
}

/// Evaluate a single position.
///
/// `supply` must be finite and strictly positive; the other inputs must be
/// finite and non-negative. Two degenerate cases resolve to sentinels
/// instead of errors: ROI is 0 when nothing was spent, and the required FDV
/// is `+inf` when no points are held. Inputs large enough to overflow a
/// derived metric are rejected with [`Error::InvalidInput`](crate::error::Error::InvalidInput).
pub fn evaluate(
    points: f64,
    cost_per_point: f64,
    supply: f64,
    fdv: f64,
    goal: f64,
) -> Result<ValuationResult> {
    validate_valuation_inputs(points, cost_per_point, supply, fdv, goal)?;

    let token_price = fdv / supply;
    let total_spent = points * cost_per_point;
    let gross_value = points * token_price;
    let net_profit = gross_value - total_spent;

    let roi = if total_spent > 0.0 {
        net_profit / total_spent * PERCENT
    } else {
        0.0
    };

    let required_fdv = if points > 0.0 {
        ((goal + total_spent) / points) * supply
    } else {
        f64::INFINITY
    };

    let result = ValuationResult {
        token_price,
        total_spent,
        gross_value,
        net_profit,
        roi,
        venture_multiplier: fdv / BASELINE_FDV,
        required_fdv,
    }
    .ensure_finite()?;

    debug!(
        points,
        fdv,
        net_profit = result.net_profit,
        roi = result.roi,
        "evaluated position"
    );

    Ok(result)
}

// ═══════════════════════════════════════════════════════════════════════════════
// SCENARIO TABLE
// ═══════════════════════════════════════════════════════════════════════════════

/// One row of the profit-across-scenarios table
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScenarioRow {
    /// Scenario FDV
    pub fdv: f64,
    /// Token price at this FDV
    pub token_price: f64,
    /// Net profit at this FDV
    pub net_profit: f64,
    /// Whether this row is the currently selected FDV
    pub active: bool,
}

/// Price and net profit at every scenario FDV, holding the position fixed
pub fn scenario_table(inputs: &ProjectInputs) -> Result<Vec<ScenarioRow>> {
    scenario_table_for(inputs, &SCENARIO_FDVS)
}

/// Scenario table over an arbitrary FDV list
pub fn scenario_table_for(inputs: &ProjectInputs, fdvs: &[f64]) -> Result<Vec<ScenarioRow>> {
    validate_supply(inputs.supply)?;

    let total_spent = inputs.points * inputs.cost_per_point;

    Ok(fdvs
        .iter()
        .map(|&fdv| {
            let token_price = fdv / inputs.supply;
            ScenarioRow {
                fdv,
                token_price,
                net_profit: inputs.points * token_price - total_spent,
                // Exact match: the selected FDV is always taken from the same preset table
                active: fdv == inputs.fdv,
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * b.abs().max(1.0)
    }

    #[test]
    fn test_bearish_scenario() {
        let r = evaluate(170_000.0, 0.19, 1e9, 100_000_000.0, 150_000.0).unwrap();
        assert!(approx(r.token_price, 0.10));
        assert!(approx(r.total_spent, 32_300.0));
        assert!(approx(r.gross_value, 17_000.0));
        assert!(approx(r.net_profit, -15_300.0));
        assert!(approx(r.venture_multiplier, 1.25));
        assert!(r.roi < 0.0);
    }

    #[test]
    fn test_roi_zero_when_nothing_spent() {
        let r = evaluate(1_000.0, 0.0, 1e9, 1e9, 0.0).unwrap();
        assert_eq!(r.total_spent, 0.0);
        assert!(r.net_profit > 0.0);
        assert_eq!(r.roi, 0.0);
    }

    #[test]
    fn test_required_fdv() {
        // (150,000 + 32,300) / 170,000 * 1e9
        let r = evaluate(170_000.0, 0.19, 1e9, 1e8, 150_000.0).unwrap();
        assert!(approx(r.required_fdv, 1_072_352_941.176_470_6));
        assert!(r.goal_reachable());

        let none = evaluate(0.0, 0.19, 1e9, 1e8, 150_000.0).unwrap();
        assert_eq!(none.required_fdv, f64::INFINITY);
        assert!(!none.goal_reachable());
    }

    #[test]
    fn test_required_fdv_hits_goal_exactly() {
        let inputs = ProjectInputs::new(50_000.0, 0.4, 2e9, 3e8);
        let goal = 25_000.0;
        let at_required = inputs.with_fdv(inputs.evaluate(goal).unwrap().required_fdv);
        assert!(approx(at_required.evaluate(goal).unwrap().net_profit, goal));
    }

    #[test]
    fn test_invalid_supply_rejected() {
        let err = evaluate(1.0, 1.0, 0.0, 1e8, 0.0).unwrap_err();
        assert!(matches!(err, Error::InvalidInput { ref name, .. } if name == "supply"));
        assert!(evaluate(1.0, 1.0, -1.0, 1e8, 0.0).is_err());
        assert!(scenario_table(&ProjectInputs::new(1.0, 1.0, 0.0, 1e8)).is_err());
    }

    #[test]
    fn test_overflowing_inputs_rejected() {
        // 1e200 * 1e200 overflows, so spent and gross are both +inf
        let err = evaluate(1e200, 1e200, 1.0, 1e300, 0.0).unwrap_err();
        assert!(matches!(err, Error::InvalidInput { .. }));

        let err = evaluate(1e300, 0.0, 1e-300, 1e300, 0.0).unwrap_err();
        assert!(matches!(err, Error::InvalidInput { ref name, .. } if name == "token_price"));
    }

    #[test]
    fn test_scenario_table() {
        let inputs = ProjectInputs::new(170_000.0, 0.19, 1e9, 1e9);
        let rows = scenario_table(&inputs).unwrap();

        assert_eq!(rows.len(), SCENARIO_FDVS.len());
        assert_eq!(rows.iter().filter(|r| r.active).count(), 1);

        let active = rows.iter().find(|r| r.active).unwrap();
        assert_eq!(active.fdv, 1e9);
        assert!(approx(active.token_price, 1.0));
        assert!(approx(active.net_profit, 137_700.0));

        assert!(rows.windows(2).all(|w| w[0].net_profit < w[1].net_profit));
    }

    #[test]
    fn test_scenario_table_without_active_row() {
        // $100M is a preset but not a scenario row
        let rows = scenario_table(&ProjectInputs::new(1.0, 0.0, 1e9, 1e8)).unwrap();
        assert!(rows.iter().all(|r| !r.active));
    }
}
