//! Verdict badge.

use serde::Serialize;

/// Outcome badge of an evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// Net profit reached the goal
    GoalHit,
    /// In profit but short of the goal
    Profit,
    /// Net loss
    Rekt,
    /// No points entered
    NoData,
}

/// Badge colour tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// Positive outcome
    Success,
    /// Negative or empty outcome
    Failure,
}

impl Verdict {
    /// Classify a position from its points, net profit and goal
    pub fn classify(points: f64, net_profit: f64, goal: f64) -> Self {
        if points <= 0.0 {
            Verdict::NoData
        } else if net_profit >= goal {
            Verdict::GoalHit
        } else if net_profit >= 0.0 {
            Verdict::Profit
        } else {
            Verdict::Rekt
        }
    }

    /// Badge text
    pub fn label(&self) -> &'static str {
        match self {
            Verdict::GoalHit => "GOAL HIT",
            Verdict::Profit => "PROFIT",
            Verdict::Rekt => "REKT",
            Verdict::NoData => "NO DATA",
        }
    }

    /// Badge tier
    pub fn tier(&self) -> Tier {
        match self {
            Verdict::GoalHit | Verdict::Profit => Tier::Success,
            Verdict::Rekt | Verdict::NoData => Tier::Failure,
        }
    }

    /// Check if this is a success-tier verdict
    pub fn is_success(&self) -> bool {
        self.tier() == Tier::Success
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(Verdict::classify(100.0, 500.0, 500.0), Verdict::GoalHit);
        assert_eq!(Verdict::classify(100.0, 499.0, 500.0), Verdict::Profit);
        assert_eq!(Verdict::classify(100.0, 0.0, 500.0), Verdict::Profit);
        assert_eq!(Verdict::classify(100.0, -0.01, 500.0), Verdict::Rekt);
        assert_eq!(Verdict::classify(0.0, 0.0, 0.0), Verdict::NoData);
    }

    #[test]
    fn test_zero_goal_with_profit_is_goal_hit() {
        assert_eq!(Verdict::classify(1.0, 0.0, 0.0), Verdict::GoalHit);
    }

    #[test]
    fn test_tiers() {
        assert_eq!(Verdict::GoalHit.tier(), Tier::Success);
        assert_eq!(Verdict::Profit.tier(), Tier::Success);
        assert_eq!(Verdict::Rekt.tier(), Tier::Failure);
        assert!(!Verdict::NoData.is_success());
    }

    #[test]
    fn test_display() {
        assert_eq!(Verdict::GoalHit.to_string(), "GOAL HIT");
        assert_eq!(Verdict::NoData.to_string(), "NO DATA");
    }
}
