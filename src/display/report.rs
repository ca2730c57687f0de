//! Result report.
//!
//! Runs the valuation engine once and renders everything a front end shows:
//! the breakdown rows, the scenario table, the share card and, when a second
//! project is given, the head-to-head table.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::compare::{ComparisonState, Winner};
use crate::core::presets::FdvPreset;
use crate::core::valuation::{scenario_table, ProjectInputs, ScenarioRow, ValuationResult};
use crate::core::verdict::Verdict;
use crate::display::card::ShareCard;
use crate::display::currency::{
    fmt, format_multiplier, format_percent_signed, format_points, format_unit_price,
};
use crate::display::Tone;
use crate::error::Result;
use crate::utils::constants::PRIMARY_PROJECT_LABEL;

// ═══════════════════════════════════════════════════════════════════════════════
// INPUTS
// ═══════════════════════════════════════════════════════════════════════════════

/// Second project for comparison mode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompareInputs {
    /// Project name, may be empty
    pub name: String,
    /// Project B position
    pub project: ProjectInputs,
}

/// Everything one report is computed from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckInputs {
    /// Primary project position
    pub project: ProjectInputs,
    /// Net profit goal
    pub goal: f64,
    /// Short FDV label shown on the card
    pub fdv_label: String,
    /// Optional comparison project
    pub compare: Option<CompareInputs>,
}

impl CheckInputs {
    /// Inputs for a preset FDV
    pub fn from_preset(
        points: f64,
        cost_per_point: f64,
        supply: f64,
        preset: &FdvPreset,
        goal: f64,
    ) -> Self {
        Self {
            project: ProjectInputs::new(points, cost_per_point, supply, preset.value),
            goal,
            fdv_label: preset.short_label().to_string(),
            compare: None,
        }
    }

    /// Attach a comparison project
    pub fn with_compare(mut self, name: impl Into<String>, project: ProjectInputs) -> Self {
        self.compare = Some(CompareInputs {
            name: name.into(),
            project,
        });
        self
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// ROWS
// ═══════════════════════════════════════════════════════════════════════════════

/// Labelled, formatted value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayRow {
    /// Row label
    pub label: String,
    /// Formatted value
    pub value: String,
    /// Colour hint for signed values
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tone: Option<Tone>,
}

impl DisplayRow {
    fn plain(label: impl Into<String>, value: String) -> Self {
        Self {
            label: label.into(),
            value,
            tone: None,
        }
    }

    fn toned(label: impl Into<String>, value: String, tone: Tone) -> Self {
        Self {
            label: label.into(),
            value,
            tone: Some(tone),
        }
    }
}

/// Formatted scenario table row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioLine {
    /// Scenario FDV
    pub fdv: String,
    /// Token price at this FDV
    pub token_price: String,
    /// Net profit at this FDV
    pub net_profit: String,
    /// Net profit colour
    pub tone: Tone,
    /// Whether this is the selected FDV
    pub active: bool,
    /// Unformatted values
    pub raw: ScenarioRow,
}

impl From<ScenarioRow> for ScenarioLine {
    fn from(row: ScenarioRow) -> Self {
        Self {
            fdv: fmt(row.fdv),
            token_price: fmt(row.token_price),
            net_profit: fmt(row.net_profit),
            tone: Tone::of_profit(row.net_profit),
            active: row.active,
            raw: row,
        }
    }
}

/// One metric of the head-to-head table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeadToHeadRow {
    /// Metric name
    pub metric: String,
    /// Primary project value
    pub a: String,
    /// Project B value
    pub b: String,
    /// Primary project colour
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tone_a: Option<Tone>,
    /// Project B colour
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tone_b: Option<Tone>,
}

/// Rendered comparison mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum HeadToHead {
    /// Waiting for project B inputs
    Pending {
        /// Prompt to show
        prompt: String,
    },
    /// Both projects evaluated
    Ready {
        /// Primary project label
        label_a: String,
        /// Project B label
        label_b: String,
        /// Metric rows
        rows: Vec<HeadToHeadRow>,
        /// Winner
        winner: Winner,
    },
}

// ═══════════════════════════════════════════════════════════════════════════════
// REPORT
// ═══════════════════════════════════════════════════════════════════════════════

/// Complete rendered result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// Inputs the report was built from
    pub inputs: CheckInputs,
    /// Raw engine output
    pub result: ValuationResult,
    /// Outcome badge
    pub verdict: Verdict,
    /// Breakdown rows
    pub breakdown: Vec<DisplayRow>,
    /// Profit across FDV scenarios
    pub scenarios: Vec<ScenarioLine>,
    /// Share card
    pub card: ShareCard,
    /// Head-to-head, when comparison mode is on
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparison: Option<HeadToHead>,
}

impl Report {
    /// Evaluate the inputs and render every section
    pub fn build(inputs: &CheckInputs) -> Result<Self> {
        let project = &inputs.project;
        let result = project.evaluate(inputs.goal)?;
        let verdict = Verdict::classify(project.points, result.net_profit, inputs.goal);

        let scenarios = scenario_table(project)?
            .into_iter()
            .map(ScenarioLine::from)
            .collect();

        let comparison = match &inputs.compare {
            Some(cmp) => {
                let state = ComparisonState::evaluate(
                    &result,
                    PRIMARY_PROJECT_LABEL,
                    &cmp.project,
                    &cmp.name,
                    inputs.goal,
                )?;
                Some(head_to_head(&state, project, &cmp.project))
            }
            None => None,
        };

        debug!(verdict = %verdict, compare = comparison.is_some(), "report built");

        Ok(Self {
            inputs: inputs.clone(),
            result,
            verdict,
            breakdown: breakdown_rows(project, &result),
            scenarios,
            card: ShareCard::new(&result, verdict, inputs.fdv_label.clone()),
            comparison,
        })
    }

    /// Serialize the report as JSON
    pub fn to_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

fn breakdown_rows(project: &ProjectInputs, result: &ValuationResult) -> Vec<DisplayRow> {
    let points = format_points(project.points);

    vec![
        DisplayRow::plain("Token Price (FDV / Supply)", fmt(result.token_price)),
        DisplayRow::plain(
            format!("You Spent ({} pts x {})", points, format_unit_price(project.cost_per_point)),
            fmt(result.total_spent),
        ),
        DisplayRow::plain(
            format!("Gross Value ({} pts x {})", points, format_unit_price(result.token_price)),
            fmt(result.gross_value),
        ),
        DisplayRow::plain(
            "Venture Multiplier (vs $80M seed)",
            format_multiplier(result.venture_multiplier),
        ),
        DisplayRow::plain("FDV Needed for Goal", fmt(result.required_fdv)),
        DisplayRow::toned(
            "Net Profit",
            fmt(result.net_profit),
            Tone::of_profit(result.net_profit),
        ),
        DisplayRow::toned("ROI", format_percent_signed(result.roi), Tone::of_roi(result.roi)),
    ]
}

fn head_to_head(state: &ComparisonState, a: &ProjectInputs, b: &ProjectInputs) -> HeadToHead {
    let cmp = match state {
        ComparisonState::Ready(cmp) => cmp,
        ComparisonState::Pending { .. } => {
            return HeadToHead::Pending {
                prompt: state.prompt().unwrap_or_default(),
            }
        }
    };

    let tone_a = Tone::of_profit(cmp.a.net_profit);
    let tone_b = Tone::of_profit(cmp.b.net_profit);

    let rows = vec![
        HeadToHeadRow {
            metric: "FDV".into(),
            a: fmt(a.fdv),
            b: fmt(b.fdv),
            tone_a: None,
            tone_b: None,
        },
        HeadToHeadRow {
            metric: "Invested".into(),
            a: fmt(cmp.a.total_spent),
            b: fmt(cmp.b.total_spent),
            tone_a: None,
            tone_b: None,
        },
        HeadToHeadRow {
            metric: "Net Profit".into(),
            a: fmt(cmp.a.net_profit),
            b: fmt(cmp.b.net_profit),
            tone_a: Some(tone_a),
            tone_b: Some(tone_b),
        },
        HeadToHeadRow {
            metric: "ROI".into(),
            a: format_percent_signed(cmp.a.roi),
            b: format_percent_signed(cmp.b.roi),
            tone_a: Some(tone_a),
            tone_b: Some(tone_b),
        },
    ];

    HeadToHead::Ready {
        label_a: cmp.label_a.clone(),
        label_b: cmp.label_b.clone(),
        rows,
        winner: cmp.winner.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::presets::find_preset;

    fn default_inputs(fdv: &str) -> CheckInputs {
        CheckInputs::from_preset(170_000.0, 0.19, 1e9, find_preset(fdv).unwrap(), 150_000.0)
    }

    #[test]
    fn test_bearish_breakdown() {
        let report = Report::build(&default_inputs("$100M")).unwrap();

        assert_eq!(report.verdict, Verdict::Rekt);
        assert_eq!(report.breakdown[0].value, "$0.100");
        assert_eq!(report.breakdown[1].label, "You Spent (170,000 pts x 0.1900)");
        assert_eq!(report.breakdown[1].value, "$32,300");
        assert_eq!(report.breakdown[2].label, "Gross Value (170,000 pts x 0.1000)");
        assert_eq!(report.breakdown[2].value, "$17,000");
        assert_eq!(report.breakdown[4].value, "$1.07B");
        assert_eq!(report.breakdown[5].value, "-$15,300");
        assert_eq!(report.breakdown[5].tone, Some(Tone::Negative));
        assert_eq!(report.card.fdv_label, "$100M");
        assert!(report.comparison.is_none());
    }

    #[test]
    fn test_required_fdv_unreachable_renders_na() {
        let inputs = CheckInputs::from_preset(0.0, 0.19, 1e9, find_preset("$1B").unwrap(), 1.0);
        let report = Report::build(&inputs).unwrap();

        assert_eq!(report.verdict, Verdict::NoData);
        assert_eq!(report.breakdown[4].value, "N/A");
    }

    #[test]
    fn test_scenario_lines() {
        let report = Report::build(&default_inputs("$1B")).unwrap();
        let active: Vec<_> = report.scenarios.iter().filter(|s| s.active).collect();

        assert_eq!(active.len(), 1);
        assert_eq!(active[0].fdv, "$1.00B");
        assert_eq!(active[0].token_price, "$1.00");
        assert_eq!(active[0].net_profit, "$137,700");
        assert_eq!(report.scenarios[0].fdv, "$50.0M");
        assert_eq!(report.scenarios[0].tone, Tone::Negative);
    }

    #[test]
    fn test_pending_comparison() {
        let inputs = default_inputs("$1B").with_compare("", ProjectInputs::new(0.0, 0.0, 1e9, 3e8));
        let report = Report::build(&inputs).unwrap();

        assert_eq!(
            report.comparison,
            Some(HeadToHead::Pending {
                prompt: "Fill in Project B details above to compare.".into()
            })
        );
    }

    #[test]
    fn test_ready_comparison() {
        let inputs = default_inputs("$1B")
            .with_compare("Lighter", ProjectInputs::new(100_000.0, 0.5, 1e9, 3e8));
        let report = Report::build(&inputs).unwrap();

        match report.comparison {
            Some(HeadToHead::Ready { label_b, rows, winner, .. }) => {
                assert_eq!(label_b, "Lighter");
                assert_eq!(rows.len(), 4);
                assert_eq!(rows[0].b, "$300.0M");
                assert_eq!(rows[2].b, "-$20,000");
                assert_eq!(rows[2].tone_b, Some(Tone::Negative));
                assert_eq!(winner, Winner::Project("Hibachi".into()));
            }
            other => panic!("unexpected comparison: {:?}", other),
        }
    }

    #[test]
    fn test_report_json() {
        let json = Report::build(&default_inputs("$1B")).unwrap().to_json().unwrap();
        assert_eq!(json["verdict"], "profit");
        assert_eq!(json["card"]["roi"], "+426.3%");
        assert!(json.get("comparison").is_none());
    }
}
