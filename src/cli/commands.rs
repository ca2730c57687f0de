//! CLI Commands.
//!
//! All available CLI commands. Each command resolves its inputs against the
//! configured defaults, runs the valuation engine and returns structured data
//! plus human-readable sections.

use std::path::PathBuf;

use super::config::below_min_supply;
use super::{CliApp, CliConfig, CliError, CliResult, CommandOutput, Executable, Section};
use crate::core::compare::Winner;
use crate::core::presets::{find_preset, COMPARABLE_PROTOCOLS, FDV_PRESETS};
use crate::core::valuation::ProjectInputs;
use crate::display::currency::{fmt, format_usd, FormatStyle};
use crate::display::report::{CheckInputs, HeadToHead, Report};
use crate::display::{DisplayRow, Tone};
use crate::utils::constants::MIN_SUPPLY;

// ═══════════════════════════════════════════════════════════════════════════════
// COMMAND ENUM
// ═══════════════════════════════════════════════════════════════════════════════

/// All available commands
#[derive(Debug, Clone)]
pub enum Command {
    /// Full breakdown for one position
    Check(CheckCommand),
    /// Profit across FDV scenarios
    Scenarios(ScenarioCommand),
    /// Head-to-head against a second project
    Compare(CompareCommand),
    /// Share card summary
    Card(CardCommand),
    /// FDV presets and comparable protocols
    Presets(PresetsCommand),
    /// Currency formatter probe
    Format(FormatCommand),
    /// Configuration management
    Config(ConfigCommand),
}

// ═══════════════════════════════════════════════════════════════════════════════
// INPUT ARGUMENTS
// ═══════════════════════════════════════════════════════════════════════════════

/// Position flags; unset values fall back to the configured defaults
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PositionArgs {
    /// Accrued points
    pub points: Option<f64>,
    /// Average cost per point
    pub cost: Option<f64>,
    /// Total token supply
    pub supply: Option<f64>,
    /// FDV preset query
    pub fdv: Option<String>,
    /// Net profit goal
    pub goal: Option<f64>,
}

impl PositionArgs {
    /// Merge with config defaults into report inputs
    pub fn resolve(&self, config: &CliConfig) -> CliResult<CheckInputs> {
        let defaults = &config.defaults;
        let preset = find_preset(self.fdv.as_deref().unwrap_or(&defaults.fdv_preset))?;
        let supply = checked_supply(self.supply.unwrap_or(defaults.supply), "--supply")?;

        Ok(CheckInputs::from_preset(
            self.points.unwrap_or(defaults.points),
            self.cost.unwrap_or(defaults.cost_per_point),
            supply,
            preset,
            self.goal.unwrap_or(defaults.goal),
        ))
    }
}

/// Comparison project flags; unset values fall back to the configured defaults
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompareArgs {
    /// Project name
    pub name: Option<String>,
    /// Accrued points
    pub points: Option<f64>,
    /// Average cost per point
    pub cost: Option<f64>,
    /// Total token supply
    pub supply: Option<f64>,
    /// FDV preset query
    pub fdv: Option<String>,
}

impl CompareArgs {
    /// Merge with config defaults into a name and position
    pub fn resolve(&self, config: &CliConfig) -> CliResult<(String, ProjectInputs)> {
        let defaults = &config.compare;
        let preset = find_preset(self.fdv.as_deref().unwrap_or(&defaults.fdv_preset))?;
        let supply = checked_supply(self.supply.unwrap_or(defaults.supply), "--b-supply")?;

        let project = ProjectInputs::new(
            self.points.unwrap_or(defaults.points),
            self.cost.unwrap_or(defaults.cost_per_point),
            supply,
            preset.value,
        );
        let name = self.name.clone().unwrap_or_else(|| defaults.name.clone());

        Ok((name, project))
    }
}

/// Apply the same supply floor to flags as to config values
fn checked_supply(supply: f64, flag: &str) -> CliResult<f64> {
    if below_min_supply(supply) {
        return Err(CliError::InvalidArgument(format!(
            "{} must be at least {}, got {}",
            flag, MIN_SUPPLY, supply
        )));
    }
    Ok(supply)
}

// ═══════════════════════════════════════════════════════════════════════════════
// CHECK COMMAND
// ═══════════════════════════════════════════════════════════════════════════════

/// Full reality check of one position
#[derive(Debug, Clone, Default)]
pub struct CheckCommand {
    /// Position flags
    pub position: PositionArgs,
}

impl Executable for CheckCommand {
    fn execute(&self, app: &CliApp) -> CliResult<CommandOutput> {
        let inputs = self.position.resolve(app.config())?;
        let report = Report::build(&inputs)?;

        let mut output = CommandOutput::success_with_data("Reality check complete", report.to_json()?)
            .with_section(comparables_section())
            .with_section(Section::rows("Breakdown", report.breakdown.clone()))
            .with_section(verdict_section(&report))
            .with_section(card_section(&report))
            .with_section(scenario_section(&report));

        if !report.result.goal_reachable() {
            output = output.with_warning("Enter your points to see the FDV needed for your goal");
        }

        Ok(output)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// SCENARIO COMMAND
// ═══════════════════════════════════════════════════════════════════════════════

/// Profit across the fixed FDV scenarios
#[derive(Debug, Clone, Default)]
pub struct ScenarioCommand {
    /// Position flags
    pub position: PositionArgs,
}

impl Executable for ScenarioCommand {
    fn execute(&self, app: &CliApp) -> CliResult<CommandOutput> {
        let inputs = self.position.resolve(app.config())?;
        let report = Report::build(&inputs)?;

        let data = serde_json::to_value(&report.scenarios)
            .map_err(|e| CliError::Execution(e.to_string()))?;

        Ok(CommandOutput::success_with_data("Scenarios computed", data)
            .with_section(scenario_section(&report)))
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// COMPARE COMMAND
// ═══════════════════════════════════════════════════════════════════════════════

/// Head-to-head against a second project
#[derive(Debug, Clone, Default)]
pub struct CompareCommand {
    /// Primary position flags
    pub position: PositionArgs,
    /// Comparison project flags
    pub other: CompareArgs,
}

impl Executable for CompareCommand {
    fn execute(&self, app: &CliApp) -> CliResult<CommandOutput> {
        let (name, project) = self.other.resolve(app.config())?;
        let inputs = self.position.resolve(app.config())?.with_compare(name, project);
        let report = Report::build(&inputs)?;

        let data = serde_json::json!({
            "result": report.result,
            "verdict": report.verdict,
            "comparison": report.comparison,
        });

        let mut output = CommandOutput::success_with_data("Comparison complete", data)
            .with_section(Section::rows("Breakdown", report.breakdown.clone()));

        match &report.comparison {
            Some(HeadToHead::Ready {
                label_a,
                label_b,
                rows,
                winner,
            }) => {
                let headers = ["", label_a.as_str(), label_b.as_str()];
                let cells = rows
                    .iter()
                    .map(|row| vec![row.metric.clone(), row.a.clone(), row.b.clone()])
                    .collect();
                output = output
                    .with_section(Section::table("Head to Head", &headers, cells, None))
                    .with_section(Section::rows("Winner", vec![winner_row(winner)]));
            }
            Some(HeadToHead::Pending { prompt }) => {
                output = output.with_warning(prompt.clone());
            }
            None => {}
        }

        Ok(output)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// CARD COMMAND
// ═══════════════════════════════════════════════════════════════════════════════

/// Share card summary
#[derive(Debug, Clone, Default)]
pub struct CardCommand {
    /// Position flags
    pub position: PositionArgs,
}

impl Executable for CardCommand {
    fn execute(&self, app: &CliApp) -> CliResult<CommandOutput> {
        let inputs = self.position.resolve(app.config())?;
        let report = Report::build(&inputs)?;

        let data = serde_json::to_value(&report.card)
            .map_err(|e| CliError::Execution(e.to_string()))?;

        Ok(CommandOutput::success_with_data("Share card ready", data)
            .with_section(card_section(&report)))
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// PRESETS COMMAND
// ═══════════════════════════════════════════════════════════════════════════════

/// List FDV presets and comparable protocols
#[derive(Debug, Clone, Default)]
pub struct PresetsCommand;

impl Executable for PresetsCommand {
    fn execute(&self, _app: &CliApp) -> CliResult<CommandOutput> {
        let presets: Vec<_> = FDV_PRESETS
            .iter()
            .enumerate()
            .map(|(i, p)| {
                serde_json::json!({
                    "index": i,
                    "label": p.label,
                    "short_label": p.short_label(),
                    "value": p.value,
                })
            })
            .collect();

        let data = serde_json::json!({
            "fdv_presets": presets,
            "comparables": COMPARABLE_PROTOCOLS,
        });

        let rows = FDV_PRESETS
            .iter()
            .enumerate()
            .map(|(i, p)| vec![i.to_string(), p.label.to_string(), fmt(p.value)])
            .collect();

        Ok(CommandOutput::success_with_data("Presets listed", data)
            .with_section(Section::table("FDV Presets", &["#", "Preset", "FDV"], rows, None))
            .with_section(comparables_section()))
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// FORMAT COMMAND
// ═══════════════════════════════════════════════════════════════════════════════

/// Format a single dollar amount
#[derive(Debug, Clone, PartialEq)]
pub struct FormatCommand {
    /// Amount to format
    pub value: f64,
    /// Use the share card style
    pub compact: bool,
}

impl Executable for FormatCommand {
    fn execute(&self, _app: &CliApp) -> CliResult<CommandOutput> {
        let style = if self.compact {
            FormatStyle::Compact
        } else {
            FormatStyle::Verbose
        };
        let formatted = format_usd(self.value, style);

        let data = serde_json::json!({
            "value": self.value,
            "style": style,
            "formatted": formatted,
        });

        Ok(CommandOutput::success_with_data("Formatted", data)
            .with_section(Section::lines("Formatted", vec![formatted])))
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// CONFIG COMMAND
// ═══════════════════════════════════════════════════════════════════════════════

/// Configuration command variants
#[derive(Debug, Clone)]
pub enum ConfigCommand {
    /// Show effective configuration
    Show,
    /// Write the file values and built-in defaults, without env or flag overrides
    Init {
        /// Target path (defaults to the standard location)
        path: Option<PathBuf>,
        /// Overwrite an existing file
        force: bool,
    },
}

impl Executable for ConfigCommand {
    fn execute(&self, app: &CliApp) -> CliResult<CommandOutput> {
        match self {
            ConfigCommand::Show => {
                let data = serde_json::to_value(app.config())
                    .map_err(|e| CliError::Execution(e.to_string()))?;
                let path = CliConfig::default_path();
                Ok(CommandOutput::success_with_data("Configuration", data).with_section(
                    Section::lines("Configuration", config_lines(app.config(), &path)),
                ))
            }
            ConfigCommand::Init { path, force } => {
                let path = path.clone().unwrap_or_else(CliConfig::default_path);

                if path.exists() && !force {
                    return Err(CliError::InvalidArgument(format!(
                        "Config already exists: {}. Use --force to overwrite.",
                        path.display()
                    )));
                }

                // Persist file values and built-in defaults only, never env or flag overrides
                let base = CliConfig::load_or_default(&path).unwrap_or_else(|e| {
                    tracing::warn!("replacing unreadable config {}: {}", path.display(), e);
                    CliConfig::default()
                });
                base.save(&path)?;
                tracing::info!("wrote config to {}", path.display());

                let data = serde_json::json!({ "path": path.display().to_string() });
                Ok(CommandOutput::success_with_data("Configuration written", data).with_section(
                    Section::lines("Configuration", vec![format!("Written to {}", path.display())]),
                ))
            }
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// SECTION BUILDERS
// ═══════════════════════════════════════════════════════════════════════════════

fn comparables_section() -> Section {
    let line = COMPARABLE_PROTOCOLS
        .iter()
        .map(|c| format!("{} · {}", c.name, c.valuation))
        .collect::<Vec<_>>()
        .join("   ");
    Section::lines("Comparable Perp DEX FDVs", vec![line])
}

fn verdict_section(report: &Report) -> Section {
    let tone = if report.verdict.is_success() {
        Tone::Positive
    } else {
        Tone::Negative
    };

    Section::rows(
        "Verdict",
        vec![
            DisplayRow {
                label: "Badge".into(),
                value: report.verdict.label().to_string(),
                tone: Some(tone),
            },
            DisplayRow {
                label: "Goal".into(),
                value: fmt(report.inputs.goal),
                tone: None,
            },
        ],
    )
}

fn card_section(report: &Report) -> Section {
    Section::lines("Share Card", report.card.lines())
}

fn scenario_section(report: &Report) -> Section {
    let rows = report
        .scenarios
        .iter()
        .map(|s| vec![s.fdv.clone(), s.token_price.clone(), s.net_profit.clone()])
        .collect();
    let highlight = report.scenarios.iter().position(|s| s.active);

    Section::table(
        "Your Profit Across FDV Scenarios",
        &["FDV", "Token Price", "Net Profit"],
        rows,
        highlight,
    )
}

fn winner_row(winner: &Winner) -> DisplayRow {
    DisplayRow {
        label: "Winner".into(),
        value: winner.to_string(),
        tone: None,
    }
}

fn config_lines(config: &CliConfig, path: &std::path::Path) -> Vec<String> {
    vec![
        format!("File:            {}", path.display()),
        format!("Format:          {}", config.format),
        format!("Points:          {}", config.defaults.points),
        format!("Cost per point:  {}", config.defaults.cost_per_point),
        format!("Supply:          {}", config.defaults.supply),
        format!("FDV preset:      {}", config.defaults.fdv_preset),
        format!("Goal:            {}", fmt(config.defaults.goal)),
    ]
}

// ═══════════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> CliApp {
        CliApp::default()
    }

    #[test]
    fn test_position_args_fall_back_to_config() {
        let inputs = PositionArgs::default().resolve(&CliConfig::default()).unwrap();
        assert_eq!(inputs.project.points, 170_000.0);
        assert_eq!(inputs.project.fdv, 100_000_000.0);
        assert_eq!(inputs.fdv_label, "$100M");
        assert_eq!(inputs.goal, 150_000.0);
    }

    #[test]
    fn test_position_args_override() {
        let args = PositionArgs {
            points: Some(1_000.0),
            fdv: Some("$1B".into()),
            ..Default::default()
        };
        let inputs = args.resolve(&CliConfig::default()).unwrap();
        assert_eq!(inputs.project.points, 1_000.0);
        assert_eq!(inputs.project.fdv, 1_000_000_000.0);
    }

    #[test]
    fn test_unknown_preset_is_invalid_argument() {
        let args = PositionArgs {
            fdv: Some("$7B".into()),
            ..Default::default()
        };
        assert!(matches!(
            args.resolve(&CliConfig::default()),
            Err(CliError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_check_command() {
        let output = app().execute(Command::Check(CheckCommand::default())).unwrap();
        assert!(output.success);
        assert_eq!(output.sections.len(), 5);

        let data = output.data.unwrap();
        assert_eq!(data["verdict"], "rekt");
        assert_eq!(data["card"]["net_profit"], "-$15,300");
    }

    #[test]
    fn test_check_zero_supply_rejected() {
        let cmd = CheckCommand {
            position: PositionArgs {
                supply: Some(0.0),
                ..Default::default()
            },
        };
        assert!(matches!(
            app().execute(Command::Check(cmd)),
            Err(CliError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_fractional_supply_flags_rejected() {
        let check = CheckCommand {
            position: PositionArgs {
                supply: Some(0.5),
                ..Default::default()
            },
        };
        assert!(matches!(
            app().execute(Command::Check(check)),
            Err(CliError::InvalidArgument(msg)) if msg.contains("--supply")
        ));

        let compare = CompareCommand {
            other: CompareArgs {
                points: Some(1_000.0),
                cost: Some(0.1),
                supply: Some(0.5),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(matches!(
            app().execute(Command::Compare(compare)),
            Err(CliError::InvalidArgument(msg)) if msg.contains("--b-supply")
        ));

        let at_floor = PositionArgs {
            supply: Some(1.0),
            ..Default::default()
        };
        assert!(at_floor.resolve(&CliConfig::default()).is_ok());
    }

    #[test]
    fn test_check_without_points_warns() {
        let cmd = CheckCommand {
            position: PositionArgs {
                points: Some(0.0),
                ..Default::default()
            },
        };
        let output = app().execute(Command::Check(cmd)).unwrap();
        assert_eq!(output.warnings.len(), 1);
    }

    #[test]
    fn test_compare_pending_by_default() {
        let output = app().execute(Command::Compare(CompareCommand::default())).unwrap();
        assert_eq!(output.warnings, vec!["Fill in Project B details above to compare."]);
    }

    #[test]
    fn test_compare_ready() {
        let cmd = CompareCommand {
            position: PositionArgs {
                fdv: Some("$1B".into()),
                ..Default::default()
            },
            other: CompareArgs {
                name: Some("Lighter".into()),
                points: Some(50_000.0),
                cost: Some(0.1),
                ..Default::default()
            },
        };
        let output = app().execute(Command::Compare(cmd)).unwrap();
        let data = output.data.unwrap();

        assert_eq!(data["comparison"]["status"], "ready");
        assert_eq!(data["comparison"]["winner"]["project"], "Hibachi");
        assert_eq!(output.sections.len(), 3);
    }

    #[test]
    fn test_presets_command() {
        let output = app().execute(Command::Presets(PresetsCommand)).unwrap();
        let data = output.data.unwrap();
        assert_eq!(data["fdv_presets"].as_array().unwrap().len(), 12);
        assert_eq!(data["comparables"].as_array().unwrap().len(), 5);
    }

    #[test]
    fn test_format_command() {
        let cmd = FormatCommand {
            value: -2_500_000_000.0,
            compact: true,
        };
        let data = app().execute(Command::Format(cmd)).unwrap().data.unwrap();
        assert_eq!(data["formatted"], "-$2.5B");
        assert_eq!(data["style"], "compact");
    }

    #[test]
    fn test_config_init_ignores_effective_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut effective = CliConfig::default();
        effective.color = false;
        effective.defaults.points = 1.0;
        let app = CliApp::new(effective);

        let init = ConfigCommand::Init {
            path: Some(path.clone()),
            force: false,
        };
        app.execute(Command::Config(init)).unwrap();
        assert_eq!(CliConfig::load(&path).unwrap(), CliConfig::default());

        // A forced rewrite keeps what the file already had
        std::fs::write(&path, r#"{"defaults": {"goal": 42000}}"#).unwrap();
        let forced = ConfigCommand::Init {
            path: Some(path.clone()),
            force: true,
        };
        app.execute(Command::Config(forced)).unwrap();

        let written = CliConfig::load(&path).unwrap();
        assert_eq!(written.defaults.goal, 42_000.0);
        assert_eq!(written.defaults.points, 170_000.0);
        assert!(written.color);
    }

    #[test]
    fn test_config_init_and_refuse_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let init = ConfigCommand::Init {
            path: Some(path.clone()),
            force: false,
        };
        app().execute(Command::Config(init.clone())).unwrap();
        assert!(path.exists());
        assert_eq!(CliConfig::load(&path).unwrap(), CliConfig::default());

        assert!(matches!(
            app().execute(Command::Config(init)),
            Err(CliError::InvalidArgument(_))
        ));

        let forced = ConfigCommand::Init {
            path: Some(path),
            force: true,
        };
        assert!(app().execute(Command::Config(forced)).is_ok());
    }
}
