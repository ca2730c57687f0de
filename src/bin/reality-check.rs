//! Reality Check CLI
//!
//! No hype, no copium. Command-line airdrop math for points programs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use console::style;

use reality_check::cli::{
    CardCommand, CheckCommand, CliApp, CliConfig, Command, CompareArgs, CompareCommand,
    ConfigCommand, FormatCommand, OutputFormat, PositionArgs, PresetsCommand, ScenarioCommand,
};

/// Reality Check - airdrop profit and loss across FDV scenarios
#[derive(Parser)]
#[command(name = "reality-check")]
#[command(author = "Reality Check Team")]
#[command(version = reality_check::VERSION)]
#[command(about = "Estimate airdrop PnL from points, cost per point, supply and FDV", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Path to config file
    #[arg(long, global = true, env = "REALITY_CHECK_CONFIG")]
    config: Option<PathBuf>,

    /// Output format (text, json, json-pretty, table, minimal)
    #[arg(short, long, global = true)]
    format: Option<OutputFormat>,

    /// Disable coloured output
    #[arg(long, global = true)]
    no_color: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full breakdown, verdict, share card and scenario table
    Check(Position),

    /// Profit across FDV scenarios
    Scenarios(Position),

    /// Compare against another airdrop
    Compare {
        #[command(flatten)]
        position: Position,

        #[command(flatten)]
        other: Other,
    },

    /// Share card summary
    Card(Position),

    /// List FDV presets and comparable protocols
    Presets,

    /// Format a dollar amount
    Format {
        /// Amount to format
        #[arg(allow_negative_numbers = true)]
        value: f64,

        /// Use share card style
        #[arg(long)]
        compact: bool,
    },

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Args)]
struct Position {
    /// Your points / tokens
    #[arg(short, long)]
    points: Option<f64>,

    /// Average cost per point ($)
    #[arg(short, long)]
    cost: Option<f64>,

    /// Total token supply
    #[arg(short, long)]
    supply: Option<f64>,

    /// Expected FDV at listing (preset label, e.g. "$1B", or index)
    #[arg(long)]
    fdv: Option<String>,

    /// Target net profit ($)
    #[arg(short, long)]
    goal: Option<f64>,
}

#[derive(Args)]
struct Other {
    /// Project B name
    #[arg(long)]
    b_name: Option<String>,

    /// Project B points
    #[arg(long)]
    b_points: Option<f64>,

    /// Project B cost per point ($)
    #[arg(long)]
    b_cost: Option<f64>,

    /// Project B token supply
    #[arg(long)]
    b_supply: Option<f64>,

    /// Project B FDV preset
    #[arg(long)]
    b_fdv: Option<String>,
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show effective configuration
    Show,

    /// Write the defaults file (env and flag overrides are not saved)
    Init {
        /// Force overwrite existing configuration
        #[arg(long)]
        force: bool,
    },
}

impl From<Position> for PositionArgs {
    fn from(p: Position) -> Self {
        Self {
            points: p.points,
            cost: p.cost,
            supply: p.supply,
            fdv: p.fdv,
            goal: p.goal,
        }
    }
}

impl From<Other> for CompareArgs {
    fn from(o: Other) -> Self {
        Self {
            name: o.b_name,
            points: o.b_points,
            cost: o.b_cost,
            supply: o.b_supply,
            fdv: o.b_fdv,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// MAIN
// ═══════════════════════════════════════════════════════════════════════════════

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = CliConfig::resolve(cli.config.as_ref())?;
    if cli.no_color {
        config.color = false;
    }

    let mut app = CliApp::new(config).with_verbose(cli.verbose);
    if let Some(format) = cli.format {
        app = app.with_format(format);
    }

    let command = into_command(cli.command, cli.config);
    app.run(command)?;

    Ok(())
}

fn into_command(command: Commands, config_path: Option<PathBuf>) -> Command {
    match command {
        Commands::Check(p) => Command::Check(CheckCommand { position: p.into() }),
        Commands::Scenarios(p) => Command::Scenarios(ScenarioCommand { position: p.into() }),
        Commands::Compare { position, other } => Command::Compare(CompareCommand {
            position: position.into(),
            other: other.into(),
        }),
        Commands::Card(p) => Command::Card(CardCommand { position: p.into() }),
        Commands::Presets => Command::Presets(PresetsCommand),
        Commands::Format { value, compact } => Command::Format(FormatCommand { value, compact }),
        Commands::Config(ConfigCommands::Show) => Command::Config(ConfigCommand::Show),
        Commands::Config(ConfigCommands::Init { force }) => Command::Config(ConfigCommand::Init {
            path: config_path,
            force,
        }),
    }
}
