//! CLI Configuration.
//!
//! Default calculator inputs and output preferences, loaded from a JSON file
//! and overridable through `REALITY_CHECK_*` environment variables.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::OutputFormat;
use crate::core::presets::{find_preset, preset_at, FdvPreset, FDV_PRESETS};
use crate::utils::constants::*;

// ═══════════════════════════════════════════════════════════════════════════════
// INPUT DEFAULTS
// ═══════════════════════════════════════════════════════════════════════════════

/// Default position of the primary project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputDefaults {
    /// Accrued points
    pub points: f64,
    /// Average cost per point
    pub cost_per_point: f64,
    /// Total token supply
    pub supply: f64,
    /// FDV preset (label, short label or index)
    pub fdv_preset: String,
    /// Net profit goal
    pub goal: f64,
}

impl Default for InputDefaults {
    fn default() -> Self {
        Self {
            points: DEFAULT_POINTS,
            cost_per_point: DEFAULT_COST_PER_POINT,
            supply: DEFAULT_SUPPLY,
            fdv_preset: default_preset_label(DEFAULT_FDV_PRESET_INDEX),
            goal: DEFAULT_GOAL,
        }
    }
}

/// Default position of the comparison project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompareDefaults {
    /// Project name
    pub name: String,
    /// Accrued points
    pub points: f64,
    /// Average cost per point
    pub cost_per_point: f64,
    /// Total token supply
    pub supply: f64,
    /// FDV preset (label, short label or index)
    pub fdv_preset: String,
}

impl Default for CompareDefaults {
    fn default() -> Self {
        Self {
            name: String::new(),
            points: 0.0,
            cost_per_point: 0.0,
            supply: DEFAULT_SUPPLY,
            fdv_preset: default_preset_label(DEFAULT_COMPARE_FDV_PRESET_INDEX),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// CLI CONFIGURATION
// ═══════════════════════════════════════════════════════════════════════════════

/// CLI Configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Output format
    pub format: OutputFormat,
    /// Enable coloured output
    pub color: bool,
    /// Primary project defaults
    pub defaults: InputDefaults,
    /// Comparison project defaults
    pub compare: CompareDefaults,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: true,
            defaults: InputDefaults::default(),
            compare: CompareDefaults::default(),
        }
    }
}

impl CliConfig {
    /// Load from file
    pub fn load(path: &PathBuf) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(e.to_string()))?;

        serde_json::from_str(&content)
            .map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Save to file
    pub fn save(&self, path: &PathBuf) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::Serialize(e.to_string()))?;

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Io(e.to_string()))?;
        }

        std::fs::write(path, content)
            .map_err(|e| ConfigError::Io(e.to_string()))
    }

    /// Load the file at `path`, or the built-in defaults when it is missing.
    /// No environment overrides are applied.
    pub fn load_or_default(path: &PathBuf) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!("no config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Load from file if present, falling back to defaults, then apply env overrides
    pub fn resolve(path: Option<&PathBuf>) -> Result<Self, ConfigError> {
        let path = path.cloned().unwrap_or_else(Self::default_path);

        let config = Self::load_or_default(&path)?.with_env();
        config.validate()?;
        Ok(config)
    }

    /// Apply `REALITY_CHECK_*` environment overrides
    pub fn with_env(mut self) -> Self {
        if let Some(points) = env_f64("REALITY_CHECK_POINTS") {
            self.defaults.points = points;
        }

        if let Some(cost) = env_f64("REALITY_CHECK_COST") {
            self.defaults.cost_per_point = cost;
        }

        if let Some(supply) = env_f64("REALITY_CHECK_SUPPLY") {
            self.defaults.supply = supply;
        }

        if let Ok(fdv) = std::env::var("REALITY_CHECK_FDV") {
            self.defaults.fdv_preset = fdv;
        }

        if let Some(goal) = env_f64("REALITY_CHECK_GOAL") {
            self.defaults.goal = goal;
        }

        if let Ok(format) = std::env::var("REALITY_CHECK_FORMAT") {
            match format.parse() {
                Ok(format) => self.format = format,
                Err(e) => tracing::warn!("ignoring REALITY_CHECK_FORMAT: {}", e),
            }
        }

        self
    }

    /// Get default config file path
    pub fn default_path() -> PathBuf {
        if let Ok(path) = std::env::var("REALITY_CHECK_CONFIG") {
            return PathBuf::from(path);
        }
        default_data_dir().join("config.json")
    }

    /// Primary project FDV preset
    pub fn fdv_preset(&self) -> Result<&'static FdvPreset, ConfigError> {
        find_preset(&self.defaults.fdv_preset).map_err(|e| ConfigError::Validation(e.to_string()))
    }

    /// Comparison project FDV preset
    pub fn compare_fdv_preset(&self) -> Result<&'static FdvPreset, ConfigError> {
        find_preset(&self.compare.fdv_preset).map_err(|e| ConfigError::Validation(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if below_min_supply(self.defaults.supply) || below_min_supply(self.compare.supply) {
            return Err(ConfigError::Validation(format!(
                "Supply must be at least {}",
                MIN_SUPPLY
            )));
        }

        let amounts = [
            ("points", self.defaults.points),
            ("cost_per_point", self.defaults.cost_per_point),
            ("goal", self.defaults.goal),
            ("compare.points", self.compare.points),
            ("compare.cost_per_point", self.compare.cost_per_point),
        ];
        for (name, value) in amounts {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Validation(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }

        self.fdv_preset()?;
        self.compare_fdv_preset()?;

        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// CONFIG ERROR
// ═══════════════════════════════════════════════════════════════════════════════

/// Configuration error
#[derive(Debug, Clone)]
pub enum ConfigError {
    /// IO error
    Io(String),
    /// Parse error
    Parse(String),
    /// Serialization error
    Serialize(String),
    /// Validation error
    Validation(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(msg) => write!(f, "IO error: {}", msg),
            ConfigError::Parse(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::Serialize(msg) => write!(f, "Serialization error: {}", msg),
            ConfigError::Validation(msg) => write!(f, "Validation error: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

// ═══════════════════════════════════════════════════════════════════════════════
// HELPER FUNCTIONS
// ═══════════════════════════════════════════════════════════════════════════════

fn default_preset_label(index: usize) -> String {
    preset_at(index)
        .unwrap_or(&FDV_PRESETS[0])
        .label
        .to_string()
}

/// True when a supply is below the input floor (or not a number)
pub(crate) fn below_min_supply(supply: f64) -> bool {
    !supply.is_finite() || supply < MIN_SUPPLY
}

fn env_f64(key: &str) -> Option<f64> {
    let raw = std::env::var(key).ok()?;
    match raw.trim().replace(',', "").parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!("ignoring {}: not a number: {}", key, raw);
            None
        }
    }
}

/// Get default data directory
fn default_data_dir() -> PathBuf {
    #[cfg(target_os = "macos")]
    {
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home).join("Library/Application Support/reality-check");
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Ok(appdata) = std::env::var("APPDATA") {
            return PathBuf::from(appdata).join("reality-check");
        }
    }

    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".reality-check");
    }

    PathBuf::from(".reality-check")
}

// ═══════════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════════
