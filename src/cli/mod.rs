//! Reality Check Command Line Interface.
//!
//! Collects calculator inputs, runs the engine and renders the results.

pub mod commands;
pub mod config;
pub mod output;

pub use commands::*;
pub use config::*;
pub use output::*;

// ═══════════════════════════════════════════════════════════════════════════════
// CLI APPLICATION
// ═══════════════════════════════════════════════════════════════════════════════

/// CLI Application state
#[derive(Debug)]
pub struct CliApp {
    /// Configuration
    config: CliConfig,
    /// Output formatter
    output: OutputFormatter,
    /// Verbose mode
    verbose: bool,
}

impl CliApp {
    /// Create new CLI application
    pub fn new(config: CliConfig) -> Self {
        let mut output = OutputFormatter::new(config.format);
        if !config.color {
            output = output.without_color();
        }

        Self {
            config,
            output,
            verbose: false,
        }
    }

    /// Enable verbose output
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Set output format
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        let color = self.output.color();
        self.config.format = format;
        self.output = OutputFormatter::new(format);
        if !color {
            self.output = self.output.without_color();
        }
        self
    }

    /// Get configuration
    pub fn config(&self) -> &CliConfig {
        &self.config
    }

    /// Get output formatter
    pub fn output(&self) -> &OutputFormatter {
        &self.output
    }

    /// Check if verbose
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Execute a command
    pub fn execute(&self, command: Command) -> CliResult<CommandOutput> {
        if self.verbose {
            self.output.info(&format!("Executing: {:?}", command));
        }
        tracing::debug!(?command, "executing");

        match command {
            Command::Check(cmd) => cmd.execute(self),
            Command::Scenarios(cmd) => cmd.execute(self),
            Command::Compare(cmd) => cmd.execute(self),
            Command::Card(cmd) => cmd.execute(self),
            Command::Presets(cmd) => cmd.execute(self),
            Command::Format(cmd) => cmd.execute(self),
            Command::Config(cmd) => cmd.execute(self),
        }
    }

    /// Execute a command and print its output
    pub fn run(&self, command: Command) -> CliResult<()> {
        let output = self.execute(command)?;
        self.output.render(&output);
        Ok(())
    }
}

impl Default for CliApp {
    fn default() -> Self {
        Self::new(CliConfig::default())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// CLI RESULT
// ═══════════════════════════════════════════════════════════════════════════════

/// CLI Error types
#[derive(Debug, Clone)]
pub enum CliError {
    /// Configuration error
    Config(String),
    /// Command execution error
    Execution(String),
    /// Invalid argument
    InvalidArgument(String),
    /// IO error
    Io(String),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Execution(msg) => write!(f, "Execution error: {}", msg),
            CliError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            CliError::Io(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl std::error::Error for CliError {}

impl From<crate::error::Error> for CliError {
    fn from(err: crate::error::Error) -> Self {
        if err.is_recoverable() {
            CliError::InvalidArgument(err.to_string())
        } else {
            CliError::Execution(err.to_string())
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Io(msg) => CliError::Io(msg),
            other => CliError::Config(other.to_string()),
        }
    }
}

/// CLI Result type
pub type CliResult<T> = Result<T, CliError>;

// ═══════════════════════════════════════════════════════════════════════════════
// COMMAND OUTPUT
// ═══════════════════════════════════════════════════════════════════════════════

/// Command execution output
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// Success status
    pub success: bool,
    /// Output message
    pub message: String,
    /// Structured data (JSON serializable)
    pub data: Option<serde_json::Value>,
    /// Human-readable sections for text and table output
    pub sections: Vec<Section>,
    /// Warnings
    pub warnings: Vec<String>,
}

impl CommandOutput {
    /// Create success output
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: None,
            sections: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Create success with data
    pub fn success_with_data(message: impl Into<String>, data: serde_json::Value) -> Self {
        Self {
            data: Some(data),
            ..Self::success(message)
        }
    }

    /// Add a human-readable section
    pub fn with_section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    /// Add warning
    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// COMMAND TRAIT
// ═══════════════════════════════════════════════════════════════════════════════

/// Trait for executable commands
pub trait Executable {
    /// Execute the command
    fn execute(&self, app: &CliApp) -> CliResult<CommandOutput>;
}

// ═══════════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════════
