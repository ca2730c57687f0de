//! CLI Output Formatting.
//!
//! Handles output formatting for different formats (text, JSON, table).

use console::style;
use serde::{Deserialize, Serialize};

use super::CommandOutput;
use crate::display::{DisplayRow, Tone};

// ═══════════════════════════════════════════════════════════════════════════════
// OUTPUT FORMAT
// ═══════════════════════════════════════════════════════════════════════════════

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON format
    Json,
    /// Pretty JSON format
    JsonPretty,
    /// Table format
    Table,
    /// Minimal format (values only)
    Minimal,
}

impl OutputFormat {
    /// Check if this format emits JSON
    pub fn is_json(&self) -> bool {
        matches!(self, OutputFormat::Json | OutputFormat::JsonPretty)
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "json-pretty" | "jsonpretty" => Ok(OutputFormat::JsonPretty),
            "table" | "tbl" => Ok(OutputFormat::Table),
            "minimal" | "min" => Ok(OutputFormat::Minimal),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::JsonPretty => "json-pretty",
            OutputFormat::Table => "table",
            OutputFormat::Minimal => "minimal",
        };
        write!(f, "{}", name)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// SECTIONS
// ═══════════════════════════════════════════════════════════════════════════════

/// Titled block of human-readable output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Section title
    pub title: String,
    /// Section content
    pub body: SectionBody,
}

/// Content of a section
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionBody {
    /// Label / value rows
    Rows(Vec<DisplayRow>),
    /// Table with header; `highlight` marks a row to emphasise
    Table {
        /// Column headers
        headers: Vec<String>,
        /// Cell rows
        rows: Vec<Vec<String>>,
        /// Row index to emphasise
        highlight: Option<usize>,
    },
    /// Free text lines
    Lines(Vec<String>),
}

impl Section {
    /// Rows section
    pub fn rows(title: impl Into<String>, rows: Vec<DisplayRow>) -> Self {
        Self {
            title: title.into(),
            body: SectionBody::Rows(rows),
        }
    }

    /// Table section
    pub fn table(
        title: impl Into<String>,
        headers: &[&str],
        rows: Vec<Vec<String>>,
        highlight: Option<usize>,
    ) -> Self {
        Self {
            title: title.into(),
            body: SectionBody::Table {
                headers: headers.iter().map(|h| h.to_string()).collect(),
                rows,
                highlight,
            },
        }
    }

    /// Text section
    pub fn lines(title: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            title: title.into(),
            body: SectionBody::Lines(lines),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// OUTPUT FORMATTER
// ═══════════════════════════════════════════════════════════════════════════════

/// Output formatter for CLI
#[derive(Debug, Clone, Default)]
pub struct OutputFormatter {
    /// Output format
    format: OutputFormat,
    /// Color enabled
    color: bool,
}

impl OutputFormatter {
    /// Create new formatter
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            color: true,
        }
    }

    /// Disable color
    pub fn without_color(mut self) -> Self {
        self.color = false;
        self
    }

    /// Get format
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Check if color is enabled
    pub fn color(&self) -> bool {
        self.color
    }

    /// Print a command result in the configured format
    pub fn render(&self, output: &CommandOutput) {
        match self.format {
            OutputFormat::Json | OutputFormat::JsonPretty => {
                let json = serde_json::json!({
                    "status": if output.success { "success" } else { "error" },
                    "message": output.message,
                    "data": output.data,
                    "warnings": output.warnings,
                });
                self.print_json(&json);
            }
            OutputFormat::Minimal => {
                if let Some(data) = &output.data {
                    self.print_minimal(data);
                }
            }
            OutputFormat::Text | OutputFormat::Table => {
                if output.sections.is_empty() {
                    if let Some(data) = &output.data {
                        self.print_text(data, 0);
                    }
                } else {
                    for section in &output.sections {
                        self.section(section);
                    }
                }

                for warning in &output.warnings {
                    self.warning(warning);
                }
            }
        }
    }

    /// Print warning message
    pub fn warning(&self, message: &str) {
        if self.format.is_json() {
            self.print_json(&serde_json::json!({ "status": "warning", "message": message }));
        } else if self.color {
            println!("{} {}", style("⚠").yellow(), message);
        } else {
            println!("WARNING: {}", message);
        }
    }

    /// Print info message
    ///
    /// Machine-readable formats send it to stderr so stdout stays parseable.
    pub fn info(&self, message: &str) {
        let line = self.info_line(message);
        if self.is_machine_readable() {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
    }

    fn info_line(&self, message: &str) -> String {
        if self.format.is_json() {
            serde_json::json!({ "status": "info", "message": message }).to_string()
        } else if self.color {
            format!("{} {}", style("ℹ").blue(), message)
        } else {
            format!("INFO: {}", message)
        }
    }

    /// JSON and minimal output are meant to be piped
    fn is_machine_readable(&self) -> bool {
        self.format.is_json() || self.format == OutputFormat::Minimal
    }

    /// Print a section
    pub fn section(&self, section: &Section) {
        self.header(&section.title);

        match &section.body {
            SectionBody::Rows(rows) if self.format == OutputFormat::Table => {
                let cells: Vec<Vec<String>> = rows
                    .iter()
                    .map(|r| vec![r.label.clone(), r.value.clone()])
                    .collect();
                for line in table_lines(&["Metric", "Value"], &cells) {
                    println!("  {}", line);
                }
            }
            SectionBody::Rows(rows) => {
                let width = rows.iter().map(|r| r.label.chars().count()).max().unwrap_or(0);
                for row in rows {
                    println!(
                        "  {:width$}  {}",
                        row.label,
                        self.toned(&row.value, row.tone),
                        width = width
                    );
                }
            }
            SectionBody::Table {
                headers,
                rows,
                highlight,
            } => {
                let headers: Vec<&str> = headers.iter().map(String::as_str).collect();
                let lines = table_lines(&headers, rows);
                for (i, line) in lines.iter().enumerate() {
                    // First two lines are the header and the separator
                    let is_header = i == 0;
                    let is_highlight = i >= 2 && *highlight == Some(i - 2);
                    if self.color && (is_header || is_highlight) {
                        println!("  {}", style(line).bold());
                    } else {
                        println!("  {}", line);
                    }
                }
            }
            SectionBody::Lines(lines) => {
                for line in lines {
                    println!("  {}", line);
                }
            }
        }
    }

    /// Colour a value by tone
    pub fn toned(&self, value: &str, tone: Option<Tone>) -> String {
        if !self.color {
            return value.to_string();
        }
        match tone {
            Some(Tone::Positive) => style(value).green().to_string(),
            Some(Tone::Negative) => style(value).red().to_string(),
            None => value.to_string(),
        }
    }

    /// Print section header
    fn header(&self, title: &str) {
        println!();
        if self.color {
            println!("{}", style(format!("=== {} ===", title)).cyan().bold());
        } else {
            println!("=== {} ===", title);
        }
    }

    /// Print JSON data
    fn print_json<T: Serialize>(&self, data: &T) {
        let output = if matches!(self.format, OutputFormat::JsonPretty) {
            serde_json::to_string_pretty(data)
        } else {
            serde_json::to_string(data)
        };

        match output {
            Ok(json) => println!("{}", json),
            Err(e) => tracing::warn!("failed to serialize output: {}", e),
        }
    }

    /// Print text formatted data
    fn print_text(&self, json: &serde_json::Value, indent: usize) {
        let prefix = "  ".repeat(indent);

        match json {
            serde_json::Value::Object(map) => {
                for (key, value) in map {
                    let key = if self.color {
                        style(key).bold().to_string()
                    } else {
                        key.clone()
                    };
                    match value {
                        serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                            println!("{}{}:", prefix, key);
                            self.print_text(value, indent + 1);
                        }
                        _ => println!("{}{}: {}", prefix, key, format_value(value)),
                    }
                }
            }
            serde_json::Value::Array(arr) => {
                for (i, item) in arr.iter().enumerate() {
                    println!("{}[{}]:", prefix, i);
                    self.print_text(item, indent + 1);
                }
            }
            _ => println!("{}{}", prefix, format_value(json)),
        }
    }

    /// Print minimal output
    fn print_minimal(&self, json: &serde_json::Value) {
        match json {
            serde_json::Value::Object(map) => {
                for value in map.values() {
                    self.print_minimal(value);
                }
            }
            serde_json::Value::Array(arr) => {
                for item in arr {
                    self.print_minimal(item);
                }
            }
            _ => println!("{}", format_value(json)),
        }
    }
}

/// Lay out a text table: header, separator, then one line per row
pub fn table_lines(headers: &[&str], rows: &[Vec<String>]) -> Vec<String> {
    if headers.is_empty() {
        return Vec::new();
    }

    // Calculate column widths
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }
    }

    let join = |cells: Vec<String>| cells.join(" | ").trim_end().to_string();

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(join(
        headers
            .iter()
            .enumerate()
            .map(|(i, h)| format!("{:width$}", h, width = widths[i]))
            .collect(),
    ));
    lines.push(widths.iter().map(|w| "-".repeat(*w)).collect::<Vec<_>>().join("-+-"));

    for row in rows {
        lines.push(join(
            row.iter()
                .enumerate()
                .map(|(i, cell)| {
                    let width = widths.get(i).copied().unwrap_or(cell.len());
                    format!("{:width$}", cell, width = width)
                })
                .collect(),
        ));
    }
    lines
}

/// Format a JSON value for text output
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => "null".into(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::String(s) => s.clone(),
        _ => value.to_string(),
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_parse() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("JSON-PRETTY".parse::<OutputFormat>().unwrap(), OutputFormat::JsonPretty);
        assert!("invalid".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_output_format_display_roundtrip() {
        for format in [
            OutputFormat::Text,
            OutputFormat::Json,
            OutputFormat::JsonPretty,
            OutputFormat::Table,
            OutputFormat::Minimal,
        ] {
            assert_eq!(format.to_string().parse::<OutputFormat>().unwrap(), format);
        }
    }

    #[test]
    fn test_formatter_creation() {
        let formatter = OutputFormatter::new(OutputFormat::Json);
        assert_eq!(formatter.format(), OutputFormat::Json);
        assert!(formatter.color());
        assert!(!formatter.without_color().color());
    }

    #[test]
    fn test_info_kept_off_stdout_when_piped() {
        let json = OutputFormatter::new(OutputFormat::Json);
        assert!(json.is_machine_readable());
        let line: serde_json::Value = serde_json::from_str(&json.info_line("Executing")).unwrap();
        assert_eq!(line["status"], "info");

        assert!(OutputFormatter::new(OutputFormat::JsonPretty).is_machine_readable());
        assert!(OutputFormatter::new(OutputFormat::Minimal).is_machine_readable());

        let text = OutputFormatter::new(OutputFormat::Text).without_color();
        assert!(!text.is_machine_readable());
        assert_eq!(text.info_line("Executing"), "INFO: Executing");
    }

    #[test]
    fn test_toned_without_color() {
        let formatter = OutputFormatter::new(OutputFormat::Text).without_color();
        assert_eq!(formatter.toned("-$15,300", Some(Tone::Negative)), "-$15,300");
    }

    #[test]
    fn test_table_lines() {
        let rows = vec![
            vec!["$50.0M".to_string(), "$0.0500".to_string()],
            vec!["$10.00B".to_string(), "$10.00".to_string()],
        ];
        let lines = table_lines(&["FDV", "Token Price"], &rows);

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "FDV     | Token Price");
        assert_eq!(lines[1], "--------+------------");
        assert_eq!(lines[2], "$50.0M  | $0.0500");
        assert_eq!(lines[3], "$10.00B | $10.00");
        assert!(table_lines(&[], &rows).is_empty());
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(&serde_json::Value::Null), "null");
        assert_eq!(format_value(&serde_json::json!(true)), "true");
        assert_eq!(format_value(&serde_json::json!(42)), "42");
        assert_eq!(format_value(&serde_json::json!("hello")), "hello");
    }
}
