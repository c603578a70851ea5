//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use rapport_domain::RelationshipState;
use rapport_interpreter::InterpretationReport;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a relationship state alongside its key string.
    pub fn format_state(&self, state: &RelationshipState, key: &str) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_state_json(state, key),
            OutputFormat::Table => self.format_state_table(state, key),
            OutputFormat::Quiet => Ok(key.to_string()),
        }
    }

    /// Format a state as JSON.
    fn format_state_json(&self, state: &RelationshipState, key: &str) -> Result<String> {
        let dimensions: serde_json::Map<String, serde_json::Value> = state
            .entries()
            .map(|(dim, value)| {
                (
                    dim.as_str().to_string(),
                    serde_json::json!({
                        "glyphs": value.glyphs(),
                        "trend": value.trend().as_str(),
                    }),
                )
            })
            .collect();

        let object = serde_json::json!({
            "key": key,
            "super_key": state.is_super_key(),
            "ratio": state.compression().map(|c| c.ratio),
            "dimensions": dimensions,
        });

        Ok(serde_json::to_string_pretty(&object)?)
    }

    /// Format a state as a table.
    fn format_state_table(&self, state: &RelationshipState, key: &str) -> Result<String> {
        let mut builder = Builder::default();
        builder.push_record(["Dimension", "Value", "Trend"]);

        for (dim, value) in state.entries() {
            builder.push_record([dim.as_str(), value.glyphs(), value.trend().as_str()]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        let mut out = table.to_string();
        out.push('\n');
        if let Some(info) = state.compression() {
            out.push_str(&self.info(&format!("SuperKey (ratio {})", info.ratio)));
            out.push('\n');
        }
        out.push_str(&format!("Key: {}", key));
        Ok(out)
    }

    /// Format an interpretation report.
    pub fn format_report(&self, report: &InterpretationReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            OutputFormat::Table => self.format_report_table(report),
            OutputFormat::Quiet => Ok(report.overall_trend.to_string()),
        }
    }

    /// Format a report as a table.
    fn format_report_table(&self, report: &InterpretationReport) -> Result<String> {
        let mut builder = Builder::default();
        builder.push_record(["Dimension", "Reading"]);

        for (name, phrase) in report.phrases() {
            builder.push_record([name, phrase]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        let mut out = table.to_string();
        out.push('\n');
        if report.is_super_key {
            let note = match report.compression_ratio {
                Some(ratio) => format!("Compressed history (ratio {})", ratio),
                None => "Compressed history".to_string(),
            };
            out.push_str(&self.info(&note));
            out.push('\n');
        }
        out.push_str(&format!("Overall trend: {}", report.overall_trend));
        Ok(out)
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}
