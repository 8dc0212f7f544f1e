//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use tabled::{
    builder::Builder,
    settings::{object::Columns, object::Rows, Alignment, Modify, Style},
};
use tlsdelta_runner::{RunConfig, RunSummary};

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

    /// Format the run summary.
    pub fn format_summary(&self, summary: &RunSummary) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(summary)?),
            OutputFormat::Table => Ok(self.format_summary_table(summary)),
        }
    }

    /// Format the summary as a two-column table.
    fn format_summary_table(&self, summary: &RunSummary) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Counter", "Value"]);
        for (label, value) in summary.rows() {
            builder.push_record([label.to_string(), value.to_string()]);
        }
        builder.push_record(["Runtime".to_string(), format!("{}ms", summary.runtime_ms)]);

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()))
            .with(Modify::new(Columns::last()).with(Alignment::right()));

        let status = if summary.written_dataset_count > 0 {
            self.success(&format!(
                "Wrote {} dataset(s) of {} deltas",
                summary.written_dataset_count, summary.chunk_size
            ))
        } else {
            self.warning(&format!(
                "No dataset written: {} delta(s) collected, {} needed per dataset",
                summary.total_deltas, summary.chunk_size
            ))
        };

        format!("{}\n{}", table, status)
    }

    /// Describe the run about to start.
    ///
    /// Nothing is printed in JSON mode so that stdout stays parseable.
    pub fn run_header(&self, config: &RunConfig) -> Option<String> {
        if self.format == OutputFormat::Json {
            return None;
        }
        Some(
            [
                self.info(&format!("Input directory:  {}", config.input_root.display())),
                self.info(&format!("Output directory: {}", config.output_dir.display())),
                self.info(&format!("Configuration:    {}", config.capture)),
            ]
            .join("\n"),
        )
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
            _ => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tlsdelta_domain::{CaptureConfiguration, RunCounters};
    use tlsdelta_extractor::ChunkReport;

    fn create_test_summary(written: usize) -> RunSummary {
        let counters = RunCounters {
            malformed_captures: 4,
            partial_connections: 2,
            negative_deltas: 1,
            written_dataset_count: written,
            captures_processed: 40,
            folders_processed: 2,
            ..Default::default()
        };
        RunSummary::new(
            &counters,
            ChunkReport { written, dropped: 17 },
            written * 100 + 17,
            100,
        )
    }

    #[test]
    fn test_table_format() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_summary(&create_test_summary(3)).unwrap();
        assert!(output.contains("Invalid capture files"));
        assert!(output.contains("Dropped deltas"));
        assert!(output.contains("17"));
        assert!(output.contains("✓ Wrote 3 dataset(s) of 100 deltas"));
    }

    #[test]
    fn test_table_format_without_datasets() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_summary(&create_test_summary(0)).unwrap();
        assert!(output.contains("⚠ No dataset written"));
    }

    #[test]
    fn test_json_format() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_summary(&create_test_summary(3)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["written_dataset_count"], 3);
        assert_eq!(value["dropped_delta_count"], 17);
        assert_eq!(value["malformed_captures"], 4);
    }

    #[test]
    fn test_run_header() {
        let config = RunConfig::new("in", "out", CaptureConfiguration::default());

        let table = Formatter::new(OutputFormat::Table, false);
        let header = table.run_header(&config).unwrap();
        assert!(header.contains("Input directory:  in"));
        assert!(header.contains("v2/partial/local"));

        let json = Formatter::new(OutputFormat::Json, false);
        assert!(json.run_header(&config).is_none());
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.success("test"), "✓ test");
        assert_eq!(formatter.error("test"), "✗ test");
    }
}
