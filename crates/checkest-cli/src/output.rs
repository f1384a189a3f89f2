//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use checkest_differ::{Judgment, Report};
use colored::*;
use serde::Serialize;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    judgment: Judgment,
    #[serde(flatten)]
    report: &'a Report,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Render a complete report.
    pub fn render(&self, report: &Report) -> Result<String> {
        match self.format {
            OutputFormat::Text => Ok(self.render_text(report)),
            OutputFormat::Table => Ok(self.render_table(report)),
            OutputFormat::Json => self.render_json(report),
            OutputFormat::Quiet => Ok(self.verdict(report)),
        }
    }

    fn render_text(&self, report: &Report) -> String {
        let mut lines = self.diagnostics(report);
        lines.push(self.verdict(report));
        lines.join("\n")
    }

    fn render_table(&self, report: &Report) -> String {
        let verdict = &report.verdict;
        let optional = |value: Option<f64>| value.map_or_else(|| "-".to_string(), |v| format!("{:.6}", v));

        let mut builder = Builder::default();
        builder.push_record(["Statistic", "Value"]);
        builder.push_record(["successes (k)".to_string(), verdict.tally.successes.to_string()]);
        builder.push_record(["cases (n)".to_string(), verdict.tally.cases.to_string()]);
        builder.push_record(["failures".to_string(), verdict.tally.failures().to_string()]);
        builder.push_record([
            "proportion".to_string(),
            optional(verdict.tally.proportion()),
        ]);
        builder.push_record(["z observed".to_string(), optional(verdict.z_observed)]);
        builder.push_record([
            "critical value".to_string(),
            format!("{:.6}", -verdict.z_critical),
        ]);
        builder.push_record(["Wilson lower".to_string(), optional(verdict.wilson_lower)]);
        builder.push_record(["Wilson upper".to_string(), optional(verdict.wilson_upper)]);
        builder.push_record([
            "alpha".to_string(),
            verdict.parameters.alpha().to_string(),
        ]);
        builder.push_record([
            "p0".to_string(),
            verdict.parameters.probability().to_string(),
        ]);
        builder.push_record([
            "differences".to_string(),
            report.diff.differences().to_string(),
        ]);
        builder.push_record([
            "whitespace mismatches".to_string(),
            report.diff.whitespace_mismatches.to_string(),
        ]);

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        let mut lines = self.diagnostics(report);
        lines.push(table.to_string());
        lines.push(self.verdict(report));
        lines.join("\n")
    }

    fn render_json(&self, report: &Report) -> Result<String> {
        let json = JsonReport {
            judgment: report.judgment(),
            report,
        };
        Ok(serde_json::to_string_pretty(&json)?)
    }

    /// Diagnostic and advisory lines in stream order, then the summary.
    fn diagnostics(&self, report: &Report) -> Vec<String> {
        let diff = &report.diff;
        let mut records: Vec<_> = diff.records.iter().chain(&diff.advisories).collect();
        records.sort_by_key(|record| (record.line, record.token));

        let mut lines: Vec<String> = records.iter().map(ToString::to_string).collect();
        let differences = diff.differences();
        if differences > 0 || diff.whitespace_mismatches > 0 {
            let mut summary = format!("Found {} differences in {} lines", differences, diff.lines);
            if diff.whitespace_mismatches > 0 {
                summary.push_str(&format!(
                    ", {} whitespace mismatches",
                    diff.whitespace_mismatches
                ));
            }
            lines.push(summary);
        }
        lines
    }

    /// Single line stating the judgment and its statistics.
    pub fn verdict(&self, report: &Report) -> String {
        let verdict = &report.verdict;
        let tally = verdict.tally;

        let statistics = match (verdict.z_observed, verdict.wilson_lower) {
            (Some(z), Some(lower)) => format!(
                "{}/{} values inside their intervals (z = {:.4}, critical = {:.4}, Wilson lower bound = {:.4})",
                tally.successes, tally.cases, z, -verdict.z_critical, lower
            ),
            _ => "no interval cases".to_string(),
        };

        match report.judgment() {
            Judgment::Accepted => self.colorize(&format!("Accepted: {}", statistics), "green"),
            Judgment::RejectedStatistically => self.colorize(
                &format!(
                    "Rejected: {}; significantly below p0 = {} at alpha = {}",
                    statistics,
                    verdict.parameters.probability(),
                    verdict.parameters.alpha()
                ),
                "red",
            ),
            Judgment::RejectedStructurally => self.colorize(
                &format!(
                    "Rejected: {} structural differences; {}",
                    report.diff.differences(),
                    statistics
                ),
                "red",
            ),
        }
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            _ => text.to_string(),
        }
    }
}
