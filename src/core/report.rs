//! Reconciliation report: the audit trail proving count parity.
//!
//! The report compares the total number of messages accepted from the input
//! files against the total number serialized into date files, and records
//! the per-file and per-date breakdowns that explain any difference. A
//! mismatch is not an error — a message accepted on input but lacking a
//! usable timestamp is dropped from every bucket, and the report is exactly
//! where that discrepancy becomes visible.
//!
//! Rendering is pure; writing the rendered text to `report.txt` in the input
//! directory is a separate, trivial step.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};

use super::channel::CHANNEL_NAME;
use super::loader::FileOutcome;
use crate::error::Result;

/// Input/output counts and context for one pipeline run.
#[derive(Debug, Clone)]
pub struct Reconciliation {
    input_dir: PathBuf,
    output_zip: PathBuf,
    files: BTreeMap<String, FileOutcome>,
    date_counts: BTreeMap<NaiveDate, usize>,
}

impl Reconciliation {
    pub fn new(
        input_dir: impl Into<PathBuf>,
        output_zip: impl Into<PathBuf>,
        files: BTreeMap<String, FileOutcome>,
        date_counts: BTreeMap<NaiveDate, usize>,
    ) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_zip: output_zip.into(),
            files,
            date_counts,
        }
    }

    /// Total messages accepted across all input files.
    pub fn total_input(&self) -> usize {
        self.files.values().map(FileOutcome::accepted).sum()
    }

    /// Total messages serialized into date files.
    pub fn total_output(&self) -> usize {
        self.date_counts.values().sum()
    }

    /// `true` when every accepted message made it into a date file.
    pub fn is_balanced(&self) -> bool {
        self.total_input() == self.total_output()
    }

    /// Renders the report with the current local time as generation stamp.
    pub fn render(&self) -> String {
        self.render_with_timestamp(&Local::now().format("%Y-%m-%d %H:%M:%S").to_string())
    }

    fn render_with_timestamp(&self, generated: &str) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "Slack JSON Conversion Report");
        let _ = writeln!(out, "Generated: {generated}");
        let _ = writeln!(out);
        let _ = writeln!(out, "Input Directory: {}", self.input_dir.display());
        let _ = writeln!(out, "Output ZIP: {}", self.output_zip.display());
        let _ = writeln!(out);
        let _ = writeln!(out, "Total JSON Files Processed: {}", self.files.len());
        let _ = writeln!(out);

        let _ = writeln!(out, "Input JSON Files Loaded:");
        for (name, outcome) in &self.files {
            let _ = writeln!(out, "  {name}: {} messages", outcome.accepted());
        }
        let _ = writeln!(out);

        let _ = writeln!(out, "Total Input Messages: {}", self.total_input());
        let _ = writeln!(out, "Output Files Created ({CHANNEL_NAME}/):");
        for (date, count) in &self.date_counts {
            let _ = writeln!(out, "  {}.json: {count} messages", date.format("%Y-%m-%d"));
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "Total Output Messages: {}", self.total_output());
        let _ = writeln!(out);

        if self.is_balanced() {
            let _ = writeln!(
                out,
                "Summary: All {} messages from the {} JSON files were successfully processed.",
                self.total_input(),
                self.files.len()
            );
        } else {
            let _ = writeln!(
                out,
                "Warning: Input and output message counts differ. Check for invalid messages or errors."
            );
        }

        out
    }

    /// Writes the rendered report as UTF-8 text to `path`.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        fs::write(path, self.render())?;
        Ok(())
    }
}
