//! Command-line interface definition using clap.

use std::path::PathBuf;

use clap::Parser;

/// Repackage loose Slack search-export JSON files into a standard export ZIP
/// and write a reconciliation report confirming no messages were lost.
#[derive(Parser, Debug, Clone)]
#[command(name = "slackpack")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    slackpack ./search_exports
    slackpack ./search_exports /tmp/combined_export.zip

The report is always written to <INPUT_DIR>/report.txt.")]
pub struct Args {
    /// Directory containing the loose *.json message files (not recursed)
    pub input_dir: PathBuf,

    /// Path for the output archive [default: <INPUT_DIR>/slack_export.zip]
    pub output: Option<PathBuf>,
}

impl Args {
    /// The effective archive destination, applying the default.
    pub fn output_zip(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| self.input_dir.join("slack_export.zip"))
    }

    /// Where the reconciliation report is written.
    pub fn report_path(&self) -> PathBuf {
        self.input_dir.join("report.txt")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requires_input_dir() {
        assert!(Args::try_parse_from(["slackpack"]).is_err());
    }

    #[test]
    fn test_default_output_zip() {
        let args = Args::try_parse_from(["slackpack", "/exports"]).unwrap();
        assert_eq!(args.output_zip(), PathBuf::from("/exports/slack_export.zip"));
        assert_eq!(args.report_path(), PathBuf::from("/exports/report.txt"));
    }

    #[test]
    fn test_explicit_output_zip() {
        let args = Args::try_parse_from(["slackpack", "/exports", "/tmp/out.zip"]).unwrap();
        assert_eq!(args.output_zip(), PathBuf::from("/tmp/out.zip"));
        // Report location is tied to the input directory, not the archive.
        assert_eq!(args.report_path(), PathBuf::from("/exports/report.txt"));
    }
}
