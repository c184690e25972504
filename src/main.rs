//! # slackpack CLI
//!
//! Command-line interface for the slackpack library.

use std::process;

use clap::Parser as ClapParser;

use slackpack::archive::{ArchiveWriter, ZipArchiveWriter};
use slackpack::cli::Args;
use slackpack::core::{
    Aggregates, FileOutcome, Reconciliation, build_directory, build_export_tree,
    load_directory, partition_by_date,
};
use slackpack::SlackpackError;

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), SlackpackError> {
    let args = <Args as ClapParser>::parse();
    let output_zip = args.output_zip();
    let report_path = args.report_path();

    // Print header
    println!("📦 slackpack v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:   {}", args.input_dir.display());
    println!("💾 Output:  {}", output_zip.display());
    println!();

    // Step 1: Load every *.json file, isolating per-file failures
    println!("⏳ Loading JSON files...");
    let input = load_directory(&args.input_dir)?;
    for (name, outcome) in &input.files {
        if let FileOutcome::Failed(reason) = outcome {
            eprintln!("⚠️  Warning: {}: {}", name, reason);
        }
    }
    let file_count = input.files.len();
    println!(
        "   Found {} messages in {} files",
        input.messages.len(),
        file_count
    );

    // The one unrecoverable condition: nothing to package
    if input.messages.is_empty() {
        return Err(SlackpackError::no_messages(&args.input_dir));
    }

    // Step 2: Build the user directory and team tally
    let (directory, teams) = build_directory(&input.messages);
    println!("👤 Users:   {} registered", directory.len());

    // Step 3: Sort and bucket by UTC date
    println!("🗓️  Partitioning by date...");
    let file_counts = input.files;
    let partition = partition_by_date(input.messages);
    for id in &partition.skipped {
        eprintln!("⚠️  Warning: Skipping message with invalid 'ts': {}", id);
    }
    println!("   {} date files", partition.buckets.len());

    // Step 4: Synthesize the channel and emit the archive
    let aggregates = Aggregates::synthesize(&directory, &teams, partition.min_ts);
    println!("🏷️  Team:    {}", aggregates.team_id);
    let tree = build_export_tree(&directory, &aggregates.channel, &partition.buckets)?;
    ZipArchiveWriter.write(&output_zip, &tree.entries)?;

    // Step 5: Reconcile counts and write the report
    let reconciliation = Reconciliation::new(
        &args.input_dir,
        &output_zip,
        file_counts,
        tree.date_counts,
    );
    reconciliation.write_to(&report_path)?;

    // Summary
    println!();
    println!("✅ ZIP created at: {}", output_zip.display());
    println!("📄 Report saved to: {}", report_path.display());
    println!(
        "📊 Processed {} files: {} messages in, {} messages out",
        file_count,
        reconciliation.total_input(),
        reconciliation.total_output()
    );
    if !reconciliation.is_balanced() {
        println!("⚠️  Warning: Message count mismatch. Check report.txt for details.");
    }

    Ok(())
}
