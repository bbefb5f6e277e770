//! Hadith dataset preprocessor tool
//!
//! Validates raw hadith exports and produces the canonical bundled dataset
//! JSON consumed by the app.
//!
//! # Usage
//!
//! ```bash
//! # Raw JSON export
//! hadith-preprocessor --input export.json --output hadith.en.json
//!
//! # Gzip-compressed export
//! hadith-preprocessor --input export.json.gz --output hadith.en.json
//! ```

use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{HumanBytes, HumanDuration, ProgressBar, ProgressStyle};

/// Hadith preprocessor - validates raw exports into bundled datasets
#[derive(Parser, Debug)]
#[command(name = "hadith-preprocessor")]
#[command(author, version, about = "Validate raw hadith exports and build bundled dataset JSON")]
#[command(long_about = "
Validates raw hadith exports and produces the canonical dataset JSON
bundled with the Hidayah app.

Supports both raw JSON files and gzip-compressed files (.json.gz).
Records with missing ids, non-positive book/hadith numbers, empty
grading/category labels, or duplicate ids are dropped and reported.

Example usage:
  hadith-preprocessor -i export.json.gz -o hadith.en.json
  hadith-preprocessor --input export.json --output dataset.json --force
")]
struct Args {
    /// Input export file path (supports .json and .json.gz)
    #[arg(short, long)]
    input: PathBuf,

    /// Output dataset JSON path
    #[arg(short, long)]
    output: PathBuf,

    /// Overwrite existing output file
    #[arg(long, default_value = "false")]
    force: bool,

    /// Quiet mode - suppress progress bar
    #[arg(short, long, default_value = "false")]
    quiet: bool,
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    // Validate input file exists
    if !args.input.exists() {
        anyhow::bail!("Input file does not exist: {:?}", args.input);
    }

    // Check if output exists
    if args.output.exists() && !args.force {
        anyhow::bail!(
            "Output file already exists: {:?}. Use --force to overwrite.",
            args.output
        );
    }

    // Get input file size for reporting
    let input_size = std::fs::metadata(&args.input)
        .map(|m| m.len())
        .unwrap_or(0);

    println!("Input:  {:?} ({})", args.input, HumanBytes(input_size));
    println!("Output: {:?}", args.output);
    println!();

    log::info!("Starting import from {:?} to {:?}", args.input, args.output);

    let start_time = Instant::now();

    // Set up progress bar
    let total = Arc::new(AtomicU64::new(0));

    let pb = if args.quiet {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(0)
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} records ({eta})")?
            .progress_chars("#>-"),
    );

    let total_clone = total.clone();
    let pb_clone = pb.clone();

    // Run import with progress callback
    let progress_callback = move |current: u64, total_records: u64| {
        // Update total on first call
        if total_clone.load(Ordering::Relaxed) == 0 && total_records > 0 {
            total_clone.store(total_records, Ordering::Relaxed);
            pb_clone.set_length(total_records);
        }

        pb_clone.set_position(current);
    };

    let (dataset, stats) = hidayah_core::import_dataset(
        args.input.to_str().context("Invalid input path")?,
        progress_callback,
    )
    .context("Import failed")?;

    pb.finish_and_clear();

    // Write the bundled dataset
    let json = serde_json::to_string_pretty(&dataset).context("Failed to serialize dataset")?;
    std::fs::write(&args.output, json).context("Failed to write output file")?;

    let elapsed = start_time.elapsed();

    // Get output file size
    let output_size = std::fs::metadata(&args.output)
        .map(|m| m.len())
        .unwrap_or(0);

    // Print statistics
    println!("Import complete!");
    println!();
    println!("Statistics:");
    println!("  Records processed:  {:>12}", format_number(stats.records_processed));
    println!("  Records imported:   {:>12}", format_number(stats.records_imported));
    println!("  Collections:        {:>12}", format_number(stats.collections));
    println!("  Rejected:           {:>12}", format_number(stats.errors));
    println!("  Duplicates:         {:>12}", format_number(stats.duplicates));
    println!();
    println!("Performance:");
    println!("  Time elapsed:       {:>12}", HumanDuration(elapsed));
    println!("  Output size:        {:>12}", HumanBytes(output_size));

    if elapsed.as_secs() > 0 {
        let records_per_sec = stats.records_processed / elapsed.as_secs();
        println!("  Records/second:     {:>12}", format_number(records_per_sec));
    }

    log::info!(
        "Successfully imported {} records to {:?} in {:?}",
        stats.records_imported,
        args.output,
        elapsed
    );

    Ok(())
}

/// Format a number with thousand separators
fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}
