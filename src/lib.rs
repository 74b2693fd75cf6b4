use std::fs::File;
use std::io::{self, BufWriter, Write};

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod processor;
pub mod walker;

pub use config::{Config, OUTPUT_FILENAME};
pub use error::{CollectError, ReadError};
pub use processor::RunSummary;

use processor::{SEPARATOR, report};

/// The core logic of the application, with progress on stdout.
pub fn run(config: &Config) -> anyhow::Result<RunSummary> {
    run_with_progress(config, &mut io::stdout().lock())
}

/// Truncates the output file, appends every text file under `config.root` to
/// it and writes progress and a summary to `progress`.
///
/// Fails with [`CollectError::OutputOpen`] before touching any input when the
/// output can't be created, and with [`CollectError::OutputWrite`] when it
/// can't be written. Failures writing to `progress` are ignored.
pub fn run_with_progress<P: Write>(config: &Config, progress: &mut P) -> anyhow::Result<RunSummary> {
    report(
        progress,
        format_args!("Script directory: {}", config.root.display()),
    );
    report(
        progress,
        format_args!("Output file will be: {}", config.output_path.display()),
    );

    let output_file =
        File::create(&config.output_path).map_err(|source| CollectError::OutputOpen {
            path: config.output_path.clone(),
            source,
        })?;
    let mut writer = BufWriter::new(output_file);
    log::info!("Writing to {}", config.output_path.display());

    // 1. Find all files under the root
    let entries = walker::find_files(&config.root);

    // 2. Append the readable ones
    let summary = processor::process_files(entries, config, &mut writer, progress)?;
    writer.flush().map_err(|source| CollectError::OutputWrite {
        path: config.output_path.clone(),
        source,
    })?;
    log::debug!("Run finished: {summary:?}");

    print_summary(progress, &summary);

    Ok(summary)
}

fn print_summary<P: Write>(progress: &mut P, summary: &RunSummary) {
    report(progress, format_args!("\n{SEPARATOR}"));
    report(progress, format_args!("Done!"));
    report(
        progress,
        format_args!("Successfully combined {} text file(s).", summary.processed),
    );
    report(
        progress,
        format_args!("Skipped {} binary or unreadable file(s).", summary.skipped),
    );
    report(progress, format_args!("Output saved to: {OUTPUT_FILENAME}"));
    report(progress, format_args!("{SEPARATOR}"));
    if let Err(e) = progress.flush() {
        log::debug!("progress output failed: {e}");
    }
}
