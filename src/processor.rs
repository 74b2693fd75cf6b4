use crate::config::Config;
use crate::error::{CollectError, ReadError};
use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Separator line framing each file header and the final summary.
pub(crate) const SEPARATOR: &str =
    "================================================================================";

/// Counts reported at the end of a run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Files written to the output.
    pub processed: usize,
    /// Files that were binary or couldn't be read.
    pub skipped: usize,
    /// The binary itself and the output file. Not part of the other counts.
    pub excluded: usize,
}

/// Reads a whole file and decodes it as UTF-8.
pub fn read_text(path: &Path) -> Result<String, ReadError> {
    let bytes = fs::read(path).map_err(|source| ReadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    String::from_utf8(bytes).map_err(|source| ReadError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes one banner-plus-content block for `relative_path`.
pub fn write_block<W: Write>(out: &mut W, relative_path: &Path, content: &str) -> io::Result<()> {
    writeln!(out, "{SEPARATOR}")?;
    writeln!(out, "--- File: {} ---", relative_path.display())?;
    writeln!(out, "{SEPARATOR}")?;
    writeln!(out)?;
    out.write_all(content.as_bytes())?;
    write!(out, "\n\n")
}

/// Writes one progress line. Progress is informational only, so a closed or
/// broken stdout never stops a run.
pub(crate) fn report<P: Write>(progress: &mut P, line: fmt::Arguments<'_>) {
    if let Err(e) = progress
        .write_fmt(line)
        .and_then(|()| progress.write_all(b"\n"))
    {
        log::debug!("progress output failed: {e}");
    }
}

/// Resolves symlinks and `..` so paths can be compared. Paths that can't be
/// resolved are compared as given.
fn resolve(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}

/// Appends every readable text file from `entries` to `out`, reporting each
/// file on `progress`.
///
/// The running binary and the output file are left out. Files that can't be
/// read or aren't UTF-8 are reported and counted as skipped; only failures
/// writing to `out` abort the loop, as [`CollectError::OutputWrite`].
pub fn process_files<I, W, P>(
    entries: I,
    config: &Config,
    out: &mut W,
    progress: &mut P,
) -> anyhow::Result<RunSummary>
where
    I: IntoIterator<Item = PathBuf>,
    W: Write,
    P: Write,
{
    let program_path = resolve(&config.program_path);
    let output_path = resolve(&config.output_path);
    let mut summary = RunSummary::default();

    for path in entries {
        let relative_path = path.strip_prefix(&config.root).unwrap_or(&path);

        let resolved = resolve(&path);
        if resolved == program_path || resolved == output_path {
            report(
                progress,
                format_args!("Skipping: {} (Script/Output)", relative_path.display()),
            );
            summary.excluded += 1;
            continue;
        }

        match read_text(&path) {
            Ok(content) => {
                write_block(out, relative_path, &content).map_err(|source| {
                    CollectError::OutputWrite {
                        path: config.output_path.clone(),
                        source,
                    }
                })?;
                report(
                    progress,
                    format_args!("Processed: {}", relative_path.display()),
                );
                summary.processed += 1;
            }
            Err(e) => {
                log::debug!("{e}");
                report(
                    progress,
                    format_args!("Skipping: {} (Binary or unreadable)", relative_path.display()),
                );
                summary.skipped += 1;
            }
        }
    }

    Ok(summary)
}
