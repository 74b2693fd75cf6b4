use clap::{ColorChoice, Parser};

/// Combines every text file in the folder this binary lives in (and all of
/// its subfolders) into a single `combined_output.txt` next to the binary.
///
/// Binary and unreadable files are skipped. The binary itself and the output
/// file are never included.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None, color = ColorChoice::Always)]
pub struct Cli {
    /// Enable verbose diagnostics on stderr. Use -v for basic info, -vv for
    /// detailed debugging. `RUST_LOG` takes precedence when set.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
