use anyhow::Context;
use std::env;
use std::path::{Path, PathBuf};

/// Name of the file written next to the binary.
pub const OUTPUT_FILENAME: &str = "combined_output.txt";

/// Name assumed for the binary when the OS can't tell us where it lives.
const FALLBACK_PROGRAM_NAME: &str = "collect-code";

/// The fixed locations a run works with. All paths are absolute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory whose tree gets combined.
    pub root: PathBuf,
    /// The running binary. Never read as content.
    pub program_path: PathBuf,
    /// Where the combined file is written. Never read as content.
    pub output_path: PathBuf,
}

impl Config {
    /// Builds a config for an explicit root and program path.
    ///
    /// The root must exist so it can be canonicalized. The program path is
    /// canonicalized when possible and otherwise kept as given.
    pub fn new(root: &Path, program_path: &Path) -> anyhow::Result<Self> {
        let root = root
            .canonicalize()
            .with_context(|| format!("failed to resolve root folder {}", root.display()))?;
        let program_path = program_path
            .canonicalize()
            .unwrap_or_else(|_| program_path.to_path_buf());
        let output_path = root.join(OUTPUT_FILENAME);

        Ok(Self {
            root,
            program_path,
            output_path,
        })
    }

    /// Resolves the config from the running process: the root is the folder
    /// holding the executable. Falls back to the current directory.
    pub fn discover() -> anyhow::Result<Self> {
        let program_path = match env::current_exe().and_then(|p| p.canonicalize()) {
            Ok(path) => path,
            Err(e) => {
                log::warn!("could not locate the running binary, using the current directory: {e}");
                env::current_dir()?.join(FALLBACK_PROGRAM_NAME)
            }
        };

        let root = match program_path.parent() {
            Some(parent) => parent.to_path_buf(),
            None => env::current_dir()?,
        };

        Self::new(&root, &program_path)
    }
}
