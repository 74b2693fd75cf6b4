use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// Walks `root` recursively and yields every regular file below it.
///
/// Nothing is filtered: hidden files and `.gitignore`d paths are visited too.
/// Entries are sorted by name within each directory so the order is stable
/// across runs. Symlinked directories are not entered; a symlink pointing at a
/// file is yielded like a file.
pub fn find_files(root: &Path) -> impl Iterator<Item = PathBuf> {
    WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build()
        .filter_map(|result| match result {
            Ok(entry) => Some(entry.into_path()),
            Err(e) => {
                // Unreadable directories and the like. They aren't files, so
                // they don't count towards the summary.
                log::warn!("Skipping walk entry: {e}");
                None
            }
        })
        .filter(|path| path.is_file())
}
