//! Translation file discovery

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Find all translation files below `root`, recursively
///
/// # Arguments
/// * `root` - Plugin directory to search
/// * `extension` - File extension without the dot, matched case-insensitively
///
/// # Returns
/// A sorted list of regular files with a matching extension. A missing or
/// unreadable root yields an empty list.
pub fn find_translation_files<P: AsRef<Path>>(root: P, extension: &str) -> Vec<PathBuf> {
    let root = root.as_ref();
    if !root.is_dir() {
        tracing::warn!("Plugin directory not found: {}", root.display());
        return Vec::new();
    }

    let mut files: Vec<_> = WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::debug!("Skipping unreadable entry: {}", e);
                None
            }
        })
        .filter(|e| {
            e.file_type().is_file()
                && e.path()
                    .extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
        })
        .map(walkdir::DirEntry::into_path)
        .collect();

    files.sort();
    tracing::debug!("Found {} translation files in {}", files.len(), root.display());
    files
}
