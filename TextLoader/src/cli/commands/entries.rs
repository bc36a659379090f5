//! CLI command for listing admitted entries

use serde::Serialize;

use crate::catalog::{Entry, find_translation_files, read_translation_file};
use crate::config::LoaderConfig;

#[derive(Serialize)]
struct FileEntries<'a> {
    file: String,
    entries: Vec<&'a Entry>,
}

/// Print entries for `language` per file, in the order they would be loaded.
///
/// Later lines win when two entries share a source string.
pub fn execute(
    config: &LoaderConfig,
    language: &str,
    source_filter: Option<&str>,
    json: bool,
) -> anyhow::Result<()> {
    let separator = config.separator()?;
    let mut loaded = Vec::new();

    for path in find_translation_files(&config.plugin_root, config.extension()) {
        match read_translation_file(&path, separator, language) {
            Ok(file) => loaded.push(file),
            Err(e) => tracing::warn!("Skipping {}: {}", path.display(), e),
        }
    }

    let selected: Vec<FileEntries> = loaded
        .iter()
        .map(|file| FileEntries {
            file: file.path.display().to_string(),
            entries: file
                .entries
                .iter()
                .filter(|e| source_filter.is_none_or(|s| e.source_text().contains(s)))
                .collect(),
        })
        .filter(|f| !f.entries.is_empty())
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&selected)?);
        return Ok(());
    }

    let mut total = 0;
    for file in &selected {
        println!("{}", file.file);
        for entry in &file.entries {
            println!(
                "{:>5}  {:?} -> {:?}",
                entry.row,
                entry.source_text(),
                entry.translation_text()
            );
        }
        total += file.entries.len();
    }
    println!("{total} entries for '{language}'");
    Ok(())
}
