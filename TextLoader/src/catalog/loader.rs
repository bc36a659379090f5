//! Catalog loading: discover, parse, filter by language, hash
//!
//! Row rules, applied in order within each file:
//!
//! 1. rows whose first cell is empty are skipped
//! 2. rows whose first cell starts with `;` are comments
//! 3. `[lang, ...]` or `[]` in the first cell switches the active section
//! 4. other rows are entries if the current section admits the language
//!
//! Files without any header admit every entry. Later entries overwrite
//! earlier ones with the same key, within a file and across files.

use std::ffi::CStr;
use std::path::{Path, PathBuf};

use super::section::{Section, normalize_language};
use super::{Catalog, Entry, Key, find_translation_files, to_c_string};
use crate::config::LoaderConfig;
use crate::error::Result;
use crate::formats::table::{Separator, Table, read_table};

/// Admitted entries of one translation file, in row order
#[derive(Debug, Clone)]
pub struct TranslationFile {
    pub path: PathBuf,
    pub entries: Vec<Entry>,
}

/// Counters reported after a catalog rebuild
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    /// Files parsed successfully
    pub files_read: usize,
    /// Files that could not be opened or were empty
    pub files_skipped: usize,
    /// Entries inserted, counting overwrites
    pub entries: usize,
}

/// Select the entries of a parsed table that apply to `language`
pub fn parse_translation_table(table: &Table, language: &str) -> Vec<Entry> {
    let language = normalize_language(language);
    let mut admit = true;
    let mut entries = Vec::new();

    for (index, row) in table.rows().iter().enumerate() {
        let Some(source) = row.first() else {
            continue;
        };
        if source.is_empty() || source.starts_with(b";") {
            continue;
        }
        if let Some(section) = Section::parse(&String::from_utf8_lossy(source)) {
            admit = section.admits(&language);
            tracing::debug!("Row {}: section {:?} (admit = {})", index + 1, section, admit);
            continue;
        }
        if admit {
            entries.push(Entry {
                source: source.clone(),
                translation: row.get(1).cloned().unwrap_or_default(),
                row: index + 1,
            });
        }
    }

    entries
}

/// Read one translation file and select the entries for `language`
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read, or [`Error::EmptyFile`]
/// if it holds no bytes.
///
/// [`Error::Io`]: crate::Error::Io
/// [`Error::EmptyFile`]: crate::Error::EmptyFile
pub fn read_translation_file<P: AsRef<Path>>(
    path: P,
    separator: Separator,
    language: &str,
) -> Result<TranslationFile> {
    let path = path.as_ref();
    let table = read_table(path, separator)?;
    let entries = parse_translation_table(&table, language);
    tracing::debug!(
        "Parsed {}: {} rows, {} entries for '{}'",
        path.display(),
        table.num_rows(),
        entries.len(),
        language
    );
    Ok(TranslationFile {
        path: path.to_path_buf(),
        entries,
    })
}

/// Build a catalog for `language` from every translation file below the
/// configured plugin root.
///
/// `hash` must be the host's own string hash so that keys line up with the
/// host's native tables. Unreadable files are logged and skipped.
pub fn load_catalog<H>(config: &LoaderConfig, language: &str, hash: H) -> (Catalog, LoadSummary)
where
    H: Fn(&CStr) -> Key,
{
    let separator = config.separator().unwrap_or_else(|e| {
        tracing::warn!("{}; using tab", e);
        Separator::TAB
    });

    let mut catalog = Catalog::new();
    let mut summary = LoadSummary::default();

    for path in find_translation_files(&config.plugin_root, config.extension()) {
        let file = match read_translation_file(&path, separator, language) {
            Ok(file) => file,
            Err(e) => {
                tracing::warn!("Skipping {}: {}", path.display(), e);
                summary.files_skipped += 1;
                continue;
            }
        };
        summary.files_read += 1;
        for entry in &file.entries {
            let key = hash(&to_c_string(&entry.source));
            catalog.insert(key, &entry.translation);
            summary.entries += 1;
        }
    }

    tracing::info!(
        "Loaded {} translations for '{}' ({} keys, {} files, {} skipped)",
        summary.entries,
        language,
        catalog.len(),
        summary.files_read,
        summary.files_skipped
    );
    (catalog, summary)
}
