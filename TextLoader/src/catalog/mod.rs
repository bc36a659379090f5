//! Translation catalog
//!
//! User translation files are discovered below the plugin root, filtered by
//! language section and indexed under the host's own string hash. The
//! resulting [`Catalog`] is what the host shim consults before falling back
//! to the native localization database.

mod discovery;
mod loader;
mod section;

use std::borrow::Cow;
use std::collections::HashMap;
use std::ffi::{CStr, CString};

use serde::{Serialize, Serializer};

pub use discovery::find_translation_files;
pub use loader::{LoadSummary, TranslationFile, load_catalog, parse_translation_table, read_translation_file};
pub use section::{Section, normalize_language};

/// Host lookup key: the host's 32-bit hash of a source string
pub type Key = u32;

/// A source/translation pair admitted for the active language.
///
/// Both sides keep the file's bytes; nothing is re-encoded on the way to
/// the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    /// First cell, hashed to form the key
    #[serde(serialize_with = "serialize_lossy")]
    pub source: Vec<u8>,
    /// Second cell, or empty when the row has one cell
    #[serde(serialize_with = "serialize_lossy")]
    pub translation: Vec<u8>,
    /// 1-based row number within the file
    pub row: usize,
}

impl Entry {
    pub fn source_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.source)
    }

    pub fn translation_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.translation)
    }
}

fn serialize_lossy<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&String::from_utf8_lossy(bytes))
}

/// Convert cell bytes to the NUL-terminated form handed to the host.
///
/// The host reads C strings, so anything after an embedded NUL is dropped.
pub fn to_c_string(bytes: &[u8]) -> CString {
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    CString::new(&bytes[..end]).unwrap_or_default()
}

/// Key to translated string mapping for one language
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    strings: HashMap<Key, CString>,
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            strings: HashMap::new(),
        }
    }

    /// Insert a translation, replacing any earlier one with the same key
    pub fn insert(&mut self, key: Key, translation: &[u8]) -> Option<CString> {
        self.strings.insert(key, to_c_string(translation))
    }

    pub fn get(&self, key: Key) -> Option<&CStr> {
        self.strings.get(&key).map(CString::as_c_str)
    }

    pub fn contains_key(&self, key: Key) -> bool {
        self.strings.contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    pub fn clear(&mut self) {
        self.strings.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_overwrites() {
        let mut catalog = Catalog::new();
        assert!(catalog.insert(7, b"Bar").is_none());
        let previous = catalog.insert(7, b"Baz");

        assert_eq!(previous.as_deref(), Some(c"Bar"));
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(7), Some(c"Baz"));
    }

    #[test]
    fn test_lookup_and_clear() {
        let mut catalog = Catalog::new();
        catalog.insert(1, b"one");
        catalog.insert(2, b"");

        assert!(catalog.contains_key(2));
        assert_eq!(catalog.get(2), Some(c""));
        assert_eq!(catalog.get(3), None);

        catalog.clear();
        assert!(catalog.is_empty());
        assert_eq!(catalog.get(1), None);
    }

    #[test]
    fn test_embedded_nul_truncates() {
        assert_eq!(to_c_string(b"abc\0def").as_c_str(), c"abc");
        assert_eq!(to_c_string("Grüße".as_bytes()).to_str().unwrap(), "Grüße");
        assert_eq!(to_c_string(b"Th\xE9\0x").as_bytes(), b"Th\xE9");
    }

    #[test]
    fn test_entry_json_shows_text() {
        let entry = Entry {
            source: b"Caf\xE9".to_vec(),
            translation: "Grüße".into(),
            row: 3,
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["source"], "Caf\u{FFFD}");
        assert_eq!(json["translation"], "Grüße");
        assert_eq!(json["row"], 3);
    }
}
