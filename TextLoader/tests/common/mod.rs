//! Shared fixtures for integration tests

#![allow(dead_code)]

use std::ffi::CStr;
use std::fs;
use std::path::{Path, PathBuf};

use textloader::config::LoaderConfig;

/// Stand-in for the host's string hash (djb2 over the C string bytes)
pub fn host_hash(value: &CStr) -> u32 {
    value
        .to_bytes()
        .iter()
        .fold(5381u32, |h, &b| (h << 5).wrapping_add(h) ^ u32::from(b))
}

/// Hash of a Rust string the way the loader hashes a source cell
pub fn key(source: &str) -> u32 {
    host_hash(&textloader::catalog::to_c_string(source.as_bytes()))
}

/// Write `contents` to `root/relative`, creating parent directories
pub fn write_file(root: &Path, relative: &str, contents: &[u8]) -> PathBuf {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, contents).unwrap();
    path
}

/// Loader config rooted at `root`
pub fn config_for(root: &Path) -> LoaderConfig {
    LoaderConfig {
        plugin_root: root.to_path_buf(),
        ..LoaderConfig::default()
    }
}

/// Encode text as UTF-16 with a byte-order mark
pub fn utf16_with_bom(text: &str, big_endian: bool) -> Vec<u8> {
    let mut out = if big_endian {
        vec![0xFE, 0xFF]
    } else {
        vec![0xFF, 0xFE]
    };
    for unit in text.encode_utf16() {
        if big_endian {
            out.extend_from_slice(&unit.to_be_bytes());
        } else {
            out.extend_from_slice(&unit.to_le_bytes());
        }
    }
    out
}
