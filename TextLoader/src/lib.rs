//! # TextLoader
//!
//! User translation tables that override a host game's localization strings.
//!
//! Translators drop tab separated `.tr` files anywhere below `plugins/`. When
//! the host switches language, every file is parsed, filtered by its
//! `[lang]` sections and indexed under the host's own string hash. The host's
//! "get string" routine is then served from that catalog first.
//!
//! ## Translation files
//!
//! ```text
//! ; comments start with a semicolon
//! [en]
//! Play	Start game
//! [de, fr]
//! Play	Spielen
//! []
//! "Quoted	tab"	"Say ""hi"""
//! ```
//!
//! ## Quick Start
//!
//! ### Reading a table
//!
//! ```
//! use textloader::formats::table::{Separator, Table};
//!
//! let table = Table::parse_bytes("[de]\nPlay\tSpielen".as_bytes(), Separator::TAB);
//! assert_eq!(table.cell(1, 1), b"Spielen");
//! ```
//!
//! ### Selecting entries for a language
//!
//! ```
//! use textloader::catalog::parse_translation_table;
//! use textloader::formats::table::{Separator, Table};
//!
//! let table = Table::parse_bytes(b"[en]\nA\tB\n[de]\nA\tC", Separator::TAB);
//! let entries = parse_translation_table(&table, "de");
//! assert_eq!(entries.len(), 1);
//! assert_eq!(entries[0].translation, b"C");
//! ```
//!
//! ### Installing the shim
//!
//! ```no_run
//! use textloader::shim::{self, HostBinding};
//!
//! // Handles are resolved against the running host build elsewhere.
//! let binding = HostBinding::default();
//! shim::install(binding);
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` - Enables the `textloader` command-line inspector

pub mod catalog;
pub mod config;
pub mod error;
pub mod formats;
pub mod shim;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::catalog::{
        Catalog, Entry, Key, LoadSummary, Section, TranslationFile,
        find_translation_files, load_catalog, parse_translation_table, read_translation_file,
    };
    pub use crate::config::LoaderConfig;
    pub use crate::error::{Error, Result};
    pub use crate::formats::table::{Separator, Table, TextEncoding};
    pub use crate::shim::{HostBinding, HostObject, Shim, ShimState};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;
