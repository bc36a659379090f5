//! Delimited text tables (`.tr`, `.tsv`, `.csv`)
//!
//! A table is a list of rows, each row a list of cells. No column schema is
//! enforced and rows may differ in width. Files may be UTF-8 (with or without
//! BOM) or UTF-16 with a BOM. Cells hold bytes: UTF-16 input is transcoded to
//! UTF-8, while any other input keeps its exact file bytes, valid UTF-8 or
//! not.
//!
//! # Example
//!
//! ```
//! use textloader::formats::table::{Separator, Table};
//!
//! let table = Table::parse_bytes(b"Hello\tHallo\n\"a\tb\"\tc", Separator::TAB);
//! assert_eq!(table.num_rows(), 2);
//! assert_eq!(table.cell(1, 0), b"Hallo");
//! assert_eq!(table.cell_text(0, 1), "a\tb");
//! ```

mod encoding;
mod quoting;
mod reader;

use std::borrow::Cow;
use std::path::Path;

pub use encoding::TextEncoding;
pub use quoting::{quoted, unquoted};
pub use reader::{parse_table_bytes, read_table};

use crate::error::{Error, Result};

/// Cell separator byte.
///
/// Always a single ASCII character other than a quote or a line break.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Separator(u8);

impl Separator {
    /// Tab, used by `.tr` and `.tsv` files
    pub const TAB: Self = Self(b'\t');
    /// Comma, used by `.csv` files
    pub const COMMA: Self = Self(b',');

    /// The separator as a raw byte
    #[must_use]
    pub fn byte(self) -> u8 {
        self.0
    }
}

impl Default for Separator {
    fn default() -> Self {
        Self::TAB
    }
}

impl TryFrom<char> for Separator {
    type Error = Error;

    fn try_from(c: char) -> Result<Self> {
        match c {
            '"' | '\r' | '\n' => Err(Error::InvalidSeparator(c.to_string())),
            c if c.is_ascii() => Ok(Self(c as u8)),
            _ => Err(Error::InvalidSeparator(c.to_string())),
        }
    }
}

impl TryFrom<&str> for Separator {
    type Error = Error;

    /// Accepts a single character, or the escapes `\t` and `tab`.
    fn try_from(s: &str) -> Result<Self> {
        match s {
            "\\t" | "tab" => Ok(Self::TAB),
            _ => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::try_from(c),
                    _ => Err(Error::InvalidSeparator(s.to_string())),
                }
            }
        }
    }
}

impl std::fmt::Display for Separator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", char::from(self.0).escape_default())
    }
}

/// One cell's bytes, unquoted
pub type Cell = Vec<u8>;

/// A table of cells read from a delimited text file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Create an empty table
    #[must_use]
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Read a table from disk using `separator` between cells
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read, or
    /// [`Error::EmptyFile`] if it holds no bytes.
    pub fn read<P: AsRef<Path>>(path: P, separator: Separator) -> Result<Self> {
        read_table(path, separator)
    }

    /// Read a comma separated file
    ///
    /// # Errors
    ///
    /// See [`Table::read`].
    pub fn read_csv<P: AsRef<Path>>(path: P) -> Result<Self> {
        read_table(path, Separator::COMMA)
    }

    /// Read a tab separated file
    ///
    /// # Errors
    ///
    /// See [`Table::read`].
    pub fn read_tsv<P: AsRef<Path>>(path: P) -> Result<Self> {
        read_table(path, Separator::TAB)
    }

    /// Parse a table from raw file bytes
    #[must_use]
    pub fn parse_bytes(data: &[u8], separator: Separator) -> Self {
        parse_table_bytes(data, separator)
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of cells in `row`, or 0 when out of range
    pub fn num_columns(&self, row: usize) -> usize {
        self.rows.get(row).map_or(0, Vec::len)
    }

    /// Width of the widest row
    pub fn max_columns(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Whether every row has the same number of cells
    pub fn is_consistent(&self) -> bool {
        self.rows.windows(2).all(|pair| pair[0].len() == pair[1].len())
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Cells of `row`, or an empty slice when out of range
    pub fn row(&self, row: usize) -> &[Cell] {
        self.rows.get(row).map(Vec::as_slice).unwrap_or_default()
    }

    /// Bytes of a cell, or an empty slice when out of range
    pub fn cell(&self, column: usize, row: usize) -> &[u8] {
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// A cell for display; bytes that are not UTF-8 show as U+FFFD
    pub fn cell_text(&self, column: usize, row: usize) -> Cow<'_, str> {
        String::from_utf8_lossy(self.cell(column, row))
    }

    pub fn add_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<Cell>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }

    /// Drop rows after the last one holding a non-empty cell
    pub(crate) fn truncate_trailing_empty_rows(&mut self) {
        let keep = self
            .rows
            .iter()
            .rposition(|row| row.iter().any(|cell| !cell.is_empty()))
            .map_or(0, |last| last + 1);
        self.rows.truncate(keep);
    }
}
