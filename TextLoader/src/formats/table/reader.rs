//! Quote-aware line and cell splitting
//!
//! A line break ends a row only outside quotes. Quote parity for line
//! splitting runs across the whole buffer; cell splitting restarts it at
//! every row. Splitting works on bytes: separators, quotes and line breaks
//! are ASCII, so UTF-8 text splits on character boundaries and any other
//! byte passes through untouched.

use std::fs;
use std::path::Path;

use super::encoding::TextEncoding;
use super::quoting::unquoted;
use super::{Separator, Table};
use crate::error::{Error, Result};

/// Read a delimited text file from disk
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be opened or read.
/// Returns [`Error::EmptyFile`] if the file holds no bytes.
///
/// [`Error::Io`]: crate::Error::Io
/// [`Error::EmptyFile`]: crate::Error::EmptyFile
pub fn read_table<P: AsRef<Path>>(path: P, separator: Separator) -> Result<Table> {
    let path = path.as_ref();
    let data = fs::read(path)?;
    if data.is_empty() {
        return Err(Error::EmptyFile {
            path: path.to_path_buf(),
        });
    }
    Ok(parse_table_bytes(&data, separator))
}

/// Parse delimited text from raw file bytes, BOM included.
///
/// Never fails: undecodable data yields whatever rows could be recovered.
pub fn parse_table_bytes(data: &[u8], separator: Separator) -> Table {
    let encoding = TextEncoding::detect(data);
    let payload = encoding.decode(&data[encoding.bom_len()..]);
    if payload.is_empty() {
        return Table::new();
    }

    let mut table = Table::new();
    for line in split_lines(&payload) {
        table.add_row(split_cells(line, separator));
    }
    table.truncate_trailing_empty_rows();
    table
}

/// Split a payload into physical lines, keeping line breaks inside quotes.
pub(crate) fn split_lines(bytes: &[u8]) -> Vec<&[u8]> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut in_quotes = false;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'"' => in_quotes = !in_quotes,
            b'\n' if !in_quotes => {
                lines.push(&bytes[start..i]);
                start = i + 1;
            }
            b'\r' => {
                let end = i;
                if bytes.get(i + 1) == Some(&b'\n') {
                    i += 1;
                }
                if !in_quotes {
                    lines.push(&bytes[start..end]);
                    start = i + 1;
                }
            }
            _ => {}
        }
        i += 1;
    }

    if start < bytes.len() || !lines.is_empty() {
        lines.push(&bytes[start..]);
    }
    lines
}

/// Split one line into unquoted cells.
pub(crate) fn split_cells(line: &[u8], separator: Separator) -> Vec<Vec<u8>> {
    let mut cells = Vec::new();
    let mut start = 0;
    let mut in_quotes = false;

    for (i, &byte) in line.iter().enumerate() {
        if byte == b'"' {
            in_quotes = !in_quotes;
        } else if byte == separator.byte() && !in_quotes {
            cells.push(unquoted(&line[start..i]).into_owned());
            start = i + 1;
        }
    }
    cells.push(unquoted(&line[start..]).into_owned());
    cells
}
