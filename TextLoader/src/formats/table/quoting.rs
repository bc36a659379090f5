//! Cell quoting rules shared by the reader and its tests

use std::borrow::Cow;

use super::Separator;

/// Strip surrounding quotes from a cell and collapse `""` to `"`.
///
/// Cells that do not both start and end with a quote are returned as-is.
pub fn unquoted(cell: &[u8]) -> Cow<'_, [u8]> {
    let Some(inner) = cell.strip_prefix(b"\"").and_then(|c| c.strip_suffix(b"\"")) else {
        return Cow::Borrowed(cell);
    };
    if !inner.windows(2).any(|pair| pair == b"\"\"") {
        return Cow::Borrowed(inner);
    }

    let mut result = Vec::with_capacity(inner.len());
    let mut bytes = inner.iter().copied().peekable();
    while let Some(byte) = bytes.next() {
        result.push(byte);
        if byte == b'"' && bytes.peek() == Some(&b'"') {
            bytes.next();
        }
    }
    Cow::Owned(result)
}

/// Quote a cell if it contains a line break, a quote or the separator.
///
/// Inverse of [`unquoted`] for cells produced by the reader.
pub fn quoted(cell: &[u8], separator: Separator) -> Cow<'_, [u8]> {
    let needs_quotes = cell
        .iter()
        .any(|&b| matches!(b, b'\r' | b'\n' | b'"') || b == separator.byte());
    if !needs_quotes {
        return Cow::Borrowed(cell);
    }
    let mut result = Vec::with_capacity(cell.len() + 2);
    result.push(b'"');
    for &byte in cell {
        if byte == b'"' {
            result.push(b'"');
        }
        result.push(byte);
    }
    result.push(b'"');
    Cow::Owned(result)
}
