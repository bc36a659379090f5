//! CLI command for dumping a parsed table

use std::path::Path;

use crate::error::{Error, Result};
use crate::formats::table::{Separator, Table, TextEncoding};

/// Read `path` once, reporting both its encoding and the parsed table
fn load(path: &Path, separator: Separator) -> Result<(TextEncoding, Table)> {
    let data = std::fs::read(path)?;
    if data.is_empty() {
        return Err(Error::EmptyFile {
            path: path.to_path_buf(),
        });
    }
    Ok((TextEncoding::detect(&data), Table::parse_bytes(&data, separator)))
}

/// Print every row of `path` with its cells debug-quoted
pub fn execute(path: &Path, separator: Separator) -> anyhow::Result<()> {
    let (encoding, table) = load(path, separator)?;

    println!(
        "{}: {} rows, up to {} columns, {} (separator '{}')",
        path.display(),
        table.num_rows(),
        table.max_columns(),
        encoding.name(),
        separator
    );
    for (index, row) in table.rows().iter().enumerate() {
        let cells: Vec<String> = row
            .iter()
            .map(|c| format!("{:?}", String::from_utf8_lossy(c)))
            .collect();
        println!("{:>5}  {}", index + 1, cells.join("  "));
    }

    Ok(())
}
