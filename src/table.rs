//! CSV to Markdown table conversion.

use std::{
    io::Read,
    path::{Path, PathBuf},
};

use csv::ReaderBuilder;

use crate::error::Result;

/// Converts CSV records into a Markdown table. The first record is the
/// header row; cells are trimmed and rows are joined with `\n`, without a
/// trailing newline. Blank lines hold no record and produce no row.
///
/// # Example
///
/// ```
/// # use repo_scripts::table::csv_to_markdown_table;
/// let table = csv_to_markdown_table("name, age\nAda, 36\n".as_bytes()).unwrap();
/// assert_eq!(table, "| name | age |\n| - | - |\n| Ada | 36 |");
/// ```
pub fn csv_to_markdown_table<R: Read>(input: R) -> Result<String> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input);

    let mut table: Vec<String> = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let record = record?;
        let row: Vec<&str> = record.iter().map(str::trim).collect();
        table.push(format!("| {} |", row.join(" | ")));
        if i == 0 {
            table.push(format!("| {} |", vec!["-"; row.len()].join(" | ")));
        }
    }

    Ok(table.join("\n"))
}

/// The path the table for `csv_file` is written to: the same path with a
/// `.md` extension
pub fn markdown_path_for<P: AsRef<Path>>(csv_file: P) -> PathBuf {
    csv_file.as_ref().with_extension("md")
}
