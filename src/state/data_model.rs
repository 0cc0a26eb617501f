use std::collections::BTreeMap;

pub type Row = BTreeMap<String, String>;

/// Reads a cell, treating a missing column as blank.
pub fn cell<'a>(row: &'a Row, column: &str) -> &'a str {
    row.get(column).map(String::as_str).unwrap_or("")
}

/// Splits a cell value on a delimiter, trimming each part.
pub fn split_cell(value: &str, delimiter: &str) -> Vec<String> {
    value
        .split(delimiter)
        .map(|part| part.trim().to_string())
        .collect()
}
