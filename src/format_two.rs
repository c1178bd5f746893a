//! Parser for Format 2: fixed groups of three comma-separated lines.
//!
//! Each group is a header line (column names) followed by exactly two value
//! lines. Header fields are zipped positionally with each value line, so a
//! group with H header fields contributes 2×H rows. Values containing commas
//! are not supported; there is no quoting or escaping in this format.
//!
//! An incomplete trailing group is a hard error rather than being silently
//! dropped: these files are machine-generated, so a truncated group means the
//! producer was cut off mid-write.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::{error::IngestError, rows::Row};

pub fn parse(path: &Path) -> Result<Vec<Row>, IngestError> {
    let file = File::open(path).map_err(|err| IngestError::from_open(path, err))?;
    parse_reader(BufReader::new(file), path)
}

pub fn parse_reader<R: BufRead>(reader: R, path: &Path) -> Result<Vec<Row>, IngestError> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        lines.push(line?);
    }
    // Trailing blank lines are editor artifacts, not truncated groups.
    while lines.last().is_some_and(|line| line.trim().is_empty()) {
        lines.pop();
    }

    if lines.len() % 3 != 0 {
        return Err(IngestError::TruncatedGroup {
            path: path.to_path_buf(),
            lines: lines.len(),
        });
    }

    let mut rows = Vec::new();
    for (group_idx, group) in lines.chunks_exact(3).enumerate() {
        let header = split_fields(&group[0]);
        for (offset, value_line) in group[1..].iter().enumerate() {
            let values = split_fields(value_line);
            if values.len() != header.len() {
                return Err(IngestError::FieldCountMismatch {
                    path: path.to_path_buf(),
                    line: group_idx * 3 + offset + 2,
                    expected: header.len(),
                    found: values.len(),
                });
            }
            for (column, value) in header.iter().zip(&values) {
                rows.push(Row::new(column.as_str(), value.as_str()));
            }
        }
    }
    Ok(rows)
}

fn split_fields(line: &str) -> Vec<String> {
    line.trim()
        .split(',')
        .map(|field| field.trim().to_string())
        .collect()
}
