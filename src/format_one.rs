//! Parser for Format 1: one `key=value` pair per line.
//!
//! Only the first `=` on a line is significant, so values may themselves
//! contain `=`. Both sides are trimmed of surrounding whitespace. Blank lines
//! are skipped; a non-empty line without any `=` is malformed.

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
    let mut rows = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let Some((column, value)) = trimmed.split_once('=') else {
            return Err(IngestError::MalformedLine {
                path: path.to_path_buf(),
                line: idx + 1,
                content: trimmed.to_string(),
            });
        };
        rows.push(Row::new(column.trim(), value.trim()));
    }
    Ok(rows)
}
