//! Normalized row representation shared by both file-format parsers.

use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// One column-name/value occurrence from an input file. Duplicates across
/// rows are expected; one row is emitted per record occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    pub column_name: String,
    pub value: String,
}

impl Row {
    pub fn new(column_name: impl Into<String>, value: impl Into<String>) -> Self {
        Row {
            column_name: column_name.into(),
            value: value.into(),
        }
    }
}

/// Extracts the unique column names from a parsed row sequence, preserving
/// first-seen order.
pub fn distinct_columns(rows: &[Row]) -> Vec<String> {
    rows.iter()
        .map(|row| row.column_name.clone())
        .unique()
        .collect()
}
