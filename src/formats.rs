//! Input format resolution and parse dispatch.
//!
//! Formats are resolved from the file extension (`.format1` / `.format2`)
//! with a manual override, mirroring how delimiters are usually inferred from
//! `.csv` / `.tsv` extensions.

use std::path::Path;

use clap::ValueEnum;

use crate::{error::IngestError, format_one, format_two, rows::Row};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FileFormat {
    /// One `key=value` pair per line
    Format1,
    /// Comma-separated triples: header line plus two value lines
    Format2,
}

impl FileFormat {
    pub fn parse_rows(self, path: &Path) -> Result<Vec<Row>, IngestError> {
        match self {
            FileFormat::Format1 => format_one::parse(path),
            FileFormat::Format2 => format_two::parse(path),
        }
    }
}

/// Resolves the input format from an explicit override or the file extension.
pub fn resolve_format(path: &Path, provided: Option<FileFormat>) -> Option<FileFormat> {
    provided.or_else(|| match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("format1") => Some(FileFormat::Format1),
        Some(ext) if ext.eq_ignore_ascii_case("format2") => Some(FileFormat::Format2),
        _ => None,
    })
}
