//! Error taxonomy for parsing, graph construction, and the gateway boundary.
//!
//! Every failure aborts the current run; there is no partial recovery. Parse
//! errors carry the file path and 1-based line number so the offending input
//! can be located directly.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("Input file {path:?} not found")]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed line {line} in {path:?}: '{content}' has no '=' delimiter")]
    MalformedLine {
        path: PathBuf,
        line: usize,
        content: String,
    },

    #[error("Field count mismatch at line {line} in {path:?}: header has {expected} field(s), row has {found}")]
    FieldCountMismatch {
        path: PathBuf,
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("Truncated trailing group in {path:?}: {lines} line(s) is not a multiple of 3")]
    TruncatedGroup { path: PathBuf, lines: usize },

    #[error("Schema '{schema}' has no columns; refusing to build an empty graph")]
    EmptyColumnSet { schema: String },

    #[error("Missing catalog credential(s): {missing}")]
    Authentication { missing: String },

    #[error("Catalog upload failed: {message}")]
    Upload { message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl IngestError {
    /// Wraps the result of opening an input file, mapping `NotFound` to the
    /// dedicated variant so callers can report a missing path distinctly.
    pub fn from_open(path: &std::path::Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
                source,
            }
        } else {
            IngestError::Io(source)
        }
    }
}
