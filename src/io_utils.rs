//! Output helpers shared by the preview command.
//!
//! The `-` path convention routes CSV output through stdout, matching the
//! usual pipe-friendly CLI behavior.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use anyhow::{Context, Result};

pub fn is_dash(path: &Path) -> bool {
    path == Path::new("-")
}

pub fn open_csv_writer(path: Option<&Path>) -> Result<csv::Writer<Box<dyn Write>>> {
    let base: Box<dyn Write> = match path {
        Some(p) if !is_dash(p) => Box::new(BufWriter::new(
            File::create(p).with_context(|| format!("Creating output file {p:?}"))?,
        )),
        _ => Box::new(std::io::stdout()),
    };
    Ok(csv::WriterBuilder::new().from_writer(base))
}
