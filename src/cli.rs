use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::formats::FileFormat;

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Normalize flat-file column metadata and stage catalog entity batches",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Parse an input file and preview its normalized rows
    Preview(PreviewArgs),
    /// Build the catalog entity batch and write its wire JSON without uploading
    Plan(PlanArgs),
    /// Build the catalog entity batch and upload it through the gateway
    Upload(UploadArgs),
}

#[derive(Debug, Args)]
pub struct PreviewArgs {
    /// Input metadata file (.format1 or .format2)
    #[arg(short = 'i', long = "input")]
    pub input: PathBuf,
    /// Input format when the file extension is not .format1/.format2
    #[arg(long = "format", value_enum)]
    pub format: Option<FileFormat>,
    /// Output CSV file for the normalized rows (stdout if omitted)
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,
    /// Render the rows as an elastic table to stdout
    #[arg(long = "table")]
    pub table: bool,
    /// Limit number of rows shown
    #[arg(long)]
    pub limit: Option<usize>,
}

#[derive(Debug, Args)]
pub struct PlanArgs {
    /// Input metadata files, one schema is built per file
    #[arg(short = 'i', long = "input", action = clap::ArgAction::Append, required = true)]
    pub inputs: Vec<PathBuf>,
    /// Schema name per input, positionally matched (defaults to the file stem)
    #[arg(long = "schema", action = clap::ArgAction::Append)]
    pub schemas: Vec<String>,
    /// Input format override applied to inputs without a recognized extension
    #[arg(long = "format", value_enum)]
    pub format: Option<FileFormat>,
    /// Output file for the wire JSON batch
    #[arg(short = 'o', long = "output")]
    pub output: PathBuf,
}

#[derive(Debug, Args)]
pub struct UploadArgs {
    /// Input metadata files, one schema is built per file
    #[arg(short = 'i', long = "input", action = clap::ArgAction::Append, required = true)]
    pub inputs: Vec<PathBuf>,
    /// Schema name per input, positionally matched (defaults to the file stem)
    #[arg(long = "schema", action = clap::ArgAction::Append)]
    pub schemas: Vec<String>,
    /// Input format override applied to inputs without a recognized extension
    #[arg(long = "format", value_enum)]
    pub format: Option<FileFormat>,
    /// YAML run configuration; fields override environment variables
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,
    /// Spool destination for the upload batch (overrides config)
    #[arg(long = "spool")]
    pub spool: Option<PathBuf>,
    /// Build and log the batch without authenticating or uploading
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}
