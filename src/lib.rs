pub mod cli;
pub mod config;
pub mod entity;
pub mod error;
pub mod format_one;
pub mod format_two;
pub mod formats;
pub mod gateway;
pub mod graph;
pub mod io_utils;
pub mod pipeline;
pub mod plan;
pub mod preview;
pub mod rows;
pub mod table;
pub mod upload;
pub mod wire;

use std::{env, sync::OnceLock};

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;

use crate::cli::{Cli, Commands};

static LOGGER: OnceLock<()> = OnceLock::new();

fn init_logging() {
    LOGGER.get_or_init(|| {
        let mut builder = env_logger::Builder::from_env(env_logger::Env::default());
        if env::var("RUST_LOG").is_err() {
            builder.filter_module("catalog_ingest", LevelFilter::Info);
        }
        let _ = builder.format_timestamp_millis().try_init();
    });
}

pub fn run() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    match cli.command {
        Commands::Preview(args) => preview::execute(&args),
        Commands::Plan(args) => plan::execute(&args),
        Commands::Upload(args) => upload::execute(&args),
    }
}
