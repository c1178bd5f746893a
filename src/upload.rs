use std::path::PathBuf;

use anyhow::{Context, Result};
use log::info;

use crate::{
    cli::UploadArgs,
    config::RunConfig,
    gateway::{CatalogGateway, Credentials, SpoolGateway},
    pipeline, wire,
};

const DEFAULT_SPOOL: &str = "catalog-batch.json";

pub fn execute(args: &UploadArgs) -> Result<()> {
    let specs = pipeline::resolve_inputs(&args.inputs, &args.schemas, args.format)?;
    let entities = pipeline::stage_entities(&specs)?;
    let batch = wire::wire_batch(&entities);

    if args.dry_run {
        for entity in &batch {
            info!(
                "Would upload {} '{}' ({})",
                entity.type_name, entity.qualified_name, entity.guid
            );
        }
        info!(
            "Dry run: {} entity(ies) across {} schema(s), nothing uploaded",
            batch.len(),
            specs.len()
        );
        return Ok(());
    }

    let config = match &args.config {
        Some(path) => {
            Some(RunConfig::load(path).with_context(|| format!("Loading config from {path:?}"))?)
        }
        None => None,
    };
    let credentials = Credentials::resolve(config.as_ref())?;
    let spool = args
        .spool
        .clone()
        .or_else(|| config.as_ref().and_then(|c| c.spool.clone()))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SPOOL));

    let mut gateway = SpoolGateway::authenticate(credentials, &spool)?;
    let result = gateway
        .upload(&batch)
        .with_context(|| format!("Uploading {} entity(ies)", batch.len()))?;

    for (synthetic, assigned) in &result.guid_assignments {
        info!("Catalog assigned {assigned} to synthetic guid {synthetic}");
    }
    info!(
        "Uploaded {} entity(ies); batch spooled to {:?}",
        batch.len(),
        gateway.spool_path()
    );
    Ok(())
}
