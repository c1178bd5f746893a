use anyhow::{Context, Result};
use log::info;

use crate::{cli::PlanArgs, pipeline, wire};

pub fn execute(args: &PlanArgs) -> Result<()> {
    let specs = pipeline::resolve_inputs(&args.inputs, &args.schemas, args.format)?;
    let entities = pipeline::stage_entities(&specs)?;
    let batch = wire::wire_batch(&entities);
    wire::save_batch(&args.output, &batch)
        .with_context(|| format!("Writing batch to {:?}", args.output))?;
    info!(
        "Planned {} entity(ies) across {} schema(s) into {:?}",
        batch.len(),
        specs.len(),
        args.output
    );
    Ok(())
}
