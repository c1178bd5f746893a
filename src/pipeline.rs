//! Staging pipeline: inputs → parsed rows → per-schema entity graphs → one
//! flat batch in upload order.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use log::{debug, info};

use crate::{
    entity::Entity,
    formats::{self, FileFormat},
    graph::{self, GuidAllocator},
};

/// One resolved input: where it lives, how to parse it, and the schema name
/// its entities are minted under.
#[derive(Debug, Clone)]
pub struct InputSpec {
    pub path: PathBuf,
    pub format: FileFormat,
    pub schema_name: String,
}

/// Pairs input paths with per-input schema names and resolves each file's
/// format. Schema names are positionally matched and default to the file
/// stem; supplying more names than inputs is an error.
pub fn resolve_inputs(
    inputs: &[PathBuf],
    schemas: &[String],
    format_override: Option<FileFormat>,
) -> Result<Vec<InputSpec>> {
    if schemas.len() > inputs.len() {
        return Err(anyhow!(
            "{} schema name(s) given for {} input file(s)",
            schemas.len(),
            inputs.len()
        ));
    }
    let mut specs = Vec::with_capacity(inputs.len());
    for (idx, path) in inputs.iter().enumerate() {
        let format = formats::resolve_format(path, format_override).ok_or_else(|| {
            anyhow!(
                "Cannot determine format of {path:?}; use a .format1/.format2 extension or --format"
            )
        })?;
        let schema_name = match schemas.get(idx) {
            Some(name) => name.clone(),
            None => default_schema_name(path)?,
        };
        specs.push(InputSpec {
            path: path.clone(),
            format,
            schema_name,
        });
    }
    Ok(specs)
}

fn default_schema_name(path: &Path) -> Result<String> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .map(|stem| stem.to_string())
        .ok_or_else(|| anyhow!("Cannot derive a schema name from {path:?}"))
}

/// Parses every input and builds its schema subgraph, returning the flat
/// batch: schema → columns → resource set per input, inputs in argument
/// order. All subgraphs share one allocator so guids are unique batch-wide.
pub fn stage_entities(specs: &[InputSpec]) -> Result<Vec<Entity>> {
    let mut alloc = GuidAllocator::new();
    let mut entities = Vec::new();
    for spec in specs {
        let rows = spec
            .format
            .parse_rows(&spec.path)
            .with_context(|| format!("Parsing {:?}", spec.path))?;
        debug!("Parsed {} row(s) from {:?}", rows.len(), spec.path);
        let subgraph = graph::build_from_rows(&mut alloc, &spec.schema_name, &rows)
            .with_context(|| format!("Building entity graph for schema '{}'", spec.schema_name))?;
        info!(
            "Staged schema '{}' with {} column(s) from {:?}",
            spec.schema_name,
            subgraph.columns.len(),
            spec.path
        );
        entities.extend(subgraph.into_entities());
    }
    Ok(entities)
}
