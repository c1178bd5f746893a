//! Catalog wire representation of staged entities.
//!
//! The gateway accepts a flat JSON array of entities shaped as
//! `{typeName, name, qualifiedName, guid, attributes?, relationshipAttributes?}`.
//! Parent references are resolved here at emission time: a column carries a
//! minimal reference to its schema under `composeSchema`, a resource set
//! under `tabular_schema`.

use std::{collections::BTreeMap, fs::File, io::BufReader, path::Path};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::entity::{Entity, EntityBody, EntityRef};

pub const REL_COMPOSE_SCHEMA: &str = "composeSchema";
pub const REL_TABULAR_SCHEMA: &str = "tabular_schema";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireEntity {
    pub type_name: String,
    pub name: String,
    pub qualified_name: String,
    pub guid: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<WireAttributes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relationship_attributes: Option<BTreeMap<String, WireEntityRef>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireAttributes {
    pub data_type: String,
    pub description: String,
}

/// Minimal parent reference embedded under `relationshipAttributes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireEntityRef {
    pub type_name: String,
    pub qualified_name: String,
    pub guid: i64,
}

impl From<&EntityRef> for WireEntityRef {
    fn from(entity_ref: &EntityRef) -> Self {
        WireEntityRef {
            type_name: entity_ref.kind.type_name().to_string(),
            qualified_name: entity_ref.qualified_name.clone(),
            guid: entity_ref.guid,
        }
    }
}

impl From<&Entity> for WireEntity {
    fn from(entity: &Entity) -> Self {
        let (attributes, relationship_attributes) = match &entity.body {
            EntityBody::TabularSchema => (None, None),
            EntityBody::Column { attributes, schema } => (
                Some(WireAttributes {
                    data_type: attributes.data_type.clone(),
                    description: attributes.description.clone(),
                }),
                Some(relationship(REL_COMPOSE_SCHEMA, schema)),
            ),
            EntityBody::ResourceSet { schema } => {
                (None, Some(relationship(REL_TABULAR_SCHEMA, schema)))
            }
        };
        WireEntity {
            type_name: entity.kind().type_name().to_string(),
            name: entity.name.clone(),
            qualified_name: entity.qualified_name.clone(),
            guid: entity.guid,
            attributes,
            relationship_attributes,
        }
    }
}

fn relationship(key: &str, schema: &EntityRef) -> BTreeMap<String, WireEntityRef> {
    let mut map = BTreeMap::new();
    map.insert(key.to_string(), WireEntityRef::from(schema));
    map
}

/// Resolves a staged entity list into its wire batch, preserving order.
pub fn wire_batch(entities: &[Entity]) -> Vec<WireEntity> {
    entities.iter().map(WireEntity::from).collect()
}

pub fn save_batch(path: &Path, batch: &[WireEntity]) -> Result<()> {
    let file = File::create(path).with_context(|| format!("Creating batch file {path:?}"))?;
    serde_json::to_writer_pretty(file, batch).context("Writing batch JSON")
}

pub fn load_batch(path: &Path) -> Result<Vec<WireEntity>> {
    let file = File::open(path).with_context(|| format!("Opening batch file {path:?}"))?;
    let reader = BufReader::new(file);
    let batch = serde_json::from_reader(reader).context("Parsing batch JSON")?;
    Ok(batch)
}
