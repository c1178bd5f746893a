//! In-memory catalog entity model.
//!
//! Entities are created once per run, held in memory, and handed to the
//! gateway for upload; nothing is persisted or mutated afterward. Columns and
//! resource sets hold a typed [`EntityRef`] back to their owning schema
//! rather than an embedded copy of it; references are resolved into the wire
//! shape at emission time.

use std::fmt;

use serde::{Deserialize, Serialize};

/// URI-like scheme under which all qualified names are minted.
pub const QUALIFIED_NAME_SCHEME: &str = "rbc";

/// Flat-file columns carry no type information, so every column lands in the
/// catalog as a string.
pub const COLUMN_DATA_TYPE: &str = "String";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    TabularSchema,
    Column,
    ResourceSet,
}

impl EntityKind {
    /// Catalog-side type name for this kind of entity.
    pub fn type_name(self) -> &'static str {
        match self {
            EntityKind::TabularSchema => "tabular_schema",
            EntityKind::Column => "column",
            EntityKind::ResourceSet => "azure_datalake_gen2_resource_set",
        }
    }

    pub fn from_type_name(name: &str) -> Option<Self> {
        match name {
            "tabular_schema" => Some(EntityKind::TabularSchema),
            "column" => Some(EntityKind::Column),
            "azure_datalake_gen2_resource_set" => Some(EntityKind::ResourceSet),
            _ => None,
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// Minimal typed reference to another entity within the same run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRef {
    pub kind: EntityKind,
    pub qualified_name: String,
    pub guid: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnAttributes {
    pub data_type: String,
    pub description: String,
}

/// Kind-specific payload of an entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityBody {
    TabularSchema,
    Column {
        attributes: ColumnAttributes,
        schema: EntityRef,
    },
    ResourceSet {
        schema: EntityRef,
    },
}

/// A catalog entity staged for upload. The guid is a synthetic negative
/// placeholder, unique within a run, replaced by the catalog service on
/// upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub name: String,
    pub qualified_name: String,
    pub guid: i64,
    pub body: EntityBody,
}

impl Entity {
    pub fn tabular_schema(name: &str, guid: i64) -> Self {
        Entity {
            name: name.to_string(),
            qualified_name: schema_qualified_name(name),
            guid,
            body: EntityBody::TabularSchema,
        }
    }

    pub fn column(schema: &Entity, column_name: &str, guid: i64) -> Self {
        Entity {
            name: column_name.to_string(),
            qualified_name: column_qualified_name(&schema.name, column_name),
            guid,
            body: EntityBody::Column {
                attributes: ColumnAttributes {
                    data_type: COLUMN_DATA_TYPE.to_string(),
                    description: column_name.to_string(),
                },
                schema: schema.to_ref(),
            },
        }
    }

    pub fn resource_set(schema: &Entity, guid: i64) -> Self {
        Entity {
            name: format!("{}_set", schema.name),
            qualified_name: resource_set_qualified_name(&schema.name),
            guid,
            body: EntityBody::ResourceSet {
                schema: schema.to_ref(),
            },
        }
    }

    pub fn kind(&self) -> EntityKind {
        match self.body {
            EntityBody::TabularSchema => EntityKind::TabularSchema,
            EntityBody::Column { .. } => EntityKind::Column,
            EntityBody::ResourceSet { .. } => EntityKind::ResourceSet,
        }
    }

    /// Reference to this entity's owning schema, if it has one. Schemas are
    /// the roots of their subgraphs and reference nothing.
    pub fn schema_ref(&self) -> Option<&EntityRef> {
        match &self.body {
            EntityBody::TabularSchema => None,
            EntityBody::Column { schema, .. } | EntityBody::ResourceSet { schema } => Some(schema),
        }
    }

    pub fn to_ref(&self) -> EntityRef {
        EntityRef {
            kind: self.kind(),
            qualified_name: self.qualified_name.clone(),
            guid: self.guid,
        }
    }
}

pub fn schema_qualified_name(schema_name: &str) -> String {
    format!("{QUALIFIED_NAME_SCHEME}://{schema_name}")
}

pub fn column_qualified_name(schema_name: &str, column_name: &str) -> String {
    format!("{QUALIFIED_NAME_SCHEME}://{schema_name}/{column_name}")
}

pub fn resource_set_qualified_name(schema_name: &str) -> String {
    format!("{QUALIFIED_NAME_SCHEME}://{schema_name}_set")
}
