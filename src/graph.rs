//! Entity-graph construction with synthetic negative guid allocation.

use crate::{
    entity::Entity,
    error::IngestError,
    rows::{self, Row},
};

/// Monotonically decreasing counter handing out synthetic negative guids.
///
/// One allocator is constructed per run and threaded by mutable reference
/// through every graph build, so guids stay unique across all schemas in a
/// batch. The pipeline is single-threaded; callers sharing an allocator
/// across threads must add their own synchronization.
#[derive(Debug, Default)]
pub struct GuidAllocator {
    counter: i64,
}

impl GuidAllocator {
    pub fn new() -> Self {
        GuidAllocator { counter: 0 }
    }

    /// Returns the next synthetic guid: -1, -2, -3, …
    pub fn next(&mut self) -> i64 {
        self.counter -= 1;
        self.counter
    }
}

/// One schema's subgraph: the schema entity, its columns, and its resource
/// set, in allocation order.
#[derive(Debug, Clone)]
pub struct SchemaGraph {
    pub schema: Entity,
    pub columns: Vec<Entity>,
    pub resource_set: Entity,
}

impl SchemaGraph {
    /// Flattens the subgraph into upload order: schema, columns, resource set.
    pub fn into_entities(self) -> Vec<Entity> {
        let mut entities = Vec::with_capacity(self.columns.len() + 2);
        entities.push(self.schema);
        entities.extend(self.columns);
        entities.push(self.resource_set);
        entities
    }

    pub fn entity_count(&self) -> usize {
        self.columns.len() + 2
    }
}

/// Builds the three-level subgraph for one schema. The schema entity is
/// allocated strictly before its columns, and the resource set last, so guid
/// ordering within the subgraph is schema, then columns, then resource set.
pub fn build_schema_graph(
    alloc: &mut GuidAllocator,
    schema_name: &str,
    column_names: &[String],
) -> Result<SchemaGraph, IngestError> {
    if column_names.is_empty() {
        return Err(IngestError::EmptyColumnSet {
            schema: schema_name.to_string(),
        });
    }

    let schema = Entity::tabular_schema(schema_name, alloc.next());
    let columns = column_names
        .iter()
        .map(|column| Entity::column(&schema, column, alloc.next()))
        .collect();
    let resource_set = Entity::resource_set(&schema, alloc.next());

    Ok(SchemaGraph {
        schema,
        columns,
        resource_set,
    })
}

/// Convenience for the pipeline: distinct-column extraction plus graph build.
pub fn build_from_rows(
    alloc: &mut GuidAllocator,
    schema_name: &str,
    parsed: &[Row],
) -> Result<SchemaGraph, IngestError> {
    let columns = rows::distinct_columns(parsed);
    build_schema_graph(alloc, schema_name, &columns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::EntityKind;
    use crate::rows::Row;

    #[test]
    fn allocator_is_strictly_decreasing_from_minus_one() {
        let mut alloc = GuidAllocator::new();
        let guids: Vec<i64> = (0..5).map(|_| alloc.next()).collect();
        assert_eq!(guids, vec![-1, -2, -3, -4, -5]);
    }

    #[test]
    fn builds_schema_columns_and_resource_set() {
        let mut alloc = GuidAllocator::new();
        let columns = vec!["a".to_string(), "b".to_string()];
        let graph = build_schema_graph(&mut alloc, "s", &columns).expect("graph");

        assert_eq!(graph.entity_count(), 4);
        assert_eq!(graph.schema.qualified_name, "rbc://s");
        assert_eq!(graph.schema.guid, -1);

        let qualified: Vec<&str> = graph
            .columns
            .iter()
            .map(|c| c.qualified_name.as_str())
            .collect();
        assert_eq!(qualified, vec!["rbc://s/a", "rbc://s/b"]);

        assert_eq!(graph.resource_set.qualified_name, "rbc://s_set");
        assert_eq!(graph.resource_set.guid, -4);
    }

    #[test]
    fn guids_are_distinct_and_schema_allocates_first() {
        let mut alloc = GuidAllocator::new();
        let columns = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let graph = build_schema_graph(&mut alloc, "s", &columns).expect("graph");
        let entities = graph.into_entities();

        let mut guids: Vec<i64> = entities.iter().map(|e| e.guid).collect();
        assert_eq!(guids, vec![-1, -2, -3, -4, -5]);
        guids.dedup();
        assert_eq!(guids.len(), entities.len());
        assert_eq!(entities[0].kind(), EntityKind::TabularSchema);
        assert_eq!(entities.last().map(Entity::kind), Some(EntityKind::ResourceSet));
    }

    #[test]
    fn consecutive_builds_share_the_allocator() {
        let mut alloc = GuidAllocator::new();
        let first = build_schema_graph(&mut alloc, "s1", &["a".to_string()]).expect("first");
        let second = build_schema_graph(&mut alloc, "s2", &["a".to_string()]).expect("second");
        assert_eq!(first.resource_set.guid, -3);
        assert_eq!(second.schema.guid, -4);
    }

    #[test]
    fn empty_column_set_is_rejected() {
        let mut alloc = GuidAllocator::new();
        let err = build_schema_graph(&mut alloc, "s", &[]).expect_err("no columns");
        assert!(matches!(err, IngestError::EmptyColumnSet { .. }));
    }

    #[test]
    fn build_from_rows_deduplicates_column_names() {
        let mut alloc = GuidAllocator::new();
        let parsed = vec![Row::new("a", "1"), Row::new("b", "2"), Row::new("a", "3")];
        let graph = build_from_rows(&mut alloc, "s", &parsed).expect("graph");
        assert_eq!(graph.columns.len(), 2);
    }
}
