//! The diffable `schema.json` artifact.
//!
//! A stable, deterministically-ordered projection of the schema model used
//! for change review: relations sorted by name, columns sorted by name,
//! camelCase field names. The printer serializes this with pretty JSON so
//! diffs stay line-oriented.

use serde::Serialize;

use crate::{Relation, SchemaModel};

/// One relation entry of the `schema.json` artifact.
#[derive(Debug, Clone, Serialize)]
pub struct RelationSnapshot {
    pub name: String,
    pub columns: Vec<ColumnSnapshot>,
}

/// One column entry of the `schema.json` artifact.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnSnapshot {
    pub name: String,
    pub is_nullable: bool,
    pub has_default: bool,
    pub type_id: u32,
    pub type_name: String,
}

/// Project a schema model into its snapshot form.
///
/// Ordering is alphabetical by relation then by column, independent of
/// introspection order, so the artifact is stable across catalog orderings.
pub fn schema_snapshot(schema: &SchemaModel) -> Vec<RelationSnapshot> {
    let mut relations: Vec<&Relation> = schema.relations.iter().collect();
    relations.sort_by(|a, b| a.name.cmp(&b.name));

    relations
        .into_iter()
        .map(|relation| {
            let mut columns: Vec<ColumnSnapshot> = relation
                .columns
                .iter()
                .map(|c| ColumnSnapshot {
                    name: c.name.clone(),
                    is_nullable: c.is_nullable,
                    has_default: c.has_default,
                    type_id: c.type_id,
                    type_name: c.type_name.clone(),
                })
                .collect();
            columns.sort_by(|a, b| a.name.cmp(&b.name));
            RelationSnapshot {
                name: relation.name.clone(),
                columns,
            }
        })
        .collect()
}
