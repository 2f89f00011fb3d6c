//! The introspected schema model.
//!
//! One [`SchemaModel`] per run, holding every relation (table, view,
//! materialized view) of a single database schema. The model is immutable
//! once loaded; the printer only reads from it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A full schema snapshot as produced by introspection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SchemaModel {
    /// All relations of the schema, in introspection order.
    pub relations: Vec<Relation>,
}

impl SchemaModel {
    /// Create a schema model from a list of relations.
    pub fn new(relations: Vec<Relation>) -> Self {
        Self { relations }
    }

    /// Build a name → relation lookup.
    ///
    /// Built once per print run; cross-relation references resolve through
    /// this index rather than through pointers embedded in the entities.
    pub fn by_name(&self) -> BTreeMap<&str, &Relation> {
        self.relations.iter().map(|r| (r.name.as_str(), r)).collect()
    }

    /// Look up a relation by name.
    pub fn relation(&self, name: &str) -> Option<&Relation> {
        self.relations.iter().find(|r| r.name == name)
    }
}

/// What kind of relation this is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationKind {
    Table,
    View,
    MaterializedView,
}

impl RelationKind {
    /// Get the lowercase string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationKind::Table => "table",
            RelationKind::View => "view",
            RelationKind::MaterializedView => "materialized_view",
        }
    }

    /// Views (plain or materialized) are not directly insertable, so they
    /// never get an insert-parameters shape.
    pub fn is_insertable(&self) -> bool {
        matches!(self, RelationKind::Table)
    }
}

/// A table, view, or materialized view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Relation {
    /// Relation name, unique within the schema.
    pub name: String,
    /// Table, view, or materialized view.
    pub kind: RelationKind,
    /// `COMMENT ON TABLE/VIEW`, if any.
    #[serde(default)]
    pub comment: Option<String>,
    /// Columns in introspection order.
    pub columns: Vec<Column>,
}

impl Relation {
    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }
}

/// A single column of a relation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Column {
    /// Column name, unique within its relation.
    pub name: String,
    /// Native type OID (see [`crate::DataTypeId`]).
    pub type_id: u32,
    /// Diagnostic type name, e.g. `TIMESTAMPTZ`.
    pub type_name: String,
    /// Whether NULL is a legal value.
    pub is_nullable: bool,
    /// Whether a server-side default exists.
    pub has_default: bool,
    /// The default expression, for documentation only.
    #[serde(default)]
    pub default_expression: Option<String>,
    /// `COMMENT ON COLUMN`, if any.
    #[serde(default)]
    pub comment: Option<String>,
    /// Whether the column is part of the primary key.
    #[serde(default)]
    pub is_primary_key: bool,
    /// Declared foreign key, pointing at another relation's primary-key
    /// column. A non-owning reference, resolved by name at print time.
    #[serde(default)]
    pub references: Option<ColumnRef>,
}

/// A by-name reference to a column of another relation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnRef {
    /// Referenced relation name.
    pub relation: String,
    /// Referenced column name.
    pub column: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(name: &str) -> Column {
        Column {
            name: name.to_string(),
            type_id: 25,
            type_name: "TEXT".to_string(),
            is_nullable: false,
            has_default: false,
            default_expression: None,
            comment: None,
            is_primary_key: false,
            references: None,
        }
    }

    #[test]
    fn test_relation_kind_insertable() {
        assert!(RelationKind::Table.is_insertable());
        assert!(!RelationKind::View.is_insertable());
        assert!(!RelationKind::MaterializedView.is_insertable());
    }

    #[test]
    fn test_by_name_lookup() {
        let schema = SchemaModel::new(vec![
            Relation {
                name: "users".to_string(),
                kind: RelationKind::Table,
                comment: None,
                columns: vec![column("id")],
            },
            Relation {
                name: "photos".to_string(),
                kind: RelationKind::Table,
                comment: None,
                columns: vec![],
            },
        ]);

        let index = schema.by_name();
        assert!(index.contains_key("users"));
        assert!(index.contains_key("photos"));
        assert!(!index.contains_key("albums"));
        assert!(schema.relation("users").unwrap().column("id").is_some());
    }

    #[test]
    fn test_deserialize_minimal_column() {
        // Optional fields may be absent in the introspection dump.
        let col: Column = serde_json::from_str(
            r#"{
                "name": "id",
                "type_id": 20,
                "type_name": "BIGINT",
                "is_nullable": false,
                "has_default": true
            }"#,
        )
        .unwrap();

        assert_eq!(col.name, "id");
        assert!(col.has_default);
        assert!(col.default_expression.is_none());
        assert!(col.references.is_none());
        assert!(!col.is_primary_key);
    }
}
