//! Schema model types for the tusk type generator.
//!
//! This crate defines the immutable schema snapshot that the printing engine
//! consumes. The snapshot is produced by an introspection step (outside this
//! workspace) and loaded from JSON; nothing here talks to a database.
//!
//! # Architecture
//!
//! ```text
//! schema.json (introspection dump) → tuskgen-schema (model) → tuskgen-print (codegen)
//! ```
//!
//! The model types are designed to be:
//! - Read-only once constructed (printing never mutates the schema)
//! - Free of back-pointers (cross-relation references are resolved by name)
//! - Directly serde-loadable from the introspection dump

mod snapshot;
mod type_id;
mod types;

pub use snapshot::{ColumnSnapshot, RelationSnapshot, schema_snapshot};
pub use type_id::DataTypeId;
pub use types::{Column, ColumnRef, Relation, RelationKind, SchemaModel};
