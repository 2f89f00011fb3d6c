//! TypeScript type printer for the tusk type generator.
//!
//! Turns an introspected [`SchemaModel`](tuskgen_schema::SchemaModel) into a
//! deterministic set of generated files: one type-definition file per
//! relation, an aggregating `index.ts`, and a diffable `schema.json`
//! snapshot. Same schema and options always produce byte-identical output,
//! which is what makes the result snapshot-testable.
//!
//! # Usage
//!
//! ```ignore
//! use tuskgen_print::{PrintOptions, print_schema, write_files};
//!
//! let files = print_schema(&schema, &options)?;
//! write_files(Path::new("src/__generated__"), &files, "Generated by: tusk")?;
//! ```
//!
//! Printing is pure and fail-fast: nothing touches the file system until
//! [`write_files`] receives the complete file set.

mod column;
mod error;
mod file_set;
mod naming;
mod options;
mod printer;
mod relation;
mod sink;
mod type_mapper;

pub use column::print_member;
pub use error::{Error, Result};
pub use file_set::{FileSet, GeneratedFile};
pub use naming::{Filter, NameTemplate, pluralize, singularize, to_camel_case, to_pascal_case, to_snake_case};
pub use options::{ColumnKey, DEFAULT_TABLE_TYPE_NAME, OptionsConfig, PrintOptions, ReExport};
pub use printer::print_schema;
pub use relation::{RelationFragment, RelationNames, TsFile, print_relation, relation_names};
pub use sink::{WriteReport, write_files};
pub use type_mapper::TypeScriptTypeMapper;
