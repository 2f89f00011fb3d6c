//! Print options.
//!
//! [`OptionsConfig`] is the raw, deserializable shape of `tusk.toml`;
//! [`PrintOptions`] is the validated form the printers consume. Validation
//! parses every naming template and override key up front, so configuration
//! mistakes surface before any file is composed.

use std::fmt;

use indexmap::IndexMap;
use serde::Deserialize;
use tuskgen_schema::DataTypeId;

use crate::{
    error::{Error, Result},
    naming::NameTemplate,
};

/// Default record type name template: `users` → `User`.
pub const DEFAULT_TABLE_TYPE_NAME: &str = "{{ TABLE_NAME | singular | pascal-case }}";

/// A typed `relation.column` override key.
///
/// The dotted spelling only exists at the config boundary; internally
/// overrides are keyed by this pair so `a.b.c` cannot alias `a.b` + `c`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColumnKey {
    pub relation: String,
    pub column: String,
}

impl ColumnKey {
    pub fn new(relation: impl Into<String>, column: impl Into<String>) -> Self {
        Self {
            relation: relation.into(),
            column: column.into(),
        }
    }

    /// Parse the `"relation.column"` config spelling.
    pub fn parse(key: &str) -> Result<Self> {
        match key.split_once('.') {
            Some((relation, column)) if !relation.is_empty() && !column.is_empty() => {
                Ok(Self::new(relation, column))
            }
            _ => Err(Error::configuration(format!(
                "override key '{}' is not of the form '<relation>.<column>'",
                key
            ))),
        }
    }
}

impl fmt::Display for ColumnKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.relation, self.column)
    }
}

/// Whether an optional re-export file family is generated.
#[derive(Debug, Clone, Default)]
pub enum ReExport {
    /// The explicit disabled sentinel (the default).
    #[default]
    Disabled,
    /// Generate one file per relation, named by this template.
    Template(NameTemplate),
}

impl ReExport {
    pub fn template(&self) -> Option<&NameTemplate> {
        match self {
            ReExport::Disabled => None,
            ReExport::Template(t) => Some(t),
        }
    }
}

/// Validated print options, immutable during a run.
#[derive(Debug, Clone)]
pub struct PrintOptions {
    /// Template for the record type name.
    pub table_type_name: NameTemplate,
    /// Literal type expressions keyed by `(relation, column)`.
    pub column_type_overrides: IndexMap<ColumnKey, String>,
    /// Literal type expressions keyed by type OID.
    pub type_overrides: IndexMap<u32, String>,
    /// Per-table record re-export files.
    pub table_re_export_file_name: ReExport,
    /// Per-table insert-parameters re-export files.
    pub table_insert_parameters_re_export_file_name: ReExport,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            table_type_name: NameTemplate::parse(DEFAULT_TABLE_TYPE_NAME)
                .expect("default table type name template is valid"),
            column_type_overrides: IndexMap::new(),
            type_overrides: IndexMap::new(),
            table_re_export_file_name: ReExport::Disabled,
            table_insert_parameters_re_export_file_name: ReExport::Disabled,
        }
    }
}

/// Raw options as they appear in `tusk.toml`.
///
/// All fields are optional; omitting a re-export file name leaves that file
/// family disabled. `type_overrides` keys may be OID numbers or well-known
/// Postgres type keywords (`jsonb`, `bigint`, ...).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OptionsConfig {
    #[serde(default)]
    pub table_type_name: Option<String>,
    #[serde(default)]
    pub table_re_export_file_name: Option<String>,
    #[serde(default)]
    pub table_insert_parameters_re_export_file_name: Option<String>,
    #[serde(default)]
    pub column_type_overrides: IndexMap<String, String>,
    #[serde(default)]
    pub type_overrides: IndexMap<String, String>,
}

impl OptionsConfig {
    /// Validate into [`PrintOptions`], failing on the first bad template,
    /// filter, or override key.
    pub fn into_options(self) -> Result<PrintOptions> {
        let table_type_name = match &self.table_type_name {
            Some(template) => NameTemplate::parse(template)?,
            None => NameTemplate::parse(DEFAULT_TABLE_TYPE_NAME)
                .expect("default table type name template is valid"),
        };

        let mut column_type_overrides = IndexMap::new();
        for (key, expression) in self.column_type_overrides {
            column_type_overrides.insert(ColumnKey::parse(&key)?, expression);
        }

        let mut type_overrides = IndexMap::new();
        for (key, expression) in self.type_overrides {
            let oid = match key.parse::<u32>() {
                Ok(oid) => oid,
                Err(_) => DataTypeId::from_keyword(&key)
                    .map(DataTypeId::oid)
                    .ok_or_else(|| {
                        Error::configuration(format!(
                            "type_overrides key '{}' is neither a type oid nor a known type keyword",
                            key
                        ))
                    })?,
            };
            type_overrides.insert(oid, expression);
        }

        Ok(PrintOptions {
            table_type_name,
            column_type_overrides,
            type_overrides,
            table_re_export_file_name: parse_re_export(self.table_re_export_file_name.as_deref())?,
            table_insert_parameters_re_export_file_name: parse_re_export(
                self.table_insert_parameters_re_export_file_name.as_deref(),
            )?,
        })
    }
}

fn parse_re_export(template: Option<&str>) -> Result<ReExport> {
    match template {
        None => Ok(ReExport::Disabled),
        Some(template) => Ok(ReExport::Template(NameTemplate::parse(template)?)),
    }
}
