//! TypeScript type mapping for columns.
//!
//! Precedence, highest first: a `column_type_overrides` entry (used
//! verbatim, caller handles it before asking this mapper), the foreign-key
//! projection (also handled by the relation printer), a `type_overrides`
//! entry for the column's OID, and finally the built-in OID map below.
//! An OID with neither override nor built-in mapping is a hard error; the
//! mapper never falls back to an `any`-style escape hatch.

use tuskgen_schema::{Column, DataTypeId};

use crate::{
    error::{Error, Result},
    options::PrintOptions,
};

/// TypeScript type mapper.
pub struct TypeScriptTypeMapper<'a> {
    options: &'a PrintOptions,
}

impl<'a> TypeScriptTypeMapper<'a> {
    pub fn new(options: &'a PrintOptions) -> Self {
        Self { options }
    }

    /// The column-level override for `relation.column`, if configured.
    pub fn column_override(&self, relation: &str, column: &str) -> Option<&'a str> {
        self.options
            .column_type_overrides
            .iter()
            .find(|(key, _)| key.relation == relation && key.column == column)
            .map(|(_, expression)| expression.as_str())
    }

    /// Resolve a column with no column-level override and no foreign key.
    ///
    /// Applies the OID override or built-in mapping, then brands primary-key
    /// columns so ids of different tables stay distinct at the type level.
    pub fn resolve(&self, relation: &str, column: &Column) -> Result<String> {
        let base = match self.options.type_overrides.get(&column.type_id) {
            Some(expression) => expression.clone(),
            None => builtin(column.type_id)
                .ok_or_else(|| {
                    Box::new(Error::UnknownType {
                        relation: relation.to_string(),
                        column: column.name.clone(),
                        type_id: column.type_id,
                        type_name: column.type_name.clone(),
                    })
                })?
                .to_string(),
        };

        if column.is_primary_key {
            Ok(format!(
                "{} & {{readonly __brand?: '{}_{}'}}",
                base, relation, column.name
            ))
        } else {
            Ok(base)
        }
    }
}

/// Built-in OID → TypeScript mapping (bigint-as-number mode).
fn builtin(type_id: u32) -> Option<&'static str> {
    use DataTypeId::*;

    let expression = match DataTypeId::from_oid(type_id)? {
        Bool => "boolean",
        Int2 | Int4 | Int8 | Oid | Float4 | Float8 => "number",
        Numeric => "string",
        Bytea => "Buffer",
        Name | Text | Bpchar | Varchar | Time | Uuid => "string",
        Date | Timestamp | Timestamptz => "Date",
        Json | Jsonb => "unknown",
    };
    Some(expression)
}

#[cfg(test)]
mod tests {
    use indexmap::IndexMap;
    use tuskgen_schema::Column;

    use super::*;
    use crate::options::ColumnKey;

    fn column(name: &str, type_id: u32, type_name: &str) -> Column {
        Column {
            name: name.to_string(),
            type_id,
            type_name: type_name.to_string(),
            is_nullable: false,
            has_default: false,
            default_expression: None,
            comment: None,
            is_primary_key: false,
            references: None,
        }
    }

    #[test]
    fn test_builtin_mappings() {
        let options = PrintOptions::default();
        let mapper = TypeScriptTypeMapper::new(&options);

        assert_eq!(mapper.resolve("t", &column("a", 25, "TEXT")).unwrap(), "string");
        assert_eq!(mapper.resolve("t", &column("b", 20, "BIGINT")).unwrap(), "number");
        assert_eq!(mapper.resolve("t", &column("c", 1184, "TIMESTAMPTZ")).unwrap(), "Date");
        assert_eq!(mapper.resolve("t", &column("d", 1700, "NUMERIC")).unwrap(), "string");
        assert_eq!(mapper.resolve("t", &column("e", 3802, "JSONB")).unwrap(), "unknown");
    }

    #[test]
    fn test_unknown_oid_is_an_error() {
        let options = PrintOptions::default();
        let mapper = TypeScriptTypeMapper::new(&options);

        let err = mapper.resolve("events", &column("payload", 99999, "CITEXT")).unwrap_err();
        match *err {
            Error::UnknownType {
                ref relation,
                ref column,
                type_id,
                ..
            } => {
                assert_eq!(relation, "events");
                assert_eq!(column, "payload");
                assert_eq!(type_id, 99999);
            }
            other => panic!("expected UnknownType, got {other:?}"),
        }
    }

    #[test]
    fn test_type_override_beats_builtin() {
        let options = PrintOptions {
            type_overrides: IndexMap::from([(3802, "unknown".to_string())]),
            ..Default::default()
        };
        let mapper = TypeScriptTypeMapper::new(&options);

        assert_eq!(mapper.resolve("t", &column("meta", 3802, "JSONB")).unwrap(), "unknown");
    }

    #[test]
    fn test_type_override_covers_unknown_oid() {
        let options = PrintOptions {
            type_overrides: IndexMap::from([(99999, "string".to_string())]),
            ..Default::default()
        };
        let mapper = TypeScriptTypeMapper::new(&options);

        assert_eq!(mapper.resolve("t", &column("slug", 99999, "CITEXT")).unwrap(), "string");
    }

    #[test]
    fn test_column_override_lookup() {
        let options = PrintOptions {
            column_type_overrides: IndexMap::from([(
                ColumnKey::new("photos", "cdn_url"),
                "string & {__brand?: \"url\"}".to_string(),
            )]),
            ..Default::default()
        };
        let mapper = TypeScriptTypeMapper::new(&options);

        assert_eq!(
            mapper.column_override("photos", "cdn_url"),
            Some("string & {__brand?: \"url\"}")
        );
        assert_eq!(mapper.column_override("photos", "caption"), None);
    }

    #[test]
    fn test_primary_key_brand() {
        let options = PrintOptions::default();
        let mapper = TypeScriptTypeMapper::new(&options);

        let mut id = column("id", 20, "BIGINT");
        id.is_primary_key = true;

        assert_eq!(
            mapper.resolve("users", &id).unwrap(),
            "number & {readonly __brand?: 'users_id'}"
        );
    }
}
