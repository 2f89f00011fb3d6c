//! Postgres data type OIDs.
//!
//! Only the types the built-in mapper understands are listed; anything else
//! must be covered by a `type_overrides` entry in the print options.

/// Well-known Postgres type OIDs.
///
/// The numeric values are the stable `pg_type.oid` values, which is what the
/// introspection dump records in `type_id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum DataTypeId {
    Bool = 16,
    Bytea = 17,
    Name = 19,
    Int8 = 20,
    Int2 = 21,
    Int4 = 23,
    Text = 25,
    Oid = 26,
    Json = 114,
    Float4 = 700,
    Float8 = 701,
    Bpchar = 1042,
    Varchar = 1043,
    Date = 1082,
    Time = 1083,
    Timestamp = 1114,
    Timestamptz = 1184,
    Numeric = 1700,
    Uuid = 2950,
    Jsonb = 3802,
}

impl DataTypeId {
    /// The raw OID.
    pub fn oid(self) -> u32 {
        self as u32
    }

    /// Look up a type by its raw OID.
    pub fn from_oid(oid: u32) -> Option<Self> {
        let id = match oid {
            16 => DataTypeId::Bool,
            17 => DataTypeId::Bytea,
            19 => DataTypeId::Name,
            20 => DataTypeId::Int8,
            21 => DataTypeId::Int2,
            23 => DataTypeId::Int4,
            25 => DataTypeId::Text,
            26 => DataTypeId::Oid,
            114 => DataTypeId::Json,
            700 => DataTypeId::Float4,
            701 => DataTypeId::Float8,
            1042 => DataTypeId::Bpchar,
            1043 => DataTypeId::Varchar,
            1082 => DataTypeId::Date,
            1083 => DataTypeId::Time,
            1114 => DataTypeId::Timestamp,
            1184 => DataTypeId::Timestamptz,
            1700 => DataTypeId::Numeric,
            2950 => DataTypeId::Uuid,
            3802 => DataTypeId::Jsonb,
            _ => return None,
        };
        Some(id)
    }

    /// Look up a type by its lowercase Postgres keyword.
    ///
    /// Used at the config boundary so `type_overrides` can be keyed by
    /// `"jsonb"` instead of `"3802"`.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        let id = match keyword {
            "bool" | "boolean" => DataTypeId::Bool,
            "bytea" => DataTypeId::Bytea,
            "name" => DataTypeId::Name,
            "int8" | "bigint" => DataTypeId::Int8,
            "int2" | "smallint" => DataTypeId::Int2,
            "int4" | "int" | "integer" => DataTypeId::Int4,
            "text" => DataTypeId::Text,
            "oid" => DataTypeId::Oid,
            "json" => DataTypeId::Json,
            "float4" | "real" => DataTypeId::Float4,
            "float8" | "double precision" => DataTypeId::Float8,
            "bpchar" | "char" => DataTypeId::Bpchar,
            "varchar" => DataTypeId::Varchar,
            "date" => DataTypeId::Date,
            "time" => DataTypeId::Time,
            "timestamp" => DataTypeId::Timestamp,
            "timestamptz" => DataTypeId::Timestamptz,
            "numeric" | "decimal" => DataTypeId::Numeric,
            "uuid" => DataTypeId::Uuid,
            "jsonb" => DataTypeId::Jsonb,
            _ => return None,
        };
        Some(id)
    }

    /// Whether values of this type are stored as JSON documents.
    pub fn is_json(oid: u32) -> bool {
        oid == DataTypeId::Json.oid() || oid == DataTypeId::Jsonb.oid()
    }
}
