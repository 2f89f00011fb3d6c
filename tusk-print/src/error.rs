use miette::Diagnostic;
use thiserror::Error;

/// Result type for printing operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("no type mapping for '{type_name}' (oid {type_id}) at {relation}.{column}")]
    #[diagnostic(
        code(tusk::unknown_type),
        help(
            "add a type_overrides entry for oid {type_id} or a column_type_overrides entry for '{relation}.{column}'"
        )
    )]
    UnknownType {
        relation: String,
        column: String,
        type_id: u32,
        type_name: String,
    },

    #[error("invalid configuration: {message}")]
    #[diagnostic(code(tusk::configuration))]
    Configuration { message: String },

    #[error("unknown filter '{name}' in naming template '{template}'")]
    #[diagnostic(
        code(tusk::unknown_filter),
        help("valid filters are: pascal-case, camel-case, snake-case, singular, plural")
    )]
    UnknownFilter { template: String, name: String },

    #[error("column_type_overrides entry '{relation}.{column}' does not match any column")]
    #[diagnostic(
        code(tusk::unknown_override_column),
        help("override keys must name an existing column as '<relation>.<column>'")
    )]
    UnknownOverrideColumn { relation: String, column: String },

    #[error("relations '{first}' and '{second}' both produce the output file '{filename}'")]
    #[diagnostic(
        code(tusk::duplicate_filename),
        help("adjust the file-name templates so every relation gets a distinct file")
    )]
    DuplicateFilename {
        filename: String,
        first: String,
        second: String,
    },

    #[error(
        "{relation}.{column} references {target_relation}.{target_column}, which is not in the schema"
    )]
    #[diagnostic(
        code(tusk::dangling_reference),
        help("the schema snapshot must contain every relation that foreign keys point at")
    )]
    DanglingReference {
        relation: String,
        column: String,
        target_relation: String,
        target_column: String,
    },
}

impl Error {
    /// Create a boxed configuration error.
    pub fn configuration(message: impl Into<String>) -> Box<Self> {
        Box::new(Error::Configuration {
            message: message.into(),
        })
    }
}
