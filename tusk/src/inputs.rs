//! Loading of the two run inputs: the schema snapshot and the options file.

use std::path::Path;

use eyre::{Context, Result};
use tuskgen_print::OptionsConfig;
use tuskgen_schema::SchemaModel;

/// Load the introspection dump.
pub fn load_schema(path: &Path) -> Result<SchemaModel> {
    let raw = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read schema snapshot '{}'", path.display()))?;
    serde_json::from_str(&raw)
        .wrap_err_with(|| format!("failed to parse schema snapshot '{}'", path.display()))
}

/// Load `tusk.toml`. A missing file means all-default options.
pub fn load_config(path: &Path) -> Result<OptionsConfig> {
    if !path.exists() {
        return Ok(OptionsConfig::default());
    }
    let raw = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read '{}'", path.display()))?;
    toml::from_str(&raw).wrap_err_with(|| format!("failed to parse '{}'", path.display()))
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_load_schema() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("schema.json");
        std::fs::write(
            &path,
            r#"{
                "relations": [
                    {
                        "name": "users",
                        "kind": "table",
                        "columns": [
                            {
                                "name": "id",
                                "type_id": 20,
                                "type_name": "BIGINT",
                                "is_nullable": false,
                                "has_default": true,
                                "is_primary_key": true
                            }
                        ]
                    }
                ]
            }"#,
        )
        .unwrap();

        let schema = load_schema(&path).unwrap();
        assert_eq!(schema.relations.len(), 1);
        assert!(schema.relations[0].columns[0].is_primary_key);
    }

    #[test]
    fn test_missing_config_means_defaults() {
        let temp = TempDir::new().unwrap();
        let config = load_config(&temp.path().join("tusk.toml")).unwrap();
        let options = config.into_options().unwrap();
        assert_eq!(options.table_type_name.apply("users"), "User");
    }

    #[test]
    fn test_load_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tusk.toml");
        std::fs::write(
            &path,
            r#"
                table_type_name = "{{ TABLE_NAME | pascal-case }}"

                [column_type_overrides]
                "photos.cdn_url" = 'string & {__brand?: "url"}'

                [type_overrides]
                jsonb = "unknown"
            "#,
        )
        .unwrap();

        let options = load_config(&path).unwrap().into_options().unwrap();
        assert_eq!(options.table_type_name.apply("users"), "Users");
        assert_eq!(options.type_overrides.get(&3802).map(String::as_str), Some("unknown"));
    }

    #[test]
    fn test_unknown_config_key_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tusk.toml");
        std::fs::write(&path, "table_type = \"oops\"\n").unwrap();

        assert!(load_config(&path).is_err());
    }
}
