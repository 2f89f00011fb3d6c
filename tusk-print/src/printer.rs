//! Schema-level composition: one pass over the relations, then the
//! aggregating `index.ts`, the `schema.json` snapshot, and optional
//! re-export files.

use tuskgen_schema::{Relation, SchemaModel, schema_snapshot};

use crate::{
    error::{Error, Result},
    file_set::FileSet,
    options::PrintOptions,
    relation::{RelationNames, TsFile, print_relation, relation_names},
};

/// Print a whole schema into its output file set.
///
/// Relations are processed sorted by name, so the output is independent of
/// catalog ordering. Any failure aborts the run: partially generated output
/// would have inconsistent cross-file imports.
pub fn print_schema(schema: &SchemaModel, options: &PrintOptions) -> Result<FileSet> {
    validate_overrides(schema, options)?;

    let schema_index = schema.by_name();
    let mut relations: Vec<&Relation> = schema.relations.iter().collect();
    relations.sort_by(|a, b| a.name.cmp(&b.name));

    let mut files = FileSet::new();
    let mut json_columns: Vec<(String, String)> = Vec::new();

    for relation in &relations {
        let fragment = print_relation(relation, &schema_index, options)?;
        json_columns.extend(fragment.json_columns);
        files.insert(fragment.filename, fragment.content, &relation.name)?;
    }

    files.insert(
        "index.ts".to_string(),
        print_index(&relations, &json_columns, options),
        "schema index",
    )?;

    let mut snapshot = serde_json::to_string_pretty(&schema_snapshot(schema))
        .expect("schema snapshot serializes to JSON");
    snapshot.push('\n');
    files.insert("schema.json".to_string(), snapshot, "schema snapshot")?;

    print_re_exports(&relations, options, &mut files)?;

    Ok(files)
}

/// Fail on `column_type_overrides` keys that match nothing in the schema,
/// before any file is composed.
fn validate_overrides(schema: &SchemaModel, options: &PrintOptions) -> Result<()> {
    let schema_index = schema.by_name();
    for key in options.column_type_overrides.keys() {
        let known = schema_index
            .get(key.relation.as_str())
            .is_some_and(|relation| relation.column(&key.column).is_some());
        if !known {
            return Err(Box::new(Error::UnknownOverrideColumn {
                relation: key.relation.clone(),
                column: key.column.clone(),
            }));
        }
    }
    Ok(())
}

/// Compose `index.ts`: imports, the `DatabaseSchema` map, and — when the
/// schema has JSON/JSONB columns anywhere — the single serialization helper.
fn print_index(
    relations: &[&Relation],
    json_columns: &[(String, String)],
    options: &PrintOptions,
) -> String {
    let mut file = TsFile::new();
    let names: Vec<(&Relation, RelationNames)> = relations
        .iter()
        .map(|relation| (*relation, relation_names(relation, options)))
        .collect();

    for (relation, names) in &names {
        file.import_default(&names.file_stem, &names.record);
        if relation.kind.is_insertable() {
            file.import_named(&names.file_stem, &names.insert);
        }
    }

    let mut block = String::from("interface DatabaseSchema {\n");
    for (relation, names) in &names {
        if relation.kind.is_insertable() {
            block.push_str(&format!(
                "  {}: {{record: {}, insert: {}}};\n",
                relation.name, names.record, names.insert
            ));
        } else {
            block.push_str(&format!("  {}: {{record: {}}};\n", relation.name, names.record));
        }
    }
    block.push_str("}\nexport default DatabaseSchema;\n");
    file.push_block(block);

    if !json_columns.is_empty() {
        file.push_block(serialize_value_helper(json_columns));
    }

    file.render()
}

/// The `serializeValue` helper, emitted once per schema with one branch per
/// JSON/JSONB column, identity for everything else.
fn serialize_value_helper(json_columns: &[(String, String)]) -> String {
    let mut block = String::from(
        "/**\n\
         * JSON serialize values (v) if the table name (t) and column name (c)\n\
         * is a JSON or JSONB column.\n\
         * This is necessary if you want to store values that are not plain objects\n\
         * in a JSON or JSONB column.\n\
         */\n\
         function serializeValue(t: string, c: string, v: unknown): unknown {\n",
    );
    for (relation, column) in json_columns {
        block.push_str(&format!(
            "  if (t === \"{}\" && c === \"{}\") {{\n    return JSON.stringify(v);\n  }}\n",
            relation, column
        ));
    }
    block.push_str("  return v;\n}\nexport {serializeValue}\n");
    block
}

/// Optional per-relation re-export files.
///
/// Record re-exports cover every relation; insert re-exports skip views,
/// which have no insert-parameters type.
fn print_re_exports(
    relations: &[&Relation],
    options: &PrintOptions,
    files: &mut FileSet,
) -> Result<()> {
    if let Some(template) = options.table_re_export_file_name.template() {
        for relation in relations {
            let names = relation_names(relation, options);
            files.insert(
                format!("{}.ts", template.apply(&relation.name)),
                format!("export {{default as {}}} from './{}'\n", names.record, names.file_stem),
                &relation.name,
            )?;
        }
    }
    if let Some(template) = options.table_insert_parameters_re_export_file_name.template() {
        for relation in relations {
            if !relation.kind.is_insertable() {
                continue;
            }
            let names = relation_names(relation, options);
            files.insert(
                format!("{}.ts", template.apply(&relation.name)),
                format!("export type {{{}}} from './{}'\n", names.insert, names.file_stem),
                &relation.name,
            )?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use indexmap::IndexMap;
    use tuskgen_schema::{Column, RelationKind};

    use super::*;
    use crate::{
        naming::NameTemplate,
        options::{ColumnKey, ReExport},
    };

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

    fn relation(name: &str, kind: RelationKind, columns: Vec<Column>) -> Relation {
        Relation {
            name: name.to_string(),
            kind,
            comment: None,
            columns,
        }
    }

    fn two_table_schema() -> SchemaModel {
        SchemaModel::new(vec![
            relation("users", RelationKind::Table, vec![column("id", 20, "BIGINT")]),
            relation("photos", RelationKind::Table, vec![column("id", 20, "BIGINT")]),
        ])
    }

    #[test]
    fn test_file_set_contents() {
        let files = print_schema(&two_table_schema(), &PrintOptions::default()).unwrap();

        assert!(files.contains("users.ts"));
        assert!(files.contains("photos.ts"));
        assert!(files.contains("index.ts"));
        assert!(files.contains("schema.json"));
        assert_eq!(files.len(), 4);
    }

    #[test]
    fn test_index_lists_relations_alphabetically() {
        let files = print_schema(&two_table_schema(), &PrintOptions::default()).unwrap();
        let index = files.get("index.ts").unwrap();

        let photos = index.find("photos: {record: Photo, insert: Photo_InsertParameters};").unwrap();
        let users = index.find("users: {record: User, insert: User_InsertParameters};").unwrap();
        assert!(photos < users);
        // No JSON columns anywhere, so no helper.
        assert!(!index.contains("serializeValue"));
    }

    #[test]
    fn test_view_entry_has_no_insert() {
        let schema = SchemaModel::new(vec![
            relation("users", RelationKind::Table, vec![column("id", 20, "BIGINT")]),
            relation(
                "user_stats",
                RelationKind::MaterializedView,
                vec![column("id", 20, "BIGINT")],
            ),
        ]);
        let files = print_schema(&schema, &PrintOptions::default()).unwrap();
        let index = files.get("index.ts").unwrap();

        assert!(index.contains("import UserStat from './user_stats'\n"));
        assert!(index.contains("  user_stats: {record: UserStat};\n"));
        assert!(!index.contains("UserStat_InsertParameters"));
    }

    #[test]
    fn test_unknown_override_column_fails_before_output() {
        let options = PrintOptions {
            column_type_overrides: IndexMap::from([(
                ColumnKey::new("users", "nope"),
                "string".to_string(),
            )]),
            ..Default::default()
        };

        let err = print_schema(&two_table_schema(), &options).unwrap_err();
        assert!(matches!(*err, Error::UnknownOverrideColumn { ref column, .. } if column == "nope"));
    }

    #[test]
    fn test_re_export_files() {
        let options = PrintOptions {
            table_re_export_file_name: ReExport::Template(
                NameTemplate::parse("{{ TABLE_NAME | camel-case }}").unwrap(),
            ),
            ..Default::default()
        };
        let schema = SchemaModel::new(vec![relation(
            "user_photos",
            RelationKind::Table,
            vec![column("id", 20, "BIGINT")],
        )]);

        let files = print_schema(&schema, &options).unwrap();
        assert_eq!(
            files.get("userPhotos.ts"),
            Some("export {default as UserPhoto} from './user_photos'\n")
        );
    }

    #[test]
    fn test_re_export_collision_is_fatal() {
        // The identity template collides with the relation's own file.
        let options = PrintOptions {
            table_re_export_file_name: ReExport::Template(
                NameTemplate::parse("{{ TABLE_NAME }}").unwrap(),
            ),
            ..Default::default()
        };

        let err = print_schema(&two_table_schema(), &options).unwrap_err();
        assert!(matches!(*err, Error::DuplicateFilename { .. }));
    }

    #[test]
    fn test_schema_json_is_sorted_and_terminated() {
        let files = print_schema(&two_table_schema(), &PrintOptions::default()).unwrap();
        let snapshot = files.get("schema.json").unwrap();

        assert!(snapshot.ends_with("\n"));
        let photos = snapshot.find("\"photos\"").unwrap();
        let users = snapshot.find("\"users\"").unwrap();
        assert!(photos < users);
    }

    #[test]
    fn test_printing_is_idempotent() {
        let schema = two_table_schema();
        let options = PrintOptions::default();

        let first = print_schema(&schema, &options).unwrap();
        let second = print_schema(&schema, &options).unwrap();
        assert_eq!(first.sorted(), second.sorted());
    }

    #[test]
    fn test_relation_order_does_not_matter() {
        let forward = two_table_schema();
        let mut reversed = forward.clone();
        reversed.relations.reverse();

        let a = print_schema(&forward, &PrintOptions::default()).unwrap();
        let b = print_schema(&reversed, &PrintOptions::default()).unwrap();
        assert_eq!(a.sorted(), b.sorted());
    }
}
