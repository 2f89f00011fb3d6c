//! Per-relation printing: the record interface, the insert-parameters
//! interface, and the imports they need.

use std::collections::{BTreeMap, BTreeSet};

use tuskgen_schema::{Column, Relation};

use crate::{
    column::print_member,
    error::{Error, Result},
    options::PrintOptions,
    type_mapper::TypeScriptTypeMapper,
};

/// The derived names of one relation's generated artifacts.
#[derive(Debug, Clone)]
pub struct RelationNames {
    /// Record (full row) type name.
    pub record: String,
    /// Insert-parameters type name, always `<record>_InsertParameters` so
    /// the two names stay visibly related.
    pub insert: String,
    /// Output file stem (the relation name; extension added elsewhere).
    pub file_stem: String,
}

/// Derive the type and file names for a relation.
pub fn relation_names(relation: &Relation, options: &PrintOptions) -> RelationNames {
    let record = options.table_type_name.apply(&relation.name);
    let insert = format!("{}_InsertParameters", record);
    RelationNames {
        record,
        insert,
        file_stem: relation.name.clone(),
    }
}

#[derive(Debug, Clone, Default)]
struct TsImport {
    default: Option<String>,
    named: BTreeSet<String>,
}

/// A TypeScript file under construction: imports plus body blocks.
///
/// Imports are collected per module and rendered sorted by module path, so
/// output does not depend on the order imports were discovered in.
#[derive(Debug, Clone, Default)]
pub struct TsFile {
    imports: BTreeMap<String, TsImport>,
    blocks: Vec<String>,
}

impl TsFile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Import a module's default export, e.g. `import User from './users'`.
    pub fn import_default(&mut self, module_stem: &str, name: &str) {
        self.imports
            .entry(module_stem.to_string())
            .or_default()
            .default = Some(name.to_string());
    }

    /// Import a named export, e.g. `import {User_InsertParameters} from './users'`.
    pub fn import_named(&mut self, module_stem: &str, name: &str) {
        self.imports
            .entry(module_stem.to_string())
            .or_default()
            .named
            .insert(name.to_string());
    }

    /// Append a body block. Blocks are separated by a blank line.
    pub fn push_block(&mut self, block: String) {
        self.blocks.push(block);
    }

    /// Render the finished file.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (module, import) in &self.imports {
            let names = match (&import.default, import.named.is_empty()) {
                (Some(default), true) => default.clone(),
                (Some(default), false) => format!(
                    "{}, {{{}}}",
                    default,
                    import.named.iter().cloned().collect::<Vec<_>>().join(", ")
                ),
                (None, _) => format!(
                    "{{{}}}",
                    import.named.iter().cloned().collect::<Vec<_>>().join(", ")
                ),
            };
            out.push_str(&format!("import {} from './{}'\n", names, module));
        }
        for (i, block) in self.blocks.iter().enumerate() {
            if i > 0 || !self.imports.is_empty() {
                out.push('\n');
            }
            out.push_str(block);
        }
        out
    }
}

/// Everything the composer needs from one printed relation.
#[derive(Debug, Clone)]
pub struct RelationFragment {
    /// Output filename, e.g. `users.ts`.
    pub filename: String,
    /// Complete file content (banner added by the sink).
    pub content: String,
    /// `(relation, column)` pairs of JSON/JSONB columns, for the central
    /// serialization helper.
    pub json_columns: Vec<(String, String)>,
}

/// Render a JSDoc block for a relation comment.
fn comment_block(comment: &str) -> String {
    let mut out = String::from("/**\n");
    for line in comment.lines() {
        out.push_str(" * ");
        out.push_str(&line.replace("*/", "*\\/"));
        out.push('\n');
    }
    out.push_str(" */\n");
    out
}

/// Print one relation into its generated file.
///
/// Members are sorted alphabetically by column name so output is stable
/// across introspection orderings. Views and materialized views get no
/// insert-parameters interface.
pub fn print_relation(
    relation: &Relation,
    schema_index: &BTreeMap<&str, &Relation>,
    options: &PrintOptions,
) -> Result<RelationFragment> {
    let names = relation_names(relation, options);
    let mapper = TypeScriptTypeMapper::new(options);

    let mut columns: Vec<&Column> = relation.columns.iter().collect();
    columns.sort_by(|a, b| a.name.cmp(&b.name));

    let mut file = TsFile::new();

    // Resolve every column type once; both interfaces reuse the result.
    let mut resolved: Vec<(&Column, String)> = Vec::with_capacity(columns.len());
    for column in columns {
        let expression = if let Some(override_) = mapper.column_override(&relation.name, &column.name)
        {
            override_.to_string()
        } else if let Some(reference) = &column.references {
            let target = schema_index.get(reference.relation.as_str()).ok_or_else(|| {
                Box::new(dangling(relation, column, reference))
            })?;
            if target.column(&reference.column).is_none() {
                return Err(Box::new(dangling(relation, column, reference)));
            }
            let target_names = relation_names(target, options);
            if target.name != relation.name {
                file.import_default(&target_names.file_stem, &target_names.record);
            }
            format!("{}['{}']", target_names.record, reference.column)
        } else {
            mapper.resolve(&relation.name, column)?
        };
        resolved.push((column, expression));
    }

    let doc = relation.comment.as_deref().map(comment_block).unwrap_or_default();

    let mut record = doc.clone();
    record.push_str(&format!("interface {} {{\n", names.record));
    for (column, expression) in &resolved {
        record.push_str(&print_member(column, expression, false));
    }
    record.push_str("}\n");
    record.push_str(&format!("export default {};\n", names.record));
    file.push_block(record);

    if relation.kind.is_insertable() {
        let mut insert = doc;
        insert.push_str(&format!("interface {} {{\n", names.insert));
        for (column, expression) in &resolved {
            insert.push_str(&print_member(column, expression, true));
        }
        insert.push_str("}\n");
        insert.push_str(&format!("export type {{{}}}\n", names.insert));
        file.push_block(insert);
    }

    let json_columns = resolved
        .iter()
        .filter(|(column, _)| tuskgen_schema::DataTypeId::is_json(column.type_id))
        .map(|(column, _)| (relation.name.clone(), column.name.clone()))
        .collect();

    Ok(RelationFragment {
        filename: format!("{}.ts", names.file_stem),
        content: file.render(),
        json_columns,
    })
}

fn dangling(relation: &Relation, column: &Column, reference: &tuskgen_schema::ColumnRef) -> Error {
    Error::DanglingReference {
        relation: relation.name.clone(),
        column: column.name.clone(),
        target_relation: reference.relation.clone(),
        target_column: reference.column.clone(),
    }
}
