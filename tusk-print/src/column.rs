//! Printing of a single interface member.

use tuskgen_schema::Column;

/// Escape comment terminators so user text cannot break out of the JSDoc
/// block.
fn sanitize(text: &str) -> String {
    text.replace("*/", "*\\/")
}

/// Print one interface member, indented for an interface body.
///
/// The doc block reproduces the column comment verbatim and records the
/// server-side default. The `?` marker appears only in the insert shape and
/// only for defaulted columns; the `(T) | null` wrapper is unconditional on
/// `is_nullable`, even if an override expression already encodes null.
pub fn print_member(column: &Column, resolved_type: &str, for_insert: bool) -> String {
    let mut out = String::new();

    let mut doc_lines: Vec<String> = Vec::new();
    if let Some(comment) = &column.comment {
        doc_lines.extend(comment.lines().map(sanitize));
    }
    if column.has_default {
        if let Some(expression) = &column.default_expression {
            doc_lines.push(format!("@default {}", sanitize(expression)));
        }
    }
    if !doc_lines.is_empty() {
        out.push_str("  /**\n");
        for line in &doc_lines {
            out.push_str("   * ");
            out.push_str(line);
            out.push('\n');
        }
        out.push_str("   */\n");
    }

    let optional = if for_insert && column.has_default { "?" } else { "" };
    if column.is_nullable {
        out.push_str(&format!("  {}{}: ({}) | null\n", column.name, optional, resolved_type));
    } else {
        out.push_str(&format!("  {}{}: {}\n", column.name, optional, resolved_type));
    }
    out
}
