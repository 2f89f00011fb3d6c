//! Naming templates for generated type and file names.
//!
//! A template is literal text plus `{{ TABLE_NAME | filter | ... }}`
//! placeholders, e.g. `{{ TABLE_NAME | singular | pascal-case }}`. Filters
//! are pure string transforms resolved from a fixed registry when the
//! template is parsed, so an unknown filter name fails at configuration
//! time rather than mid-print.

use crate::error::{Error, Result};

/// Convert a string to PascalCase (e.g., "hello_world" -> "HelloWorld")
pub fn to_pascal_case(s: &str) -> String {
    s.split(['_', '-'])
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}

/// Convert a string to camelCase (e.g., "hello_world" -> "helloWorld")
pub fn to_camel_case(s: &str) -> String {
    let pascal = to_pascal_case(s);
    let mut chars = pascal.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

/// Convert a string to snake_case (e.g., "HelloWorld" -> "hello_world")
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() && i > 0 {
            result.push('_');
        }
        result.extend(c.to_lowercase());
    }
    result.replace('-', "_")
}

/// Singularize an English table name (e.g., "users" -> "user").
///
/// Covers the regular inflections table names actually use; irregular nouns
/// pass through unchanged and can be fixed with an explicit template.
pub fn singularize(s: &str) -> String {
    if let Some(stem) = s.strip_suffix("ies") {
        if !stem.is_empty() {
            return format!("{}y", stem);
        }
    }
    for suffix in ["ches", "shes", "sses", "xes", "zes"] {
        if let Some(stem) = s.strip_suffix(suffix) {
            return format!("{}{}", stem, &suffix[..suffix.len() - 2]);
        }
    }
    if s.ends_with('s') && !s.ends_with("ss") {
        return s[..s.len() - 1].to_string();
    }
    s.to_string()
}

/// Pluralize an English table name (e.g., "category" -> "categories").
pub fn pluralize(s: &str) -> String {
    if let Some(stem) = s.strip_suffix('y') {
        let penultimate = stem.chars().last();
        if penultimate.is_some_and(|c| !matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')) {
            return format!("{}ies", stem);
        }
    }
    if s.ends_with('s') || s.ends_with('x') || s.ends_with('z') || s.ends_with("ch") || s.ends_with("sh") {
        return format!("{}es", s);
    }
    format!("{}s", s)
}

/// A single named filter in a template pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter {
    PascalCase,
    CamelCase,
    SnakeCase,
    Singular,
    Plural,
}

impl Filter {
    fn from_name(name: &str) -> Option<Self> {
        let filter = match name {
            "pascal-case" => Filter::PascalCase,
            "camel-case" => Filter::CamelCase,
            "snake-case" => Filter::SnakeCase,
            "singular" => Filter::Singular,
            "plural" => Filter::Plural,
            _ => return None,
        };
        Some(filter)
    }

    fn apply(self, input: &str) -> String {
        match self {
            Filter::PascalCase => to_pascal_case(input),
            Filter::CamelCase => to_camel_case(input),
            Filter::SnakeCase => to_snake_case(input),
            Filter::Singular => singularize(input),
            Filter::Plural => pluralize(input),
        }
    }
}

#[derive(Debug, Clone)]
enum Segment {
    Literal(String),
    Placeholder(Vec<Filter>),
}

/// A parsed naming template.
///
/// Parsing happens once, at configuration time; [`NameTemplate::apply`] is a
/// pure function of the relation name afterwards.
#[derive(Debug, Clone)]
pub struct NameTemplate {
    source: String,
    segments: Vec<Segment>,
}

/// The only placeholder token templates may use.
const TABLE_NAME_TOKEN: &str = "TABLE_NAME";

impl NameTemplate {
    /// Parse a template string, resolving every filter name up front.
    pub fn parse(template: &str) -> Result<Self> {
        let mut segments = Vec::new();
        let mut rest = template;

        while let Some(start) = rest.find("{{") {
            if start > 0 {
                segments.push(Segment::Literal(rest[..start].to_string()));
            }
            let after = &rest[start + 2..];
            let end = after.find("}}").ok_or_else(|| {
                Error::configuration(format!("unterminated placeholder in naming template '{}'", template))
            })?;

            let mut parts = after[..end].split('|').map(str::trim);
            let token = parts.next().unwrap_or("");
            if token != TABLE_NAME_TOKEN {
                return Err(Error::configuration(format!(
                    "unknown token '{}' in naming template '{}' (expected {})",
                    token, template, TABLE_NAME_TOKEN
                )));
            }

            let mut filters = Vec::new();
            for name in parts {
                let filter = Filter::from_name(name).ok_or_else(|| {
                    Box::new(Error::UnknownFilter {
                        template: template.to_string(),
                        name: name.to_string(),
                    })
                })?;
                filters.push(filter);
            }
            segments.push(Segment::Placeholder(filters));
            rest = &after[end + 2..];
        }
        if !rest.is_empty() {
            segments.push(Segment::Literal(rest.to_string()));
        }

        if !segments.iter().any(|s| matches!(s, Segment::Placeholder(_))) {
            return Err(Error::configuration(format!(
                "naming template '{}' contains no {{{{ {} }}}} placeholder",
                template, TABLE_NAME_TOKEN
            )));
        }

        Ok(Self {
            source: template.to_string(),
            segments,
        })
    }

    /// Render the template for a relation name.
    pub fn apply(&self, relation_name: &str) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder(filters) => {
                    let mut value = relation_name.to_string();
                    for filter in filters {
                        value = filter.apply(&value);
                    }
                    out.push_str(&value);
                }
            }
        }
        out
    }

    /// The original template string.
    pub fn source(&self) -> &str {
        &self.source
    }
}
