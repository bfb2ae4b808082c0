//! Describe a schema's fields, or print its JSON Schema.
//!
//! # Usage
//!
//! ```bash
//! # Field table
//! roastery describe coffeeitem
//!
//! # JSON Schema document
//! roastery describe ContactMessage --json-schema
//! ```

use roastery_core::SchemaKind;
use roastery_core::schema::{Constraint, FieldSpec};

use crate::config::OutputStyle;
use crate::error::CliError;

/// Render the field table for `kind`.
#[must_use]
pub fn render_table(kind: SchemaKind) -> String {
    let fields = kind.fields();
    let name_width = column_width(fields, |f| f.name.len());
    let type_width = column_width(fields, |f| f.field_type.name().len());
    let rules: Vec<String> = fields.iter().map(rule_summary).collect();
    let rules_width = rules.iter().map(String::len).max().unwrap_or(0);

    let mut out = format!(
        "{} (collection: {})\n{}\n\n",
        kind.name(),
        kind.collection(),
        kind.description()
    );
    for (field, rule) in fields.iter().zip(&rules) {
        out.push_str(&format!(
            "  {:<name_width$}  {:<type_width$}  {:<rules_width$}  {}\n",
            field.name,
            field.field_type.name(),
            rule,
            field.description,
        ));
    }
    out
}

/// Render the JSON Schema document for `kind`.
///
/// # Errors
///
/// Returns `CliError::Json` if the document cannot be serialized.
pub fn render_json_schema(kind: SchemaKind, style: OutputStyle) -> Result<String, CliError> {
    let doc = kind.json_schema();
    let mut out = match style {
        OutputStyle::Pretty => serde_json::to_string_pretty(&doc)?,
        OutputStyle::Compact => serde_json::to_string(&doc)?,
    };
    out.push('\n');
    Ok(out)
}

fn column_width(fields: &[FieldSpec], len: impl Fn(&FieldSpec) -> usize) -> usize {
    fields.iter().map(len).max().unwrap_or(0)
}

/// Presence, default and constraint, e.g. `optional, default true`.
fn rule_summary(field: &FieldSpec) -> String {
    let mut parts = vec![if field.required {
        "required".to_string()
    } else {
        "optional".to_string()
    }];
    if let Some(default) = field.default {
        parts.push(format!("default {default}"));
    }
    if field.constraint != Constraint::None {
        parts.push(field.constraint.to_string());
    }
    parts.join(", ")
}
