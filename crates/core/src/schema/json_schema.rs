//! JSON Schema export built from field metadata.

use serde_json::{Map, Value, json};

use super::field::{Constraint, FieldSpec, FieldType};

/// Decimal text accepted for a decimal field: plain or scientific notation.
pub const DECIMAL_PATTERN: &str = r"^\s*[+-]?[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?\s*$";

/// [`DECIMAL_PATTERN`] without a leading minus sign.
pub const NON_NEGATIVE_DECIMAL_PATTERN: &str =
    r"^\s*\+?[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?\s*$";

/// Build a JSON Schema object for a record type.
///
/// Required fields are listed under `required`; optional fields carry their
/// `default`, and fields whose default is empty also accept `null`.
///
/// Decimals accept a JSON number or a decimal string, since records store
/// them as strings to keep their scale.
#[must_use]
pub fn document(title: &str, description: &str, fields: &[FieldSpec]) -> Value {
    let properties: Map<String, Value> = fields
        .iter()
        .map(|f| (f.name.to_owned(), property(f)))
        .collect();

    let required: Vec<&str> = fields.iter().filter(|f| f.required).map(|f| f.name).collect();

    json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "title": title,
        "description": description,
        "type": "object",
        "properties": properties,
        "required": required,
    })
}

fn property(field: &FieldSpec) -> Value {
    let mut prop = type_keywords(field.field_type);
    if let Some(obj) = prop.as_object_mut() {
        obj.insert("description".to_owned(), json!(field.description));

        match field.constraint {
            Constraint::None => {}
            Constraint::Range { min, max } => {
                obj.insert("minimum".to_owned(), json!(min));
                obj.insert("maximum".to_owned(), json!(max));
            }
            Constraint::NonNegative => {
                obj.insert("minimum".to_owned(), json!(0));
                if field.field_type == FieldType::Decimal {
                    obj.insert("pattern".to_owned(), json!(NON_NEGATIVE_DECIMAL_PATTERN));
                }
            }
            Constraint::Length { min, max } => {
                obj.insert("minLength".to_owned(), json!(min));
                obj.insert("maxLength".to_owned(), json!(max));
            }
            Constraint::Email => {
                obj.insert("format".to_owned(), json!("email"));
            }
        }

        if let Some(default) = field.default {
            obj.insert("default".to_owned(), json!(default));
        }

        if field.nullable() {
            match obj.get_mut("type") {
                Some(Value::Array(types)) => types.push(json!("null")),
                Some(ty) => *ty = json!([ty.take(), "null"]),
                None => {}
            }
        }
    }
    prop
}

fn type_keywords(field_type: FieldType) -> Value {
    match field_type {
        FieldType::Text => json!({ "type": "string" }),
        FieldType::Integer => json!({ "type": "integer" }),
        FieldType::Decimal => json!({ "type": ["number", "string"], "pattern": DECIMAL_PATTERN }),
        FieldType::Boolean => json!({ "type": "boolean" }),
        FieldType::TextList => json!({ "type": "array", "items": { "type": "string" } }),
    }
}
