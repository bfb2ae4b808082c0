//! Declarative field metadata.
//!
//! A schema's [`FieldSpec`] list is the single description of its shape used
//! for introspection and JSON Schema export. Construction itself goes through
//! the typed `construct` functions on each model.

use core::fmt;

use serde::Serialize;

/// Primitive type of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    /// UTF-8 text.
    Text,
    /// 64-bit signed integer.
    Integer,
    /// Arbitrary-precision decimal.
    Decimal,
    /// Boolean.
    Boolean,
    /// Sequence of text values.
    TextList,
}

impl FieldType {
    /// Human-readable name used in error messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Integer => "integer",
            Self::Decimal => "decimal",
            Self::Boolean => "boolean",
            Self::TextList => "sequence of text",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Value applied when an optional field is omitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum DefaultValue {
    /// The field stays empty.
    Null,
    /// A boolean default.
    Bool(bool),
    /// A text default.
    Text(&'static str),
}

impl fmt::Display for DefaultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("none"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Text(s) => write!(f, "{s:?}"),
        }
    }
}

/// Validation bound attached to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// No constraint beyond the type.
    None,
    /// Inclusive integer range.
    Range {
        /// Inclusive lower bound.
        min: i64,
        /// Inclusive upper bound.
        max: i64,
    },
    /// Decimal must be `>= 0`.
    NonNegative,
    /// Inclusive text length range, in characters.
    Length {
        /// Minimum length.
        min: usize,
        /// Maximum length.
        max: usize,
    },
    /// Text must be a syntactically valid email address.
    Email,
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("none"),
            Self::Range { min, max } => write!(f, "{min} <= value <= {max}"),
            Self::NonNegative => f.write_str("value >= 0"),
            Self::Length { min, max } => write!(f, "{min} <= length <= {max}"),
            Self::Email => f.write_str("email address"),
        }
    }
}

/// Description of one field of a schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Field name as it appears in raw input and serialized output.
    pub name: &'static str,
    /// Primitive type.
    pub field_type: FieldType,
    /// Whether the field must be present.
    pub required: bool,
    /// Default for optional fields; `None` for required ones.
    pub default: Option<DefaultValue>,
    /// Validation bound.
    pub constraint: Constraint,
    /// Human-readable description.
    pub description: &'static str,
}

impl FieldSpec {
    /// A required field with no default.
    #[must_use]
    pub const fn required(
        name: &'static str,
        field_type: FieldType,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            field_type,
            required: true,
            default: None,
            constraint: Constraint::None,
            description,
        }
    }

    /// An optional field that takes `default` when omitted.
    #[must_use]
    pub const fn optional(
        name: &'static str,
        field_type: FieldType,
        default: DefaultValue,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            field_type,
            required: false,
            default: Some(default),
            constraint: Constraint::None,
            description,
        }
    }

    /// Attach a validation bound.
    #[must_use]
    pub const fn constrained(mut self, constraint: Constraint) -> Self {
        self.constraint = constraint;
        self
    }

    /// Whether an explicit `null` is accepted (and treated as absent).
    #[must_use]
    pub const fn nullable(&self) -> bool {
        matches!(self.default, Some(DefaultValue::Null))
    }
}
