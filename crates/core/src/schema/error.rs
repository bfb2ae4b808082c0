//! Validation failure reporting.

use core::fmt;

use crate::types::EmailError;

/// Why a single field was rejected.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldErrorKind {
    /// A required field was absent from the input.
    #[error("field required")]
    Missing,
    /// The raw value cannot be coerced to the declared type.
    #[error("expected {expected}")]
    WrongType {
        /// Human-readable name of the declared type.
        expected: &'static str,
    },
    /// An integer fell outside its inclusive range.
    #[error("must be between {min} and {max}, got {actual}")]
    OutOfRange {
        /// Inclusive lower bound.
        min: i64,
        /// Inclusive upper bound.
        max: i64,
        /// The rejected value.
        actual: i64,
    },
    /// A decimal that must be non-negative was below zero.
    #[error("must be greater than or equal to 0")]
    Negative,
    /// Text shorter than its minimum length.
    #[error("must be at least {min} characters, got {actual}")]
    TooShort {
        /// Minimum length in characters.
        min: usize,
        /// Actual length in characters.
        actual: usize,
    },
    /// Text longer than its maximum length.
    #[error("must be at most {max} characters, got {actual}")]
    TooLong {
        /// Maximum length in characters.
        max: usize,
        /// Actual length in characters.
        actual: usize,
    },
    /// Text that is not a syntactically valid email address.
    #[error("invalid email address: {0}")]
    InvalidEmail(#[from] EmailError),
    /// A number too large (or too precise) to hold as a decimal.
    #[error("number is outside the supported decimal range")]
    DecimalOutOfRange,
    /// Elements of a sequence have the wrong type.
    #[error("{}: expected {expected}", item_label(.indices))]
    InvalidItems {
        /// Zero-based positions of every rejected element, ascending.
        indices: Vec<usize>,
        /// Human-readable name of the element type.
        expected: &'static str,
    },
}

/// A rejected field and the reason it was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Name of the field as it appears in the raw input.
    pub field: String,
    /// Why it was rejected.
    pub kind: FieldErrorKind,
}

impl FieldError {
    /// Create a field error.
    #[must_use]
    pub fn new(field: impl Into<String>, kind: FieldErrorKind) -> Self {
        Self {
            field: field.into(),
            kind,
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.kind)
    }
}

/// One or more field constraints were violated while constructing a record.
///
/// Always carries at least one [`FieldError`]; every failing field of the
/// input is listed, in declaration order.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{} for {schema}: {}", count_label(.errors), join(.errors))]
pub struct ValidationError {
    schema: &'static str,
    errors: Vec<FieldError>,
}

impl ValidationError {
    /// Create a validation error for `schema`.
    #[must_use]
    pub const fn new(schema: &'static str, errors: Vec<FieldError>) -> Self {
        Self { schema, errors }
    }

    /// Type name of the schema that rejected the input.
    #[must_use]
    pub const fn schema(&self) -> &'static str {
        self.schema
    }

    /// Every field failure, in declaration order.
    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Names of the rejected fields.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors.iter().map(|e| e.field.as_str())
    }

    /// The failure reported for `field`, if any.
    #[must_use]
    pub fn for_field(&self, field: &str) -> Option<&FieldErrorKind> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| &e.kind)
    }

    /// Consumes the error and returns the field failures.
    #[must_use]
    pub fn into_errors(self) -> Vec<FieldError> {
        self.errors
    }
}

fn count_label(errors: &[FieldError]) -> String {
    let n = errors.len();
    if n == 1 {
        "1 validation error".to_owned()
    } else {
        format!("{n} validation errors")
    }
}

fn item_label(indices: &[usize]) -> String {
    let list = indices
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    if indices.len() == 1 {
        format!("item {list}")
    } else {
        format!("items {list}")
    }
}

fn join(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
