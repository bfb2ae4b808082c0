//! Raw input coercion.
//!
//! Raw records arrive as JSON objects. [`FieldValue`] converts one raw value
//! to a typed field value, coercing only where the meaning is unambiguous.
//! [`FieldReader`] walks a record and accumulates every failure so the
//! caller sees all of them at once.

use core::str::FromStr;

use rust_decimal::Decimal;
use serde_json::Value;

use super::error::{FieldError, FieldErrorKind, ValidationError};
use crate::types::{Age, Email, MessageBody, MessageBodyError, Price};

/// A raw record: field name to untyped value.
pub type RawFields = serde_json::Map<String, Value>;

/// Conversion from a raw JSON value to a typed field value.
pub trait FieldValue: Sized {
    /// Type name reported when coercion fails.
    const EXPECTED: &'static str;

    /// Coerce `value`, applying any constraint the type carries.
    ///
    /// # Errors
    ///
    /// Returns the reason the value was rejected.
    fn from_raw(value: &Value) -> Result<Self, FieldErrorKind>;
}

const fn wrong_type<T: FieldValue>() -> FieldErrorKind {
    FieldErrorKind::WrongType {
        expected: T::EXPECTED,
    }
}

impl FieldValue for String {
    const EXPECTED: &'static str = "text";

    fn from_raw(value: &Value) -> Result<Self, FieldErrorKind> {
        match value {
            Value::String(s) => Ok(s.clone()),
            _ => Err(wrong_type::<Self>()),
        }
    }
}

impl FieldValue for i64 {
    const EXPECTED: &'static str = "integer";

    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        clippy::float_cmp
    )]
    fn from_raw(value: &Value) -> Result<Self, FieldErrorKind> {
        match value {
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    return Ok(i);
                }
                // 30.0 is an integer; 30.5 and anything beyond i64 are not.
                match n.as_f64() {
                    Some(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 => {
                        Ok(f as Self)
                    }
                    _ => Err(wrong_type::<Self>()),
                }
            }
            Value::String(s) => s.trim().parse().map_err(|_| wrong_type::<Self>()),
            _ => Err(wrong_type::<Self>()),
        }
    }
}

impl FieldValue for bool {
    const EXPECTED: &'static str = "boolean";

    fn from_raw(value: &Value) -> Result<Self, FieldErrorKind> {
        match value {
            Value::Bool(b) => Ok(*b),
            Value::Number(n) => match n.as_i64() {
                Some(0) => Ok(false),
                Some(1) => Ok(true),
                _ => Err(wrong_type::<Self>()),
            },
            Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" | "on" => Ok(true),
                "false" | "0" | "no" | "off" => Ok(false),
                _ => Err(wrong_type::<Self>()),
            },
            _ => Err(wrong_type::<Self>()),
        }
    }
}

impl FieldValue for Decimal {
    const EXPECTED: &'static str = "decimal";

    fn from_raw(value: &Value) -> Result<Self, FieldErrorKind> {
        let text = match value {
            Value::Number(n) => n.to_string(),
            Value::String(s) => s.trim().to_owned(),
            _ => return Err(wrong_type::<Self>()),
        };
        Self::from_str(&text)
            .or_else(|_| Self::from_scientific(&text))
            .map_err(|_| {
                // Numeric text that still fails is beyond rust_decimal's
                // 96-bit mantissa (about 7.9e28) or its 28 decimal places.
                if text.parse::<f64>().is_ok_and(f64::is_finite) {
                    FieldErrorKind::DecimalOutOfRange
                } else {
                    wrong_type::<Self>()
                }
            })
    }
}

impl FieldValue for Vec<String> {
    const EXPECTED: &'static str = "sequence of text";

    fn from_raw(value: &Value) -> Result<Self, FieldErrorKind> {
        let Value::Array(items) = value else {
            return Err(wrong_type::<Self>());
        };

        let mut texts = Vec::with_capacity(items.len());
        let mut bad = Vec::new();
        for (index, item) in items.iter().enumerate() {
            match String::from_raw(item) {
                Ok(text) => texts.push(text),
                Err(_) => bad.push(index),
            }
        }

        if bad.is_empty() {
            Ok(texts)
        } else {
            Err(FieldErrorKind::InvalidItems {
                indices: bad,
                expected: String::EXPECTED,
            })
        }
    }
}

impl FieldValue for Email {
    const EXPECTED: &'static str = "text";

    fn from_raw(value: &Value) -> Result<Self, FieldErrorKind> {
        let s = String::from_raw(value)?;
        Ok(Self::parse(&s)?)
    }
}

impl FieldValue for Age {
    const EXPECTED: &'static str = "integer";

    fn from_raw(value: &Value) -> Result<Self, FieldErrorKind> {
        let years = i64::from_raw(value)?;
        Self::new(years).map_err(|e| FieldErrorKind::OutOfRange {
            min: Self::MIN,
            max: Self::MAX,
            actual: e.actual,
        })
    }
}

impl FieldValue for Price {
    const EXPECTED: &'static str = "decimal";

    fn from_raw(value: &Value) -> Result<Self, FieldErrorKind> {
        let amount = Decimal::from_raw(value)?;
        Self::new(amount).map_err(|_| FieldErrorKind::Negative)
    }
}

impl FieldValue for MessageBody {
    const EXPECTED: &'static str = "text";

    fn from_raw(value: &Value) -> Result<Self, FieldErrorKind> {
        let text = String::from_raw(value)?;
        Self::new(text).map_err(|e| match e {
            MessageBodyError::TooShort { min, actual } => FieldErrorKind::TooShort { min, actual },
            MessageBodyError::TooLong { max, actual } => FieldErrorKind::TooLong { max, actual },
        })
    }
}

/// Reads typed fields out of a raw record, collecting failures.
///
/// Each accessor returns `None` when the field failed; the failure is kept
/// and surfaces from [`FieldReader::finish`].
#[derive(Debug)]
pub struct FieldReader<'a> {
    schema: &'static str,
    raw: &'a RawFields,
    errors: Vec<FieldError>,
}

impl<'a> FieldReader<'a> {
    /// Start reading `raw` on behalf of `schema`.
    #[must_use]
    pub const fn new(schema: &'static str, raw: &'a RawFields) -> Self {
        Self {
            schema,
            raw,
            errors: Vec::new(),
        }
    }

    /// A field that must be present.
    pub fn required<T: FieldValue>(&mut self, name: &'static str) -> Option<T> {
        let raw = self.raw;
        match raw.get(name) {
            None => {
                self.reject(name, FieldErrorKind::Missing);
                None
            }
            Some(value) => self.coerce(name, value),
        }
    }

    /// A field that may be omitted or `null`; both read as `None`.
    pub fn optional<T: FieldValue>(&mut self, name: &'static str) -> Option<T> {
        let raw = self.raw;
        match raw.get(name) {
            None | Some(Value::Null) => None,
            Some(value) => self.coerce(name, value),
        }
    }

    /// A field that may be omitted, taking `default` when it is.
    ///
    /// An explicit `null` is a type error: the field has a concrete default,
    /// so it is never empty.
    pub fn or_default<T: FieldValue>(&mut self, name: &'static str, default: T) -> Option<T> {
        let raw = self.raw;
        match raw.get(name) {
            None => Some(default),
            Some(value) => self.coerce(name, value),
        }
    }

    /// Whether every field read so far was accepted.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// Finish reading.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] listing every rejected field.
    pub fn finish(self) -> Result<(), ValidationError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new(self.schema, self.errors))
        }
    }

    /// The failures collected so far as a [`ValidationError`].
    ///
    /// Used on the rejection path after [`FieldReader::is_clean`] returned
    /// `false`.
    #[must_use]
    pub fn into_error(self) -> ValidationError {
        ValidationError::new(self.schema, self.errors)
    }

    fn coerce<T: FieldValue>(&mut self, name: &'static str, value: &Value) -> Option<T> {
        match T::from_raw(value) {
            Ok(v) => Some(v),
            Err(kind) => {
                self.reject(name, kind);
                None
            }
        }
    }

    fn reject(&mut self, name: &'static str, kind: FieldErrorKind) {
        self.errors.push(FieldError::new(name, kind));
    }
}
