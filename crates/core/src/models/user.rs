//! Users collection.

use serde::{Deserialize, Serialize};

use crate::schema::{
    Constraint, DefaultValue, FieldReader, FieldSpec, FieldType, RawFields, Schema,
    ValidationError,
};
use crate::types::Age;

/// A registered user. Stored in the `user` collection.
///
/// `email` is kept as plain text here; only [`ContactMessage`](super::ContactMessage)
/// checks address syntax.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawFields")]
pub struct User {
    /// Full name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Postal address.
    pub address: String,
    /// Age in years.
    pub age: Option<Age>,
    /// Whether the user is active.
    pub is_active: bool,
}

impl Schema for User {
    const NAME: &'static str = "User";
    const DESCRIPTION: &'static str = "Users collection schema";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("name", FieldType::Text, "Full name"),
        FieldSpec::required("email", FieldType::Text, "Email address"),
        FieldSpec::required("address", FieldType::Text, "Address"),
        FieldSpec::optional("age", FieldType::Integer, DefaultValue::Null, "Age in years")
            .constrained(Constraint::Range {
                min: Age::MIN,
                max: Age::MAX,
            }),
        FieldSpec::optional(
            "is_active",
            FieldType::Boolean,
            DefaultValue::Bool(true),
            "Whether user is active",
        ),
    ];

    fn construct(raw: &RawFields) -> Result<Self, ValidationError> {
        let mut reader = FieldReader::new(Self::NAME, raw);
        let name = reader.required("name");
        let email = reader.required("email");
        let address = reader.required("address");
        let age = reader.optional("age");
        let is_active = reader.or_default("is_active", true);

        match (name, email, address, is_active) {
            (Some(name), Some(email), Some(address), Some(is_active)) if reader.is_clean() => {
                Ok(Self {
                    name,
                    email,
                    address,
                    age,
                    is_active,
                })
            }
            _ => Err(reader.into_error()),
        }
    }
}

impl TryFrom<RawFields> for User {
    type Error = ValidationError;

    fn try_from(raw: RawFields) -> Result<Self, Self::Error> {
        Self::construct(&raw)
    }
}
