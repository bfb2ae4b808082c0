//! Contact messages from the website form.

use serde::{Deserialize, Serialize};

use crate::schema::{
    Constraint, DefaultValue, FieldReader, FieldSpec, FieldType, RawFields, Schema,
    ValidationError,
};
use crate::types::{Email, MessageBody};

/// A message submitted through the contact form. Stored in the
/// `contactmessage` collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawFields")]
pub struct ContactMessage {
    /// Sender name.
    pub name: String,
    /// Sender email.
    pub email: Email,
    /// Message body.
    pub message: MessageBody,
    /// Optional subject.
    pub subject: Option<String>,
}

impl Schema for ContactMessage {
    const NAME: &'static str = "ContactMessage";
    const DESCRIPTION: &'static str = "Contact messages from website form";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("name", FieldType::Text, "Sender name"),
        FieldSpec::required("email", FieldType::Text, "Sender email").constrained(Constraint::Email),
        FieldSpec::required("message", FieldType::Text, "Message body").constrained(
            Constraint::Length {
                min: MessageBody::MIN_LENGTH,
                max: MessageBody::MAX_LENGTH,
            },
        ),
        FieldSpec::optional(
            "subject",
            FieldType::Text,
            DefaultValue::Null,
            "Optional subject",
        ),
    ];

    fn construct(raw: &RawFields) -> Result<Self, ValidationError> {
        let mut reader = FieldReader::new(Self::NAME, raw);
        let name = reader.required("name");
        let email = reader.required("email");
        let message = reader.required("message");
        let subject = reader.optional("subject");

        match (name, email, message) {
            (Some(name), Some(email), Some(message)) if reader.is_clean() => Ok(Self {
                name,
                email,
                message,
                subject,
            }),
            _ => Err(reader.into_error()),
        }
    }
}

impl TryFrom<RawFields> for ContactMessage {
    type Error = ValidationError;

    fn try_from(raw: RawFields) -> Result<Self, Self::Error> {
        Self::construct(&raw)
    }
}
