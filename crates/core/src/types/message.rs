//! Length-bounded message body for the contact form.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`MessageBody`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MessageBodyError {
    /// Fewer characters than [`MessageBody::MIN_LENGTH`].
    #[error("message must be at least {min} characters, got {actual}")]
    TooShort {
        /// Minimum allowed length.
        min: usize,
        /// Length of the rejected input.
        actual: usize,
    },
    /// More characters than [`MessageBody::MAX_LENGTH`].
    #[error("message must be at most {max} characters, got {actual}")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
        /// Length of the rejected input.
        actual: usize,
    },
}

/// Contact message text of 5 to 2000 characters inclusive.
///
/// Length counts Unicode scalar values, not bytes, so `"☕☕☕☕☕"` is five
/// characters long.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MessageBody(String);

impl MessageBody {
    /// Minimum length in characters.
    pub const MIN_LENGTH: usize = 5;
    /// Maximum length in characters.
    pub const MAX_LENGTH: usize = 2000;

    /// Wrap `text` if its length is within bounds.
    ///
    /// # Errors
    ///
    /// Returns [`MessageBodyError`] when the text is too short or too long.
    pub fn new(text: impl Into<String>) -> Result<Self, MessageBodyError> {
        let text = text.into();
        let actual = text.chars().count();
        if actual < Self::MIN_LENGTH {
            return Err(MessageBodyError::TooShort {
                min: Self::MIN_LENGTH,
                actual,
            });
        }
        if actual > Self::MAX_LENGTH {
            return Err(MessageBodyError::TooLong {
                max: Self::MAX_LENGTH,
                actual,
            });
        }
        Ok(Self(text))
    }

    /// Returns the message as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the body and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for MessageBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for MessageBody {
    type Error = MessageBodyError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        Self::new(text)
    }
}

impl From<MessageBody> for String {
    fn from(body: MessageBody) -> Self {
        body.0
    }
}

impl AsRef<str> for MessageBody {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
