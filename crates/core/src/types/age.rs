//! Bounded age in years.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing an [`Age`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("age must be between {min} and {max}, got {actual}", min = Age::MIN, max = Age::MAX)]
pub struct AgeError {
    /// The rejected value.
    pub actual: i64,
}

/// An age in whole years, `0..=120` inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Age(u8);

impl Age {
    /// Smallest accepted age.
    pub const MIN: i64 = 0;
    /// Largest accepted age.
    pub const MAX: i64 = 120;

    /// Create an age, rejecting values outside `0..=120`.
    ///
    /// # Errors
    ///
    /// Returns [`AgeError`] carrying the rejected value.
    pub fn new(years: i64) -> Result<Self, AgeError> {
        if !(Self::MIN..=Self::MAX).contains(&years) {
            return Err(AgeError { actual: years });
        }
        u8::try_from(years)
            .map(Self)
            .map_err(|_| AgeError { actual: years })
    }

    /// The age in years.
    #[must_use]
    pub const fn years(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for Age {
    type Error = AgeError;

    fn try_from(years: i64) -> Result<Self, Self::Error> {
        Self::new(years)
    }
}

impl From<Age> for u8 {
    fn from(age: Age) -> Self {
        age.0
    }
}
