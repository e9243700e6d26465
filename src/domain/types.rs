//! Value objects shared by the registry aggregates.
//!
//! Each wrapper checks its invariant once at construction, so code holding
//! one never re-validates it.

use std::fmt::{self, Display, Formatter};
use std::ops::Deref;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;
use validator::ValidateEmail;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    #[error("id must be greater than zero")]
    NonPositiveId,
    #[error("invalid email address")]
    InvalidEmail,
    #[error("value cannot be empty")]
    EmptyString,
    #[error("value cannot be negative")]
    NegativeValue,
    #[error("invalid uuid value")]
    InvalidUuid,
}

/// Row keys assigned by SQLite. Always positive.
macro_rules! row_key {
    ($($name:ident => $doc:literal),+ $(,)?) => {$(
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[serde(try_from = "i32", into = "i32")]
        pub struct $name(i32);

        impl $name {
            pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
                Self::try_from(value)
            }

            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl TryFrom<i32> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositiveId)
                }
            }
        }

        impl From<$name> for i32 {
            fn from(key: $name) -> Self {
                key.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                Display::fmt(&self.0, f)
            }
        }
    )+};
}

row_key! {
    CriminalId => "Row key of a criminal record.",
    CrimeId => "Row key of a crime sub-record.",
    AdminId => "Row key of an administrator account.",
    TrainingId => "Row key of a training session log.",
    EventId => "Row key of a detection event.",
}

/// Stable public identifier handed out to API callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PublicId(Uuid);

impl PublicId {
    /// Random v4 identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for PublicId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for PublicId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl FromStr for PublicId {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim())
            .map(Self)
            .map_err(|_| TypeConstraintError::InvalidUuid)
    }
}

impl Display for PublicId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

/// Login address of an administrator, trimmed and lower-cased.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct AdminEmail(String);

impl AdminEmail {
    pub fn new(email: impl Into<String>) -> Result<Self, TypeConstraintError> {
        let normalized = email.into().trim().to_lowercase();
        if normalized.validate_email() {
            Ok(Self(normalized))
        } else {
            Err(TypeConstraintError::InvalidEmail)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for AdminEmail {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Free text that must keep at least one visible character once trimmed.
macro_rules! required_text {
    ($($name:ident => $doc:literal),+ $(,)?) => {$(
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Result<Self, TypeConstraintError> {
                let value = value.into();
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    return Err(TypeConstraintError::EmptyString);
                }
                Ok(Self(trimmed.to_string()))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Deref for $name {
            type Target = str;

            fn deref(&self) -> &str {
                &self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    )+};
}

required_text! {
    CriminalName => "Display name of a registered criminal.",
    CrimeType => "Category of a crime sub-record.",
    AdminUsername => "Display name of an administrator.",
}

/// Number of images consumed by a training session.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "i32", into = "i32")]
pub struct ImageCount(i32);

impl ImageCount {
    pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
        Self::try_from(value)
    }

    pub const fn get(self) -> i32 {
        self.0
    }
}

impl TryFrom<i32> for ImageCount {
    type Error = TypeConstraintError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        if value < 0 {
            Err(TypeConstraintError::NegativeValue)
        } else {
            Ok(Self(value))
        }
    }
}

impl From<ImageCount> for i32 {
    fn from(count: ImageCount) -> Self {
        count.0
    }
}
