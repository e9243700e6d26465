//! Inbound JSON payloads and their validation into domain values.

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Deserializer};
use thiserror::Error;
use validator::ValidationErrors;

use crate::domain::types::TypeConstraintError;

pub mod auth;
pub mod criminals;
pub mod events;
pub mod training;

#[derive(Debug, Error)]
/// Errors that can occur when processing inbound payloads.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Email and Password are required.")]
    MissingCredentials,

    #[error("invalid email address")]
    InvalidEmail,

    #[error("criminal name is required")]
    InvalidCriminalName,

    #[error("crime type is required")]
    InvalidCrimeType,

    #[error("number of images trained cannot be negative")]
    InvalidImageCount,

    #[error("invalid guid")]
    InvalidGuid,

    #[error("{0}")]
    TypeConstraint(#[from] TypeConstraintError),
}

/// Accepts RFC 3339 timestamps (converted to UTC) as well as naive
/// `YYYY-MM-DDTHH:MM:SS[.fff]` values, which are taken as UTC.
pub(crate) fn deserialize_optional_timestamp<'de, D>(
    deserializer: D,
) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => parse_timestamp(value)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {value}"))),
    }
}

fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(value) {
        return Some(with_offset.naive_utc());
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_offset_and_naive_timestamps() {
        let utc = parse_timestamp("2024-03-01T10:00:00+02:00").unwrap();
        assert_eq!(utc.to_string(), "2024-03-01 08:00:00");

        let naive = parse_timestamp("2024-03-01T10:00:00").unwrap();
        assert_eq!(naive.to_string(), "2024-03-01 10:00:00");

        assert!(parse_timestamp("2024-03-01T10:00:00.250Z").is_some());
        assert!(parse_timestamp("yesterday").is_none());
    }
}
