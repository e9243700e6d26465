//! Crime sub-records owned by a criminal.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{CrimeId, CrimeType, CriminalId, PublicId};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Crime {
    pub id: CrimeId,
    pub guid: PublicId,
    pub criminal_id: CriminalId,
    pub crime_type: Option<String>,
    pub crime_description: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Crime detail attached to a criminal on create or on full replacement.
#[derive(Clone, Debug, PartialEq)]
pub struct NewCrime {
    pub guid: PublicId,
    pub crime_type: CrimeType,
    pub crime_description: Option<String>,
}

impl NewCrime {
    #[must_use]
    pub fn new(crime_type: CrimeType, crime_description: Option<String>) -> Self {
        Self {
            guid: PublicId::new(),
            crime_type,
            crime_description: crime_description.filter(|d| !d.trim().is_empty()),
        }
    }
}
