//! Read shapes for criminal records.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::crime::Crime;
use crate::domain::criminal::Criminal;
use crate::domain::types::PublicId;

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CrimeDto {
    pub guid: PublicId,
    pub crime_type: Option<String>,
    pub crime_description: Option<String>,
}

impl From<Crime> for CrimeDto {
    fn from(crime: Crime) -> Self {
        Self {
            guid: crime.guid,
            crime_type: crime.crime_type,
            crime_description: crime.crime_description,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CriminalDto {
    pub guid: PublicId,
    pub criminal_name: Option<String>,
    pub crime: Option<String>,
    pub location: Option<String>,
    pub date_of_crime: NaiveDateTime,
    pub image_url: Option<String>,
    pub crimes: Vec<CrimeDto>,
}

impl CriminalDto {
    /// Combines a criminal with the crimes that belong to it.
    pub fn from_parts(criminal: Criminal, crimes: Vec<Crime>) -> Self {
        Self {
            guid: criminal.guid,
            criminal_name: criminal.criminal_name,
            crime: criminal.crime,
            location: criminal.location,
            date_of_crime: criminal.date_of_crime,
            image_url: criminal.image_url,
            crimes: crimes.into_iter().map(CrimeDto::from).collect(),
        }
    }
}
