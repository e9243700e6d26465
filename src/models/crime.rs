//! Diesel models for crime sub-records.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::crime::{Crime as DomainCrime, NewCrime as DomainNewCrime};
use crate::domain::types::{CrimeId, CriminalId, PublicId, TypeConstraintError};
use crate::models::criminal::Criminal;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(belongs_to(Criminal, foreign_key = criminal_id))]
#[diesel(table_name = crate::schema::criminal_crimes)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Crime {
    pub id: i32,
    pub guid: String,
    pub criminal_id: i32,
    pub crime_type: Option<String>,
    pub crime_description: Option<String>,
    pub created_by: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_by: Option<String>,
    pub updated_at: Option<NaiveDateTime>,
    pub is_deleted: bool,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::criminal_crimes)]
pub struct NewCrime<'a> {
    pub guid: String,
    pub criminal_id: i32,
    pub crime_type: &'a str,
    pub crime_description: Option<&'a str>,
    pub created_by: &'a str,
    pub created_at: NaiveDateTime,
    pub is_deleted: bool,
}

impl<'a> NewCrime<'a> {
    pub fn from_domain(
        crime: &'a DomainNewCrime,
        criminal_id: i32,
        created_by: &'a str,
        created_at: NaiveDateTime,
    ) -> Self {
        Self {
            guid: crime.guid.to_string(),
            criminal_id,
            crime_type: crime.crime_type.as_str(),
            crime_description: crime.crime_description.as_deref(),
            created_by,
            created_at,
            is_deleted: false,
        }
    }
}

impl TryFrom<Crime> for DomainCrime {
    type Error = TypeConstraintError;

    fn try_from(crime: Crime) -> Result<Self, Self::Error> {
        Ok(Self {
            id: CrimeId::try_from(crime.id)?,
            guid: crime.guid.parse::<PublicId>()?,
            criminal_id: CriminalId::try_from(crime.criminal_id)?,
            crime_type: crime.crime_type,
            crime_description: crime.crime_description,
            created_at: crime.created_at,
        })
    }
}
