//! Diesel models for criminal records.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::criminal::{
    Criminal as DomainCriminal, NewCriminal as DomainNewCriminal,
    UpdateCriminal as DomainUpdateCriminal,
};
use crate::domain::types::{CriminalId, PublicId, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::criminals)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
/// Diesel model for [`crate::domain::criminal::Criminal`].
pub struct Criminal {
    pub id: i32,
    pub guid: String,
    pub criminal_name: Option<String>,
    pub crime: Option<String>,
    pub location: Option<String>,
    pub date_of_crime: NaiveDateTime,
    pub image_url: Option<String>,
    pub created_by: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_by: Option<String>,
    pub updated_at: Option<NaiveDateTime>,
    pub is_deleted: bool,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::criminals)]
/// Insertable form of [`Criminal`].
pub struct NewCriminal<'a> {
    pub guid: String,
    pub criminal_name: &'a str,
    pub crime: Option<&'a str>,
    pub location: Option<&'a str>,
    pub date_of_crime: NaiveDateTime,
    pub image_url: Option<&'a str>,
    pub created_by: &'a str,
    pub created_at: NaiveDateTime,
    pub is_deleted: bool,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::criminals)]
/// Data used when updating a [`Criminal`] record.
pub struct UpdateCriminal<'a> {
    pub criminal_name: Option<Option<&'a str>>,
    pub crime: Option<Option<&'a str>>,
    pub location: Option<Option<&'a str>>,
    pub date_of_crime: Option<NaiveDateTime>,
    pub image_url: Option<Option<&'a str>>,
    pub updated_by: Option<&'a str>,
    pub updated_at: Option<NaiveDateTime>,
}

impl TryFrom<Criminal> for DomainCriminal {
    type Error = TypeConstraintError;

    fn try_from(criminal: Criminal) -> Result<Self, Self::Error> {
        Ok(Self {
            id: CriminalId::try_from(criminal.id)?,
            guid: criminal.guid.parse::<PublicId>()?,
            criminal_name: criminal.criminal_name,
            crime: criminal.crime,
            location: criminal.location,
            date_of_crime: criminal.date_of_crime,
            image_url: criminal.image_url,
            created_by: criminal.created_by,
            created_at: criminal.created_at,
            updated_by: criminal.updated_by,
            updated_at: criminal.updated_at,
        })
    }
}

impl<'a> From<&'a DomainNewCriminal> for NewCriminal<'a> {
    fn from(criminal: &'a DomainNewCriminal) -> Self {
        Self {
            guid: criminal.guid.to_string(),
            criminal_name: criminal.criminal_name.as_str(),
            crime: criminal.crime.as_deref(),
            location: criminal.location.as_deref(),
            date_of_crime: criminal.date_of_crime,
            image_url: criminal.image_url.as_deref(),
            created_by: criminal.created_by.as_str(),
            created_at: criminal.created_at,
            is_deleted: false,
        }
    }
}

impl<'a> From<&'a DomainUpdateCriminal> for UpdateCriminal<'a> {
    fn from(update: &'a DomainUpdateCriminal) -> Self {
        Self {
            criminal_name: update.criminal_name.as_ref().map(|v| v.as_deref()),
            crime: update.crime.as_ref().map(|v| v.as_deref()),
            location: update.location.as_ref().map(|v| v.as_deref()),
            date_of_crime: update.date_of_crime,
            image_url: update.image_url.as_ref().map(|v| v.as_deref()),
            updated_by: Some(update.updated_by.as_str()),
            updated_at: Some(update.updated_at),
        }
    }
}
