//! Diesel models for training session logs.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::training::{NewTraining as DomainNewTraining, Training as DomainTraining};
use crate::domain::types::{ImageCount, PublicId, TrainingId, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::ai_trainings)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Training {
    pub id: i32,
    pub guid: String,
    pub trained_at: NaiveDateTime,
    pub number_of_images_trained: i32,
    pub created_by: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_by: Option<String>,
    pub updated_at: Option<NaiveDateTime>,
    pub is_deleted: bool,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::ai_trainings)]
pub struct NewTraining<'a> {
    pub guid: String,
    pub trained_at: NaiveDateTime,
    pub number_of_images_trained: i32,
    pub created_by: &'a str,
    pub created_at: NaiveDateTime,
    pub is_deleted: bool,
}

impl TryFrom<Training> for DomainTraining {
    type Error = TypeConstraintError;

    fn try_from(training: Training) -> Result<Self, Self::Error> {
        Ok(Self {
            id: TrainingId::try_from(training.id)?,
            guid: training.guid.parse::<PublicId>()?,
            trained_at: training.trained_at,
            number_of_images_trained: ImageCount::try_from(training.number_of_images_trained)?,
            created_by: training.created_by,
            created_at: training.created_at,
        })
    }
}

impl<'a> From<&'a DomainNewTraining> for NewTraining<'a> {
    fn from(training: &'a DomainNewTraining) -> Self {
        Self {
            guid: training.guid.to_string(),
            trained_at: training.trained_at,
            number_of_images_trained: training.number_of_images_trained.get(),
            created_by: training.created_by.as_str(),
            created_at: training.created_at,
            is_deleted: false,
        }
    }
}
