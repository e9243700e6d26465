use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::training::Training;
use crate::domain::types::PublicId;

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrainingDto {
    pub guid: PublicId,
    pub trained_at: NaiveDateTime,
    pub number_of_images_trained: i32,
    pub created_by: Option<String>,
    pub created_at: NaiveDateTime,
}

impl From<Training> for TrainingDto {
    fn from(training: Training) -> Self {
        Self {
            guid: training.guid,
            trained_at: training.trained_at,
            number_of_images_trained: training.number_of_images_trained.get(),
            created_by: training.created_by,
            created_at: training.created_at,
        }
    }
}
