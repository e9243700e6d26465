use chrono::NaiveDateTime;
use serde::Deserialize;
use validator::Validate;

use crate::domain::training::NewTraining;
use crate::domain::types::ImageCount;
use crate::forms::{FormError, deserialize_optional_timestamp};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
/// Training session report sent by the training engine.
pub struct CreateTrainingForm {
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub trained_at: Option<NaiveDateTime>,
    #[validate(range(min = 0))]
    pub number_of_images_trained: i32,
}

impl CreateTrainingForm {
    pub fn into_domain(self, created_by: &str) -> Result<NewTraining, FormError> {
        self.validate()?;
        let count = ImageCount::new(self.number_of_images_trained)
            .map_err(|_| FormError::InvalidImageCount)?;
        Ok(NewTraining::new(self.trained_at, count, created_by))
    }
}
