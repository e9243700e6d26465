//! Logs of face-recognition training sessions reported by the training engine.

use chrono::{NaiveDateTime, Utc};
use serde::Serialize;

use crate::domain::types::{ImageCount, PublicId, TrainingId};

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Training {
    pub id: TrainingId,
    pub guid: PublicId,
    pub trained_at: NaiveDateTime,
    pub number_of_images_trained: ImageCount,
    pub created_by: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug)]
pub struct NewTraining {
    pub guid: PublicId,
    pub trained_at: NaiveDateTime,
    pub number_of_images_trained: ImageCount,
    pub created_by: String,
    pub created_at: NaiveDateTime,
}

impl NewTraining {
    /// Builds a session log; `trained_at` defaults to the current time.
    #[must_use]
    pub fn new(
        trained_at: Option<NaiveDateTime>,
        number_of_images_trained: ImageCount,
        created_by: impl Into<String>,
    ) -> Self {
        let now = Utc::now().naive_utc();
        Self {
            guid: PublicId::new(),
            trained_at: trained_at.unwrap_or(now),
            number_of_images_trained,
            created_by: created_by.into(),
            created_at: now,
        }
    }
}
