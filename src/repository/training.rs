//! Repository implementation for training session logs.

use diesel::prelude::*;

use crate::{
    domain::training::{NewTraining, Training},
    models::training::{NewTraining as DbNewTraining, Training as DbTraining},
    repository::{
        DieselRepository, TrainingListQuery, TrainingReader, TrainingWriter,
        errors::{RepositoryError, RepositoryResult},
    },
};

impl TrainingReader for DieselRepository {
    fn list_trainings(&self, query: TrainingListQuery) -> RepositoryResult<(usize, Vec<Training>)> {
        use crate::schema::ai_trainings;

        let mut conn = self.conn()?;

        let query_builder = || {
            ai_trainings::table
                .filter(ai_trainings::is_deleted.eq(false))
                .into_boxed::<diesel::sqlite::Sqlite>()
        };

        let total = query_builder().count().get_result::<i64>(&mut conn)? as usize;

        let mut items = query_builder();
        if let Some(page) = &query.pagination {
            items = items.offset(page.offset()).limit(page.page_size());
        }

        let db_trainings = items
            .order((ai_trainings::trained_at.desc(), ai_trainings::id.desc()))
            .load::<DbTraining>(&mut conn)?;

        let trainings = db_trainings
            .into_iter()
            .map(|t| Training::try_from(t).map_err(RepositoryError::from))
            .collect::<RepositoryResult<Vec<_>>>()?;

        Ok((total, trainings))
    }
}

impl TrainingWriter for DieselRepository {
    fn create_training(&self, new_training: &NewTraining) -> RepositoryResult<Training> {
        use crate::schema::ai_trainings;

        let mut conn = self.conn()?;

        let db_new_training: DbNewTraining = new_training.into();

        let db_training = diesel::insert_into(ai_trainings::table)
            .values(&db_new_training)
            .get_result::<DbTraining>(&mut conn)?;

        Training::try_from(db_training).map_err(RepositoryError::from)
    }
}
