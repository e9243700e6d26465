//! Aggregate counters for the admin dashboard.

use std::collections::HashMap;

use diesel::dsl::{count, sum};
use diesel::prelude::*;

use crate::{
    domain::{
        dashboard::{DashboardTotals, TopCriminal},
        types::PublicId,
    },
    repository::{
        DashboardReader, DieselRepository, TOP_CRIMINALS_LIMIT,
        errors::{RepositoryError, RepositoryResult},
    },
};

impl DashboardReader for DieselRepository {
    fn dashboard_totals(&self) -> RepositoryResult<DashboardTotals> {
        use crate::schema::{admins, ai_trainings, criminal_crimes, criminals};

        let mut conn = self.conn()?;

        let total_criminals = criminals::table
            .filter(criminals::is_deleted.eq(false))
            .count()
            .get_result::<i64>(&mut conn)?;

        let total_admins = admins::table
            .filter(admins::is_deleted.eq(false))
            .count()
            .get_result::<i64>(&mut conn)?;

        let total_data_trained = ai_trainings::table
            .filter(ai_trainings::is_deleted.eq(false))
            .select(sum(ai_trainings::number_of_images_trained))
            .first::<Option<i64>>(&mut conn)?
            .unwrap_or(0);

        let live_criminals = criminals::table
            .filter(criminals::is_deleted.eq(false))
            .select(criminals::id);

        // --- Rank criminals by number of crime sub-records ---
        let ranking = criminal_crimes::table
            .filter(criminal_crimes::is_deleted.eq(false))
            .filter(criminal_crimes::criminal_id.eq_any(live_criminals))
            .group_by(criminal_crimes::criminal_id)
            .select((criminal_crimes::criminal_id, count(criminal_crimes::id)))
            .order((
                count(criminal_crimes::id).desc(),
                criminal_crimes::criminal_id.asc(),
            ))
            .limit(TOP_CRIMINALS_LIMIT)
            .load::<(i32, i64)>(&mut conn)?;

        // --- Load names and guids using IN clause ---
        let ranked_ids: Vec<i32> = ranking.iter().map(|(id, _)| *id).collect();
        let names: HashMap<i32, (String, Option<String>)> = criminals::table
            .filter(criminals::id.eq_any(ranked_ids))
            .select((criminals::id, criminals::guid, criminals::criminal_name))
            .load::<(i32, String, Option<String>)>(&mut conn)?
            .into_iter()
            .map(|(id, guid, name)| (id, (guid, name)))
            .collect();

        let top_criminals = ranking
            .into_iter()
            .filter_map(|(id, crime_count)| {
                names.get(&id).map(|(guid, name)| {
                    Ok(TopCriminal {
                        guid: guid.parse::<PublicId>().map_err(RepositoryError::from)?,
                        criminal_name: name.clone(),
                        crime_count,
                    })
                })
            })
            .collect::<RepositoryResult<Vec<_>>>()?;

        Ok(DashboardTotals {
            total_criminals,
            total_admins,
            total_data_trained,
            top_criminals,
        })
    }
}
