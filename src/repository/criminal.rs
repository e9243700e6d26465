//! Repository implementation for criminal records and their crimes.

use diesel::prelude::*;
use diesel::sql_types::{Bool, Nullable, Text};
use diesel::sqlite::Sqlite;

use crate::{
    domain::{
        crime::Crime,
        criminal::{Criminal, NewCriminal, UpdateCriminal},
        types::{CriminalId, PublicId},
    },
    models::{
        crime::{Crime as DbCrime, NewCrime as DbNewCrime},
        criminal::{
            Criminal as DbCriminal, NewCriminal as DbNewCriminal,
            UpdateCriminal as DbUpdateCriminal,
        },
    },
    query::{CriminalField, CriminalQuery, Predicate, SortDirection, TextField, TimestampField},
    repository::{
        CriminalReader, CriminalWriter, DieselRepository,
        errors::{RepositoryError, RepositoryResult},
    },
    schema::{criminal_crimes, criminals},
};

define_sql_function! {
    /// SQLite `ifnull`, used so that NULL columns compare as the empty string.
    fn ifnull(value: Nullable<Text>, fallback: Text) -> Text;
}

define_sql_function! {
    /// SQLite `instr`; unlike `LIKE` it is case-sensitive.
    fn instr(haystack: Text, needle: Text) -> diesel::sql_types::Integer;
}

type TextColumn = Box<dyn BoxableExpression<criminals::table, Sqlite, SqlType = Nullable<Text>>>;
type Condition = Box<dyn BoxableExpression<criminals::table, Sqlite, SqlType = Bool>>;

fn text_column(field: TextField) -> TextColumn {
    match field {
        TextField::Guid => Box::new(criminals::guid.nullable()),
        TextField::CriminalName => Box::new(criminals::criminal_name),
        TextField::Crime => Box::new(criminals::crime),
        TextField::Location => Box::new(criminals::location),
        TextField::ImageUrl => Box::new(criminals::image_url),
        TextField::CreatedBy => Box::new(criminals::created_by),
        TextField::UpdatedBy => Box::new(criminals::updated_by),
    }
}

fn contains(field: TextField, needle: &str) -> Condition {
    Box::new(instr(ifnull(text_column(field), ""), needle.to_string()).gt(0))
}

fn predicate_condition(predicate: &Predicate) -> Condition {
    match predicate {
        Predicate::Equals(field, value) => {
            Box::new(ifnull(text_column(*field), "").eq(value.clone()))
        }
        Predicate::Contains(field, value) => contains(*field, value),
    }
}

macro_rules! then_order {
    ($items:expr, $column:expr, $direction:expr) => {
        match $direction {
            SortDirection::Ascending => $items.then_order_by($column.asc()),
            SortDirection::Descending => $items.then_order_by($column.desc()),
        }
    };
}

impl CriminalReader for DieselRepository {
    fn get_criminal_by_guid(&self, guid: PublicId) -> RepositoryResult<Option<Criminal>> {
        let mut conn = self.conn()?;

        let db_criminal = criminals::table
            .filter(criminals::guid.eq(guid.to_string()))
            .filter(criminals::is_deleted.eq(false))
            .first::<DbCriminal>(&mut conn)
            .optional()?;

        db_criminal
            .map(|c| Criminal::try_from(c).map_err(RepositoryError::from))
            .transpose()
    }

    fn list_criminals(&self, query: &CriminalQuery) -> RepositoryResult<(usize, Vec<Criminal>)> {
        let mut conn = self.conn()?;

        let query_builder = || {
            let mut items = criminals::table
                .filter(criminals::is_deleted.eq(false))
                .into_boxed::<Sqlite>();

            for predicate in query.predicates() {
                items = items.filter(predicate_condition(predicate));
            }

            if let Some(term) = query.search_term() {
                items = items.filter(
                    contains(TextField::CriminalName, term.as_str())
                        .or(contains(TextField::Crime, term.as_str()))
                        .or(contains(TextField::Location, term.as_str())),
                );
            }
            items
        };

        let total = query_builder().count().get_result::<i64>(&mut conn)? as usize;

        let mut items = query_builder();
        for key in query.sort_keys() {
            items = match key.field {
                CriminalField::Text(TextField::Guid) => then_order!(items, criminals::guid, key.direction),
                CriminalField::Text(TextField::CriminalName) => {
                    then_order!(items, criminals::criminal_name, key.direction)
                }
                CriminalField::Text(TextField::Crime) => then_order!(items, criminals::crime, key.direction),
                CriminalField::Text(TextField::Location) => {
                    then_order!(items, criminals::location, key.direction)
                }
                CriminalField::Text(TextField::ImageUrl) => {
                    then_order!(items, criminals::image_url, key.direction)
                }
                CriminalField::Text(TextField::CreatedBy) => {
                    then_order!(items, criminals::created_by, key.direction)
                }
                CriminalField::Text(TextField::UpdatedBy) => {
                    then_order!(items, criminals::updated_by, key.direction)
                }
                CriminalField::Timestamp(TimestampField::DateOfCrime) => {
                    then_order!(items, criminals::date_of_crime, key.direction)
                }
                CriminalField::Timestamp(TimestampField::CreatedAt) => {
                    then_order!(items, criminals::created_at, key.direction)
                }
                CriminalField::Timestamp(TimestampField::UpdatedAt) => {
                    then_order!(items, criminals::updated_at, key.direction)
                }
            };
        }

        let page = query.page();
        let db_criminals = items
            .then_order_by(criminals::id.asc())
            .offset(page.offset())
            .limit(page.page_size())
            .load::<DbCriminal>(&mut conn)?;

        let criminals = db_criminals
            .into_iter()
            .map(|c| Criminal::try_from(c).map_err(RepositoryError::from))
            .collect::<RepositoryResult<Vec<_>>>()?;

        Ok((total, criminals))
    }

    fn list_crimes(&self, criminal_ids: &[CriminalId]) -> RepositoryResult<Vec<Crime>> {
        if criminal_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut conn = self.conn()?;
        let ids: Vec<i32> = criminal_ids.iter().map(|id| id.get()).collect();

        let db_crimes = criminal_crimes::table
            .filter(criminal_crimes::criminal_id.eq_any(ids))
            .filter(criminal_crimes::is_deleted.eq(false))
            .order((criminal_crimes::criminal_id.asc(), criminal_crimes::id.asc()))
            .load::<DbCrime>(&mut conn)?;

        db_crimes
            .into_iter()
            .map(|c| Crime::try_from(c).map_err(RepositoryError::from))
            .collect()
    }
}

impl CriminalWriter for DieselRepository {
    fn create_criminal(&self, new_criminal: &NewCriminal) -> RepositoryResult<Criminal> {
        let mut conn = self.conn()?;

        let db_new_criminal: DbNewCriminal = new_criminal.into();

        let db_criminal = conn.transaction::<DbCriminal, diesel::result::Error, _>(|conn| {
            let created = diesel::insert_into(criminals::table)
                .values(&db_new_criminal)
                .get_result::<DbCriminal>(conn)?;

            let db_crimes = new_criminal
                .crimes
                .iter()
                .map(|crime| {
                    DbNewCrime::from_domain(
                        crime,
                        created.id,
                        new_criminal.created_by.as_str(),
                        new_criminal.created_at,
                    )
                })
                .collect::<Vec<_>>();

            if !db_crimes.is_empty() {
                diesel::insert_into(criminal_crimes::table)
                    .values(&db_crimes)
                    .execute(conn)?;
            }

            Ok(created)
        })?;

        Criminal::try_from(db_criminal).map_err(RepositoryError::from)
    }

    fn update_criminal(
        &self,
        criminal_id: CriminalId,
        updates: &UpdateCriminal,
    ) -> RepositoryResult<Criminal> {
        let mut conn = self.conn()?;

        let db_updates: DbUpdateCriminal = updates.into();

        let db_criminal = conn.transaction::<DbCriminal, diesel::result::Error, _>(|conn| {
            let updated = diesel::update(
                criminals::table
                    .filter(criminals::id.eq(criminal_id.get()))
                    .filter(criminals::is_deleted.eq(false)),
            )
            .set(&db_updates)
            .get_result::<DbCriminal>(conn)?;

            if let Some(crimes) = &updates.crimes {
                diesel::delete(
                    criminal_crimes::table.filter(criminal_crimes::criminal_id.eq(updated.id)),
                )
                .execute(conn)?;

                let db_crimes = crimes
                    .iter()
                    .map(|crime| {
                        DbNewCrime::from_domain(
                            crime,
                            updated.id,
                            updates.updated_by.as_str(),
                            updates.updated_at,
                        )
                    })
                    .collect::<Vec<_>>();

                if !db_crimes.is_empty() {
                    diesel::insert_into(criminal_crimes::table)
                        .values(&db_crimes)
                        .execute(conn)?;
                }
            }

            Ok(updated)
        })?;

        Criminal::try_from(db_criminal).map_err(RepositoryError::from)
    }

    fn delete_criminal(&self, criminal_id: CriminalId) -> RepositoryResult<()> {
        let mut conn = self.conn()?;

        conn.transaction::<(), diesel::result::Error, _>(|conn| {
            diesel::delete(
                criminal_crimes::table.filter(criminal_crimes::criminal_id.eq(criminal_id.get())),
            )
            .execute(conn)?;

            let deleted =
                diesel::delete(criminals::table.find(criminal_id.get())).execute(conn)?;
            if deleted == 0 {
                return Err(diesel::result::Error::NotFound);
            }
            Ok(())
        })
        .map_err(RepositoryError::from)
    }
}
