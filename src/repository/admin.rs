//! Repository implementation for administrator accounts.

use diesel::prelude::*;

use crate::{
    domain::{
        admin::{Admin, NewAdmin},
        types::AdminEmail,
    },
    models::admin::{Admin as DbAdmin, NewAdmin as DbNewAdmin},
    repository::{
        AdminReader, AdminWriter, DieselRepository,
        errors::{RepositoryError, RepositoryResult},
    },
};

impl AdminReader for DieselRepository {
    fn get_admin_by_email(&self, email: &AdminEmail) -> RepositoryResult<Option<Admin>> {
        use crate::schema::admins;

        let mut conn = self.conn()?;
        let db_admin = admins::table
            .filter(admins::email.eq(email.as_str()))
            .filter(admins::is_deleted.eq(false))
            .first::<DbAdmin>(&mut conn)
            .optional()?;

        match db_admin {
            Some(db_admin) => Ok(Some(
                Admin::try_from(db_admin).map_err(RepositoryError::from)?,
            )),
            None => Ok(None),
        }
    }
}

impl AdminWriter for DieselRepository {
    fn create_admin(&self, new_admin: &NewAdmin) -> RepositoryResult<Admin> {
        use crate::schema::admins;

        let mut conn = self.conn()?;

        let db_new_admin: DbNewAdmin = new_admin.into();

        let db_admin = diesel::insert_into(admins::table)
            .values(&db_new_admin)
            .get_result::<DbAdmin>(&mut conn)?;

        Admin::try_from(db_admin).map_err(RepositoryError::from)
    }
}
