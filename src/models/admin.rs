//! Diesel models for administrator accounts.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::admin::{Admin as DomainAdmin, NewAdmin as DomainNewAdmin};
use crate::domain::types::{AdminEmail, AdminId, PublicId, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::admins)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Admin {
    pub id: i32,
    pub guid: String,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub created_by: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_by: Option<String>,
    pub updated_at: Option<NaiveDateTime>,
    pub is_deleted: bool,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::admins)]
pub struct NewAdmin<'a> {
    pub guid: String,
    pub username: &'a str,
    pub email: &'a str,
    pub password_hash: &'a str,
    pub created_by: &'a str,
    pub created_at: NaiveDateTime,
    pub is_deleted: bool,
}

impl TryFrom<Admin> for DomainAdmin {
    type Error = TypeConstraintError;

    fn try_from(admin: Admin) -> Result<Self, Self::Error> {
        Ok(Self {
            id: AdminId::try_from(admin.id)?,
            guid: admin.guid.parse::<PublicId>()?,
            username: admin.username,
            email: AdminEmail::new(admin.email)?,
            password_hash: admin.password_hash,
            created_at: admin.created_at,
        })
    }
}

impl<'a> From<&'a DomainNewAdmin> for NewAdmin<'a> {
    fn from(admin: &'a DomainNewAdmin) -> Self {
        Self {
            guid: admin.guid.to_string(),
            username: admin.username.as_str(),
            email: admin.email.as_str(),
            password_hash: admin.password_hash.as_str(),
            created_by: admin.created_by.as_str(),
            created_at: admin.created_at,
            is_deleted: false,
        }
    }
}
