use chrono::{NaiveDateTime, Utc};
use serde::Serialize;

use crate::domain::types::{AdminEmail, AdminId, AdminUsername, PublicId};

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Admin {
    pub id: AdminId,
    pub guid: PublicId,
    pub username: String,
    pub email: AdminEmail,
    /// Argon2 PHC string; never serialized.
    #[serde(skip)]
    pub password_hash: String,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug)]
pub struct NewAdmin {
    pub guid: PublicId,
    pub username: AdminUsername,
    pub email: AdminEmail,
    pub password_hash: String,
    pub created_by: String,
    pub created_at: NaiveDateTime,
}

impl NewAdmin {
    #[must_use]
    pub fn new(
        username: AdminUsername,
        email: AdminEmail,
        password_hash: String,
        created_by: impl Into<String>,
    ) -> Self {
        Self {
            guid: PublicId::new(),
            username,
            email,
            password_hash,
            created_by: created_by.into(),
            created_at: Utc::now().naive_utc(),
        }
    }
}
