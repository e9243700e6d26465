use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::admin::Admin;

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AdminSummary {
    pub admin_id: i32,
    pub username: String,
    pub email: String,
}

impl From<&Admin> for AdminSummary {
    fn from(admin: &Admin) -> Self {
        Self {
            admin_id: admin.id.get(),
            username: admin.username.clone(),
            email: admin.email.to_string(),
        }
    }
}

/// Successful login: the bearer token and who it belongs to.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub expires: DateTime<Utc>,
    pub admin: AdminSummary,
}
