use serde::Deserialize;

use crate::domain::types::AdminEmail;
use crate::forms::FormError;

#[derive(Debug, Deserialize)]
/// Credentials posted to the login endpoint.
pub struct LoginForm {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Login credentials after presence and format checks.
#[derive(Debug)]
pub struct LoginPayload {
    pub email: AdminEmail,
    pub password: String,
}

impl TryFrom<LoginForm> for LoginPayload {
    type Error = FormError;

    fn try_from(form: LoginForm) -> Result<Self, Self::Error> {
        let email = form.email.filter(|e| !e.trim().is_empty());
        let password = form.password.filter(|p| !p.trim().is_empty());

        let (Some(email), Some(password)) = (email, password) else {
            return Err(FormError::MissingCredentials);
        };

        let email = AdminEmail::new(email).map_err(|_| FormError::InvalidEmail)?;

        Ok(Self { email, password })
    }
}
