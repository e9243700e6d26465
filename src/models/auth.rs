//! Bearer-token claims and the extractor guarding admin routes.

use std::future::{Ready, ready};

use actix_web::dev::Payload;
use actix_web::error::InternalError;
use actix_web::http::{StatusCode, header};
use actix_web::{FromRequest, HttpRequest, web};
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::ADMIN_ROLE;
use crate::domain::admin::Admin;
use crate::models::config::JwtSettings;

/// Claims carried by an admin session token.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AuthenticatedUser {
    pub sub: String,
    pub email: String,
    pub username: String,
    pub role: String,
    pub iss: String,
    pub aud: String,
    pub exp: i64,
}

impl AuthenticatedUser {
    /// Builds the claims for a freshly authenticated admin.
    pub fn for_admin(admin: &Admin, settings: &JwtSettings, now: DateTime<Utc>) -> Self {
        let expires = now + Duration::minutes(settings.expire_minutes);
        Self {
            sub: admin.id.to_string(),
            email: admin.email.to_string(),
            username: admin.username.clone(),
            role: ADMIN_ROLE.to_string(),
            iss: settings.issuer.clone(),
            aud: settings.audience.clone(),
            exp: expires.timestamp(),
        }
    }

    /// Expiry of the token as a UTC timestamp.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.role == role
    }

    /// Signs the claims with the configured HMAC key.
    pub fn encode(&self, settings: &JwtSettings) -> Result<String, jsonwebtoken::errors::Error> {
        encode(
            &Header::new(Algorithm::HS256),
            self,
            &EncodingKey::from_secret(settings.key.as_bytes()),
        )
    }

    /// Verifies signature, issuer, audience and expiry of a token.
    pub fn decode(token: &str, settings: &JwtSettings) -> Result<Self, jsonwebtoken::errors::Error> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[settings.issuer.as_str()]);
        validation.set_audience(&[settings.audience.as_str()]);

        let data = decode::<Self>(
            token,
            &DecodingKey::from_secret(settings.key.as_bytes()),
            &validation,
        )?;
        Ok(data.claims)
    }
}

/// JSON 401 shared by every rejection path of the extractor.
fn unauthorized() -> actix_web::Error {
    InternalError::from_response(
        "Unauthorized",
        crate::routes::error_response(StatusCode::UNAUTHORIZED, "Unauthorized", None),
    )
    .into()
}

fn bearer_token(req: &HttpRequest) -> Option<&str> {
    req.headers()
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

impl FromRequest for AuthenticatedUser {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let Some(settings) = req.app_data::<web::Data<JwtSettings>>() else {
            log::error!("JWT settings are not registered in the application data");
            return ready(Err(unauthorized()));
        };

        let Some(token) = bearer_token(req) else {
            return ready(Err(unauthorized()));
        };

        ready(Self::decode(token, settings).map_err(|e| {
            log::info!("Rejected bearer token: {e}");
            unauthorized()
        }))
    }
}
