//! Admin login, password hashing and role checks.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use chrono::Utc;

use crate::domain::admin::{Admin, NewAdmin};
use crate::domain::types::{AdminEmail, AdminUsername};
use crate::dto::auth::{AdminSummary, LoginResponse};
use crate::forms::auth::{LoginForm, LoginPayload};
use crate::models::auth::AuthenticatedUser;
use crate::models::config::JwtSettings;
use crate::repository::{AdminReader, AdminWriter};
use crate::services::{ServiceError, ServiceResult};

pub const INVALID_CREDENTIALS: &str = "Invalid credentials.";

/// Rejects users that do not carry `role`.
pub fn ensure_role(user: &AuthenticatedUser, role: &str) -> ServiceResult<()> {
    if user.has_role(role) {
        Ok(())
    } else {
        Err(ServiceError::Unauthorized)
    }
}

/// Produces a PHC-formatted Argon2id hash with a random salt.
pub fn hash_password(password: &str) -> ServiceResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| ServiceError::Internal(format!("argon2: {e}")))
}

/// Checks a password against a stored hash. Unparsable hashes never match.
pub fn verify_password(password_hash: &str, password: &str) -> bool {
    match PasswordHash::new(password_hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(e) => {
            log::warn!("Stored password hash is malformed: {e}");
            false
        }
    }
}

/// Authenticates an admin and issues a signed bearer token.
pub fn login<R>(repo: &R, settings: &JwtSettings, form: LoginForm) -> ServiceResult<LoginResponse>
where
    R: AdminReader + ?Sized,
{
    let payload = LoginPayload::try_from(form)?;

    let admin = repo
        .get_admin_by_email(&payload.email)?
        .filter(|admin| verify_password(&admin.password_hash, &payload.password))
        .ok_or(ServiceError::Unauthorized)?;

    let claims = AuthenticatedUser::for_admin(&admin, settings, Utc::now());
    let token = claims
        .encode(settings)
        .map_err(|e| ServiceError::Internal(format!("failed to sign token: {e}")))?;
    let expires = claims
        .expires_at()
        .ok_or_else(|| ServiceError::Internal("token expiry out of range".to_string()))?;

    log::info!("Admin {} logged in", admin.email);

    Ok(LoginResponse {
        token,
        expires,
        admin: AdminSummary::from(&admin),
    })
}

/// Registers a new admin account with a freshly hashed password.
pub fn register_admin<R>(
    repo: &R,
    username: &str,
    email: &str,
    password: &str,
    created_by: &str,
) -> ServiceResult<Admin>
where
    R: AdminWriter + ?Sized,
{
    if password.trim().is_empty() {
        return Err(ServiceError::BadRequest("Password is required.".to_string()));
    }

    let username = AdminUsername::new(username)?;
    let email = AdminEmail::new(email)?;
    let password_hash = hash_password(password)?;

    let admin = repo.create_admin(&NewAdmin::new(username, email, password_hash, created_by))?;
    Ok(admin)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ADMIN_ROLE;
    use crate::domain::types::{AdminId, PublicId};
    use crate::repository::mock::MockRepository;

    fn settings() -> JwtSettings {
        JwtSettings {
            key: "service-test-secret-key-long-enough".to_string(),
            issuer: "CriminalAI".to_string(),
            audience: "CriminalAIUsers".to_string(),
            expire_minutes: 30,
        }
    }

    fn stored_admin(password: &str) -> Admin {
        Admin {
            id: AdminId::new(1).unwrap(),
            guid: PublicId::new(),
            username: "root".to_string(),
            email: AdminEmail::new("root@example.com").unwrap(),
            password_hash: hash_password(password).unwrap(),
            created_at: Utc::now().naive_utc(),
        }
    }

    fn form(email: &str, password: &str) -> LoginForm {
        LoginForm {
            email: Some(email.to_string()),
            password: Some(password.to_string()),
        }
    }

    #[test]
    fn hashes_verify_only_the_original_password() {
        let hash = hash_password("hunter2").unwrap();
        assert!(verify_password(&hash, "hunter2"));
        assert!(!verify_password(&hash, "hunter3"));
        assert!(!verify_password("plain-text", "plain-text"));
    }

    #[test]
    fn login_issues_a_token_for_valid_credentials() {
        let mut repo = MockRepository::new();
        let admin = stored_admin("secret");
        repo.expect_get_admin_by_email()
            .returning(move |_| Ok(Some(admin.clone())));

        let settings = settings();
        let response = login(&repo, &settings, form("Root@Example.com", "secret")).unwrap();

        assert_eq!(response.admin.admin_id, 1);
        assert_eq!(response.admin.email, "root@example.com");
        let claims = AuthenticatedUser::decode(&response.token, &settings).unwrap();
        assert!(claims.has_role(ADMIN_ROLE));
        assert_eq!(claims.expires_at(), Some(response.expires));
    }

    #[test]
    fn login_rejects_wrong_password() {
        let mut repo = MockRepository::new();
        let admin = stored_admin("secret");
        repo.expect_get_admin_by_email()
            .returning(move |_| Ok(Some(admin.clone())));

        let result = login(&repo, &settings(), form("root@example.com", "nope"));
        assert!(matches!(result, Err(ServiceError::Unauthorized)));
    }

    #[test]
    fn login_rejects_unknown_email() {
        let mut repo = MockRepository::new();
        repo.expect_get_admin_by_email().returning(|_| Ok(None));

        let result = login(&repo, &settings(), form("ghost@example.com", "x"));
        assert!(matches!(result, Err(ServiceError::Unauthorized)));
    }

    #[test]
    fn login_requires_both_fields() {
        let repo = MockRepository::new();
        let result = login(&repo, &settings(), form("", "x"));
        match result {
            Err(ServiceError::BadRequest(message)) => {
                assert_eq!(message, "Email and Password are required.")
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn register_admin_stores_a_hash() {
        let mut repo = MockRepository::new();
        repo.expect_create_admin().returning(|new_admin| {
            assert_ne!(new_admin.password_hash, "pw");
            assert!(verify_password(&new_admin.password_hash, "pw"));
            Ok(Admin {
                id: AdminId::new(9).unwrap(),
                guid: new_admin.guid,
                username: new_admin.username.to_string(),
                email: new_admin.email.clone(),
                password_hash: new_admin.password_hash.clone(),
                created_at: new_admin.created_at,
            })
        });

        let admin = register_admin(&repo, "ops", "ops@example.com", "pw", "cli").unwrap();
        assert_eq!(admin.email.as_str(), "ops@example.com");
    }
}
