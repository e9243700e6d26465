//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Settings used to sign and validate admin bearer tokens.
pub struct JwtSettings {
    pub key: String,
    pub issuer: String,
    pub audience: String,
    #[serde(default = "default_expire_minutes")]
    pub expire_minutes: i64,
}

fn default_expire_minutes() -> i64 {
    60
}

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub database_url: String,
    /// Directory holding the `images/` tree served at `/images`.
    pub web_root: String,
    pub jwt: JwtSettings,
    /// Endpoint of the face-training engine notified after a criminal is
    /// created. Notifications are skipped when unset.
    #[serde(default)]
    pub train_url: Option<String>,
}
