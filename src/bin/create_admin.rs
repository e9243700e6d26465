//! Seeds an administrator account: `create_admin <username> <email>`.
//!
//! The password is taken from `CREATE_ADMIN_PASSWORD` when set, otherwise
//! from the first line of stdin, so it never shows up in the process list.

use std::env;
use std::io::{self, BufRead};

use config::Config;
use dotenvy::dotenv;

use criminal_registry::db::{establish_connection_pool, run_pending_migrations};
use criminal_registry::domain::DEFAULT_ACTOR;
use criminal_registry::models::config::ServerConfig;
use criminal_registry::repository::DieselRepository;
use criminal_registry::services::auth::register_admin;

const PASSWORD_VAR: &str = "CREATE_ADMIN_PASSWORD";

/// Picks the password from `from_env`, falling back to one line of `input`.
/// Only the line terminator is stripped.
fn read_password(from_env: Option<String>, mut input: impl BufRead) -> io::Result<String> {
    let password = match from_env {
        Some(password) => password,
        None => {
            let mut line = String::new();
            input.read_line(&mut line)?;
            line.trim_end_matches(['\r', '\n']).to_string()
        }
    };

    if password.is_empty() {
        return Err(io::Error::new(io::ErrorKind::InvalidInput, "password is empty"));
    }
    Ok(password)
}

fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let args: Vec<String> = env::args().skip(1).collect();
    let [username, email] = args.as_slice() else {
        eprintln!("usage: create_admin <username> <email>  (password via {PASSWORD_VAR} or stdin)");
        std::process::exit(2);
    };

    let password = match read_password(env::var(PASSWORD_VAR).ok(), io::stdin().lock()) {
        Ok(password) => password,
        Err(err) => {
            log::error!("Failed to read admin password: {err}");
            std::process::exit(1);
        }
    };

    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    let settings = Config::builder()
        .add_source(config::File::with_name("config/default"))
        .add_source(config::File::with_name(&format!("config/{app_env}")).required(false))
        .add_source(config::Environment::with_prefix("APP").separator("__"))
        .build();

    let settings = match settings {
        Ok(settings) => settings,
        Err(err) => {
            log::error!("Error loading settings: {err}");
            std::process::exit(1);
        }
    };

    let server_config = match settings.try_deserialize::<ServerConfig>() {
        Ok(server_config) => server_config,
        Err(err) => {
            log::error!("Error loading server config: {err}");
            std::process::exit(1);
        }
    };

    let pool = match establish_connection_pool(&server_config.database_url) {
        Ok(pool) => pool,
        Err(err) => {
            log::error!("Failed to establish database connection: {err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = run_pending_migrations(&pool) {
        log::error!("{err}");
        std::process::exit(1);
    }

    let repo = DieselRepository::new(pool);
    match register_admin(&repo, username, email, &password, DEFAULT_ACTOR) {
        Ok(admin) => log::info!("Created admin {} <{}>", admin.username, admin.email),
        Err(err) => {
            log::error!("Failed to create admin: {err}");
            std::process::exit(1);
        }
    }
}
