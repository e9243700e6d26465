//! Criminal registry backend: admin-authenticated CRUD over criminal
//! records plus the anonymous endpoints used by the recognition pipeline.

#[cfg(feature = "server")]
use actix_cors::Cors;
#[cfg(feature = "server")]
use actix_files::Files;
#[cfg(feature = "server")]
use actix_web::{App, HttpServer, middleware, web};

#[cfg(feature = "server")]
use crate::db::{establish_connection_pool, run_pending_migrations};
#[cfg(feature = "server")]
use crate::images::{IMAGES_URL_PREFIX, ImageStore};
#[cfg(feature = "server")]
use crate::models::config::ServerConfig;
#[cfg(feature = "server")]
use crate::repository::DieselRepository;
#[cfg(feature = "server")]
use crate::training_engine::TrainingEngine;

pub mod db;
pub mod domain;
#[cfg(feature = "server")]
pub mod dto;
pub mod error_conversions;
#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "server")]
pub mod images;
pub mod models;
pub mod pagination;
pub mod query;
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
pub mod schema;
#[cfg(feature = "server")]
pub mod services;
#[cfg(feature = "server")]
pub mod training_engine;

/// Role carried by every admin token.
pub const ADMIN_ROLE: &str = "Admin";

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
#[cfg(feature = "server")]
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    // Establish Diesel connection pool for the SQLite database.
    let pool = establish_connection_pool(&server_config.database_url).map_err(|e| {
        std::io::Error::other(format!("Failed to establish database connection: {e}"))
    })?;

    let applied = run_pending_migrations(&pool).map_err(std::io::Error::other)?;
    if applied > 0 {
        log::info!("Applied {applied} pending migration(s)");
    }

    let repo = DieselRepository::new(pool);

    let images = ImageStore::new(&server_config.web_root);
    std::fs::create_dir_all(images.images_dir())?;
    let images_dir = images.images_dir();

    let jwt = web::Data::new(server_config.jwt.clone());
    let repo = web::Data::new(repo);
    let images = web::Data::new(images);
    let config = web::Data::new(server_config.clone());
    let trainer = web::Data::new(TrainingEngine::new(server_config.train_url.clone()));
    match trainer.train_url() {
        Some(url) => log::info!("Training engine notifications go to {url}"),
        None => log::info!("Training engine notifications are disabled"),
    }

    let bind_address = (server_config.address.clone(), server_config.port);
    log::info!("Listening on {}:{}", bind_address.0, bind_address.1);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .app_data(repo.clone())
            .app_data(jwt.clone())
            .app_data(images.clone())
            .app_data(config.clone())
            .app_data(trainer.clone())
            .service(Files::new(IMAGES_URL_PREFIX, images_dir.clone()))
            .configure(routes::configure)
    })
    .bind(bind_address)?
    .run()
    .await
}
