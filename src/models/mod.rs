//! Diesel models and runtime configuration.

#[cfg(feature = "server")]
pub mod auth;
pub mod admin;
#[cfg(feature = "server")]
pub mod config;
pub mod crime;
pub mod criminal;
pub mod event;
pub mod training;
