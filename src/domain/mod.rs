//! Domain aggregates exposed by the registry service layer.

pub mod admin;
pub mod crime;
pub mod criminal;
pub mod dashboard;
pub mod event;
pub mod training;
pub mod types;

/// Actor recorded in audit columns when no authenticated admin is involved.
pub const DEFAULT_ACTOR: &str = "Admin";
