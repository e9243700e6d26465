//! Read shapes returned by the HTTP API. All of them serialize in camelCase.

pub mod auth;
pub mod criminals;
pub mod dashboard;
pub mod detected;
pub mod events;
pub mod training;
