//! Database models shared across the directory repository.

#[cfg(feature = "server")]
pub mod auth;
#[cfg(feature = "server")]
pub mod config;
pub mod detail;
pub mod name;
