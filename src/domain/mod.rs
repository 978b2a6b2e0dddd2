//! Domain aggregates exposed by the directory service layer.

pub mod detail;
pub mod name;
pub mod types;
