//! Data shapes handed from services to templates and API responses.

pub mod main;
pub mod name;
