//! Custom [axum::extract] Extractors.

pub mod claims;
pub mod json;
pub mod path;
