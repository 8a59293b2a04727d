//! Additional [axum::middleware].

pub mod authentication;
pub mod docs_gate;
