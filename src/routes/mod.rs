//! Routes for [axum::Router].

pub mod fallback;
pub mod health;
pub mod internal;
pub mod invoices;
pub mod ping;
pub mod server;
