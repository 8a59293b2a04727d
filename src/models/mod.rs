//! Greenfield data models.

pub mod invoice;
pub mod payment;
pub mod server;
