//! OpenAPI doc generation.
//!
//! [DocumentAssembler] turns the discovered route table into the public
//! document: [filter] decides which operations are published, [scopes]
//! derives their security scopes, [substitution] documents domain value
//! types as primitives and [security] declares the API-key scheme.

pub mod assembler;
pub mod filter;
pub mod scopes;
pub mod security;
pub mod substitution;

pub use assembler::DocumentAssembler;
