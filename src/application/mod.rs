//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers and the operator CLI.
//!
//! # Available Services
//!
//! - [`services::link_registry::LinkRegistry`] - Encode, decode, rename and click stats

pub mod services;
