//! Helper functions used by the registry.
//!
//! - [`key_generator`] - Random key generation and custom alias validation
//! - [`short_url`] - Composing and parsing short URLs

pub mod key_generator;
pub mod short_url;
