//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to one registry operation.

pub mod custom;
pub mod decode;
pub mod encode;
pub mod health;
pub mod redirect;
pub mod stats;

pub use custom::custom_alias_handler;
pub use decode::decode_handler;
pub use encode::encode_handler;
pub use health::health_handler;
pub use redirect::redirect_handler;
pub use stats::stats_handler;
