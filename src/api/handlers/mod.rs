//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod redirect;
pub mod shorten;

pub use health::health_handler;
pub use redirect::{not_found_handler, redirect_handler};
pub use shorten::{shorten_handler, shorten_method_not_allowed_handler, shorten_preflight_handler};
