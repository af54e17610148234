//! Request and response bodies.
//!
//! - [`shorten`] - `POST /shorten` input and output
//! - [`health`] - `GET /health` report

pub mod health;
pub mod shorten;
