//! Utility functions.
//!
//! - [`code_generator`] - Short code derivation from URLs

pub mod code_generator;
