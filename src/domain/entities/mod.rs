//! Core domain entities representing the business data model.
//!
//! The service has a single entity, [`UrlRecord`]: the association between a
//! short code, the URL it was derived from, and creation metadata. Records are
//! created once and never updated or deleted.

pub mod url_record;

pub use url_record::UrlRecord;
