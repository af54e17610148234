//! Url record entity representing a short code mapping.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A shortened URL with its metadata.
///
/// The serialized field names are the persisted document layout and must stay
/// compatible with records written by earlier deployments: the short code is
/// stored under `short_url` and the creation date as a `YYYY-MM-DD` string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlRecord {
    pub id: i64,
    pub original_url: String,
    #[serde(rename = "short_url")]
    pub short_code: String,
    pub creation_date: NaiveDate,
}

impl UrlRecord {
    /// Creates a new UrlRecord instance.
    pub fn new(
        id: i64,
        original_url: String,
        short_code: String,
        creation_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            original_url,
            short_code,
            creation_date,
        }
    }

    /// Creates a record dated today (UTC).
    pub fn created_today(id: i64, original_url: String, short_code: String) -> Self {
        Self::new(id, original_url, short_code, Utc::now().date_naive())
    }
}
