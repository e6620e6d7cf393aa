use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Category;

/// One testimonial as stored by the remote review store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Review {
    pub id: i64,
    pub author_name: String,
    pub category: Category,
    pub rating: u8,
    pub comment: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(with = "crate::time::store_timestamp")]
    pub created_at: DateTime<Utc>,
}

impl Review {
    /// Whether this review contributes to the photo gallery.
    pub fn has_photo(&self) -> bool {
        self.photo_url
            .as_deref()
            .map(|url| !url.trim().is_empty())
            .unwrap_or(false)
    }
}
