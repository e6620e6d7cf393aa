use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One slideshow photo as stored by the remote photo store. Ordering is
/// server-assigned and ascending.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfilePhoto {
    pub id: i64,
    pub photo_url: String,
    pub display_order: i32,
    #[serde(with = "crate::time::store_timestamp")]
    pub created_at: DateTime<Utc>,
}
