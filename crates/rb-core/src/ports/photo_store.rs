use anyhow::Result;

use crate::photo::ProfilePhoto;

/// Remote slideshow photo store. Display order is assigned server-side.
#[async_trait::async_trait]
pub trait PhotoStorePort: Send + Sync {
    /// Ascending by display order.
    async fn list(&self) -> Result<Vec<ProfilePhoto>>;

    async fn add(&self, photo_url: &str) -> Result<ProfilePhoto>;

    async fn delete(&self, id: i64) -> Result<()>;
}
