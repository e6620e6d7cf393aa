use anyhow::Result;

use crate::about::AboutText;

/// Remote single-row "about me" store.
#[async_trait::async_trait]
pub trait AboutStorePort: Send + Sync {
    /// Empty string when nothing has been written yet.
    async fn get(&self) -> Result<String>;

    async fn update(&self, content: &AboutText) -> Result<()>;
}
