use anyhow::Result;

use crate::config::AppConfig;

/// Persistence for [`AppConfig`].
#[async_trait::async_trait]
pub trait ConfigRepositoryPort: Send + Sync {
    /// Defaults when nothing has been saved yet.
    async fn load(&self) -> Result<AppConfig>;

    async fn save(&self, config: &AppConfig) -> Result<()>;
}
