use anyhow::Result;

use crate::media::RawImageInput;

/// Remote image hosting store. The alternative to inline encoding: the
/// store persists the bytes and hands back a URL to embed instead of a
/// data URL.
#[async_trait::async_trait]
pub trait UploadStorePort: Send + Sync {
    /// Returns the hosted, publicly reachable URL.
    async fn upload(&self, raw: &RawImageInput) -> Result<String>;
}
