use anyhow::Result;
use log::info;
use std::sync::Arc;

use rb_core::media::RawImageInput;
use rb_core::ports::UploadStorePort;

/// HostImage use case - the hosted-URL alternative to inline embedding:
/// push the original bytes to the upload store and embed the returned
/// URL instead of a data URL.
pub struct HostImage {
    store: Arc<dyn UploadStorePort>,
}

impl HostImage {
    pub fn new(store: Arc<dyn UploadStorePort>) -> Self {
        Self { store }
    }

    pub async fn host(&self, raw: &RawImageInput) -> Result<String> {
        let url = self.store.upload(raw).await?;
        info!("image hosted at {}", url);
        Ok(url)
    }
}
