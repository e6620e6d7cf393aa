use anyhow::Result;
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{Deserialize, Serialize};
use tracing::debug;

use rb_core::media::RawImageInput;
use rb_core::ports::UploadStorePort;

use super::error::{ensure_success, StoreError};

/// Client for the hosted-image store: bytes in, public URL out.
pub struct UploadStoreClient {
    client: reqwest::Client,
    base_url: String,
}

impl UploadStoreClient {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[derive(Serialize)]
struct UploadBody<'a> {
    image: String,
    content_type: &'a str,
}

#[derive(Deserialize)]
struct UploadEnvelope {
    url: String,
}

#[async_trait]
impl UploadStorePort for UploadStoreClient {
    async fn upload(&self, raw: &RawImageInput) -> Result<String> {
        debug!(bytes = raw.len(), media_type = %raw.media_type, "uploading image");
        let body = UploadBody {
            image: STANDARD.encode(&raw.bytes),
            content_type: raw.media_type.as_str(),
        };
        let response = self
            .client
            .post(&self.base_url)
            .json(&body)
            .send()
            .await
            .map_err(StoreError::from)?;
        let envelope: UploadEnvelope = ensure_success(response)
            .await?
            .json()
            .await
            .map_err(|err| StoreError::Serialization(err.to_string()))?;
        Ok(envelope.url)
    }
}
