use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use rb_core::about::AboutText;
use rb_core::ports::AboutStorePort;

use super::error::{ensure_success, StoreError};

pub struct AboutStoreClient {
    client: reqwest::Client,
    base_url: String,
}

impl AboutStoreClient {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[derive(Deserialize)]
struct AboutEnvelope {
    #[serde(default)]
    content: String,
}

#[derive(Serialize)]
struct UpdateBody<'a> {
    content: &'a str,
}

#[async_trait]
impl AboutStorePort for AboutStoreClient {
    async fn get(&self) -> Result<String> {
        let response = self
            .client
            .get(&self.base_url)
            .send()
            .await
            .map_err(StoreError::from)?;
        let envelope: AboutEnvelope = ensure_success(response)
            .await?
            .json()
            .await
            .map_err(|err| StoreError::Serialization(err.to_string()))?;
        Ok(envelope.content)
    }

    async fn update(&self, content: &AboutText) -> Result<()> {
        let response = self
            .client
            .put(&self.base_url)
            .json(&UpdateBody {
                content: content.as_str(),
            })
            .send()
            .await
            .map_err(StoreError::from)?;
        ensure_success(response).await?;
        Ok(())
    }
}
