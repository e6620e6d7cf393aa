use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use rb_core::photo::ProfilePhoto;
use rb_core::ports::PhotoStorePort;

use super::error::{ensure_success, StoreError};

pub struct PhotoStoreClient {
    client: reqwest::Client,
    base_url: String,
}

impl PhotoStoreClient {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[derive(Deserialize)]
struct PhotosEnvelope {
    photos: Vec<ProfilePhoto>,
}

#[derive(Deserialize)]
struct PhotoEnvelope {
    photo: ProfilePhoto,
}

#[derive(Serialize)]
struct AddPhotoBody<'a> {
    photo_url: &'a str,
}

#[async_trait]
impl PhotoStorePort for PhotoStoreClient {
    async fn list(&self) -> Result<Vec<ProfilePhoto>> {
        let response = self
            .client
            .get(&self.base_url)
            .send()
            .await
            .map_err(StoreError::from)?;
        let envelope: PhotosEnvelope = ensure_success(response)
            .await?
            .json()
            .await
            .map_err(|err| StoreError::Serialization(err.to_string()))?;
        Ok(envelope.photos)
    }

    async fn add(&self, photo_url: &str) -> Result<ProfilePhoto> {
        debug!("adding slideshow photo");
        let response = self
            .client
            .post(&self.base_url)
            .json(&AddPhotoBody { photo_url })
            .send()
            .await
            .map_err(StoreError::from)?;
        let envelope: PhotoEnvelope = ensure_success(response)
            .await?
            .json()
            .await
            .map_err(|err| StoreError::Serialization(err.to_string()))?;
        Ok(envelope.photo)
    }

    async fn delete(&self, id: i64) -> Result<()> {
        debug!(id, "deleting slideshow photo");
        let response = self
            .client
            .delete(&self.base_url)
            .query(&[("id", id.to_string())])
            .send()
            .await
            .map_err(StoreError::from)?;
        ensure_success(response).await?;
        Ok(())
    }
}
