use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use rb_core::ports::ReviewStorePort;
use rb_core::review::{Category, Review, ReviewDraft, ReviewStats};

use super::error::{ensure_success, StoreError};

pub struct ReviewStoreClient {
    client: reqwest::Client,
    base_url: String,
}

impl ReviewStoreClient {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[derive(Deserialize)]
struct ReviewsEnvelope {
    reviews: Vec<Review>,
}

#[derive(Deserialize)]
struct ReviewEnvelope {
    review: Review,
}

#[async_trait]
impl ReviewStorePort for ReviewStoreClient {
    async fn list(&self, category: Option<Category>) -> Result<Vec<Review>> {
        let mut request = self.client.get(&self.base_url);
        if let Some(category) = category {
            request = request.query(&[("category", category.as_str())]);
        }
        debug!(?category, "listing reviews");
        let response = request.send().await.map_err(StoreError::from)?;
        let envelope: ReviewsEnvelope = ensure_success(response)
            .await?
            .json()
            .await
            .map_err(|err| StoreError::Serialization(err.to_string()))?;
        Ok(envelope.reviews)
    }

    async fn stats(&self) -> Result<ReviewStats> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("action", "stats")])
            .send()
            .await
            .map_err(StoreError::from)?;
        let stats: ReviewStats = ensure_success(response)
            .await?
            .json()
            .await
            .map_err(|err| StoreError::Serialization(err.to_string()))?;
        Ok(stats)
    }

    async fn create(&self, draft: &ReviewDraft) -> Result<Review> {
        debug!(category = %draft.category, "creating review");
        let response = self
            .client
            .post(&self.base_url)
            .json(draft)
            .send()
            .await
            .map_err(StoreError::from)?;
        let envelope: ReviewEnvelope = ensure_success(response)
            .await?
            .json()
            .await
            .map_err(|err| StoreError::Serialization(err.to_string()))?;
        Ok(envelope.review)
    }
}
