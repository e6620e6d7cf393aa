use anyhow::Result;
use log::debug;
use std::sync::Arc;

use rb_core::ports::ReviewStorePort;
use rb_core::review::{Category, Review, ReviewStats};

/// BrowseReviews use case - the reviews tab reads.
pub struct BrowseReviews {
    store: Arc<dyn ReviewStorePort>,
}

impl BrowseReviews {
    pub fn new(store: Arc<dyn ReviewStorePort>) -> Self {
        Self { store }
    }

    /// Newest first; `None` means all categories.
    pub async fn list(&self, category: Option<Category>) -> Result<Vec<Review>> {
        debug!("loading reviews, filter: {:?}", category);
        self.store.list(category).await
    }

    pub async fn stats(&self) -> Result<ReviewStats> {
        self.store.stats().await
    }
}
