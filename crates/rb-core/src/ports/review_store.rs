use anyhow::Result;

use crate::review::{Category, Review, ReviewDraft, ReviewStats};

/// Remote review store: list, aggregate, create. The store is the
/// source of truth; after a write the caller re-reads instead of
/// patching local state.
#[async_trait::async_trait]
pub trait ReviewStorePort: Send + Sync {
    /// Newest first, optionally restricted to one category.
    async fn list(&self, category: Option<Category>) -> Result<Vec<Review>>;

    async fn stats(&self) -> Result<ReviewStats>;

    /// Returns the stored review with id and timestamp assigned.
    async fn create(&self, draft: &ReviewDraft) -> Result<Review>;
}
