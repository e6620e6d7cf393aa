use anyhow::Result;
use std::sync::Arc;

use rb_core::ports::ReviewStorePort;
use rb_core::review::Review;

/// GalleryPhotos use case - the gallery tab is fed by review photos:
/// every review carrying one contributes a tile.
pub struct GalleryPhotos {
    store: Arc<dyn ReviewStorePort>,
}

impl GalleryPhotos {
    pub fn new(store: Arc<dyn ReviewStorePort>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Result<Vec<Review>> {
        let reviews = self.store.list(None).await?;
        Ok(reviews.into_iter().filter(|r| r.has_photo()).collect())
    }
}
