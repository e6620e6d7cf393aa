use anyhow::Result;
use log::debug;
use std::sync::Arc;

use rb_core::photo::ProfilePhoto;
use rb_core::ports::{PhotoStorePort, ToastPort};
use rb_core::toast::Toast;

/// ManagePhotos use case - the slideshow admin panel. Every mutation is
/// followed by a re-read; the returned list is what the slideshow should
/// resync against.
pub struct ManagePhotos {
    store: Arc<dyn PhotoStorePort>,
    toasts: Arc<dyn ToastPort>,
}

impl ManagePhotos {
    pub fn new(store: Arc<dyn PhotoStorePort>, toasts: Arc<dyn ToastPort>) -> Self {
        Self { store, toasts }
    }

    pub async fn list(&self) -> Result<Vec<ProfilePhoto>> {
        self.store.list().await
    }

    pub async fn add(&self, photo_url: &str) -> Result<Vec<ProfilePhoto>> {
        let photo_url = photo_url.trim();
        if photo_url.is_empty() {
            // A blank URL in the admin form is a no-op, not an error
            debug!("ignoring blank photo url");
            return self.list().await;
        }

        self.store.add(photo_url).await?;
        self.toasts.show(Toast::info("Photo added")).await;
        self.list().await
    }

    pub async fn remove(&self, id: i64) -> Result<Vec<ProfilePhoto>> {
        self.store.delete(id).await?;
        self.toasts.show(Toast::info("Photo deleted")).await;
        self.list().await
    }
}
