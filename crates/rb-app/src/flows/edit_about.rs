use anyhow::Result;
use std::sync::Arc;

use rb_core::about::{AboutError, AboutText};
use rb_core::ports::{AboutStorePort, ToastPort};
use rb_core::toast::Toast;

#[derive(Debug, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    /// Blank content never leaves the client.
    Invalid(AboutError),
}

/// EditAbout use case - the "about me" block.
pub struct EditAbout {
    store: Arc<dyn AboutStorePort>,
    toasts: Arc<dyn ToastPort>,
}

impl EditAbout {
    pub fn new(store: Arc<dyn AboutStorePort>, toasts: Arc<dyn ToastPort>) -> Self {
        Self { store, toasts }
    }

    pub async fn current(&self) -> Result<String> {
        self.store.get().await
    }

    pub async fn save(&self, content: &str) -> Result<SaveOutcome> {
        let text = match AboutText::new(content) {
            Ok(text) => text,
            Err(err) => {
                self.toasts
                    .show(Toast::error("Nothing to save").with_description(err.to_string()))
                    .await;
                return Ok(SaveOutcome::Invalid(err));
            }
        };

        self.store.update(&text).await?;
        self.toasts.show(Toast::info("Text updated")).await;
        Ok(SaveOutcome::Saved)
    }
}
