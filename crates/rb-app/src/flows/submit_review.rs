use anyhow::Result;
use log::{debug, info};
use std::sync::Arc;

use rb_core::ports::{ReviewStorePort, ToastPort};
use rb_core::review::{DraftError, Review, ReviewDraft};
use rb_core::toast::Toast;

#[derive(Debug)]
pub enum SubmitOutcome {
    /// Stored; `refreshed` is the re-read list reflecting the write.
    Accepted {
        review: Review,
        refreshed: Vec<Review>,
    },
    /// Draft never left the client.
    Invalid(DraftError),
}

/// SubmitReview use case - validate, create, re-read.
pub struct SubmitReview {
    store: Arc<dyn ReviewStorePort>,
    toasts: Arc<dyn ToastPort>,
}

impl SubmitReview {
    pub fn new(store: Arc<dyn ReviewStorePort>, toasts: Arc<dyn ToastPort>) -> Self {
        Self { store, toasts }
    }

    pub async fn submit(&self, draft: &ReviewDraft) -> Result<SubmitOutcome> {
        if let Err(err) = draft.validate() {
            debug!("rejecting draft before the network: {}", err);
            self.toasts
                .show(Toast::error("Fill in all fields").with_description(err.to_string()))
                .await;
            return Ok(SubmitOutcome::Invalid(err));
        }

        let review = self.store.create(draft).await?;
        info!("review {} stored", review.id);
        self.toasts
            .show(Toast::info("Review added").with_description("Thank you for your feedback"))
            .await;

        let refreshed = self.store.list(None).await?;
        Ok(SubmitOutcome::Accepted { review, refreshed })
    }
}
