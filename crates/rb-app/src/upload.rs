//! UploadCoordinator use case - one file selection, start to finish

use log::{info, warn};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rb_core::media::{IngestionError, NormalizedImage, RawImageInput};
use rb_core::ports::{ImageNormalizerPort, PickerPort, ToastPort};
use rb_core::toast::Toast;

/// How one selection ended. Selections are independent; nothing here
/// carries over to the next one.
#[derive(Debug)]
pub enum SelectionOutcome {
    /// The consumer received the normalized image.
    Completed,
    /// Terminal for this selection; the user has been notified.
    Rejected(IngestionError),
    /// Dismissed picker. Not an error, and no notification.
    Cancelled,
}

/// Orchestrates one file selection: busy flag up, normalize, hand the
/// result to the consumer or toast the failure, then reset the picker.
///
/// Only one selection is in flight per coordinator; the presentation
/// layer enforces that by disabling the trigger while
/// [`is_uploading`](UploadCoordinator::is_uploading) reads true. There
/// is no internal queueing and no cancellation once normalization has
/// started.
pub struct UploadCoordinator {
    normalizer: Arc<dyn ImageNormalizerPort>,
    toasts: Arc<dyn ToastPort>,
    picker: Arc<dyn PickerPort>,
    uploading: AtomicBool,
}

impl UploadCoordinator {
    pub fn new(
        normalizer: Arc<dyn ImageNormalizerPort>,
        toasts: Arc<dyn ToastPort>,
        picker: Arc<dyn PickerPort>,
    ) -> Self {
        Self {
            normalizer,
            toasts,
            picker,
            uploading: AtomicBool::new(false),
        }
    }

    /// Busy state, observable by the trigger control.
    pub fn is_uploading(&self) -> bool {
        self.uploading.load(Ordering::SeqCst)
    }

    /// Handle one picker event. `None` means the picker was dismissed.
    ///
    /// On success the consumer gets the image; the coordinator does not
    /// know or care what the consumer does with it.
    pub async fn handle_selection<F>(
        &self,
        selection: Option<RawImageInput>,
        consumer: F,
    ) -> SelectionOutcome
    where
        F: FnOnce(NormalizedImage) + Send,
    {
        let Some(raw) = selection else {
            // Dismissed picker: prior form state stays untouched
            return SelectionOutcome::Cancelled;
        };

        self.uploading.store(true, Ordering::SeqCst);

        let outcome = match self.normalizer.normalize(&raw).await {
            Ok(image) => {
                info!(
                    "selection normalized to {}x{} ({})",
                    image.width, image.height, image.media_type
                );
                consumer(image);
                self.toasts
                    .show(Toast::info("Photo uploaded").with_description("Image optimized"))
                    .await;
                SelectionOutcome::Completed
            }
            Err(err) => {
                warn!("image ingestion failed: {}", err);
                self.toasts.show(rejection_toast(&err)).await;
                SelectionOutcome::Rejected(err)
            }
        };

        // Reset on every completion so the same file can be reselected
        self.uploading.store(false, Ordering::SeqCst);
        self.picker.clear_selection();
        outcome
    }
}

fn rejection_toast(err: &IngestionError) -> Toast {
    match err {
        IngestionError::NotAnImage(_) => {
            Toast::error("Not an image").with_description("Choose an image file")
        }
        IngestionError::TooLarge { .. } => {
            Toast::error("Image too large").with_description("Choose a smaller file")
        }
        IngestionError::DecodeFailure(_) => Toast::error("Upload failed"),
    }
}
