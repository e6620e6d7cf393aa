use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;

use rb_app::{
    BrowseReviews, EditAbout, GalleryPhotos, HostImage, ManagePhotos, SubmitReview,
    UploadCoordinator,
};
use rb_core::config::AppConfig;
use rb_core::ports::{ConfigRepositoryPort, PickerPort, ToastPort};
use rb_infra::http::{
    build_client, AboutStoreClient, PhotoStoreClient, ReviewStoreClient, UploadStoreClient,
};
use rb_infra::RasterNormalizer;

use crate::deps::AppDeps;

/// Every use case, wired over one set of adapters.
pub struct Core {
    pub upload: UploadCoordinator,
    pub submit_review: SubmitReview,
    pub browse_reviews: BrowseReviews,
    pub gallery: GalleryPhotos,
    pub manage_photos: ManagePhotos,
    pub edit_about: EditAbout,
    pub host_image: HostImage,
}

impl Core {
    pub fn new(deps: AppDeps) -> Self {
        Self {
            upload: UploadCoordinator::new(
                deps.normalizer.clone(),
                deps.toasts.clone(),
                deps.picker.clone(),
            ),
            submit_review: SubmitReview::new(deps.reviews.clone(), deps.toasts.clone()),
            browse_reviews: BrowseReviews::new(deps.reviews.clone()),
            gallery: GalleryPhotos::new(deps.reviews.clone()),
            manage_photos: ManagePhotos::new(deps.photos.clone(), deps.toasts.clone()),
            edit_about: EditAbout::new(deps.about.clone(), deps.toasts.clone()),
            host_image: HostImage::new(deps.uploads),
        }
    }
}

/// Load configuration through the given repository and stand the whole
/// default stack up from it.
pub async fn core_from_repository(
    repo: &dyn ConfigRepositoryPort,
    toasts: Arc<dyn ToastPort>,
    picker: Arc<dyn PickerPort>,
) -> Result<Core> {
    let config = repo.load().await?;
    Ok(Core::new(infra_deps(&config, toasts, picker)?))
}

/// Build the default adapter set from configuration. The toast sink and
/// the picker control come from the embedding shell; everything else is
/// constructed here.
pub fn infra_deps(
    config: &AppConfig,
    toasts: Arc<dyn ToastPort>,
    picker: Arc<dyn PickerPort>,
) -> Result<AppDeps> {
    let client = build_client(Duration::from_secs(config.stores.request_timeout_secs))?;

    Ok(AppDeps {
        normalizer: Arc::new(RasterNormalizer::new(config.ingest.clone())),
        reviews: Arc::new(ReviewStoreClient::new(
            client.clone(),
            config.stores.reviews_url.clone(),
        )),
        photos: Arc::new(PhotoStoreClient::new(
            client.clone(),
            config.stores.photos_url.clone(),
        )),
        about: Arc::new(AboutStoreClient::new(
            client.clone(),
            config.stores.about_url.clone(),
        )),
        uploads: Arc::new(UploadStoreClient::new(
            client,
            config.stores.upload_url.clone(),
        )),
        toasts,
        picker,
    })
}
