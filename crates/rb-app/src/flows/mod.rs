//! Entity flows behind the site tabs. All mutations follow
//! read-after-write: confirm, then re-read the store; local state is
//! never patched in place.

pub mod browse_reviews;
pub mod edit_about;
pub mod gallery;
pub mod host_image;
pub mod manage_photos;
pub mod submit_review;

pub use browse_reviews::BrowseReviews;
pub use edit_about::{EditAbout, SaveOutcome};
pub use gallery::GalleryPhotos;
pub use host_image::HostImage;
pub use manage_photos::ManagePhotos;
pub use submit_review::{SubmitOutcome, SubmitReview};
