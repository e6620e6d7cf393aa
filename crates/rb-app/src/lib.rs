//! # rb-app
//!
//! Use cases for Reviewboard: the upload coordinator and the flows the
//! site tabs are built from. Every use case talks to the outside world
//! through `rb-core` ports only.

pub mod flows;
pub mod upload;

pub use flows::{
    BrowseReviews, EditAbout, GalleryPhotos, HostImage, ManagePhotos, SaveOutcome, SubmitOutcome,
    SubmitReview,
};
pub use upload::{SelectionOutcome, UploadCoordinator};
