//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic (use cases)
//! and infrastructure implementations. The core stays independent of the
//! image codec, the HTTP client, and the presentation toolkit behind
//! these traits.

pub mod about_store;
pub mod config_repository;
pub mod image_normalizer;
pub mod photo_store;
pub mod review_store;
pub mod ui;
pub mod upload_store;

pub use about_store::AboutStorePort;
pub use config_repository::ConfigRepositoryPort;
pub use image_normalizer::ImageNormalizerPort;
pub use photo_store::PhotoStorePort;
pub use review_store::ReviewStorePort;
pub use ui::{PickerPort, ToastPort};
pub use upload_store::UploadStorePort;
